//! Default `design`, `locale` and `settings` blocks for RenderCV documents.
//!
//! Each call builds a fresh map so callers are free to mutate the result.

use serde_json::{json, Map, Value};

pub const DEFAULT_THEME: &str = "classic";
pub const DEFAULT_LANGUAGE: &str = "english";

pub fn default_design() -> Map<String, Value> {
    object(json!({
        "theme": DEFAULT_THEME,
    }))
}

pub fn default_locale() -> Map<String, Value> {
    object(json!({
        "language": DEFAULT_LANGUAGE,
    }))
}

pub fn default_settings() -> Map<String, Value> {
    object(json!({
        "current_date": "today",
        "bold_keywords": [],
        "render_command": {
            "dont_generate_html": true,
            "dont_generate_markdown": true,
            "dont_generate_png": true,
        },
    }))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
