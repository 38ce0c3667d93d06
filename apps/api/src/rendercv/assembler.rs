//! Document Assembler — wraps a `cv` block with `design`, `locale` and `settings`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rendercv::defaults::{default_design, default_locale, default_settings};

/// Caller-supplied replacements for the non-`cv` blocks. A supplied block is
/// used verbatim; a missing one falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentOverrides {
    #[serde(default)]
    pub design: Option<Map<String, Value>>,
    #[serde(default)]
    pub locale: Option<Map<String, Value>>,
    #[serde(default)]
    pub settings: Option<Map<String, Value>>,
}

/// A complete RenderCV input document. All four blocks are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderCvDocument {
    pub cv: Map<String, Value>,
    pub design: Map<String, Value>,
    pub locale: Map<String, Value>,
    pub settings: Map<String, Value>,
}

/// Assembles a full document from a `{"cv": {...}}` mapping.
///
/// `cv` is copied from the input's `cv` key, or left empty when that key is
/// missing or not an object. No default is ever merged into `cv`.
pub fn assemble_document(
    cv_dict: &Map<String, Value>,
    overrides: DocumentOverrides,
) -> RenderCvDocument {
    let cv = cv_dict
        .get("cv")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    RenderCvDocument {
        cv,
        design: overrides.design.unwrap_or_else(default_design),
        locale: overrides.locale.unwrap_or_else(default_locale),
        settings: overrides.settings.unwrap_or_else(default_settings),
    }
}
