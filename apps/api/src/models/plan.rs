use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What the language model chose to surface from a profile.
///
/// Every field defaults to empty. An empty selection list means "take everything"
/// for that category, so a plan may omit a category without excluding it.
/// Identifiers are matched by set membership: order and duplicates are irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionPlan {
    #[serde(default)]
    pub selected_experience_ids: Vec<String>,
    #[serde(default)]
    pub selected_education_ids: Vec<String>,
    #[serde(default)]
    pub selected_project_ids: Vec<String>,
    #[serde(default)]
    pub selected_skill_labels: Vec<String>,
    /// Entry id → replacement highlights. Replaces, never merges.
    #[serde(default)]
    pub bullet_overrides: HashMap<String, Vec<String>>,
    /// Preferred section titles, e.g. `["Skills", "Experience"]`.
    #[serde(default)]
    pub section_order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_a_select_all_plan() {
        let plan: SelectionPlan = serde_json::from_value(json!({})).unwrap();
        assert_eq!(plan, SelectionPlan::default());
    }

    #[test]
    fn test_bullet_overrides_deserialize() {
        let plan: SelectionPlan = serde_json::from_value(json!({
            "selected_experience_ids": ["e1"],
            "bullet_overrides": { "e1": ["Cut p99 latency by 40%"] },
            "section_order": ["Skills"]
        }))
        .unwrap();

        assert_eq!(plan.selected_experience_ids, vec!["e1".to_string()]);
        assert_eq!(
            plan.bullet_overrides.get("e1"),
            Some(&vec!["Cut p99 latency by 40%".to_string()])
        );
        assert_eq!(plan.section_order, vec!["Skills".to_string()]);
    }
}
