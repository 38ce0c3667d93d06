use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::plan::SelectionPlan;
use crate::models::profile::{Identified, Profile};
use crate::rendercv::entries::SectionTitle;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanWarningKind {
    UnknownEntryId,
    UnknownSkillLabel,
    OrphanOverride,
    UnknownSection,
    DuplicateSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanWarning {
    pub kind: PlanWarningKind,
    pub subject: String,
    pub description: String,
}

/// Checks a plan against the profile it will be applied to.
/// Returns advisory warnings (non-blocking); mapping output is unaffected.
pub fn check_plan(profile: &Profile, plan: &SelectionPlan) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    check_ids(&mut warnings, "experience", &profile.experience, &plan.selected_experience_ids);
    check_ids(&mut warnings, "education", &profile.education, &plan.selected_education_ids);
    check_ids(&mut warnings, "project", &profile.projects, &plan.selected_project_ids);

    let labels: HashSet<&str> = profile.skills.iter().map(|s| s.label.as_str()).collect();
    for label in &plan.selected_skill_labels {
        if !labels.contains(label.as_str()) {
            warnings.push(PlanWarning {
                kind: PlanWarningKind::UnknownSkillLabel,
                subject: label.clone(),
                description: format!("Selected skill label '{label}' does not exist in the profile."),
            });
        }
    }

    // Sorted so the warning list is stable across runs.
    let mut override_ids: Vec<&String> = plan.bullet_overrides.keys().collect();
    override_ids.sort();
    for id in override_ids {
        if id.is_empty() || !profile.has_entry_id(id) {
            warnings.push(PlanWarning {
                kind: PlanWarningKind::OrphanOverride,
                subject: id.clone(),
                description: format!(
                    "Bullet override for '{id}' matches no experience, education or project entry and will be ignored."
                ),
            });
        }
    }

    let mut seen = HashSet::new();
    for title in &plan.section_order {
        if SectionTitle::parse(title).is_none() {
            warnings.push(PlanWarning {
                kind: PlanWarningKind::UnknownSection,
                subject: title.clone(),
                description: format!(
                    "Section '{title}' is not one of Experience, Projects, Education, Skills and will be skipped."
                ),
            });
        } else if !seen.insert(title.as_str()) {
            warnings.push(PlanWarning {
                kind: PlanWarningKind::DuplicateSection,
                subject: title.clone(),
                description: format!("Section '{title}' appears more than once; only the first position is used."),
            });
        }
    }

    warnings
}

fn check_ids<T: Identified>(
    warnings: &mut Vec<PlanWarning>,
    category: &str,
    entries: &[T],
    selected_ids: &[String],
) {
    let known: HashSet<&str> = entries
        .iter()
        .map(|e| e.id())
        .filter(|id| !id.is_empty())
        .collect();
    for id in selected_ids {
        if !known.contains(id.as_str()) {
            warnings.push(PlanWarning {
                kind: PlanWarningKind::UnknownEntryId,
                subject: id.clone(),
                description: format!("Selected {category} id '{id}' does not exist in the profile."),
            });
        }
    }
}
