//! Profile + selection plan → RenderCV `cv` block.
//!
//! Deterministic and side-effect free. Assumes the plan was validated upstream:
//! nothing here re-validates, and identifiers that match nothing simply yield
//! empty selections.

use tracing::debug;

use crate::models::plan::SelectionPlan;
use crate::models::profile::{Profile, ProfileMeta};
use crate::rendercv::entries::{
    Cv, CvDict, EducationEntry, ExperienceEntry, NormalEntry, OneLineEntry, Section,
    SectionEntry, SectionTitle, Sections, SocialNetworkEntry,
};
use crate::rendercv::selection::{resolve_highlights, select_all_if_empty, select_by_id};

/// Builds the RenderCV `cv` block for `profile` as tailored by `plan`.
///
/// Steps:
/// 1. Map header metadata (name, contact fields, social networks)
/// 2. Map each category with its selection and highlight overrides
/// 3. Drop empty sections, keeping canonical order
/// 4. Reorder by `plan.section_order`
pub fn build_cv_dict(profile: &Profile, plan: &SelectionPlan) -> CvDict {
    let mut sections = Vec::with_capacity(SectionTitle::CANONICAL.len());

    for title in SectionTitle::CANONICAL {
        let entries = match title {
            SectionTitle::Experience => map_experience(profile, plan),
            SectionTitle::Projects => map_projects(profile, plan),
            SectionTitle::Education => map_education(profile, plan),
            SectionTitle::Skills => map_skills(profile, plan),
        };
        if !entries.is_empty() {
            sections.push(Section { title, entries });
        }
    }

    let sections = order_sections(sections, &plan.section_order);

    debug!(
        "Mapped cv for {:?}: sections={:?}",
        profile.meta.name,
        sections
            .iter()
            .map(|s| (s.title.as_str(), s.entries.len()))
            .collect::<Vec<_>>()
    );

    CvDict {
        cv: map_header(&profile.meta, Sections(sections)),
    }
}

fn map_header(meta: &ProfileMeta, sections: Sections) -> Cv {
    Cv {
        name: meta.name.clone(),
        headline: meta.headline.clone(),
        location: meta.location.clone(),
        email: meta.email.clone(),
        phone: meta.phone.clone(),
        website: meta.website.clone(),
        social_networks: meta
            .socials
            .iter()
            .map(|s| SocialNetworkEntry {
                network: s.network.clone(),
                username: s.username.clone(),
            })
            .collect(),
        sections,
    }
}

fn map_experience(profile: &Profile, plan: &SelectionPlan) -> Vec<SectionEntry> {
    select_by_id(&profile.experience, &plan.selected_experience_ids)
        .into_iter()
        .map(|exp| {
            SectionEntry::Experience(ExperienceEntry {
                company: exp.company.clone(),
                position: exp.position.clone(),
                location: exp.location.clone(),
                date: exp.date.clone(),
                start_date: exp.start_date.clone(),
                end_date: exp.end_date.clone(),
                summary: exp.summary.clone(),
                highlights: resolve_highlights(&exp.id, &exp.highlights, &plan.bullet_overrides),
            })
        })
        .collect()
}

fn map_education(profile: &Profile, plan: &SelectionPlan) -> Vec<SectionEntry> {
    select_by_id(&profile.education, &plan.selected_education_ids)
        .into_iter()
        .map(|edu| {
            SectionEntry::Education(EducationEntry {
                institution: edu.institution.clone(),
                area: edu.area.clone(),
                degree: edu.degree.clone(),
                location: edu.location.clone(),
                date: edu.date.clone(),
                start_date: edu.start_date.clone(),
                end_date: edu.end_date.clone(),
                summary: edu.summary.clone(),
                highlights: resolve_highlights(&edu.id, &edu.highlights, &plan.bullet_overrides),
            })
        })
        .collect()
}

fn map_projects(profile: &Profile, plan: &SelectionPlan) -> Vec<SectionEntry> {
    select_by_id(&profile.projects, &plan.selected_project_ids)
        .into_iter()
        .map(|proj| {
            SectionEntry::Normal(NormalEntry {
                name: proj.name.clone(),
                summary: proj.summary.clone(),
                location: proj.location.clone(),
                date: proj.date.clone(),
                start_date: proj.start_date.clone(),
                end_date: proj.end_date.clone(),
                highlights: resolve_highlights(
                    &proj.id,
                    &proj.highlights,
                    &plan.bullet_overrides,
                ),
            })
        })
        .collect()
}

fn map_skills(profile: &Profile, plan: &SelectionPlan) -> Vec<SectionEntry> {
    select_all_if_empty(&profile.skills, &plan.selected_skill_labels, |skill| {
        skill.label.as_str()
    })
    .into_iter()
    .map(|skill| {
        SectionEntry::OneLine(OneLineEntry {
            label: skill.label.clone(),
            details: skill.details.clone(),
        })
    })
    .collect()
}

/// Reorders `sections` so titles named in `preferred` come first, in that order.
///
/// Unknown or absent titles are skipped and repeats count once. Remaining
/// sections keep their incoming order. Only permutes: never adds or drops.
pub fn order_sections(sections: Vec<Section>, preferred: &[String]) -> Vec<Section> {
    if preferred.is_empty() {
        return sections;
    }

    let mut remaining = sections;
    let mut ordered = Vec::with_capacity(remaining.len());

    for title in preferred {
        let Some(title) = SectionTitle::parse(title) else {
            continue;
        };
        if let Some(pos) = remaining.iter().position(|s| s.title == title) {
            ordered.push(remaining.remove(pos));
        }
    }

    ordered.extend(remaining);
    ordered
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
