//! RenderCV output shapes — the `cv` block and its entry types.
//!
//! Field names follow RenderCV's entry conventions (`company`/`position`,
//! `institution`/`area`, `label`/`details`). Optional fields go through the
//! omission rule; required fields are always written.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rendercv::omission::{is_omitted, Omittable};

// ────────────────────────────────────────────────────────────────────────────
// Entry types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "is_omitted")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EducationEntry {
    pub institution: String,
    pub area: String,
    #[serde(skip_serializing_if = "is_omitted")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub highlights: Vec<String>,
}

/// RenderCV's generic titled entry; used for projects.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalEntry {
    pub name: String,
    #[serde(skip_serializing_if = "is_omitted")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub highlights: Vec<String>,
}

/// `label: details` line; used for skills. Both fields are always written.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OneLineEntry {
    pub label: String,
    pub details: String,
}

/// Any entry that can appear in a section. Serialized without a tag:
/// RenderCV infers the entry type from its fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SectionEntry {
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Normal(NormalEntry),
    OneLine(OneLineEntry),
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTitle {
    Experience,
    Projects,
    Education,
    Skills,
}

impl SectionTitle {
    /// Construction order before any preferred ordering is applied.
    pub const CANONICAL: [SectionTitle; 4] = [
        SectionTitle::Experience,
        SectionTitle::Projects,
        SectionTitle::Education,
        SectionTitle::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Experience => "Experience",
            SectionTitle::Projects => "Projects",
            SectionTitle::Education => "Education",
            SectionTitle::Skills => "Skills",
        }
    }

    /// Exact, case-sensitive match against the canonical titles.
    pub fn parse(title: &str) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|candidate| candidate.as_str() == title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: SectionTitle,
    pub entries: Vec<SectionEntry>,
}

/// Ordered title → entries mapping. Serialized as a JSON object whose key order
/// is the section order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections(pub Vec<Section>);

impl Sections {
    #[cfg(test)]
    pub fn titles(&self) -> Vec<&'static str> {
        self.0.iter().map(|s| s.title.as_str()).collect()
    }

    #[cfg(test)]
    pub fn get(&self, title: SectionTitle) -> Option<&[SectionEntry]> {
        self.0
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.entries.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Omittable for Sections {
    fn is_omittable(&self) -> bool {
        self.is_empty()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in &self.0 {
            map.serialize_entry(section.title.as_str(), &section.entries)?;
        }
        map.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// cv block
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SocialNetworkEntry {
    pub network: String,
    pub username: String,
}

/// The RenderCV `cv` block: header fields followed by the ordered sections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cv {
    pub name: String,
    #[serde(skip_serializing_if = "is_omitted")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub social_networks: Vec<SocialNetworkEntry>,
    #[serde(skip_serializing_if = "is_omitted")]
    pub sections: Sections,
}

/// Mapper output: `{"cv": {...}}`, ready for the document assembler.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CvDict {
    pub cv: Cv,
}

impl CvDict {
    /// Converts to a JSON object, keeping header and section order.
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "cv dict serialized to a non-object value: {other}"
            ))),
        }
    }
}
