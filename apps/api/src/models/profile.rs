use serde::{Deserialize, Serialize};

/// Social network handle shown in the CV header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialNetwork {
    pub network: String,
    pub username: String,
}

/// Header metadata for the CV owner. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileMeta {
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialNetwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(default)]
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub id: String,
    pub institution: String,
    pub area: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A skill line. Selected by `label`, not by `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub label: String,
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The canonical source-of-truth record a CV is tailored from.
/// Read-only for the whole mapping pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub meta: ProfileMeta,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Anything the selection plan can address by identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Experience {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Education {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Profile {
    /// True if any experience, education or project entry carries `id`.
    pub fn has_entry_id(&self, id: &str) -> bool {
        self.experience.iter().any(|e| e.id == id)
            || self.education.iter().any(|e| e.id == id)
            || self.projects.iter().any(|p| p.id == id)
    }
}
