pub mod plan;
pub mod profile;
