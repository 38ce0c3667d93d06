// RenderCV document pipeline.
// Implements: entry selection, highlight overrides, section ordering, document assembly.
// Pure transformations only; handlers are the sole I/O boundary.

pub mod advisories;
pub mod assembler;
pub mod defaults;
pub mod entries;
pub mod handlers;
pub mod mapper;
pub mod omission;
pub mod selection;
