// src/core/mod.rs
//! Shared rendering helpers, style tables and template dispatch

pub mod formatting;
pub mod fs_ops;
pub mod styles;
pub mod template_engine;
pub mod traversal;

pub use fs_ops::FsOps;
pub use template_engine::{
    list_available_templates, select_renderer, Renderer, TemplateId, TemplateInfo,
};
pub use traversal::SectionKind;
