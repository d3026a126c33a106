// src/templates/mod.rs
//! The three page layouts. Each is a pure function of (profile, backend,
//! context) and differs from the others only in placement and styling.

pub mod classic;
pub mod minimal;
pub mod modern;

use crate::core::traversal::{walk, SectionKind};
use crate::render::primitives::render_section;
use crate::render::{RenderBackend, RenderContext};
use crate::types::cv_data::CvProfile;

/// Render the non-empty sections of `order`, in that order.
pub(crate) fn render_column<B: RenderBackend>(
    backend: &B,
    profile: &CvProfile,
    order: &[SectionKind],
    ctx: &RenderContext,
) -> Vec<B::Node> {
    walk(profile, order)
        .map(|section| render_section(backend, section, ctx))
        .collect()
}
