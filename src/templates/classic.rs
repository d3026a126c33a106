// src/templates/classic.rs
//! Single column, centered header, underlined serif headings.

use super::render_column;
use crate::core::styles::{Theme, CLASSIC_THEME};
use crate::core::traversal::{SectionKind, CANONICAL_ORDER};
use crate::render::primitives::cv_header;
use crate::render::{BoxKind, RenderBackend, RenderContext};
use crate::types::cv_data::CvProfile;

pub const THEME: &Theme = &CLASSIC_THEME;

pub const SECTION_ORDER: [SectionKind; 8] = CANONICAL_ORDER;

pub fn placed_sections() -> Vec<SectionKind> {
    SECTION_ORDER.to_vec()
}

pub fn render<B: RenderBackend>(backend: &B, profile: &CvProfile, ctx: &RenderContext) -> B::Node {
    let mut children = vec![cv_header(backend, &profile.personal_info, ctx)];
    children.extend(render_column(backend, profile, &SECTION_ORDER, ctx));
    backend.block(BoxKind::Page, children, ctx)
}
