// src/templates/modern.rs
//! Two columns under a colored banner: short facts in the sidebar, the
//! narrative sections in the main column.

use super::render_column;
use crate::core::styles::{Theme, MODERN_THEME};
use crate::core::traversal::SectionKind;
use crate::render::primitives::cv_header;
use crate::render::{BoxKind, RenderBackend, RenderContext};
use crate::types::cv_data::CvProfile;

pub const THEME: &Theme = &MODERN_THEME;

pub const SIDEBAR_SECTIONS: [SectionKind; 4] = [
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Education,
    SectionKind::Certificates,
];

pub const MAIN_SECTIONS: [SectionKind; 4] = [
    SectionKind::Bio,
    SectionKind::Experience,
    SectionKind::Projects,
    SectionKind::Awards,
];

pub fn placed_sections() -> Vec<SectionKind> {
    SIDEBAR_SECTIONS.iter().chain(MAIN_SECTIONS.iter()).copied().collect()
}

pub fn render<B: RenderBackend>(backend: &B, profile: &CvProfile, ctx: &RenderContext) -> B::Node {
    let header = cv_header(backend, &profile.personal_info, ctx);

    let sidebar = backend.block(
        BoxKind::Sidebar,
        render_column(backend, profile, &SIDEBAR_SECTIONS, ctx),
        ctx,
    );
    let main = backend.block(
        BoxKind::Main,
        render_column(backend, profile, &MAIN_SECTIONS, ctx),
        ctx,
    );

    backend.block(
        BoxKind::Page,
        vec![header, backend.block(BoxKind::Columns, vec![sidebar, main], ctx)],
        ctx,
    )
}
