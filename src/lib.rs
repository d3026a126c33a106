//! CV template rendering: one profile, three layouts, an HTML preview tree and a PDF document tree.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub mod cli;
pub mod config;
pub mod core;
pub mod environment;
pub mod locale;
pub mod render;
pub mod templates;
pub mod types;
pub mod utils;

pub use config::RenderConfig;
pub use crate::core::template_engine::{
    list_available_templates, select_renderer, Renderer, TemplateId, TemplateInfo,
};
pub use environment::EnvironmentConfig;
pub use locale::Locale;
pub use render::{HtmlNode, PdfNode};
pub use types::cv_data::CvProfile;
pub use types::validation::{parse_profile, InputFormat, ValidationError};

use crate::core::FsOps;

/// Screen preview for `template_id` with default settings.
pub fn render_preview(profile: &CvProfile, template_id: &str) -> HtmlNode {
    let config = RenderConfig::default().with_template(TemplateId::resolve(template_id));
    render_preview_with(profile, &config)
}

pub fn render_preview_with(profile: &CvProfile, config: &RenderConfig) -> HtmlNode {
    Renderer::new(config.template).render_html(profile, config)
}

/// Full standalone HTML page for the preview.
pub fn render_preview_html(profile: &CvProfile, config: &RenderConfig) -> Result<String> {
    Renderer::new(config.template).render_html_document(profile, config)
}

/// PDF document tree for `template_id` with default settings.
pub fn render_pdf_document(profile: &CvProfile, template_id: &str) -> PdfNode {
    let config = RenderConfig::default().with_template(TemplateId::resolve(template_id));
    render_pdf_document_with(profile, &config)
}

pub fn render_pdf_document_with(profile: &CvProfile, config: &RenderConfig) -> PdfNode {
    Renderer::new(config.template).render_pdf(profile, config)
}

/// Read and validate a profile file; the format comes from its extension.
pub async fn load_profile(path: &Path) -> Result<CvProfile> {
    let file_name = path.to_string_lossy();
    let ext = utils::validate_file_extension(&file_name, utils::PROFILE_EXTENSIONS)?;
    let format = InputFormat::from_extension(&ext)
        .with_context(|| format!("Unsupported profile format: {}", ext))?;

    let content = FsOps::read_file_safe(path).await?;
    let profile = parse_profile(&content, format)
        .with_context(|| format!("Invalid profile in {}", path.display()))?;

    info!(
        "Loaded profile for {} from {}",
        profile.personal_info.full_name,
        path.display()
    );
    Ok(profile)
}
