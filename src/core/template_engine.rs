// src/core/template_engine.rs
//! Template catalogue and renderer dispatch

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::core::styles::Theme;
use crate::render::html::{render_document_html, HtmlBackend, HtmlNode};
use crate::render::pdf::{PdfBackend, PdfNode};
use crate::render::{RenderBackend, RenderContext};
use crate::templates::{classic, minimal, modern};
use crate::types::cv_data::CvProfile;

// ===== Template Models =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Modern, TemplateId::Classic, TemplateId::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "modern" => Some(Self::Modern),
            "classic" => Some(Self::Classic),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Unknown identifiers fall back to the default template.
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                "Unknown template '{}', falling back to '{}'",
                value,
                fallback.as_str()
            );
            fallback
        })
    }

    pub fn info(&self) -> TemplateInfo {
        let (display_name, description) = match self {
            Self::Modern => (
                "Modern",
                "Two-column layout with a colored header banner and skill sidebar",
            ),
            Self::Classic => (
                "Classic",
                "Traditional single-column layout with serif type and underlined headings",
            ),
            Self::Minimal => (
                "Minimal",
                "Clean single-column layout with generous whitespace and understated headings",
            ),
        };
        TemplateInfo {
            id: *self,
            display_name: display_name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            Self::Modern => modern::THEME,
            Self::Classic => classic::THEME,
            Self::Minimal => minimal::THEME,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Template '{}' not found. Available templates: {:?}",
                s,
                TemplateId::ALL.map(|t| t.as_str())
            )
        })
    }
}

/// Picker metadata for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub display_name: String,
    pub description: String,
}

// ===== Renderer Dispatch =====

/// A selected template, ready to render a profile on either backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    id: TemplateId,
}

impl Renderer {
    pub fn new(id: TemplateId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn info(&self) -> TemplateInfo {
        self.id.info()
    }

    /// Drive any backend through this template's layout.
    pub fn render_with<B: RenderBackend>(
        &self,
        backend: &B,
        profile: &CvProfile,
        ctx: &RenderContext,
    ) -> B::Node {
        match self.id {
            TemplateId::Modern => modern::render(backend, profile, ctx),
            TemplateId::Classic => classic::render(backend, profile, ctx),
            TemplateId::Minimal => minimal::render(backend, profile, ctx),
        }
    }

    pub fn render_html(&self, profile: &CvProfile, config: &RenderConfig) -> HtmlNode {
        debug!(
            "Rendering HTML preview for {} with '{}' template",
            profile.personal_info.full_name, self.id
        );
        let ctx = RenderContext::new(self.id.theme(), config.locale, config.placeholder.as_deref());
        self.render_with(&HtmlBackend::new(), profile, &ctx)
    }

    pub fn render_html_document(
        &self,
        profile: &CvProfile,
        config: &RenderConfig,
    ) -> anyhow::Result<String> {
        let page = self.render_html(profile, config);
        let title = format!("{} - CV", profile.personal_info.full_name);
        render_document_html(&page, &title, config.locale.code())
    }

    pub fn render_pdf(&self, profile: &CvProfile, config: &RenderConfig) -> PdfNode {
        debug!(
            "Rendering PDF document for {} with '{}' template",
            profile.personal_info.full_name, self.id
        );
        let ctx = RenderContext::new(self.id.theme(), config.locale, config.placeholder.as_deref());
        let backend = PdfBackend::new(config.image_proxy_endpoint.clone());
        let page = self.render_with(&backend, profile, &ctx);

        PdfNode::Document {
            title: format!("{} - CV", profile.personal_info.full_name),
            author: profile.personal_info.full_name.clone(),
            language: config.locale.code().to_string(),
            children: vec![page],
        }
    }
}

/// Pick the renderer for `template_id`; unknown ids get the default.
pub fn select_renderer(template_id: &str) -> Renderer {
    Renderer::new(TemplateId::resolve(template_id))
}

pub fn list_available_templates() -> Vec<TemplateInfo> {
    TemplateId::ALL.iter().map(TemplateId::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_falls_back_to_modern() {
        assert_eq!(select_renderer("unknown-id"), select_renderer("modern"));
        assert_eq!(select_renderer("").id(), TemplateId::Modern);
        assert_eq!(select_renderer(" Classic ").id(), TemplateId::Classic);
    }

    #[test]
    fn test_catalogue_is_stable() {
        let ids: Vec<&str> = list_available_templates()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["modern", "classic", "minimal"]);
        assert!(list_available_templates()
            .iter()
            .all(|t| !t.display_name.is_empty() && !t.description.is_empty()));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("minimal".parse::<TemplateId>().unwrap(), TemplateId::Minimal);
        assert!("fancy".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_info_serializes_for_picker() {
        let json = serde_json::to_value(TemplateId::Classic.info()).unwrap();
        assert_eq!(json["id"], "classic");
        assert_eq!(json["displayName"], "Classic");
    }
}
