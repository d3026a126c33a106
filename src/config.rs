// src/config.rs
use tracing::warn;

use crate::core::template_engine::TemplateId;
use crate::environment::EnvironmentConfig;
use crate::locale::Locale;

pub const DEFAULT_IMAGE_PROXY_ENDPOINT: &str = "/api/image-proxy";

/// Per-render settings: which template, which locale, how images reach the PDF engine
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub template: TemplateId,
    pub locale: Locale,
    pub image_proxy_endpoint: String,
    /// Overrides the locale's "not provided" text for missing contact values.
    pub placeholder: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: TemplateId::default(),
            locale: Locale::default(),
            image_proxy_endpoint: DEFAULT_IMAGE_PROXY_ENDPOINT.to_string(),
            placeholder: None,
        }
    }
}

impl RenderConfig {
    /// Lenient constructor: unknown template or locale strings fall back to the defaults.
    pub fn new(template: &str, lang: &str) -> Self {
        let locale = Locale::parse(lang).unwrap_or_else(|| {
            warn!("Unsupported locale '{}', using {}", lang, Locale::default());
            Locale::default()
        });

        Self {
            template: TemplateId::resolve(template),
            locale,
            ..Default::default()
        }
    }

    pub fn from_environment(env: &EnvironmentConfig) -> Self {
        Self::new(&env.default_template, &env.default_locale)
            .with_image_proxy(env.image_proxy_endpoint.clone())
    }

    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_image_proxy(mut self, endpoint: String) -> Self {
        self.image_proxy_endpoint = endpoint;
        self
    }

    pub fn with_placeholder(mut self, placeholder: String) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}
