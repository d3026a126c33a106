// src/render/mod.rs
//! Backend-agnostic rendering. Templates compose pages out of the
//! primitives in [`primitives`]; each backend decides what a primitive
//! becomes on its output medium.

pub mod html;
pub mod pdf;
pub mod primitives;

use crate::core::styles::Theme;
use crate::core::traversal::SectionKind;
use crate::locale::{Labels, Locale};

pub use html::{HtmlBackend, HtmlNode};
pub use pdf::{NodeRole, PdfBackend, PdfNode, PdfStyle};

/// Structural containers a template can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Page,
    Header,
    Identity,
    ContactList,
    ContactRow,
    Columns,
    Sidebar,
    Main,
    Entry,
    EntryHeading,
    ListItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Name,
    Headline,
    SectionTitle,
    EntryTitle,
    EntrySubtitle,
    EntryMeta,
    Body,
    Label,
    Value,
    Placeholder,
    Initials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Email,
    Phone,
    Address,
    Website,
    Birthday,
    Gender,
}

impl ContactIcon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Website => "website",
            Self::Birthday => "birthday",
            Self::Gender => "gender",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Email => "\u{2709}",
            Self::Phone => "\u{260E}",
            Self::Address => "\u{2302}",
            Self::Website => "\u{1F517}",
            Self::Birthday => "\u{2605}",
            Self::Gender => "\u{26A5}",
        }
    }
}

/// Everything a primitive needs besides the data it draws.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub locale: Locale,
    pub labels: &'static Labels,
    pub placeholder: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, locale: Locale, placeholder: Option<&'a str>) -> Self {
        let labels = locale.labels();
        Self {
            theme,
            locale,
            labels,
            placeholder: placeholder.unwrap_or(labels.not_provided),
        }
    }
}

/// One output medium. Implementations must be pure: the same calls always
/// produce the same nodes.
pub trait RenderBackend {
    type Node;

    fn text(&self, kind: TextKind, content: &str, ctx: &RenderContext) -> Self::Node;

    fn link(&self, label: &str, href: &str, ctx: &RenderContext) -> Self::Node;

    fn icon(&self, icon: ContactIcon, ctx: &RenderContext) -> Self::Node;

    /// `None` when the backend cannot embed the image; callers then fall
    /// back to the placeholder glyph.
    fn image(&self, src: &str, alt: &str, ctx: &RenderContext) -> Option<Self::Node>;

    fn avatar_placeholder(&self, initials: &str, ctx: &RenderContext) -> Self::Node;

    fn block(&self, kind: BoxKind, children: Vec<Self::Node>, ctx: &RenderContext) -> Self::Node;

    fn section(
        &self,
        kind: SectionKind,
        title: &str,
        body: Vec<Self::Node>,
        ctx: &RenderContext,
    ) -> Self::Node;

    fn divider(&self, ctx: &RenderContext) -> Self::Node;

    fn indicator(&self, filled: u8, total: u8, ctx: &RenderContext) -> Self::Node;
}
