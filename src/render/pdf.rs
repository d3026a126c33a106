// src/render/pdf.rs
//! Print backend: a declarative document tree (page / view / text / link /
//! image nodes with flexbox-style objects) handed to the external PDF engine.

use serde::{Serialize, Serializer};

use super::{BoxKind, ContactIcon, RenderBackend, RenderContext, TextKind};
use crate::core::formatting::{proxied_image_url, safe_href};
use crate::core::styles::{HeaderStyle, SectionStyle};
use crate::core::traversal::SectionKind;

pub const DEFAULT_PAGE_SIZE: &str = "A4";

/// Length in points, or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Pt(f32),
    Percent(f32),
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pt(value) => serializer.serialize_f32(*value),
            Self::Percent(value) => serializer.serialize_str(&format!("{}%", value)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<&'static str>,
}

/// Semantic marker on a node. Sections also become PDF bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeRole {
    Header,
    Avatar,
    Icon { icon: &'static str },
    ContactRow,
    Section { section: SectionKind },
    Divider,
    Indicator { filled: u8, total: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PdfNode {
    Document {
        title: String,
        author: String,
        language: String,
        children: Vec<PdfNode>,
    },
    Page {
        size: &'static str,
        style: PdfStyle,
        children: Vec<PdfNode>,
    },
    View {
        style: PdfStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<NodeRole>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bookmark: Option<String>,
        children: Vec<PdfNode>,
    },
    Text {
        style: PdfStyle,
        content: String,
    },
    Link {
        style: PdfStyle,
        src: String,
        content: String,
    },
    Image {
        style: PdfStyle,
        src: String,
    },
}

impl PdfNode {
    pub fn view(style: PdfStyle, children: Vec<PdfNode>) -> Self {
        Self::View {
            style,
            role: None,
            bookmark: None,
            children,
        }
    }

    pub fn role(&self) -> Option<NodeRole> {
        match self {
            Self::View { role, .. } => *role,
            _ => None,
        }
    }

    pub fn children(&self) -> &[PdfNode] {
        match self {
            Self::Document { children, .. }
            | Self::Page { children, .. }
            | Self::View { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Depth-first search over this node and its descendants.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&PdfNode) -> bool) -> Vec<&'a PdfNode> {
        let mut found = Vec::new();
        self.walk(predicate, &mut found);
        found
    }

    fn walk<'a>(&'a self, predicate: &dyn Fn(&PdfNode) -> bool, found: &mut Vec<&'a PdfNode>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.walk(predicate, found);
        }
    }

    /// Sections in document order.
    pub fn sections(&self) -> Vec<SectionKind> {
        self.find_all(&|node: &PdfNode| matches!(node.role(), Some(NodeRole::Section { .. })))
            .into_iter()
            .filter_map(|node| match node.role() {
                Some(NodeRole::Section { section }) => Some(section),
                _ => None,
            })
            .collect()
    }

    pub fn text_content(&self) -> String {
        match self {
            Self::Text { content, .. } | Self::Link { content, .. } => content.clone(),
            _ => self
                .children()
                .iter()
                .map(PdfNode::text_content)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

pub struct PdfBackend {
    image_proxy_endpoint: String,
}

impl PdfBackend {
    pub fn new(image_proxy_endpoint: impl Into<String>) -> Self {
        Self {
            image_proxy_endpoint: image_proxy_endpoint.into(),
        }
    }

    fn with_role(node: PdfNode, new_role: NodeRole) -> PdfNode {
        match node {
            PdfNode::View {
                style,
                bookmark,
                children,
                ..
            } => PdfNode::View {
                style,
                role: Some(new_role),
                bookmark,
                children,
            },
            other => other,
        }
    }
}

impl RenderBackend for PdfBackend {
    type Node = PdfNode;

    fn text(&self, kind: TextKind, content: &str, ctx: &RenderContext) -> PdfNode {
        let theme = ctx.theme;
        let typo = &theme.typography;
        let palette = &theme.palette;
        let banner = theme.header_style == HeaderStyle::Banner;

        let style = match kind {
            TextKind::Name => PdfStyle {
                font_family: Some(typo.heading_font),
                font_size: Some(typo.name_size),
                color: Some(if banner { palette.header_text } else { palette.primary }),
                ..Default::default()
            },
            TextKind::Headline => PdfStyle {
                font_size: Some(typo.headline_size),
                color: Some(if banner { palette.header_text } else { palette.accent }),
                margin_top: Some(3.0),
                ..Default::default()
            },
            TextKind::SectionTitle => {
                let base = PdfStyle {
                    font_family: Some(typo.heading_font),
                    font_size: Some(typo.section_title_size),
                    margin_bottom: Some(theme.spacing.entry_gap),
                    text_transform: typo.uppercase_section_titles.then_some("uppercase"),
                    ..Default::default()
                };
                match theme.section_style {
                    SectionStyle::AccentBar => PdfStyle {
                        color: Some(palette.primary),
                        border_left_width: Some(3.0),
                        border_left_color: Some(palette.accent),
                        padding_left: Some(5.0),
                        ..base
                    },
                    SectionStyle::Underlined => PdfStyle {
                        color: Some(palette.primary),
                        letter_spacing: Some(0.5),
                        border_bottom_width: Some(1.0),
                        border_bottom_color: Some(palette.primary),
                        padding_bottom: Some(2.0),
                        ..base
                    },
                    SectionStyle::Plain => PdfStyle {
                        color: Some(palette.muted),
                        letter_spacing: Some(1.5),
                        ..base
                    },
                }
            }
            TextKind::EntryTitle => PdfStyle {
                font_family: Some(typo.heading_font),
                font_size: Some(typo.entry_title_size),
                color: Some(palette.text),
                ..Default::default()
            },
            TextKind::EntrySubtitle => PdfStyle {
                font_size: Some(typo.body_size),
                color: Some(palette.accent),
                font_style: (theme.section_style == SectionStyle::Underlined).then_some("italic"),
                margin_vertical: Some(1.5),
                ..Default::default()
            },
            TextKind::EntryMeta => PdfStyle {
                font_size: Some(typo.small_size),
                color: Some(palette.muted),
                ..Default::default()
            },
            TextKind::Body => PdfStyle {
                font_size: Some(typo.body_size),
                line_height: Some(typo.line_height),
                color: Some(palette.text),
                margin_top: Some(3.0),
                ..Default::default()
            },
            TextKind::Label => PdfStyle {
                font_size: Some(typo.small_size),
                color: Some(if banner { palette.header_text } else { palette.muted }),
                opacity: banner.then_some(0.8),
                ..Default::default()
            },
            TextKind::Value => PdfStyle {
                font_size: Some(typo.body_size),
                ..Default::default()
            },
            TextKind::Placeholder => PdfStyle {
                font_size: Some(typo.body_size),
                font_style: Some("italic"),
                opacity: Some(0.7),
                ..Default::default()
            },
            TextKind::Initials => PdfStyle {
                font_family: Some(typo.heading_font),
                font_size: Some(theme.spacing.avatar_size / 3.0),
                color: Some("#FFFFFF"),
                ..Default::default()
            },
        };

        PdfNode::Text {
            style,
            content: content.to_string(),
        }
    }

    fn link(&self, label: &str, href: &str, ctx: &RenderContext) -> PdfNode {
        let style = PdfStyle {
            font_size: Some(ctx.theme.typography.small_size),
            color: Some(ctx.theme.palette.accent),
            ..Default::default()
        };

        match safe_href(href) {
            Some(src) => PdfNode::Link {
                style,
                src,
                content: label.to_string(),
            },
            None => PdfNode::Text {
                style,
                content: label.to_string(),
            },
        }
    }

    fn icon(&self, icon: ContactIcon, ctx: &RenderContext) -> PdfNode {
        // Base PDF fonts have no pictographs, so icons are drawn as a small swatch.
        let size = ctx.theme.typography.small_size * 0.6;
        let color = match ctx.theme.header_style {
            HeaderStyle::Banner => ctx.theme.palette.header_text,
            _ => ctx.theme.palette.accent,
        };
        PdfNode::View {
            style: PdfStyle {
                width: Some(Size::Pt(size)),
                height: Some(Size::Pt(size)),
                border_radius: Some(1.0),
                background_color: Some(color),
                ..Default::default()
            },
            role: Some(NodeRole::Icon { icon: icon.name() }),
            bookmark: None,
            children: Vec::new(),
        }
    }

    fn image(&self, src: &str, _alt: &str, ctx: &RenderContext) -> Option<PdfNode> {
        let src = proxied_image_url(Some(src), &self.image_proxy_endpoint)?;
        let size = ctx.theme.spacing.avatar_size;
        let radius = match ctx.theme.section_style {
            SectionStyle::Underlined => 4.0,
            _ => size / 2.0,
        };
        Some(PdfNode::Image {
            style: PdfStyle {
                width: Some(Size::Pt(size)),
                height: Some(Size::Pt(size)),
                border_radius: Some(radius),
                object_fit: Some("cover"),
                ..Default::default()
            },
            src,
        })
    }

    fn avatar_placeholder(&self, initials: &str, ctx: &RenderContext) -> PdfNode {
        let size = ctx.theme.spacing.avatar_size;
        let glyph = if initials.is_empty() { "?" } else { initials };
        PdfNode::View {
            style: PdfStyle {
                width: Some(Size::Pt(size)),
                height: Some(Size::Pt(size)),
                border_radius: Some(size / 2.0),
                background_color: Some(ctx.theme.palette.accent),
                justify_content: Some("center"),
                align_items: Some("center"),
                ..Default::default()
            },
            role: Some(NodeRole::Avatar),
            bookmark: None,
            children: vec![self.text(TextKind::Initials, glyph, ctx)],
        }
    }

    fn block(&self, kind: BoxKind, children: Vec<PdfNode>, ctx: &RenderContext) -> PdfNode {
        let theme = ctx.theme;
        let spacing = &theme.spacing;
        let palette = &theme.palette;

        let style = match kind {
            BoxKind::Page => {
                return PdfNode::Page {
                    size: DEFAULT_PAGE_SIZE,
                    style: PdfStyle {
                        padding: Some(spacing.page_padding),
                        background_color: Some(palette.background),
                        color: Some(palette.text),
                        font_family: Some(theme.typography.body_font),
                        font_size: Some(theme.typography.body_size),
                        ..Default::default()
                    },
                    children,
                }
            }
            BoxKind::Header => {
                let style = match theme.header_style {
                    HeaderStyle::Banner => PdfStyle {
                        flex_direction: Some("row"),
                        align_items: Some("center"),
                        gap: Some(spacing.column_gap),
                        padding: Some(18.0),
                        background_color: Some(palette.header_background),
                        color: Some(palette.header_text),
                        ..Default::default()
                    },
                    HeaderStyle::Centered => PdfStyle {
                        flex_direction: Some("column"),
                        align_items: Some("center"),
                        text_align: Some("center"),
                        gap: Some(4.0),
                        padding_bottom: Some(9.0),
                        margin_bottom: Some(spacing.section_gap),
                        border_bottom_width: Some(2.0),
                        border_bottom_color: Some(palette.primary),
                        ..Default::default()
                    },
                    HeaderStyle::Compact => PdfStyle {
                        flex_direction: Some("row"),
                        align_items: Some("center"),
                        gap: Some(9.0),
                        padding_bottom: Some(6.0),
                        margin_bottom: Some(spacing.section_gap),
                        border_bottom_width: Some(1.0),
                        border_bottom_color: Some(palette.divider),
                        ..Default::default()
                    },
                };
                return Self::with_role(PdfNode::view(style, children), NodeRole::Header);
            }
            BoxKind::Identity => PdfStyle {
                flex_grow: (theme.header_style != HeaderStyle::Centered).then_some(1.0),
                ..Default::default()
            },
            BoxKind::ContactList => PdfStyle {
                flex_direction: Some("row"),
                flex_wrap: Some("wrap"),
                gap: Some(4.0),
                justify_content: (theme.header_style != HeaderStyle::Banner).then_some("center"),
                width: (theme.header_style == HeaderStyle::Banner).then_some(Size::Percent(45.0)),
                ..Default::default()
            },
            BoxKind::ContactRow => {
                let style = PdfStyle {
                    flex_direction: Some("row"),
                    align_items: Some("center"),
                    gap: Some(4.0),
                    ..Default::default()
                };
                return Self::with_role(PdfNode::view(style, children), NodeRole::ContactRow);
            }
            BoxKind::Columns => PdfStyle {
                flex_direction: Some("row"),
                flex_grow: Some(1.0),
                ..Default::default()
            },
            BoxKind::Sidebar => PdfStyle {
                width: Some(Size::Percent(spacing.sidebar_width_pct)),
                padding: Some(spacing.column_gap),
                background_color: Some(palette.sidebar_background),
                ..Default::default()
            },
            BoxKind::Main => PdfStyle {
                flex_grow: Some(1.0),
                padding: Some(spacing.column_gap),
                ..Default::default()
            },
            BoxKind::Entry => PdfStyle {
                margin_vertical: Some(spacing.entry_gap / 2.0),
                ..Default::default()
            },
            BoxKind::EntryHeading => PdfStyle {
                flex_direction: Some("row"),
                justify_content: Some("space-between"),
                align_items: Some("flex-end"),
                gap: Some(6.0),
                ..Default::default()
            },
            BoxKind::ListItem => PdfStyle {
                flex_direction: Some("row"),
                justify_content: Some("space-between"),
                align_items: Some("center"),
                margin_vertical: Some(2.0),
                ..Default::default()
            },
        };

        PdfNode::view(style, children)
    }

    fn section(
        &self,
        kind: SectionKind,
        title: &str,
        body: Vec<PdfNode>,
        ctx: &RenderContext,
    ) -> PdfNode {
        let mut children = Vec::with_capacity(body.len() + 1);
        children.push(self.text(TextKind::SectionTitle, title, ctx));
        children.extend(body);

        PdfNode::View {
            style: PdfStyle {
                margin_bottom: Some(ctx.theme.spacing.section_gap),
                ..Default::default()
            },
            role: Some(NodeRole::Section { section: kind }),
            bookmark: Some(title.to_string()),
            children,
        }
    }

    fn divider(&self, ctx: &RenderContext) -> PdfNode {
        PdfNode::View {
            style: PdfStyle {
                border_top_width: Some(0.75),
                border_top_color: Some(ctx.theme.palette.divider),
                margin_vertical: Some(ctx.theme.spacing.entry_gap),
                ..Default::default()
            },
            role: Some(NodeRole::Divider),
            bookmark: None,
            children: Vec::new(),
        }
    }

    fn indicator(&self, filled: u8, total: u8, ctx: &RenderContext) -> PdfNode {
        let dot = ctx.theme.spacing.dot_size;
        let dots: Vec<PdfNode> = (0..total)
            .map(|i| {
                let background = if i < filled {
                    ctx.theme.palette.primary
                } else {
                    ctx.theme.palette.dot_empty
                };
                PdfNode::view(
                    PdfStyle {
                        width: Some(Size::Pt(dot)),
                        height: Some(Size::Pt(dot)),
                        border_radius: Some(dot / 2.0),
                        background_color: Some(background),
                        ..Default::default()
                    },
                    Vec::new(),
                )
            })
            .collect();

        PdfNode::View {
            style: PdfStyle {
                flex_direction: Some("row"),
                gap: Some(2.0),
                ..Default::default()
            },
            role: Some(NodeRole::Indicator { filled, total }),
            bookmark: None,
            children: dots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::MODERN_THEME;
    use crate::locale::Locale;

    fn ctx() -> RenderContext<'static> {
        RenderContext::new(&MODERN_THEME, Locale::En, None)
    }

    #[test]
    fn test_style_serializes_camel_case_without_nulls() {
        let style = PdfStyle {
            flex_direction: Some("row"),
            width: Some(Size::Percent(34.0)),
            font_size: Some(9.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "flexDirection": "row", "width": "34%", "fontSize": 9.5 })
        );
    }

    #[test]
    fn test_links_are_sanitized() {
        let backend = PdfBackend::new("/p");

        match backend.link("repo", "github.com/acme/repo", &ctx()) {
            PdfNode::Link { src, .. } => assert_eq!(src, "https://github.com/acme/repo"),
            other => panic!("expected link, got {:?}", other),
        }
        match backend.link("x", "javascript:alert(1)", &ctx()) {
            PdfNode::Text { content, .. } => assert_eq!(content, "x"),
            other => panic!("expected plain text, got {:?}", other),
        }
    }

    #[test]
    fn test_avatar_goes_through_proxy() {
        let backend = PdfBackend::new("/api/image-proxy");
        let node = backend
            .image("https://cdn.example.com/me.png", "me", &ctx())
            .unwrap();
        match node {
            PdfNode::Image { src, .. } => assert!(src.starts_with("/api/image-proxy?url=")),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_section_carries_role_and_bookmark() {
        let backend = PdfBackend::new("/p");
        let node = backend.section(SectionKind::Awards, "Awards", vec![], &ctx());
        assert_eq!(
            node.role(),
            Some(NodeRole::Section {
                section: SectionKind::Awards
            })
        );
        assert_eq!(node.sections(), vec![SectionKind::Awards]);
        assert_eq!(node.text_content(), "Awards");
    }

    #[test]
    fn test_indicator_role() {
        let node = PdfBackend::new("/p").indicator(5, 5, &ctx());
        assert_eq!(node.role(), Some(NodeRole::Indicator { filled: 5, total: 5 }));
        assert_eq!(node.children().len(), 5);
    }
}
