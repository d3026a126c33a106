// src/render/html.rs
//! Screen preview backend: a small HTML element tree with inline styles

use anyhow::{Context, Result};
use askama::filters::{Escaper, Html};
use askama::Template;
use serde::Serialize;
use std::fmt;

use super::{BoxKind, ContactIcon, RenderBackend, RenderContext, TextKind};
use crate::core::formatting::safe_href;
use crate::core::styles::{HeaderStyle, SectionStyle, Theme};
use crate::core::traversal::SectionKind;

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "meta"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HtmlNode {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    },
    Text {
        content: String,
    },
}

impl HtmlNode {
    pub fn element(tag: &str) -> Self {
        Self::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: &str) -> Self {
        Self::Text {
            content: content.to_string(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.into()));
        }
        self
    }

    pub fn child(mut self, node: HtmlNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: Vec<HtmlNode>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Text { .. } => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Self::Text { .. } => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { content } => out.push_str(content),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search over this node and its descendants.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&HtmlNode) -> bool) -> Vec<&'a HtmlNode> {
        let mut found = Vec::new();
        self.walk(predicate, &mut found);
        found
    }

    fn walk<'a>(&'a self, predicate: &dyn Fn(&HtmlNode) -> bool, found: &mut Vec<&'a HtmlNode>) {
        if predicate(self) {
            found.push(self);
        }
        if let Self::Element { children, .. } = self {
            for child in children {
                child.walk(predicate, found);
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { content } => Html.write_escaped_str(&mut *f, content),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                write!(f, "<{}", tag)?;
                for (name, value) in attrs {
                    write!(f, " {}=\"", name)?;
                    Html.write_escaped_str(&mut *f, value)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                if VOID_TAGS.contains(&tag.as_str()) {
                    return Ok(());
                }
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ title }}</title>
</head>
<body style="margin:0;background:#F3F4F6">
{{ body|safe }}
</body>
</html>"#,
    ext = "html"
)]
struct DocumentTemplate<'a> {
    lang: &'a str,
    title: &'a str,
    body: String,
}

/// Wrap a rendered page in a standalone HTML document.
pub fn render_document_html(page: &HtmlNode, title: &str, lang: &str) -> Result<String> {
    DocumentTemplate {
        lang,
        title,
        body: page.to_html(),
    }
    .render()
    .context("Failed to render HTML document")
}

// ===== Inline CSS =====

#[derive(Default)]
struct Css(Vec<(&'static str, String)>);

impl Css {
    fn new() -> Self {
        Self::default()
    }

    fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.push((property, value.into()));
        self
    }

    fn set_if(self, condition: bool, property: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.set(property, value)
        } else {
            self
        }
    }

    fn build(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Points to CSS pixels at 96 dpi.
fn px(points: f32) -> String {
    format!("{}px", (points * 4.0 / 3.0).round())
}

fn font_stack(font: &str) -> &'static str {
    if font.starts_with("Times") {
        "'Times New Roman', Times, serif"
    } else if font.starts_with("Courier") {
        "'Courier New', Courier, monospace"
    } else {
        "Helvetica, Arial, sans-serif"
    }
}

fn is_bold(font: &str) -> bool {
    font.ends_with("-Bold")
}

// ===== Backend =====

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl HtmlBackend {
    pub fn new() -> Self {
        Self
    }

    fn header_css(theme: &Theme) -> Css {
        let palette = &theme.palette;
        match theme.header_style {
            HeaderStyle::Banner => Css::new()
                .set("display", "flex")
                .set("align-items", "center")
                .set("gap", px(theme.spacing.column_gap))
                .set("padding", px(24.0))
                .set("background", palette.header_background)
                .set("color", palette.header_text),
            HeaderStyle::Centered => Css::new()
                .set("display", "flex")
                .set("flex-direction", "column")
                .set("align-items", "center")
                .set("text-align", "center")
                .set("gap", px(6.0))
                .set("padding-bottom", px(12.0))
                .set("margin-bottom", px(theme.spacing.section_gap))
                .set("border-bottom", format!("2px solid {}", palette.primary))
                .set("color", palette.primary),
            HeaderStyle::Compact => Css::new()
                .set("display", "flex")
                .set("align-items", "center")
                .set("gap", px(12.0))
                .set("padding-bottom", px(8.0))
                .set("margin-bottom", px(theme.spacing.section_gap))
                .set("border-bottom", format!("1px solid {}", palette.divider))
                .set("color", palette.primary),
        }
    }

    fn section_title_css(theme: &Theme) -> Css {
        let typo = &theme.typography;
        let palette = &theme.palette;
        let base = Css::new()
            .set("margin", format!("0 0 {}", px(theme.spacing.entry_gap)))
            .set("font-size", px(typo.section_title_size))
            .set("font-family", font_stack(typo.heading_font))
            .set_if(typo.uppercase_section_titles, "text-transform", "uppercase");

        match theme.section_style {
            SectionStyle::AccentBar => base
                .set("color", palette.primary)
                .set("border-left", format!("4px solid {}", palette.accent))
                .set("padding-left", px(6.0)),
            SectionStyle::Underlined => base
                .set("color", palette.primary)
                .set("letter-spacing", "0.5px")
                .set("border-bottom", format!("1px solid {}", palette.primary))
                .set("padding-bottom", px(2.0)),
            SectionStyle::Plain => base
                .set("color", palette.muted)
                .set("letter-spacing", "2px")
                .set("font-weight", "600"),
        }
    }
}

impl RenderBackend for HtmlBackend {
    type Node = HtmlNode;

    fn text(&self, kind: TextKind, content: &str, ctx: &RenderContext) -> HtmlNode {
        let theme = ctx.theme;
        let typo = &theme.typography;
        let palette = &theme.palette;
        let banner = theme.header_style == HeaderStyle::Banner;

        let (tag, class, css) = match kind {
            TextKind::Name => (
                "h1",
                "cv-name",
                Css::new()
                    .set("margin", "0")
                    .set("font-size", px(typo.name_size))
                    .set("font-weight", if is_bold(typo.heading_font) { "700" } else { "400" })
                    .set("font-family", font_stack(typo.heading_font)),
            ),
            TextKind::Headline => (
                "p",
                "cv-headline",
                Css::new()
                    .set("margin", "4px 0 0")
                    .set("font-size", px(typo.headline_size))
                    .set_if(!banner, "color", palette.accent),
            ),
            TextKind::SectionTitle => ("h2", "cv-section__title", Self::section_title_css(theme)),
            TextKind::EntryTitle => (
                "h3",
                "cv-entry__title",
                Css::new()
                    .set("margin", "0")
                    .set("font-size", px(typo.entry_title_size))
                    .set("font-weight", "700"),
            ),
            TextKind::EntrySubtitle => (
                "p",
                "cv-entry__subtitle",
                Css::new()
                    .set("margin", "2px 0")
                    .set("font-size", px(typo.body_size))
                    .set("color", palette.accent)
                    .set_if(
                        theme.section_style == SectionStyle::Underlined,
                        "font-style",
                        "italic",
                    ),
            ),
            TextKind::EntryMeta => (
                "span",
                "cv-entry__meta",
                Css::new()
                    .set("font-size", px(typo.small_size))
                    .set("color", palette.muted)
                    .set("white-space", "nowrap"),
            ),
            TextKind::Body => (
                "p",
                "cv-body",
                Css::new()
                    .set("margin", "4px 0 0")
                    .set("font-size", px(typo.body_size))
                    .set("line-height", typo.line_height.to_string())
                    .set("white-space", "pre-line"),
            ),
            TextKind::Label => (
                "span",
                "cv-contact__label",
                Css::new()
                    .set("font-size", px(typo.small_size))
                    .set("opacity", "0.8"),
            ),
            TextKind::Value => (
                "span",
                "cv-value",
                Css::new().set("font-size", px(typo.body_size)),
            ),
            TextKind::Placeholder => (
                "span",
                "cv-placeholder",
                Css::new()
                    .set("font-size", px(typo.body_size))
                    .set("font-style", "italic")
                    .set("opacity", "0.7"),
            ),
            TextKind::Initials => ("span", "cv-initials", Css::new()),
        };

        HtmlNode::element(tag)
            .attr("class", class)
            .attr("style", css.build())
            .child(HtmlNode::text(content))
    }

    fn link(&self, label: &str, href: &str, ctx: &RenderContext) -> HtmlNode {
        let css = Css::new()
            .set("font-size", px(ctx.theme.typography.small_size))
            .set("color", ctx.theme.palette.accent);

        match safe_href(href) {
            Some(href) => HtmlNode::element("a")
                .attr("class", "cv-link")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("style", css.build())
                .child(HtmlNode::text(label)),
            None => HtmlNode::element("span")
                .attr("class", "cv-link")
                .attr("style", css.build())
                .child(HtmlNode::text(label)),
        }
    }

    fn icon(&self, icon: ContactIcon, ctx: &RenderContext) -> HtmlNode {
        let banner = ctx.theme.header_style == HeaderStyle::Banner;
        let css = Css::new()
            .set("width", px(ctx.theme.typography.body_size + 2.0))
            .set("text-align", "center")
            .set_if(!banner, "color", ctx.theme.palette.accent);

        HtmlNode::element("span")
            .attr("class", "cv-icon")
            .attr("data-icon", icon.name())
            .attr("aria-hidden", "true")
            .attr("style", css.build())
            .child(HtmlNode::text(icon.glyph()))
    }

    fn image(&self, src: &str, alt: &str, ctx: &RenderContext) -> Option<HtmlNode> {
        let size = px(ctx.theme.spacing.avatar_size);
        let radius = match ctx.theme.section_style {
            SectionStyle::Underlined => "4px",
            _ => "50%",
        };
        let css = Css::new()
            .set("width", size.clone())
            .set("height", size)
            .set("object-fit", "cover")
            .set("border-radius", radius)
            .set("flex-shrink", "0");

        Some(
            HtmlNode::element("img")
                .attr("class", "cv-avatar")
                .attr("src", src)
                .attr("alt", alt)
                .attr("style", css.build()),
        )
    }

    fn avatar_placeholder(&self, initials: &str, ctx: &RenderContext) -> HtmlNode {
        let size = ctx.theme.spacing.avatar_size;
        let css = Css::new()
            .set("width", px(size))
            .set("height", px(size))
            .set("border-radius", "50%")
            .set("display", "flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("flex-shrink", "0")
            .set("background", ctx.theme.palette.accent)
            .set("color", "#FFFFFF")
            .set("font-size", px(size / 3.0));

        let glyph = if initials.is_empty() { "?" } else { initials };
        HtmlNode::element("div")
            .attr("class", "cv-avatar cv-avatar--placeholder")
            .attr("aria-hidden", "true")
            .attr("style", css.build())
            .child(self.text(TextKind::Initials, glyph, ctx))
    }

    fn block(&self, kind: BoxKind, children: Vec<HtmlNode>, ctx: &RenderContext) -> HtmlNode {
        let theme = ctx.theme;
        let spacing = &theme.spacing;
        let typo = &theme.typography;

        let (tag, class, css) = match kind {
            BoxKind::Page => (
                "div",
                "cv-page",
                Css::new()
                    .set("max-width", "794px")
                    .set("min-height", "1123px")
                    .set("margin", "0 auto")
                    .set("box-sizing", "border-box")
                    .set("padding", px(spacing.page_padding))
                    .set("background", theme.palette.background)
                    .set("color", theme.palette.text)
                    .set("font-family", font_stack(typo.body_font))
                    .set("font-size", px(typo.body_size)),
            ),
            BoxKind::Header => ("header", "cv-header", Self::header_css(theme)),
            BoxKind::Identity => (
                "div",
                "cv-identity",
                Css::new().set_if(theme.header_style != HeaderStyle::Centered, "flex", "1"),
            ),
            BoxKind::ContactList => {
                let css = Css::new()
                    .set("list-style", "none")
                    .set("margin", "0")
                    .set("padding", "0");
                let css = match theme.header_style {
                    HeaderStyle::Banner => css
                        .set("display", "grid")
                        .set("grid-template-columns", "1fr 1fr")
                        .set("gap", "4px 16px"),
                    HeaderStyle::Centered | HeaderStyle::Compact => css
                        .set("display", "flex")
                        .set("flex-wrap", "wrap")
                        .set("justify-content", "center")
                        .set("gap", "4px 12px"),
                };
                ("ul", "cv-contacts", css)
            }
            BoxKind::ContactRow => (
                "li",
                "cv-contact",
                Css::new()
                    .set("display", "flex")
                    .set("align-items", "center")
                    .set("gap", "6px"),
            ),
            BoxKind::Columns => (
                "div",
                "cv-columns",
                Css::new()
                    .set("display", "flex")
                    .set("align-items", "stretch"),
            ),
            BoxKind::Sidebar => (
                "aside",
                "cv-sidebar",
                Css::new()
                    .set("width", format!("{}%", spacing.sidebar_width_pct))
                    .set("box-sizing", "border-box")
                    .set("padding", px(spacing.column_gap))
                    .set("background", theme.palette.sidebar_background),
            ),
            BoxKind::Main => (
                "main",
                "cv-main",
                Css::new()
                    .set("flex", "1")
                    .set("padding", px(spacing.column_gap)),
            ),
            BoxKind::Entry => (
                "article",
                "cv-entry",
                Css::new().set("margin", format!("{} 0", px(spacing.entry_gap / 2.0))),
            ),
            BoxKind::EntryHeading => (
                "div",
                "cv-entry__heading",
                Css::new()
                    .set("display", "flex")
                    .set("justify-content", "space-between")
                    .set("align-items", "baseline")
                    .set("gap", "8px"),
            ),
            BoxKind::ListItem => (
                "div",
                "cv-list-item",
                Css::new()
                    .set("display", "flex")
                    .set("justify-content", "space-between")
                    .set("align-items", "center")
                    .set("margin", "3px 0"),
            ),
        };

        HtmlNode::element(tag)
            .attr("class", class)
            .attr("style", css.build())
            .children(children)
    }

    fn section(
        &self,
        kind: SectionKind,
        title: &str,
        body: Vec<HtmlNode>,
        ctx: &RenderContext,
    ) -> HtmlNode {
        let css = Css::new().set("margin-bottom", px(ctx.theme.spacing.section_gap));

        HtmlNode::element("section")
            .attr("class", format!("cv-section cv-section--{}", kind.key()))
            .attr("data-section", kind.key())
            .attr("style", css.build())
            .child(self.text(TextKind::SectionTitle, title, ctx))
            .child(
                HtmlNode::element("div")
                    .attr("class", "cv-section__body")
                    .children(body),
            )
    }

    fn divider(&self, ctx: &RenderContext) -> HtmlNode {
        let css = Css::new()
            .set("border", "0")
            .set("border-top", format!("1px solid {}", ctx.theme.palette.divider))
            .set("margin", format!("{} 0", px(ctx.theme.spacing.entry_gap)));

        HtmlNode::element("hr")
            .attr("class", "cv-divider")
            .attr("style", css.build())
    }

    fn indicator(&self, filled: u8, total: u8, ctx: &RenderContext) -> HtmlNode {
        let dot = px(ctx.theme.spacing.dot_size);
        let dots: Vec<HtmlNode> = (0..total)
            .map(|i| {
                let is_filled = i < filled;
                let background = if is_filled {
                    ctx.theme.palette.primary
                } else {
                    ctx.theme.palette.dot_empty
                };
                let css = Css::new()
                    .set("display", "inline-block")
                    .set("width", dot.clone())
                    .set("height", dot.clone())
                    .set("border-radius", "50%")
                    .set("background", background);
                let class = if is_filled { "cv-dot cv-dot--filled" } else { "cv-dot" };
                HtmlNode::element("span")
                    .attr("class", class)
                    .attr("style", css.build())
            })
            .collect();

        HtmlNode::element("span")
            .attr("class", "cv-indicator")
            .attr("data-filled", filled.to_string())
            .attr("data-total", total.to_string())
            .attr("role", "img")
            .attr("aria-label", format!("{}/{}", filled, total))
            .attr("style", Css::new().set("display", "inline-flex").set("gap", "3px").build())
            .children(dots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::CLASSIC_THEME;
    use crate::locale::Locale;

    fn ctx() -> RenderContext<'static> {
        RenderContext::new(&CLASSIC_THEME, Locale::En, None)
    }

    #[test]
    fn test_escaping() {
        let node = HtmlNode::element("p")
            .attr("title", "a \"quoted\" <value>")
            .child(HtmlNode::text("Tom & Jerry <3"));
        let html = node.to_html();
        assert!(!html.contains("<value>"));
        assert!(!html.contains("<3"));

        let fragment = scraper::Html::parse_fragment(&html);
        let p = scraper::Selector::parse("p").unwrap();
        let parsed = fragment.select(&p).next().unwrap();
        assert_eq!(parsed.value().attr("title"), Some("a \"quoted\" <value>"));
        assert_eq!(parsed.text().collect::<String>(), "Tom & Jerry <3");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let html = HtmlBackend::new().divider(&ctx()).to_html();
        assert!(html.starts_with("<hr class=\"cv-divider\""));
        assert!(!html.contains("</hr>"));
    }

    #[test]
    fn test_indicator_dots() {
        let node = HtmlBackend::new().indicator(4, 5, &ctx());
        assert_eq!(node.get_attr("data-filled"), Some("4"));
        assert_eq!(node.find_all(&|n: &HtmlNode| n.has_class("cv-dot")).len(), 5);
        assert_eq!(node.find_all(&|n: &HtmlNode| n.has_class("cv-dot--filled")).len(), 4);
    }

    #[test]
    fn test_unsafe_links_are_not_clickable() {
        let backend = HtmlBackend::new();
        let node = backend.link("x", "javascript:alert(1)", &ctx());
        assert_eq!(node.tag(), Some("span"));

        let node = backend.link("repo", "github.com/acme/repo", &ctx());
        assert_eq!(node.get_attr("href"), Some("https://github.com/acme/repo"));
    }

    #[test]
    fn test_document_wrapper() {
        let page = HtmlNode::element("div").child(HtmlNode::text("hi"));
        let doc = render_document_html(&page, "Alice <CV>", "en").unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"en\">"));
        assert!(doc.contains("<div>hi</div>"));
        assert!(!doc.contains("Alice <CV>"));

        let parsed = scraper::Html::parse_document(&doc);
        let title = scraper::Selector::parse("title").unwrap();
        let text: String = parsed.select(&title).flat_map(|t| t.text()).collect();
        assert_eq!(text, "Alice <CV>");
    }
}
