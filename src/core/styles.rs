// src/core/styles.rs
//! Per-template visual constants. Sizes are in points; the screen backend
//! converts them to CSS pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    /// Accent bar on the left of the heading.
    AccentBar,
    /// Uppercase heading with a full-width rule beneath it.
    Underlined,
    /// Small spaced-out heading, no decoration.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Filled banner with avatar on the left.
    Banner,
    /// Centered name above a centered contact block.
    Centered,
    /// Name and contacts on one line, small avatar.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub background: &'static str,
    pub header_background: &'static str,
    pub header_text: &'static str,
    pub sidebar_background: &'static str,
    pub divider: &'static str,
    pub dot_empty: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub body_font: &'static str,
    pub heading_font: &'static str,
    pub name_size: f32,
    pub headline_size: f32,
    pub section_title_size: f32,
    pub entry_title_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub line_height: f32,
    pub uppercase_section_titles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub page_padding: f32,
    pub section_gap: f32,
    pub entry_gap: f32,
    pub column_gap: f32,
    pub avatar_size: f32,
    pub dot_size: f32,
    /// Sidebar share of the page width, in percent. Zero for single column.
    pub sidebar_width_pct: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub section_style: SectionStyle,
    pub header_style: HeaderStyle,
}

impl Theme {
    pub fn is_two_column(&self) -> bool {
        self.spacing.sidebar_width_pct > 0.0
    }
}

pub const MODERN_THEME: Theme = Theme {
    palette: Palette {
        primary: "#1E3A8A",
        accent: "#3B82F6",
        text: "#1F2937",
        muted: "#6B7280",
        background: "#FFFFFF",
        header_background: "#1E3A8A",
        header_text: "#FFFFFF",
        sidebar_background: "#EFF6FF",
        divider: "#DBEAFE",
        dot_empty: "#CBD5E1",
    },
    typography: Typography {
        body_font: "Helvetica",
        heading_font: "Helvetica-Bold",
        name_size: 24.0,
        headline_size: 13.0,
        section_title_size: 13.0,
        entry_title_size: 11.0,
        body_size: 9.5,
        small_size: 8.5,
        line_height: 1.4,
        uppercase_section_titles: false,
    },
    spacing: Spacing {
        page_padding: 0.0,
        section_gap: 14.0,
        entry_gap: 8.0,
        column_gap: 18.0,
        avatar_size: 84.0,
        dot_size: 6.0,
        sidebar_width_pct: 34.0,
    },
    section_style: SectionStyle::AccentBar,
    header_style: HeaderStyle::Banner,
};

pub const CLASSIC_THEME: Theme = Theme {
    palette: Palette {
        primary: "#111827",
        accent: "#7C2D12",
        text: "#111827",
        muted: "#4B5563",
        background: "#FFFFFF",
        header_background: "#FFFFFF",
        header_text: "#111827",
        sidebar_background: "#FFFFFF",
        divider: "#D1D5DB",
        dot_empty: "#E5E7EB",
    },
    typography: Typography {
        body_font: "Times-Roman",
        heading_font: "Times-Bold",
        name_size: 26.0,
        headline_size: 12.0,
        section_title_size: 12.5,
        entry_title_size: 11.0,
        body_size: 10.0,
        small_size: 9.0,
        line_height: 1.35,
        uppercase_section_titles: true,
    },
    spacing: Spacing {
        page_padding: 36.0,
        section_gap: 12.0,
        entry_gap: 6.0,
        column_gap: 0.0,
        avatar_size: 72.0,
        dot_size: 5.0,
        sidebar_width_pct: 0.0,
    },
    section_style: SectionStyle::Underlined,
    header_style: HeaderStyle::Centered,
};

pub const MINIMAL_THEME: Theme = Theme {
    palette: Palette {
        primary: "#000000",
        accent: "#525252",
        text: "#262626",
        muted: "#737373",
        background: "#FFFFFF",
        header_background: "#FFFFFF",
        header_text: "#000000",
        sidebar_background: "#FFFFFF",
        divider: "#E5E5E5",
        dot_empty: "#E5E5E5",
    },
    typography: Typography {
        body_font: "Helvetica",
        heading_font: "Helvetica",
        name_size: 20.0,
        headline_size: 11.0,
        section_title_size: 9.0,
        entry_title_size: 10.0,
        body_size: 9.0,
        small_size: 8.0,
        line_height: 1.5,
        uppercase_section_titles: true,
    },
    spacing: Spacing {
        page_padding: 48.0,
        section_gap: 18.0,
        entry_gap: 10.0,
        column_gap: 0.0,
        avatar_size: 48.0,
        dot_size: 4.0,
        sidebar_width_pct: 0.0,
    },
    section_style: SectionStyle::Plain,
    header_style: HeaderStyle::Compact,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_modern_has_sidebar() {
        assert!(MODERN_THEME.is_two_column());
        assert!(!CLASSIC_THEME.is_two_column());
        assert!(!MINIMAL_THEME.is_two_column());
    }
}
