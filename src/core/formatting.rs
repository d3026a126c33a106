// src/core/formatting.rs
//! Display helpers shared by every template: dates, gender, skill dots, links, image proxy

use chrono::{DateTime, NaiveDate};
use url::{form_urlencoded, ParseError, Url};

use crate::locale::Locale;
use crate::types::cv_data::{CvDate, Gender, SkillLevel};

/// Total number of dots in a skill indicator.
pub const SKILL_INDICATOR_DOTS: u8 = 5;

/// Fill count for levels the scale does not know about.
pub const DEFAULT_SKILL_INDICATOR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    Day(NaiveDate),
    Month(NaiveDate),
}

fn resolve(text: &str) -> Option<Resolved> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(Resolved::Day(date));
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(Resolved::Day(stamp.date_naive()));
    }
    // `2023-06` carries no day
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(Resolved::Month(date));
    }
    None
}

fn format_with(date: Option<&CvDate>, locale: Locale, day_precision: bool) -> String {
    let resolved = match date {
        None => return locale.labels().present.to_string(),
        Some(CvDate::Date(d)) => Resolved::Day(*d),
        Some(CvDate::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return locale.labels().present.to_string();
            }
            match resolve(trimmed) {
                Some(resolved) => resolved,
                None => return text.clone(),
            }
        }
    };

    match resolved {
        Resolved::Day(d) if day_precision => d.format("%d/%m/%Y").to_string(),
        Resolved::Day(d) | Resolved::Month(d) => d.format("%m/%Y").to_string(),
    }
}

/// Absent or blank dates read as "Present"; unparseable text is returned as-is.
pub fn format_date_for_display(date: Option<&CvDate>, locale: Locale) -> String {
    format_with(date, locale, true)
}

/// Month granularity variant used for experience and education ranges.
pub fn format_month_year(date: Option<&CvDate>, locale: Locale) -> String {
    format_with(date, locale, false)
}

pub fn format_date_range(start: &CvDate, end: Option<&CvDate>, locale: Locale) -> String {
    format!(
        "{} - {}",
        format_month_year(Some(start), locale),
        format_month_year(end, locale)
    )
}

pub fn format_gender(gender: Option<Gender>, locale: Locale) -> Option<&'static str> {
    let labels = locale.labels();
    match gender? {
        Gender::Male => Some(labels.male),
        Gender::Female => Some(labels.female),
        Gender::Other => Some(labels.other),
        Gender::Unspecified => None,
    }
}

/// Number of filled dots (out of [`SKILL_INDICATOR_DOTS`]) for a skill level.
pub fn skill_level_indicator_count(level: &SkillLevel) -> u8 {
    match level {
        SkillLevel::Beginner => 2,
        SkillLevel::Intermediate => 3,
        SkillLevel::Advanced => 4,
        SkillLevel::Expert => 5,
        SkillLevel::Rating(n) => (*n).clamp(1, SKILL_INDICATOR_DOTS),
        SkillLevel::Unrecognized(_) => DEFAULT_SKILL_INDICATOR,
    }
}

/// Route remote images through the same-origin proxy so the PDF rasterizer
/// can fetch them. Data URIs and relative paths are already same-origin.
pub fn proxied_image_url(raw: Option<&str>, proxy_endpoint: &str) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

    if raw.starts_with("data:") || raw.starts_with(proxy_endpoint) {
        return Some(raw.to_string());
    }

    match parse_absolute(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("url", url.as_str())
                .finish();
            Some(format!("{}?{}", proxy_endpoint, query))
        }
        _ => Some(raw.to_string()),
    }
}

/// Resolve an editor-supplied link into something safe to use as a link
/// target on either backend. `None` means render the label as plain text.
pub fn safe_href(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match parse_absolute(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "mailto") => Some(url.into()),
        Ok(_) => None,
        Err(ParseError::RelativeUrlWithoutBase) if raw.starts_with('/') => Some(raw.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", raw))
            .ok()
            .map(Into::into),
        Err(_) => None,
    }
}

/// Protocol-relative URLs (`//host/path`) are remote; resolve them over https.
fn parse_absolute(raw: &str) -> Result<Url, ParseError> {
    match raw.strip_prefix("//") {
        Some(rest) => Url::parse(&format!("https://{}", rest)),
        None => Url::parse(raw),
    }
}
