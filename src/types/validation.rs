// src/types/validation.rs
//! Validation boundary between untrusted editor payloads and the renderer

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::cv_data::{CvDate, CvProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Failed to parse {format} profile: {message}")]
    Parse { format: InputFormat, message: String },

    #[error("Profile is invalid ({} issue(s)): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<FieldIssue>),
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Invalid(issues) => issues,
            Self::Parse { .. } => &[],
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Decode and validate a profile in one step.
pub fn parse_profile(content: &str, format: InputFormat) -> Result<CvProfile, ValidationError> {
    let decoded: Result<CvProfile, String> = match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    let profile = decoded.map_err(|message| {
        warn!("Rejected {} profile payload: {}", format, message);
        ValidationError::Parse { format, message }
    })?;

    validate_profile(profile)
}

/// Normalize and check a decoded profile. Every failing rule is reported.
pub fn validate_profile(mut profile: CvProfile) -> Result<CvProfile, ValidationError> {
    normalize(&mut profile);

    let mut issues = Vec::new();
    let info = &profile.personal_info;

    if info.full_name.is_empty() {
        issues.push(FieldIssue::new("personalInfo.fullName", "is required"));
    }
    if info.email.is_empty() {
        issues.push(FieldIssue::new("personalInfo.email", "is required"));
    } else if !looks_like_email(&info.email) {
        issues.push(FieldIssue::new(
            "personalInfo.email",
            format!("'{}' is not a valid email address", info.email),
        ));
    }

    for (i, edu) in profile.education.iter().enumerate() {
        require(&mut issues, &format!("education[{}].school", i), &edu.school);
        require(&mut issues, &format!("education[{}].degree", i), &edu.degree);
        require_date(&mut issues, &format!("education[{}].startDate", i), &edu.start_date);
    }
    for (i, exp) in profile.experience.iter().enumerate() {
        require(&mut issues, &format!("experience[{}].company", i), &exp.company);
        require(&mut issues, &format!("experience[{}].position", i), &exp.position);
        require_date(&mut issues, &format!("experience[{}].startDate", i), &exp.start_date);
    }
    for (i, skill) in profile.skills.iter().enumerate() {
        require(&mut issues, &format!("skills[{}].name", i), &skill.name);
    }
    for (i, lang) in profile.languages.iter().enumerate() {
        require(&mut issues, &format!("languages[{}].name", i), &lang.name);
    }
    for (i, project) in profile.projects.iter().enumerate() {
        require(&mut issues, &format!("projects[{}].name", i), &project.name);
    }
    for (i, cert) in profile.certificates.iter().enumerate() {
        require(&mut issues, &format!("certificates[{}].name", i), &cert.name);
        require(&mut issues, &format!("certificates[{}].issuer", i), &cert.issuer);
    }
    for (i, award) in profile.awards.iter().enumerate() {
        require(&mut issues, &format!("awards[{}].name", i), &award.name);
    }

    if issues.is_empty() {
        debug!(
            "Validated profile for {} ({} sections)",
            profile.personal_info.full_name,
            profile.present_sections().len()
        );
        Ok(profile)
    } else {
        warn!("Profile failed validation with {} issue(s)", issues.len());
        Err(ValidationError::Invalid(issues))
    }
}

fn require(issues: &mut Vec<FieldIssue>, field: &str, value: &str) {
    if value.is_empty() {
        issues.push(FieldIssue::new(field, "is required"));
    }
}

fn require_date(issues: &mut Vec<FieldIssue>, field: &str, value: &CvDate) {
    if matches!(value, CvDate::Text(text) if text.is_empty()) {
        issues.push(FieldIssue::new(field, "is required"));
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !value.contains(' '),
        None => false,
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Blank optional strings become `None`, the rest are trimmed.
fn trim_optional(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        trim_in_place(inner);
        if inner.is_empty() {
            *value = None;
        }
    }
}

/// A blank date string is the same as no date.
fn clear_blank_date(value: &mut Option<CvDate>) {
    if value.as_ref().is_some_and(CvDate::is_blank) {
        *value = None;
    }
}

fn normalize(profile: &mut CvProfile) {
    let info = &mut profile.personal_info;
    clear_blank_date(&mut info.birthday);
    trim_in_place(&mut info.full_name);
    trim_in_place(&mut info.email);
    trim_optional(&mut info.title);
    trim_optional(&mut info.avatar);
    trim_optional(&mut info.phone);
    trim_optional(&mut info.address);
    trim_optional(&mut info.link);
    trim_optional(&mut info.bio);

    for edu in &mut profile.education {
        trim_in_place(&mut edu.school);
        trim_in_place(&mut edu.degree);
        trim_in_place(&mut edu.field);
        trim_optional(&mut edu.description);
        clear_blank_date(&mut edu.end_date);
    }
    for exp in &mut profile.experience {
        trim_in_place(&mut exp.company);
        trim_in_place(&mut exp.position);
        trim_optional(&mut exp.description);
        clear_blank_date(&mut exp.end_date);
    }
    for skill in &mut profile.skills {
        trim_in_place(&mut skill.name);
    }
    for lang in &mut profile.languages {
        trim_in_place(&mut lang.name);
        trim_in_place(&mut lang.proficiency);
    }
    for project in &mut profile.projects {
        trim_in_place(&mut project.name);
        trim_in_place(&mut project.description);
        trim_optional(&mut project.position);
        trim_optional(&mut project.link);
    }
    for cert in &mut profile.certificates {
        trim_in_place(&mut cert.name);
        trim_in_place(&mut cert.issuer);
    }
    for award in &mut profile.awards {
        trim_in_place(&mut award.name);
        trim_optional(&mut award.description);
    }
}
