// src/types/cv_data.rs
//! CV profile data model shared by every template and backend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::traversal::{self, SectionKind};

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

// ===== Root Aggregate =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

impl CvProfile {
    /// Non-empty sections in canonical order.
    pub fn present_sections(&self) -> Vec<SectionKind> {
        traversal::present_sections(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Image reference, either a remote URL, a same-origin path or a data URI.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub birthday: Option<CvDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl PersonalInfo {
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

// ===== Repeated Sections =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub start_date: CvDate,
    #[serde(default)]
    pub end_date: Option<CvDate>, // None means ongoing
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: CvDate,
    #[serde(default)]
    pub end_date: Option<CvDate>, // None means current
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    pub date: CvDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    pub date: CvDate,
    #[serde(default)]
    pub description: Option<String>,
}

// ===== Value Types =====

/// A date as supplied by the editing layer. Strings that are not plain
/// `YYYY-MM-DD` dates are kept verbatim and interpreted at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CvDate {
    Date(NaiveDate),
    Text(String),
}

impl From<&str> for CvDate {
    fn from(value: &str) -> Self {
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Self::Date(date),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<NaiveDate> for CvDate {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl CvDate {
    /// Empty form fields arrive as `""`; they carry no date.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

/// Parsed case-insensitively; anything unknown is `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unspecified,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Ordered proficiency scale. `Rating` carries an explicit 1-5 score and
/// `Unrecognized` keeps whatever label the editor sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawSkillLevel", into = "String")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Rating(u8),
    Unrecognized(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSkillLevel {
    Number(u64),
    Text(String),
}

impl From<RawSkillLevel> for SkillLevel {
    fn from(raw: RawSkillLevel) -> Self {
        match raw {
            RawSkillLevel::Number(n) if (1..=5).contains(&n) => Self::Rating(n as u8),
            RawSkillLevel::Number(n) => Self::Unrecognized(n.to_string()),
            RawSkillLevel::Text(text) => Self::from(text.as_str()),
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            other => match other.parse::<u8>() {
                Ok(n) if (1..=5).contains(&n) => Self::Rating(n),
                _ => Self::Unrecognized(trimmed.to_string()),
            },
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => f.write_str("Beginner"),
            Self::Intermediate => f.write_str("Intermediate"),
            Self::Advanced => f.write_str("Advanced"),
            Self::Expert => f.write_str("Expert"),
            Self::Rating(n) => write!(f, "{}", n),
            Self::Unrecognized(label) => f.write_str(label),
        }
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.to_string()
    }
}
