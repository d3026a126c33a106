// src/locale.rs
//! Display locales and the label tables the renderers read from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Vi];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Vi => "vi",
        }
    }

    /// Lenient lookup accepting codes and language names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" | "anglais" => Some(Self::En),
            "fr" | "french" | "français" | "francais" => Some(Self::Fr),
            "vi" | "vietnamese" | "tiếng việt" | "tieng viet" => Some(Self::Vi),
            _ => None,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Self::En => &EN_LABELS,
            Self::Fr => &FR_LABELS,
            Self::Vi => &VI_LABELS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| anyhow::anyhow!("Unsupported locale: {}. Use en, fr or vi", s))
    }
}

#[derive(Debug)]
pub struct Labels {
    pub present: &'static str,
    pub not_provided: &'static str,

    pub bio: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub projects: &'static str,
    pub certificates: &'static str,
    pub awards: &'static str,

    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub website: &'static str,
    pub birthday: &'static str,
    pub gender: &'static str,

    pub male: &'static str,
    pub female: &'static str,
    pub other: &'static str,

    pub role_in_project: &'static str,
    pub issued_by: &'static str,
}

static EN_LABELS: Labels = Labels {
    present: "Present",
    not_provided: "Not provided",
    bio: "Profile",
    experience: "Experience",
    education: "Education",
    skills: "Skills",
    languages: "Languages",
    projects: "Projects",
    certificates: "Certificates",
    awards: "Awards",
    email: "Email",
    phone: "Phone",
    address: "Address",
    website: "Website",
    birthday: "Date of birth",
    gender: "Gender",
    male: "Male",
    female: "Female",
    other: "Other",
    role_in_project: "Role",
    issued_by: "Issued by",
};

static FR_LABELS: Labels = Labels {
    present: "Présent",
    not_provided: "Non renseigné",
    bio: "Profil",
    experience: "Expérience professionnelle",
    education: "Formation",
    skills: "Compétences",
    languages: "Langues",
    projects: "Projets",
    certificates: "Certifications",
    awards: "Distinctions",
    email: "E-mail",
    phone: "Téléphone",
    address: "Adresse",
    website: "Site web",
    birthday: "Date de naissance",
    gender: "Genre",
    male: "Homme",
    female: "Femme",
    other: "Autre",
    role_in_project: "Rôle",
    issued_by: "Délivré par",
};

static VI_LABELS: Labels = Labels {
    present: "Hiện tại",
    not_provided: "Chưa cập nhật",
    bio: "Mục tiêu nghề nghiệp",
    experience: "Kinh nghiệm làm việc",
    education: "Học vấn",
    skills: "Kỹ năng",
    languages: "Ngoại ngữ",
    projects: "Dự án",
    certificates: "Chứng chỉ",
    awards: "Giải thưởng",
    email: "Email",
    phone: "Số điện thoại",
    address: "Địa chỉ",
    website: "Website",
    birthday: "Ngày sinh",
    gender: "Giới tính",
    male: "Nam",
    female: "Nữ",
    other: "Khác",
    role_in_project: "Vai trò",
    issued_by: "Cấp bởi",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse(" Français "), Some(Locale::Fr));
        assert_eq!(Locale::parse("vi"), Some(Locale::Vi));
        assert_eq!(Locale::parse("de"), None);
        assert!("klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn test_english_present_label() {
        assert_eq!(Locale::En.labels().present, "Present");
        assert_eq!(Locale::default(), Locale::En);
    }
}
