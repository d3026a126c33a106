// src/core/traversal.rs
//! The one walk over a profile's sections. Templates only choose the order
//! and placement; which sections exist is decided here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Labels;
use crate::types::cv_data::{
    Award, Certificate, CvProfile, Education, Experience, Language, Project, Skill,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Bio,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certificates,
    Awards,
}

pub const CANONICAL_ORDER: [SectionKind; 8] = [
    SectionKind::Bio,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Projects,
    SectionKind::Certificates,
    SectionKind::Awards,
];

impl SectionKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Languages => "languages",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Awards => "awards",
        }
    }

    pub fn title<'l>(&self, labels: &'l Labels) -> &'l str {
        match self {
            Self::Bio => labels.bio,
            Self::Experience => labels.experience,
            Self::Education => labels.education,
            Self::Skills => labels.skills,
            Self::Languages => labels.languages,
            Self::Projects => labels.projects,
            Self::Certificates => labels.certificates,
            Self::Awards => labels.awards,
        }
    }

    /// Entry-style sections get a divider between consecutive entries.
    pub fn uses_dividers(&self) -> bool {
        matches!(
            self,
            Self::Experience | Self::Education | Self::Projects | Self::Certificates | Self::Awards
        )
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A non-empty section borrowed from the profile.
#[derive(Debug, Clone, Copy)]
pub enum CvSection<'a> {
    Bio(&'a str),
    Experience(&'a [Experience]),
    Education(&'a [Education]),
    Skills(&'a [Skill]),
    Languages(&'a [Language]),
    Projects(&'a [Project]),
    Certificates(&'a [Certificate]),
    Awards(&'a [Award]),
}

impl<'a> CvSection<'a> {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Bio(_) => SectionKind::Bio,
            Self::Experience(_) => SectionKind::Experience,
            Self::Education(_) => SectionKind::Education,
            Self::Skills(_) => SectionKind::Skills,
            Self::Languages(_) => SectionKind::Languages,
            Self::Projects(_) => SectionKind::Projects,
            Self::Certificates(_) => SectionKind::Certificates,
            Self::Awards(_) => SectionKind::Awards,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bio(_) => 1,
            Self::Experience(items) => items.len(),
            Self::Education(items) => items.len(),
            Self::Skills(items) => items.len(),
            Self::Languages(items) => items.len(),
            Self::Projects(items) => items.len(),
            Self::Certificates(items) => items.len(),
            Self::Awards(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Look up one section, `None` when it has nothing to show.
pub fn section_of(profile: &CvProfile, kind: SectionKind) -> Option<CvSection<'_>> {
    let section = match kind {
        SectionKind::Bio => {
            let bio = profile.personal_info.bio.as_deref().map(str::trim).unwrap_or("");
            CvSection::Bio(bio)
        }
        SectionKind::Experience => CvSection::Experience(&profile.experience),
        SectionKind::Education => CvSection::Education(&profile.education),
        SectionKind::Skills => CvSection::Skills(&profile.skills),
        SectionKind::Languages => CvSection::Languages(&profile.languages),
        SectionKind::Projects => CvSection::Projects(&profile.projects),
        SectionKind::Certificates => CvSection::Certificates(&profile.certificates),
        SectionKind::Awards => CvSection::Awards(&profile.awards),
    };

    match section {
        CvSection::Bio(text) if text.is_empty() => None,
        s if s.is_empty() => None,
        s => Some(s),
    }
}

/// Yield the non-empty sections of `profile` in the given order.
pub fn walk<'a>(
    profile: &'a CvProfile,
    order: &'a [SectionKind],
) -> impl Iterator<Item = CvSection<'a>> + 'a {
    order.iter().filter_map(move |kind| section_of(profile, *kind))
}

pub fn present_sections(profile: &CvProfile) -> Vec<SectionKind> {
    walk(profile, &CANONICAL_ORDER).map(|s| s.kind()).collect()
}

/// Interleave `items` with separators: n items yield n - 1 separators.
pub fn interleave<T>(items: Vec<T>, mut separator: impl FnMut() -> T) -> Vec<T> {
    let count = items.len();
    let mut out = Vec::with_capacity(count.saturating_mul(2).saturating_sub(1));
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(separator());
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::{CvDate, PersonalInfo, SkillLevel};

    fn skill(name: &str) -> Skill {
        Skill {
            id: name.to_string(),
            name: name.to_string(),
            level: SkillLevel::Advanced,
        }
    }

    #[test]
    fn test_empty_profile_has_no_sections() {
        assert!(present_sections(&CvProfile::default()).is_empty());
    }

    #[test]
    fn test_blank_bio_is_skipped() {
        let profile = CvProfile {
            personal_info: PersonalInfo {
                bio: Some("   ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(section_of(&profile, SectionKind::Bio).is_none());
    }

    #[test]
    fn test_walk_follows_given_order() {
        let profile = CvProfile {
            skills: vec![skill("Rust")],
            experience: vec![Experience {
                id: "e1".into(),
                company: "Acme".into(),
                position: "Engineer".into(),
                start_date: CvDate::from("2020-01-01"),
                end_date: None,
                description: None,
            }],
            ..Default::default()
        };

        let order = [SectionKind::Skills, SectionKind::Awards, SectionKind::Experience];
        let kinds: Vec<SectionKind> = walk(&profile, &order).map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![SectionKind::Skills, SectionKind::Experience]);
        assert_eq!(
            present_sections(&profile),
            vec![SectionKind::Experience, SectionKind::Skills]
        );
    }

    #[test]
    fn test_interleave_counts() {
        for n in 0..5usize {
            let items: Vec<&str> = vec!["x"; n];
            let out = interleave(items, || "|");
            let separators = out.iter().filter(|s| **s == "|").count();
            assert_eq!(separators, n.saturating_sub(1));
            assert_eq!(out.len(), n + n.saturating_sub(1));
        }
    }
}
