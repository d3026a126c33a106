// src/types/mod.rs
pub mod cv_data;
pub mod validation;

pub use cv_data::{
    Award, Certificate, CvDate, CvProfile, Education, Experience, Gender, Language,
    PersonalInfo, Project, Skill, SkillLevel,
};
pub use validation::{parse_profile, validate_profile, FieldIssue, InputFormat, ValidationError};
