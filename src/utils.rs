// src/utils.rs
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::template_engine::TemplateId;
use crate::locale::Locale;

/// Input extensions accepted for profile files
pub const PROFILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml"];

/// File-name stem for a candidate; blank names become `cv`.
pub fn normalize_profile_name(name: &str) -> String {
    let normalized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if normalized.is_empty() {
        "cv".to_string()
    } else {
        normalized
    }
}

/// `<name>_<template>_<locale>_<timestamp>.<ext>` under `base`.
pub fn output_file_path(
    base: &Path,
    profile: &str,
    template: TemplateId,
    locale: Locale,
    extension: &str,
) -> PathBuf {
    base.join(format!(
        "{}_{}_{}_{}.{}",
        normalize_profile_name(profile),
        template,
        locale,
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    ))
}

pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Returns the lowercased extension when it is one of `allowed`.
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<String> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_profile_name() {
        assert_eq!(normalize_profile_name("John Doe"), "john_doe");
        assert_eq!(normalize_profile_name("jean-paul"), "jean-paul");
        assert_eq!(normalize_profile_name("Marie@Company"), "marie_company");
        assert_eq!(normalize_profile_name("   "), "cv");
    }

    #[test]
    fn test_output_file_path() {
        let path = output_file_path(
            Path::new("/tmp/out"),
            "Alice Tran",
            TemplateId::Classic,
            Locale::Vi,
            "html",
        );
        let name = path.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(path.starts_with("/tmp/out"));
        assert!(name.starts_with("alice_tran_classic_vi_"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("alice.json"), Some("json".to_string()));
        assert_eq!(get_file_extension("profile.YAML"), Some("yaml".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert_eq!(
            validate_file_extension("alice.toml", PROFILE_EXTENSIONS).unwrap(),
            "toml"
        );
        assert!(validate_file_extension("alice.txt", PROFILE_EXTENSIONS).is_err());
        assert!(validate_file_extension("noext", PROFILE_EXTENSIONS).is_err());
    }
}
