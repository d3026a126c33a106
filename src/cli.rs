// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::config::RenderConfig;
use crate::core::template_engine::{list_available_templates, Renderer, TemplateId};
use crate::core::FsOps;
use crate::environment::EnvironmentConfig;
use crate::locale::Locale;
use crate::types::validation::{parse_profile, InputFormat, ValidationError};
use crate::utils::{output_file_path, validate_file_extension, PROFILE_EXTENSIONS};

#[derive(Parser)]
#[command(name = "cv-render")]
#[command(about = "Render CV profiles with the modern, classic and minimal templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a profile to an HTML page or a PDF document tree
    Render {
        /// Profile file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        input: PathBuf,
        /// Template id; unknown ids fall back to the default
        #[arg(short, long)]
        template: Option<String>,
        /// Locale code (en, fr, vi)
        #[arg(short, long)]
        locale: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Output file; defaults to a timestamped file in the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the template catalogue as JSON
    Templates,
    /// Check a profile file and report every issue
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    PdfJson,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::PdfJson => "json",
        }
    }
}

pub async fn handle_command(cli: Cli, env: &EnvironmentConfig) -> Result<()> {
    match cli.command {
        Command::Render {
            input,
            template,
            locale,
            format,
            output,
        } => {
            let mut config = RenderConfig::from_environment(env);
            if let Some(template) = template {
                config = config.with_template(TemplateId::resolve(&template));
            }
            if let Some(lang) = locale {
                match Locale::parse(&lang) {
                    Some(locale) => config = config.with_locale(locale),
                    None => warn!("Unsupported locale '{}', using {}", lang, config.locale),
                }
            }

            let profile = crate::load_profile(&input).await?;
            let renderer = Renderer::new(config.template);

            let content = match format {
                OutputFormat::Html => renderer.render_html_document(&profile, &config)?,
                OutputFormat::PdfJson => {
                    let document = renderer.render_pdf(&profile, &config);
                    serde_json::to_string_pretty(&document)
                        .context("Failed to serialize PDF document tree")?
                }
            };

            let target = output.unwrap_or_else(|| {
                output_file_path(
                    &env.output_path,
                    &profile.personal_info.full_name,
                    config.template,
                    config.locale,
                    format.extension(),
                )
            });

            FsOps::write_file_safe(&target, &content).await?;
            info!(
                "Rendered {} with '{}' template ({}) to {}",
                profile.personal_info.full_name,
                config.template,
                config.locale,
                target.display()
            );
            println!("{}", target.display());
        }

        Command::Templates => {
            let catalogue = serde_json::to_string_pretty(&list_available_templates())
                .context("Failed to serialize template catalogue")?;
            println!("{}", catalogue);
        }

        Command::Validate { input } => {
            let file_name = input.to_string_lossy();
            let ext = validate_file_extension(&file_name, PROFILE_EXTENSIONS)?;
            let format = InputFormat::from_extension(&ext)
                .with_context(|| format!("Unsupported profile format: {}", ext))?;
            let content = FsOps::read_file_safe(&input).await?;

            match parse_profile(&content, format) {
                Ok(profile) => {
                    let sections: Vec<&str> = profile
                        .present_sections()
                        .iter()
                        .map(|kind| kind.key())
                        .collect();
                    println!(
                        "✅ {} is valid ({} sections: {})",
                        input.display(),
                        sections.len(),
                        sections.join(", ")
                    );
                }
                Err(ValidationError::Invalid(issues)) => {
                    for issue in &issues {
                        error!("{}", issue);
                        println!("❌ {}", issue);
                    }
                    anyhow::bail!("{} has {} issue(s)", input.display(), issues.len());
                }
                Err(e) => return Err(e).context(format!("Failed to parse {}", input.display())),
            }
        }
    }

    Ok(())
}
