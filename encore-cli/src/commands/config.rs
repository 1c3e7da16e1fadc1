//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use encore_store::{Config, default_config_dir, default_config_path};
use tracing::info;

use super::emit;
use crate::Cli;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Update and save configuration values.
    Set {
        /// Application client id.
        #[arg(long)]
        client_id: Option<String>,
        /// Application client secret.
        #[arg(long)]
        client_secret: Option<String>,
        /// Market country code.
        #[arg(long)]
        country: Option<String>,
        /// Market language code.
        #[arg(long)]
        language: Option<String>,
        /// Items per page.
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Set {
            client_id,
            client_secret,
            country,
            language,
            page_size,
        } => {
            let mut config = Config::load_from(&default_config_path()).await?;
            if let Some(id) = client_id {
                config.api.client_id.clone_from(id);
            }
            if let Some(secret) = client_secret {
                config.api.client_secret.clone_from(secret);
            }
            if let Some(country) = country {
                config.market.country_code = country.to_uppercase();
            }
            if let Some(language) = language {
                config.market.language_code = language.to_lowercase();
            }
            if let Some(size) = page_size {
                config.paging = encore_core::PagingConfig::with_page_size(*size);
            }
            save(&config).await
        }
        ConfigAction::Reset => reset_config().await,
    }
}

async fn show_config(cli: &Cli) -> Result<()> {
    let mut config = Config::load().await?;
    let problem = config.validate().err().map(|e| e.to_string());
    if !config.api.client_secret.is_empty() {
        config.api.client_secret = "********".to_string();
    }

    emit(cli, &config, |text, config| {
        let mut out = text.format_config(config);
        if let Some(problem) = &problem {
            out.push_str(&format!("\n\n{problem}"));
        }
        out
    })
}

fn show_paths(cli: &Cli) -> Result<()> {
    let paths = serde_json::json!({
        "config_dir": default_config_dir().display().to_string(),
        "config_file": default_config_path().display().to_string(),
    });
    emit(cli, &paths, |_, _| {
        format!(
            "Config dir:  {}\nConfig file: {}",
            default_config_dir().display(),
            default_config_path().display()
        )
    })
}

async fn save(config: &Config) -> Result<()> {
    config.save().await?;
    info!(path = %default_config_path().display(), "Configuration saved");
    println!("Configuration saved to {}", default_config_path().display());
    if let Err(e) = config.validate() {
        println!("Not usable yet: {e}");
    }
    Ok(())
}

async fn reset_config() -> Result<()> {
    let path = default_config_path();

    if path.exists() {
        tokio::fs::remove_file(&path).await?;
        info!(path = %path.display(), "Configuration reset");
        println!("Configuration reset to defaults");
    } else {
        println!("No configuration file to reset");
    }

    Ok(())
}
