// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use console::style;
use crate::api::types::GenerateResponse;
use crate::core::config::Config;
use crate::export::{self, ExportEntry};
use crate::generators::PasswordGenerator;
use crate::models::{OutputFormat, PwnedStatus};
use crate::pwned::PwnedChecker;
use super::commands::GenerateArgs;

// Handlers for CLI commands
pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<()> {
    if args.amount == 0 || args.amount > config.max_password_amount {
        bail!("amount must be between 1 and {}", config.max_password_amount);
    }

    let generator = PasswordGenerator::new(args.to_options())?;
    let passwords = generator.generate_batch()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&GenerateResponse { passwords })?);
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<ExportEntry> = passwords.iter().map(ExportEntry::from).collect();
            println!("{}", export::render(&entries, OutputFormat::Json)?.content);
        }
        OutputFormat::Txt => {
            for p in &passwords {
                let strength = format!("{}%", p.strength);
                let strength = if p.strength >= 80 {
                    style(strength).green()
                } else if p.strength >= 50 {
                    style(strength).yellow()
                } else {
                    style(strength).red()
                };
                println!("{}  {}  {}", p.password, strength, style(p.entropy).dim());
            }
        }
    }

    Ok(())
}

pub async fn handle_check(password: &str, config: &Config, json: bool) -> Result<()> {
    let password = password.trim();
    if password.is_empty() {
        bail!("Password must be a non-empty string");
    }

    let checker = PwnedChecker::new(&config.hibp_api_url, config.hibp_timeout)
        .context("Failed to build HTTP client")?;
    let report = checker.check(password).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let status = match report.status {
        PwnedStatus::NotFound => style(report.status.to_string()).green().bold(),
        _ => style(report.status.to_string()).red().bold(),
    };
    println!("Status:       {}", status);
    if let Some(sha1) = &report.sha1 {
        println!("SHA1:         {}", sha1);
    }
    if let Some(count) = &report.breach_count {
        println!("Breach Count: {}", count);
    }
    println!("Message:      {}", report.message);

    Ok(())
}
