//! `tripcli config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    config.api_key = config.api_key.as_deref().map(mask);

    if let Some(text) = ctx.output_format.serialize(&config)? {
        println!("{text}");
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "api_key:".bold(),
        config.api_key.unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "language:".bold(),
        config.language.unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "currency:".bold(),
        config.currency.unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    config.set(key, value)?;
    config.save(&ctx.config_path)?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());
    Ok(())
}

/// Keep the first and last four characters of a key
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("0123456789abcdef"), "0123...cdef");
        assert_eq!(mask("short"), "****");
    }
}
