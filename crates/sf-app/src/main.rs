use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sf_core::BoardConfig;

pub mod cli;
pub mod commands;

use cli::Command;
use commands::RenderOverrides;

fn main() -> Result<ExitCode> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les arguments
    cli.command.validate_target()?;

    // 4. Charger la config
    let config = resolve_config(&cli)?;

    // 5. Exécuter la commande
    match cli.command {
        Command::Render {
            text,
            halign,
            valign,
            width_factor,
            fill,
            lang,
            lines,
        } => {
            let overrides = RenderOverrides {
                halign,
                valign,
                width_factor,
                fill: fill.as_deref().map(commands::parse_fill).transpose()?,
                lang,
            };
            println!("{}", commands::render(&config, &text, &overrides, lines)?);
        }
        Command::Decode { input, inline } => {
            let json = commands::read_input(&input)?;
            println!("{}", commands::decode(&config, &json, inline)?);
        }
        Command::Validate { text, grid } => {
            let valid = match (text, grid) {
                (Some(text), _) => commands::validate_text(&config, &text)?,
                (None, Some(path)) => {
                    let json = commands::read_input(&path)?;
                    commands::validate_grid(&config, &json)?
                }
                (None, None) => false,
            };
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve config: explicit file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<BoardConfig> {
    if cli.config.exists() {
        sf_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(BoardConfig::default())
    }
}
