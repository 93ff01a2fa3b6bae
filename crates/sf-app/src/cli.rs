use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sf_core::{HorizontalAlign, Language, VerticalAlign};

/// splitflap — mise en page et encodage de messages pour panneau à volets.
#[derive(Parser, Debug)]
#[command(name = "splitflap", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Met en page un texte et affiche la grille JSON.
    Render {
        /// Texte du message.
        text: String,

        /// Alignement horizontal : left, center, right.
        #[arg(long)]
        halign: Option<HorizontalAlign>,

        /// Alignement vertical : top, center, bottom.
        #[arg(long)]
        valign: Option<VerticalAlign>,

        /// Facteur de largeur initial, dans (0, 1].
        #[arg(long)]
        width_factor: Option<f32>,

        /// Cellules vides : code numérique ou couleur (red, green, #00FF00…).
        #[arg(long)]
        fill: Option<String>,

        /// Correction linguistique (ex: de).
        #[arg(long)]
        lang: Option<Language>,

        /// Afficher les lignes alignées au lieu de la grille.
        #[arg(long, default_value_t = false)]
        lines: bool,
    },

    /// Décode une grille JSON (fichier, ou "-" pour stdin).
    Decode {
        input: PathBuf,

        /// Tout sur une ligne.
        #[arg(long, default_value_t = false)]
        inline: bool,
    },

    /// Vérifie un texte ou une grille JSON.
    Validate {
        /// Texte à vérifier.
        text: Option<String>,

        /// Grille JSON à vérifier (fichier, ou "-" pour stdin).
        #[arg(long)]
        grid: Option<PathBuf>,
    },
}

impl Command {
    /// Validate that `validate` got exactly one target.
    ///
    /// # Errors
    /// Returns an error if zero or both targets are specified.
    pub fn validate_target(&self) -> anyhow::Result<()> {
        if let Self::Validate { text, grid } = self {
            match (text.is_some(), grid.is_some()) {
                (false, false) => anyhow::bail!("Rien à vérifier. Donnez un texte ou --grid."),
                (true, true) => anyhow::bail!("Un texte OU --grid, pas les deux."),
                _ => {}
            }
        }
        Ok(())
    }
}
