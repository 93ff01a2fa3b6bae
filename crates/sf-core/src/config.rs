use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Code, NUM_COLS, NUM_ROWS};
use crate::error::CoreError;
use crate::lang::Language;

/// Facteur de largeur par défaut pour le premier essai de remplissage.
pub const DEFAULT_WIDTH_FACTOR: f32 = 0.8;

/// Plus grand panneau accepté, en lignes.
pub const MAX_ROWS: usize = 64;

/// Plus grand panneau accepté, en colonnes.
pub const MAX_COLS: usize = 256;

/// Horizontal placement of each line.
///
/// # Example
/// ```
/// use sf_core::config::HorizontalAlign;
/// let align: HorizontalAlign = "left".parse().unwrap();
/// assert_eq!(align, HorizontalAlign::Left);
/// assert_eq!(HorizontalAlign::default(), HorizontalAlign::Center);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum HorizontalAlign {
    /// Justifié à gauche, espaces à droite.
    Left,
    /// Centré, l'espace en trop va à droite.
    #[default]
    Center,
    /// Justifié à droite.
    Right,
}

/// Vertical placement of the block of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum VerticalAlign {
    /// Lignes vides ajoutées en dessous.
    Top,
    /// Lignes vides alternées dessous/dessus, en commençant par dessous.
    #[default]
    Center,
    /// Lignes vides ajoutées au-dessus.
    Bottom,
}

impl FromStr for HorizontalAlign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(CoreError::Config(format!("alignement horizontal inconnu '{s}'"))),
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "center" | "centre" | "middle" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(CoreError::Config(format!("alignement vertical inconnu '{s}'"))),
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        })
    }
}

/// Réglages d'alignement passés à chaque appel, jamais stockés par le fitter.
///
/// # Example
/// ```
/// use sf_core::config::{Alignment, HorizontalAlign, VerticalAlign};
/// let a = Alignment::new(HorizontalAlign::Left, VerticalAlign::Top);
/// assert_eq!(a.width_factor, 0.8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Fraction (0, 1] de la largeur utilisée comme limite initiale.
    pub width_factor: f32,
}

impl Alignment {
    #[must_use]
    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
            width_factor: DEFAULT_WIDTH_FACTOR,
        }
    }

    #[must_use]
    pub fn with_width_factor(mut self, width_factor: f32) -> Self {
        self.width_factor = width_factor;
        self
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::new(HorizontalAlign::Center, VerticalAlign::Center)
    }
}

/// Configuration complète du panneau et de la mise en page.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use sf_core::config::BoardConfig;
/// let config = BoardConfig::default();
/// assert_eq!((config.rows, config.cols), (6, 22));
/// assert!(config.check().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BoardConfig {
    // === Panneau ===
    /// Nombre de lignes du panneau.
    pub rows: usize,
    /// Nombre de colonnes du panneau.
    pub cols: usize,
    /// Code écrit dans les cellules vides.
    pub fill_code: Code,

    // === Mise en page ===
    /// Alignement par défaut des messages.
    pub alignment: Alignment,
    /// Caractères de coupure entre mots.
    pub split_operators: Vec<char>,
    /// Correction linguistique appliquée avant validation.
    pub autocorrect: Option<Language>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: NUM_ROWS,
            cols: NUM_COLS,
            fill_code: 0,
            alignment: Alignment::default(),
            split_operators: vec![' '],
            autocorrect: None,
        }
    }
}

impl BoardConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.alignment.width_factor = if self.alignment.width_factor.is_finite() {
            self.alignment.width_factor.clamp(0.05, 1.0)
        } else {
            DEFAULT_WIDTH_FACTOR
        };
        if self.split_operators.is_empty() {
            self.split_operators.push(' ');
        }
    }

    /// Check the values clamping cannot repair.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for zero dimensions, dimensions beyond
    /// [`MAX_ROWS`]×[`MAX_COLS`], or a fill code
    /// outside the reference alphabet.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CoreError::Config(format!(
                "dimensions nulles : {}×{}",
                self.cols, self.rows
            )));
        }
        if self.rows > MAX_ROWS || self.cols > MAX_COLS {
            return Err(CoreError::Config(format!(
                "dimensions {}×{} au-delà du maximum {MAX_COLS}×{MAX_ROWS}",
                self.cols, self.rows
            )));
        }
        if !Alphabet::reference().contains(self.fill_code) {
            return Err(CoreError::Config(format!(
                "fill_code {} absent de l'alphabet",
                self.fill_code
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    board: Option<BoardSection>,
    layout: Option<LayoutSection>,
}

/// Board section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct BoardSection {
    rows: Option<usize>,
    cols: Option<usize>,
    fill_code: Option<Code>,
}

/// Layout section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct LayoutSection {
    horizontal: Option<HorizontalAlign>,
    vertical: Option<VerticalAlign>,
    width_factor: Option<f32>,
    split_operators: Option<Vec<char>>,
    autocorrect: Option<Language>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or holds values
/// rejected by [`BoardConfig::check`].
///
/// # Example
/// ```no_run
/// use sf_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide dans {}", path.display()))
}

/// Parse TOML text and merge it onto the defaults.
///
/// # Errors
/// Returns an error on malformed TOML or values rejected by [`BoardConfig::check`].
pub fn parse_config(content: &str) -> Result<BoardConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = BoardConfig::default();

    if let Some(b) = file.board {
        if let Some(v) = b.rows {
            config.rows = v;
        }
        if let Some(v) = b.cols {
            config.cols = v;
        }
        if let Some(v) = b.fill_code {
            config.fill_code = v;
        }
    }

    if let Some(l) = file.layout {
        if let Some(v) = l.horizontal {
            config.alignment.horizontal = v;
        }
        if let Some(v) = l.vertical {
            config.alignment.vertical = v;
        }
        if let Some(v) = l.width_factor {
            config.alignment.width_factor = v;
        }
        if let Some(v) = l.split_operators {
            config.split_operators = v;
        }
        if l.autocorrect.is_some() {
            config.autocorrect = l.autocorrect;
        }
    }

    config.clamp_all();
    config.check()?;
    log::debug!(
        "Configuration chargée : {}×{}, {}/{}",
        config.cols,
        config.rows,
        config.alignment.horizontal,
        config.alignment.vertical
    );
    Ok(config)
}
