use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sf_core::{Alphabet, BoardConfig, Code, CodeGrid, GridCodec, HorizontalAlign, Language, VerticalAlign};
use sf_layout::MessageComposer;

/// Overrides CLI appliqués par-dessus la config pour `render`.
#[derive(Debug, Default)]
pub struct RenderOverrides {
    pub halign: Option<HorizontalAlign>,
    pub valign: Option<VerticalAlign>,
    pub width_factor: Option<f32>,
    pub fill: Option<Code>,
    pub lang: Option<Language>,
}

impl RenderOverrides {
    fn apply(&self, config: &BoardConfig) -> BoardConfig {
        let mut config = config.clone();
        if let Some(v) = self.halign {
            config.alignment.horizontal = v;
        }
        if let Some(v) = self.valign {
            config.alignment.vertical = v;
        }
        if let Some(v) = self.width_factor {
            config.alignment.width_factor = v;
        }
        if let Some(v) = self.fill {
            config.fill_code = v;
        }
        if self.lang.is_some() {
            config.autocorrect = self.lang;
        }
        config
    }
}

/// Résout la valeur de `--fill` : un code numérique, ou le nom d'une tuile.
///
/// Un nom doit désigner une couleur (63–71) ou le blanc ; les lettres et la
/// ponctuation se donnent par leur code.
///
/// # Errors
/// Returns an error for an unknown name or a name that is not a colour tile.
pub fn parse_fill(spec: &str) -> Result<Code> {
    if let Ok(code) = spec.parse::<Code>() {
        return Ok(code);
    }
    let alphabet = Alphabet::reference();
    let Some(code) = alphabet.code_for(spec) else {
        anyhow::bail!("Remplissage inconnu : {spec:?}");
    };
    if code != 0 && !alphabet.is_special(code) {
        anyhow::bail!("{spec:?} n'est pas une couleur (code {code}). Donnez le code numérique.");
    }
    log::debug!("Remplissage {spec:?} → code {code}");
    Ok(code)
}

/// Render `text` as the JSON grid payload, or as `|`-framed lines.
///
/// # Errors
/// Returns an error if the text cannot be corrected, laid out or encoded.
pub fn render(config: &BoardConfig, text: &str, overrides: &RenderOverrides, lines: bool) -> Result<String> {
    let config = overrides.apply(config);
    let composer = MessageComposer::from_config(&config)?;

    if lines {
        let lines = composer.lines(text)?;
        return Ok(lines
            .iter()
            .map(|line| format!("|{line}|"))
            .collect::<Vec<_>>()
            .join("\n"));
    }

    let grid = composer.compose(text)?;
    serde_json::to_string(&grid).context("Sérialisation JSON de la grille")
}

/// Decode a JSON grid to text, one row per line or inline.
///
/// # Errors
/// Returns an error on malformed JSON, ragged rows or unknown codes.
pub fn decode(config: &BoardConfig, json: &str, inline: bool) -> Result<String> {
    let grid: CodeGrid = serde_json::from_str(json).context("Grille JSON invalide")?;
    let codec = codec_for(config)?;
    if inline {
        Ok(codec.decode_inline(&grid)?)
    } else {
        Ok(codec.decode(&grid)?.join("\n"))
    }
}

/// Vérifie un texte contre l'alphabet.
///
/// # Errors
/// Returns an error only if the configured dimensions are invalid.
pub fn validate_text(config: &BoardConfig, text: &str) -> Result<bool> {
    Ok(codec_for(config)?.validate(text))
}

/// Vérifie une grille JSON (forme et codes).
///
/// # Errors
/// Returns an error if `json` is not an array of integer arrays.
pub fn validate_grid(config: &BoardConfig, json: &str) -> Result<bool> {
    let rows: Vec<Vec<Code>> = serde_json::from_str(json).context("Grille JSON invalide")?;
    Ok(codec_for(config)?.validate(&rows))
}

/// Lit un fichier, ou stdin si le chemin est "-".
///
/// # Errors
/// Returns an error if the input cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Impossible de lire stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Impossible de lire {}", path.display()))
    }
}

fn codec_for(config: &BoardConfig) -> Result<GridCodec<'static>> {
    Ok(GridCodec::new(Alphabet::reference(), config.rows, config.cols)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn render_outputs_device_payload() {
        let json = render(&BoardConfig::default(), "hello", &RenderOverrides::default(), false).unwrap();
        let rows: Vec<Vec<Code>> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 22));
        assert_eq!(decode(&BoardConfig::default(), &json, true).unwrap(), "HELLO");
    }

    #[test]
    fn render_lines_with_overrides() {
        let overrides = RenderOverrides {
            halign: Some(HorizontalAlign::Left),
            valign: Some(VerticalAlign::Top),
            ..RenderOverrides::default()
        };
        let out = render(&BoardConfig::default(), "Hi there", &overrides, true).unwrap();
        let first = out.lines().next().unwrap();
        assert_eq!(first, format!("|{:<22}|", "Hi there"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn render_with_language_override() {
        let overrides = RenderOverrides {
            lang: Some(Language::De),
            ..RenderOverrides::default()
        };
        let json = render(&BoardConfig::default(), "Tschüß", &overrides, false).unwrap();
        assert_eq!(decode(&BoardConfig::default(), &json, true).unwrap(), "TSCHUESS");
        assert!(render(&BoardConfig::default(), "Tschüß", &RenderOverrides::default(), false).is_err());
    }

    #[test]
    fn render_rejects_bad_width_factor() {
        let overrides = RenderOverrides {
            width_factor: Some(0.0),
            ..RenderOverrides::default()
        };
        assert!(render(&BoardConfig::default(), "x", &overrides, false).is_err());
    }

    #[test]
    fn fill_by_number_or_colour_name() {
        assert_eq!(parse_fill("0").unwrap(), 0);
        assert_eq!(parse_fill("69").unwrap(), 69);
        assert_eq!(parse_fill("red").unwrap(), 63);
        assert_eq!(parse_fill("ParisBlue").unwrap(), 67);
        assert_eq!(parse_fill("#00ff00").unwrap(), 66);
        assert_eq!(parse_fill(" ").unwrap(), 0);
        assert!(parse_fill("Magenta").is_err());
        assert!(parse_fill("A").is_err());
    }

    #[test]
    fn render_with_colour_fill() {
        let overrides = RenderOverrides {
            fill: Some(parse_fill("green").unwrap()),
            ..RenderOverrides::default()
        };
        let json = render(&BoardConfig::default(), "hi", &overrides, false).unwrap();
        let rows: Vec<Vec<Code>> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows[0][0], 66);
        assert_eq!(rows[5][21], 66);
    }

    #[test]
    fn decode_rows() {
        let out = decode(&BoardConfig::default(), "[[1,0,2],[63,0,0]]", false).unwrap();
        assert_eq!(out, "A B\nPoppyRed  ");
        assert!(decode(&BoardConfig::default(), "[[1,43]]", false).is_err());
        assert!(decode(&BoardConfig::default(), "[[1],[1,2]]", false).is_err());
    }

    #[test]
    fn validate_commands() {
        let config = BoardConfig::default();
        assert!(validate_text(&config, "Hello!").unwrap());
        assert!(!validate_text(&config, "Ω").unwrap());

        let good = serde_json::to_string(&vec![vec![0u8; 22]; 6]).unwrap();
        assert!(validate_grid(&config, &good).unwrap());
        let small = serde_json::to_string(&vec![vec![0u8; 22]; 2]).unwrap();
        assert!(!validate_grid(&config, &small).unwrap());
        assert!(validate_grid(&config, "not json").is_err());
    }

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0]]").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "[[0]]");
        assert!(read_input(Path::new("/nonexistent/grid.json")).is_err());
    }
}
