use sf_core::lang::{self, Language};
use sf_core::{Alignment, Alphabet, BoardConfig, Code, CodeGrid, GridCodec};

use crate::error::LayoutError;
use crate::fitter::LineFitter;
use crate::translate::translate_with;

/// Pipeline complet d'un message : correction, validation, mise en page, encodage.
///
/// Le résultat est la grille prête à être envoyée au panneau.
///
/// # Example
/// ```
/// use sf_core::BoardConfig;
/// use sf_layout::MessageComposer;
/// let composer = MessageComposer::from_config(&BoardConfig::default()).unwrap();
/// let grid = composer.compose("Good morning").unwrap();
/// assert_eq!(grid.rows(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct MessageComposer<'a> {
    codec: GridCodec<'a>,
    fitter: LineFitter,
    alignment: Alignment,
    fill: Code,
    autocorrect: Option<Language>,
}

impl MessageComposer<'static> {
    /// Build a composer for the reference alphabet from a board configuration.
    ///
    /// # Errors
    /// Returns [`LayoutError::Core`] if the configuration is rejected.
    pub fn from_config(config: &BoardConfig) -> Result<Self, LayoutError> {
        config.check()?;
        let codec = GridCodec::new(Alphabet::reference(), config.rows, config.cols)?;
        Ok(Self::new(codec)?
            .with_alignment(config.alignment)
            .with_fill(config.fill_code)
            .with_split_operators(&config.split_operators)
            .with_autocorrect(config.autocorrect))
    }
}

impl<'a> MessageComposer<'a> {
    /// # Errors
    /// Returns [`LayoutError::InvalidDimensions`] for a zero-sized codec.
    pub fn new(codec: GridCodec<'a>) -> Result<Self, LayoutError> {
        Ok(Self {
            fitter: LineFitter::new(codec.cols(), codec.rows())?,
            codec,
            alignment: Alignment::default(),
            fill: 0,
            autocorrect: None,
        })
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Code) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_split_operators(mut self, operators: &[char]) -> Self {
        self.fitter = self.fitter.with_split_operators(operators);
        self
    }

    #[must_use]
    pub fn with_autocorrect(mut self, language: Option<Language>) -> Self {
        self.autocorrect = language;
        self
    }

    /// Correction linguistique éventuelle puis validation du texte.
    ///
    /// # Errors
    /// [`LayoutError::Core`] when correction fails, [`LayoutError::Invalid`]
    /// when the text still holds unsupported characters.
    pub fn prepare(&self, text: &str) -> Result<String, LayoutError> {
        let text = match self.autocorrect {
            Some(language) => lang::correct(self.codec.alphabet(), language, text)?,
            None => text.to_string(),
        };
        if !self.codec.validate_text(&text) {
            return Err(LayoutError::Invalid(text));
        }
        Ok(text)
    }

    /// Aligned lines of the prepared text, before encoding.
    ///
    /// # Errors
    /// See [`MessageComposer::prepare`] and [`LineFitter::align`].
    pub fn lines(&self, text: &str) -> Result<Vec<String>, LayoutError> {
        let text = self.prepare(text)?;
        self.fitter.align(&text, &self.alignment)
    }

    /// Prepare, lay out and encode `text`.
    ///
    /// # Errors
    /// See [`MessageComposer::prepare`] and [`crate::translate`].
    pub fn compose(&self, text: &str) -> Result<CodeGrid, LayoutError> {
        let text = self.prepare(text)?;
        let grid = translate_with(&self.fitter, &self.codec, &text, &self.alignment, self.fill)?;
        log::info!(
            "Message de {} caractères composé sur {}×{}",
            text.chars().count(),
            grid.cols(),
            grid.rows()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use sf_core::{CoreError, HorizontalAlign, VerticalAlign};

    use super::*;

    fn german() -> MessageComposer<'static> {
        MessageComposer::from_config(&BoardConfig {
            autocorrect: Some(Language::De),
            ..BoardConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn compose_matches_translate() {
        let composer = MessageComposer::from_config(&BoardConfig::default()).unwrap();
        let direct = crate::translate(
            &GridCodec::reference(),
            "HELLO WORLD",
            &Alignment::default(),
            0,
        )
        .unwrap();
        assert_eq!(composer.compose("hello world").unwrap(), direct);
    }

    #[test]
    fn autocorrect_expands_umlauts() {
        let lines = german()
            .with_alignment(Alignment::new(HorizontalAlign::Left, VerticalAlign::Top))
            .lines("Grüße")
            .unwrap();
        assert_eq!(lines[0].trim_end(), "Gruesse");
    }

    #[test]
    fn autocorrect_failure_is_reported() {
        assert!(matches!(
            german().compose("Ωmega"),
            Err(LayoutError::Core(CoreError::NoReplacement { ch: 'Ω', .. }))
        ));
    }

    #[test]
    fn invalid_text_without_autocorrect() {
        let composer = MessageComposer::from_config(&BoardConfig::default()).unwrap();
        assert_eq!(
            composer.compose("über").unwrap_err(),
            LayoutError::Invalid("über".into())
        );
    }

    #[test]
    fn config_dimensions_and_fill_are_used() {
        let config = BoardConfig {
            rows: 3,
            cols: 15,
            fill_code: 69,
            ..BoardConfig::default()
        };
        let grid = MessageComposer::from_config(&config).unwrap().compose("OK").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 15));
        assert_eq!(grid.get(0, 0), 69);
        assert_eq!(grid.get(1, 6), 15); // O, centré
        assert_eq!(grid.get(1, 7), 11); // K
    }

    #[test]
    fn rejected_config() {
        let config = BoardConfig {
            fill_code: 45,
            ..BoardConfig::default()
        };
        assert!(matches!(
            MessageComposer::from_config(&config),
            Err(LayoutError::Core(CoreError::Config(_)))
        ));
    }

    #[test]
    fn oversized_config_rejected_before_layout() {
        let config = BoardConfig {
            rows: 1 << 62,
            cols: 4,
            ..BoardConfig::default()
        };
        assert!(matches!(
            MessageComposer::from_config(&config),
            Err(LayoutError::Core(CoreError::Config(_)))
        ));
    }
}
