//! Tables de correction linguistique.
//!
//! Remplace les caractères absents de l'alphabet par une séquence ASCII
//! équivalente (`ö` → `oe`). S'applique avant la mise en page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::CoreError;

const GERMAN: &[(char, &str)] = &[
    ('ö', "oe"),
    ('Ö', "Oe"),
    ('ü', "ue"),
    ('Ü', "Ue"),
    ('ä', "ae"),
    ('Ä', "Ae"),
    ('ß', "ss"),
];

/// Languages with a correction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Language {
    #[serde(alias = "de")]
    De,
}

impl Language {
    /// Table de remplacement de la langue.
    #[must_use]
    pub fn replacements(self) -> &'static [(char, &'static str)] {
        match self {
            Self::De => GERMAN,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::De => "de",
        }
    }

    fn replacement(self, ch: char) -> Option<&'static str> {
        self.replacements()
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "de" => Ok(Self::De),
            _ => Err(CoreError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Corrige `text` pour qu'il ne contienne que des caractères de l'alphabet.
///
/// Les caractères déjà représentables (en majuscule) sont conservés tels
/// quels, les autres sont remplacés via la table de la langue.
///
/// # Errors
/// Returns [`CoreError::NoReplacement`] for a character that is neither in
/// the alphabet nor in the table.
///
/// # Example
/// ```
/// use sf_core::alphabet::Alphabet;
/// use sf_core::lang::{correct, Language};
/// let fixed = correct(Alphabet::reference(), Language::De, "Grüße").unwrap();
/// assert_eq!(fixed, "Gruesse");
/// ```
pub fn correct(alphabet: &Alphabet, language: Language, text: &str) -> Result<String, CoreError> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if alphabet.lookup_char(ch).is_some() {
            out.push(ch);
        } else if let Some(replacement) = language.replacement(ch) {
            out.push_str(replacement);
        } else {
            log::warn!("Aucun remplacement pour '{ch}' en {language}");
            return Err(CoreError::NoReplacement {
                ch,
                language: language.tag().to_string(),
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umlauts_are_expanded() {
        let fixed = correct(Alphabet::reference(), Language::De, "Öl über Äpfel").unwrap();
        assert_eq!(fixed, "Oel ueber Aepfel");
    }

    #[test]
    fn representable_text_untouched() {
        let text = "Hello, World! 12";
        assert_eq!(correct(Alphabet::reference(), Language::De, text).unwrap(), text);
    }

    #[test]
    fn unknown_character_without_replacement_fails() {
        let err = correct(Alphabet::reference(), Language::De, "Ωmega").unwrap_err();
        assert_eq!(
            err,
            CoreError::NoReplacement {
                ch: 'Ω',
                language: "de".into()
            }
        );
    }

    #[test]
    fn language_tags_parse() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(CoreError::UnsupportedLanguage(tag)) if tag == "fr"
        ));
    }
}
