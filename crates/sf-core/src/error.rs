use thiserror::Error;

use crate::alphabet::Code;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A character has no code in the alphabet.
    #[error("Caractère non supporté '{ch}' (ligne {row}, colonne {column})")]
    UnknownCharacter {
        /// Offending character, as written by the caller.
        ch: char,
        /// Row index of the line being encoded.
        row: usize,
        /// Column index within the line.
        column: usize,
    },

    /// A grid cell holds a value that is not an alphabet code.
    #[error("Code inconnu {code} (ligne {row}, colonne {column})")]
    UnknownCode {
        /// Offending cell value.
        code: Code,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },

    /// A line has more characters than the board has columns.
    #[error("Ligne {row} trop longue : {len} caractères pour {cols} colonnes")]
    LineTooWide {
        /// Row index of the line.
        row: usize,
        /// Character count of the line.
        len: usize,
        /// Column count of the board.
        cols: usize,
    },

    /// Nested rows do not all have the same length.
    #[error("Grille irrégulière : la ligne {row} a {len} cellules au lieu de {expected}")]
    RaggedGrid {
        /// First row whose length differs.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// The same alias is declared for two different codes.
    #[error("Alias '{alias}' déclaré pour les codes {first} et {second}")]
    DuplicateAlias {
        /// Conflicting alias.
        alias: String,
        /// Code registered first.
        first: Code,
        /// Code that tried to register the alias again.
        second: Code,
    },

    /// No correction table exists for the requested language.
    #[error("Langue non supportée : {0}")]
    UnsupportedLanguage(String),

    /// A character is neither in the alphabet nor in the language table.
    #[error("Aucun remplacement pour '{ch}' en {language}")]
    NoReplacement {
        /// Character that could not be replaced.
        ch: char,
        /// Language tag of the table that was searched.
        language: String,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
