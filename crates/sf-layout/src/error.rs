use sf_core::CoreError;
use thiserror::Error;

/// Errors originating from the layout module.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Input has more characters than the board has cells.
    #[error("Texte trop long pour la grille : {len} caractères pour {capacity} cellules")]
    OversizedInput {
        /// Character count of the input.
        len: usize,
        /// `width * height`.
        capacity: usize,
    },

    /// Greedy packing needs more lines than available, even at full width.
    #[error("Le texte ne tient pas en {height} lignes de {width} colonnes")]
    TextTooLong {
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },

    /// Width factor outside (0, 1].
    #[error("Facteur de largeur invalide : {0}")]
    InvalidWidthFactor(f32),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },

    /// Text rejected by validation before layout.
    #[error("Texte invalide : {0}")]
    Invalid(String),

    /// Codec or correction failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}
