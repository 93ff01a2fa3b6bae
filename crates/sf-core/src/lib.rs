/// Alphabet, grid and codec types for splitflap.
///
/// This crate contains the fixed character alphabet of the board, the
/// code grid exchanged with the device, the text/code codec, and the
/// configuration shared across the splitflap workspace.

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod lang;

pub use alphabet::{Alphabet, Code};
pub use codec::{BoardInput, GridCodec};
pub use config::{Alignment, BoardConfig, HorizontalAlign, VerticalAlign};
pub use error::CoreError;
pub use grid::CodeGrid;
pub use lang::Language;

/// Re-exports pour accès par chemin sémantique.
pub mod align {
    pub use crate::config::{Alignment, HorizontalAlign, VerticalAlign};
}
