/// Text layout engine for splitflap.
///
/// Word-wraps and aligns text into board-sized lines, then hands them to
/// the core codec.

pub mod composer;
pub mod error;
pub mod fitter;
pub mod translate;

pub use composer::MessageComposer;
pub use error::LayoutError;
pub use fitter::{LineFitter, align};
pub use translate::translate;
