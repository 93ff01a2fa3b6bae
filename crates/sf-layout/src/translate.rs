use sf_core::{Alignment, Code, CodeGrid, GridCodec};

use crate::error::LayoutError;
use crate::fitter::LineFitter;

/// Lay out `text` on the codec's board and encode it.
///
/// # Errors
/// Any [`LayoutError`] from the fitter, or [`LayoutError::Core`] when a
/// character has no code.
///
/// # Example
/// ```
/// use sf_core::{Alignment, GridCodec};
/// use sf_layout::translate;
/// let codec = GridCodec::reference();
/// let grid = translate(&codec, "hello world", &Alignment::default(), 0).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (6, 22));
/// assert!(codec.validate(&grid));
/// ```
pub fn translate(
    codec: &GridCodec<'_>,
    text: &str,
    alignment: &Alignment,
    fill: Code,
) -> Result<CodeGrid, LayoutError> {
    let fitter = LineFitter::new(codec.cols(), codec.rows())?;
    translate_with(&fitter, codec, text, alignment, fill)
}

/// Same as [`translate`] with a preconfigured fitter.
///
/// # Errors
/// See [`translate`]; also [`LayoutError::InvalidDimensions`] when the
/// fitter and the codec disagree on the board size.
pub fn translate_with(
    fitter: &LineFitter,
    codec: &GridCodec<'_>,
    text: &str,
    alignment: &Alignment,
    fill: Code,
) -> Result<CodeGrid, LayoutError> {
    if (fitter.width(), fitter.height()) != (codec.cols(), codec.rows()) {
        return Err(LayoutError::InvalidDimensions {
            width: fitter.width(),
            height: fitter.height(),
        });
    }
    let lines = fitter.align(text, alignment)?;
    log::debug!("{} lignes alignées, encodage", lines.len());
    Ok(codec.encode(&lines, fill)?)
}

#[cfg(test)]
mod tests {
    use sf_core::{CoreError, HorizontalAlign, VerticalAlign};

    use super::*;

    #[test]
    fn centered_message_lands_on_row_two() {
        let codec = GridCodec::reference();
        let grid = translate(&codec, "Hello World", &Alignment::default(), 0).unwrap();
        assert_eq!(grid.get(2, 5), 8); // H
        assert_eq!(grid.get(2, 10), 0);
        assert_eq!(grid.get(2, 15), 4); // D
        for row in [0, 1, 3, 4, 5] {
            assert!(grid.row(row).iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn fill_code_applies_to_blank_cells() {
        let codec = GridCodec::reference();
        let a = Alignment::new(HorizontalAlign::Left, VerticalAlign::Top);
        let grid = translate(&codec, "HI", &a, 70).unwrap();
        assert_eq!(grid.get(0, 0), 8);
        assert_eq!(grid.get(0, 1), 9);
        assert_eq!(grid.get(0, 2), 70);
        assert_eq!(grid.get(5, 21), 70);
    }

    #[test]
    fn unknown_character_surfaces_as_core_error() {
        let codec = GridCodec::reference();
        let err = translate(&codec, "PRICE 3€", &Alignment::default(), 0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Core(CoreError::UnknownCharacter { ch: '3', .. })
        ));
    }

    #[test]
    fn decode_of_translate_gives_aligned_lines() {
        let codec = GridCodec::reference();
        let a = Alignment::new(HorizontalAlign::Right, VerticalAlign::Bottom);
        let grid = translate(&codec, "see you soon", &a, 0).unwrap();
        let lines = codec.decode(&grid).unwrap();
        assert_eq!(lines[5], format!("{:>22}", "SEE YOU SOON"));
        assert_eq!(codec.decode_inline(&grid).unwrap(), "SEE YOU SOON");
    }

    #[test]
    fn oversized_text_is_rejected_before_encoding() {
        let codec = GridCodec::reference();
        let text = "A".repeat(6 * 22 + 1);
        assert!(matches!(
            translate(&codec, &text, &Alignment::default(), 0),
            Err(LayoutError::OversizedInput { len: 133, capacity: 132 })
        ));
    }

    #[test]
    fn fitter_must_match_codec_board() {
        let codec = GridCodec::reference();
        let small = LineFitter::new(10, 3).unwrap();
        assert_eq!(
            translate_with(&small, &codec, "HI", &Alignment::default(), 0).unwrap_err(),
            LayoutError::InvalidDimensions { width: 10, height: 3 }
        );
        let board = LineFitter::new(22, 6).unwrap().with_split_operators(&[' ', '-']);
        let grid = translate_with(&board, &codec, "WELL-DONE", &Alignment::default(), 0).unwrap();
        assert_eq!(codec.decode_inline(&grid).unwrap(), "WELL DONE");
    }
}
