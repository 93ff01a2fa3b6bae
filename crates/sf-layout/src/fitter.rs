//! Découpage glouton en lignes avec élargissement progressif.
//!
//! Le texte est coupé sur les caractères de séparation puis rempli ligne par
//! ligne jusqu'à une limite initiale `floor(width_factor * width)`. Si le
//! résultat dépasse la hauteur, la limite est élargie d'un caractère et le
//! remplissage recommence, au plus jusqu'à `width`.

use sf_core::config::{Alignment, HorizontalAlign, VerticalAlign};

use crate::error::LayoutError;

/// Word-wraps and aligns text into exactly `height` lines of `width` characters.
///
/// # Example
/// ```
/// use sf_core::config::{Alignment, HorizontalAlign, VerticalAlign};
/// use sf_layout::fitter::LineFitter;
/// let fitter = LineFitter::new(5, 1).unwrap();
/// let lines = fitter
///     .align("AB", &Alignment::new(HorizontalAlign::Center, VerticalAlign::Top))
///     .unwrap();
/// assert_eq!(lines, vec![" AB  "]);
/// ```
#[derive(Clone, Debug)]
pub struct LineFitter {
    width: usize,
    height: usize,
    capacity: usize,
    split_operators: Vec<char>,
}

impl LineFitter {
    /// # Errors
    /// Returns [`LayoutError::InvalidDimensions`] if either dimension is zero
    /// or `width * height` does not fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidDimensions { width, height });
        }
        let capacity = width
            .checked_mul(height)
            .ok_or(LayoutError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            capacity,
            split_operators: vec![' '],
        })
    }

    /// Caractères de coupure. Une liste vide garde l'espace seul.
    ///
    /// Les mots sont toujours rejoints par une espace.
    #[must_use]
    pub fn with_split_operators(mut self, operators: &[char]) -> Self {
        if !operators.is_empty() {
            self.split_operators = operators.to_vec();
        }
        self
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Lay out `text` and return `height` lines of exactly `width` characters.
    ///
    /// # Errors
    /// - [`LayoutError::InvalidWidthFactor`] unless `0 < width_factor <= 1`.
    /// - [`LayoutError::OversizedInput`] if `text` has more characters than
    ///   `width * height`.
    /// - [`LayoutError::TextTooLong`] if no limit up to `width` packs the words
    ///   into `height` lines, or a single word is wider than the board.
    pub fn align(&self, text: &str, alignment: &Alignment) -> Result<Vec<String>, LayoutError> {
        let factor = alignment.width_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(LayoutError::InvalidWidthFactor(factor));
        }

        let len = text.chars().count();
        if len > self.capacity {
            return Err(LayoutError::OversizedInput {
                len,
                capacity: self.capacity,
            });
        }

        let words: Vec<&str> = text
            .split(|ch: char| self.split_operators.contains(&ch))
            .collect();

        // Borné par construction : au plus width - initial + 1 essais.
        for limit in initial_limit(factor, self.width)..=self.width {
            let lines = pack(&words, limit);
            if self.fits(&lines) {
                return Ok(self.place(lines, alignment.horizontal, alignment.vertical));
            }
            log::debug!(
                "{} lignes à {limit} caractères, nouvel essai plus large",
                lines.len()
            );
        }

        Err(LayoutError::TextTooLong {
            width: self.width,
            height: self.height,
        })
    }

    fn fits(&self, lines: &[String]) -> bool {
        lines.len() <= self.height
            && lines
                .iter()
                .all(|line| line.trim().chars().count() <= self.width)
    }

    fn place(
        &self,
        mut lines: Vec<String>,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Vec<String> {
        let blank = " ".repeat(self.width);
        let missing = self.height - lines.len();

        match vertical {
            VerticalAlign::Top => lines.resize(self.height, blank),
            VerticalAlign::Bottom => {
                let mut padded = vec![blank; missing];
                padded.append(&mut lines);
                lines = padded;
            }
            VerticalAlign::Center => {
                // Dessous d'abord : un nombre impair penche vers le bas.
                for step in 0..missing {
                    if step % 2 == 0 {
                        lines.push(blank.clone());
                    } else {
                        lines.insert(0, blank.clone());
                    }
                }
            }
        }

        let width = self.width;
        lines
            .iter()
            .map(|line| {
                let line = line.trim();
                match horizontal {
                    HorizontalAlign::Left => format!("{line:<width$}"),
                    HorizontalAlign::Center => format!("{line:^width$}"),
                    HorizontalAlign::Right => format!("{line:>width$}"),
                }
            })
            .collect()
    }
}

/// Free-function form of [`LineFitter::align`].
///
/// # Errors
/// See [`LineFitter::align`]; also [`LayoutError::InvalidDimensions`] for a
/// zero width or height.
///
/// # Example
/// ```
/// use sf_core::config::{Alignment, HorizontalAlign, VerticalAlign};
/// use sf_layout::align;
/// let lines = align(
///     "ONE TWO THREE FOUR",
///     10,
///     2,
///     &Alignment::new(HorizontalAlign::Left, VerticalAlign::Top),
///     &[' '],
/// )
/// .unwrap();
/// assert_eq!(lines, vec!["ONE TWO   ", "THREE FOUR"]);
/// ```
pub fn align(
    text: &str,
    width: usize,
    height: usize,
    alignment: &Alignment,
    split_operators: &[char],
) -> Result<Vec<String>, LayoutError> {
    LineFitter::new(width, height)?
        .with_split_operators(split_operators)
        .align(text, alignment)
}

fn initial_limit(width_factor: f32, width: usize) -> usize {
    // Absorbe l'erreur d'arrondi de f32 (0.7 * 10 = 6.9999…).
    let limit = (f64::from(width_factor) * width as f64 + 1e-4).floor() as usize;
    limit.min(width)
}

/// Remplissage glouton, sans lookahead.
///
/// Chaque mot est ajouté précédé d'une espace ; quand la ligne dépasse
/// `limit`, la ligne d'avant est validée (même vide) et le mot ouvre la
/// suivante sans espace. La première ligne compte donc son espace de tête.
fn pack(words: &[&str], limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    let mut pending_len = 0;

    for word in words {
        let word_len = word.chars().count();
        if pending_len + 1 + word_len > limit {
            lines.push(std::mem::take(&mut pending));
            pending.push_str(word);
            pending_len = word_len;
        } else {
            pending.push(' ');
            pending.push_str(word);
            pending_len += 1 + word_len;
        }
    }

    if !pending.is_empty() {
        lines.push(pending);
    }
    lines
}
