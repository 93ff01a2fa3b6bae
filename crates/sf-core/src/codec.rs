use crate::alphabet::{Alphabet, Code, NUM_COLS, NUM_ROWS};
use crate::error::CoreError;
use crate::grid::CodeGrid;

/// Entrée acceptée par [`GridCodec::validate`] : du texte ou une grille.
#[derive(Clone, Copy, Debug)]
pub enum BoardInput<'a> {
    /// Texte brut, vérifié caractère par caractère.
    Text(&'a str),
    /// Lignes imbriquées telles que reçues du panneau.
    Rows(&'a [Vec<Code>]),
    /// Grille déjà construite.
    Grid(&'a CodeGrid),
}

impl<'a> From<&'a str> for BoardInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for BoardInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [Vec<Code>]> for BoardInput<'a> {
    fn from(rows: &'a [Vec<Code>]) -> Self {
        Self::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<Code>>> for BoardInput<'a> {
    fn from(rows: &'a Vec<Vec<Code>>) -> Self {
        Self::Rows(rows)
    }
}

impl<'a> From<&'a CodeGrid> for BoardInput<'a> {
    fn from(grid: &'a CodeGrid) -> Self {
        Self::Grid(grid)
    }
}

/// Conversion texte ↔ codes pour un panneau de `rows` × `cols`.
///
/// Pur et sans état : partageable entre threads.
///
/// # Example
/// ```
/// use sf_core::codec::GridCodec;
/// let codec = GridCodec::reference();
/// let grid = codec.encode(&["A B"], 0).unwrap();
/// assert_eq!(&grid.row(0)[..4], &[1, 0, 2, 0]);
/// assert_eq!(codec.decode(&grid).unwrap()[0].trim_end(), "A B");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridCodec<'a> {
    alphabet: &'a Alphabet,
    rows: usize,
    cols: usize,
}

impl GridCodec<'static> {
    /// Codec of the 6×22 reference board.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            alphabet: Alphabet::reference(),
            rows: NUM_ROWS,
            cols: NUM_COLS,
        }
    }
}

impl<'a> GridCodec<'a> {
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero.
    pub fn new(alphabet: &'a Alphabet, rows: usize, cols: usize) -> Result<Self, CoreError> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        Ok(Self {
            alphabet,
            rows,
            cols,
        })
    }

    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Encode lines into a grid of `lines.len()` rows and `cols` columns.
    ///
    /// Spaces and columns past the end of a line are left as `fill`.
    ///
    /// # Errors
    /// - [`CoreError::Config`] if `fill` is not an alphabet code.
    /// - [`CoreError::LineTooWide`] if a line has more than `cols` characters.
    /// - [`CoreError::UnknownCharacter`] for a character outside the alphabet.
    pub fn encode<S: AsRef<str>>(&self, lines: &[S], fill: Code) -> Result<CodeGrid, CoreError> {
        if !self.alphabet.contains(fill) {
            return Err(CoreError::Config(format!(
                "code de remplissage {fill} absent de l'alphabet"
            )));
        }

        let mut grid = CodeGrid::filled(lines.len(), self.cols, fill);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len > self.cols {
                return Err(CoreError::LineTooWide {
                    row,
                    len,
                    cols: self.cols,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let code = self
                    .alphabet
                    .lookup_char(ch)
                    .ok_or(CoreError::UnknownCharacter { ch, row, column })?;
                grid.set(row, column, code);
            }
        }
        Ok(grid)
    }

    /// Decode every cell to its canonical alias, one string per row.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCode`] for a cell outside the alphabet.
    pub fn decode(&self, grid: &CodeGrid) -> Result<Vec<String>, CoreError> {
        grid.iter_rows()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &code)| {
                        self.alphabet
                            .canonical(code)
                            .ok_or(CoreError::UnknownCode { code, row, column })
                    })
                    .collect::<Result<String, _>>()
            })
            .collect()
    }

    /// Decode to a single line: rows trimmed, joined by one space, trimmed.
    ///
    /// # Errors
    /// Same as [`GridCodec::decode`].
    ///
    /// # Example
    /// ```
    /// use sf_core::codec::GridCodec;
    /// let codec = GridCodec::reference();
    /// let grid = codec.encode(&["  HELLO", "", "WORLD  "], 0).unwrap();
    /// assert_eq!(codec.decode_inline(&grid).unwrap(), "HELLO  WORLD");
    /// ```
    pub fn decode_inline(&self, grid: &CodeGrid) -> Result<String, CoreError> {
        let lines = self.decode(grid)?;
        let joined = lines.iter().map(|line| line.trim()).collect::<Vec<_>>().join(" ");
        Ok(joined.trim().to_string())
    }

    /// Vérifie un texte ou une grille sans lever d'erreur.
    ///
    /// # Example
    /// ```
    /// use sf_core::codec::GridCodec;
    /// let codec = GridCodec::reference();
    /// assert!(codec.validate("hello"));
    /// assert!(!codec.validate("Ω"));
    /// assert!(!codec.validate(&vec![vec![0u8; 22]; 5]));
    /// ```
    pub fn validate<'i>(&self, input: impl Into<BoardInput<'i>>) -> bool {
        match input.into() {
            BoardInput::Text(text) => self.validate_text(text),
            BoardInput::Rows(rows) => self.validate_rows(rows.iter().map(Vec::as_slice), rows.len()),
            BoardInput::Grid(grid) => self.validate_rows(grid.iter_rows(), grid.rows()),
        }
    }

    /// Every character must exist in the alphabet (case-insensitive).
    #[must_use]
    pub fn validate_text(&self, text: &str) -> bool {
        match text.chars().find(|&ch| self.alphabet.lookup_char(ch).is_none()) {
            Some(ch) => {
                log::warn!("Caractère non supporté '{ch}'");
                false
            }
            None => true,
        }
    }

    fn validate_rows<'r>(&self, rows: impl Iterator<Item = &'r [Code]>, count: usize) -> bool {
        if count != self.rows {
            log::warn!("Grille de {count} lignes, {} attendues", self.rows);
            return false;
        }
        for (index, row) in rows.enumerate() {
            if row.len() != self.cols {
                log::warn!(
                    "Ligne {index} de {} colonnes, {} attendues",
                    row.len(),
                    self.cols
                );
                return false;
            }
            if let Some(code) = row.iter().find(|&&code| !self.alphabet.contains(code)) {
                log::warn!("Code inconnu {code} à la ligne {index}");
                return false;
            }
        }
        true
    }

    /// Construit une grille brute (couleurs comprises) après validation.
    ///
    /// # Errors
    /// Returns [`CoreError::RaggedGrid`] for ragged input and
    /// [`CoreError::Config`] for any other shape or code rejected by
    /// [`GridCodec::validate`].
    ///
    /// # Example
    /// ```
    /// use sf_core::codec::GridCodec;
    /// let codec = GridCodec::reference();
    /// let mut rows = vec![vec![0u8; 22]; 6];
    /// rows[0][0] = 63;
    /// let grid = codec.grid_from_rows(rows).unwrap();
    /// assert_eq!(codec.decode(&grid).unwrap()[0].split(' ').next(), Some("PoppyRed"));
    /// ```
    pub fn grid_from_rows(&self, rows: Vec<Vec<Code>>) -> Result<CodeGrid, CoreError> {
        if !self.validate(&rows) {
            return Err(CoreError::Config(format!(
                "grille rejetée pour un panneau {}×{}",
                self.cols, self.rows
            )));
        }
        CodeGrid::from_rows(rows)
    }
}
