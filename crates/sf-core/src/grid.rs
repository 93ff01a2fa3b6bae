use serde::{Deserialize, Serialize};

use crate::alphabet::Code;
use crate::error::CoreError;

/// Grille de codes envoyée au panneau, row-major.
///
/// Sérialisée comme un tableau JSON de lignes, chaque ligne un tableau de
/// codes : c'est la forme attendue par le panneau.
///
/// # Example
/// ```
/// use sf_core::grid::CodeGrid;
/// let mut grid = CodeGrid::filled(6, 22, 0);
/// grid.set(0, 0, 1);
/// assert_eq!(grid.get(0, 0), 1);
/// assert_eq!(grid.row(0).len(), 22);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Code>>", into = "Vec<Vec<Code>>")]
pub struct CodeGrid {
    cells: Vec<Code>,
    rows: usize,
    cols: usize,
}

impl CodeGrid {
    /// Crée une grille dont toutes les cellules valent `fill`.
    ///
    /// # Example
    /// ```
    /// use sf_core::grid::CodeGrid;
    /// let grid = CodeGrid::filled(2, 3, 71);
    /// assert_eq!(grid.to_rows(), vec![vec![71; 3]; 2]);
    /// ```
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: Code) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from nested rows, rejecting ragged input.
    ///
    /// Cell values are not checked against any alphabet here; see
    /// `GridCodec::grid_from_rows` for the validated path.
    ///
    /// # Errors
    /// Returns [`CoreError::RaggedGrid`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Code>>) -> Result<Self, CoreError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(CoreError::RaggedGrid {
                    row: index,
                    len: row.len(),
                    expected: cols,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, column).
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Code {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Set the cell at (row, column).
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, code: Code) {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col] = code;
    }

    /// Une ligne de la grille.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Code] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Itère sur les lignes, de haut en bas.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Code]> {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Copy out as nested rows (wire shape).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Code>> {
        self.iter_rows().map(<[Code]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Code>>> for CodeGrid {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<Code>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CodeGrid> for Vec<Vec<Code>> {
    fn from(grid: CodeGrid) -> Self {
        grid.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let grid = CodeGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 0), 4);
        assert_eq!(grid.row(0), &[1, 2, 3]);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = CodeGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            CoreError::RaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn empty_grid_is_allowed() {
        let grid = CodeGrid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.iter_rows().count(), 0);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let mut grid = CodeGrid::filled(2, 2, 0);
        grid.set(1, 1, 63);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,0],[0,63]]");
        let back: CodeGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn deserializing_ragged_json_fails() {
        assert!(serde_json::from_str::<CodeGrid>("[[1,2],[3]]").is_err());
    }
}
