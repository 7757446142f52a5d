//! Partially-filled operation tables.
//!
//! A `RelationTable` over an alphabet of n symbols is an n×n grid whose
//! cells are either empty or hold a symbol. Row and column `i` correspond to
//! the alphabet's `i`-th symbol, so `table[i][j]` is `symbols[i] ∘ symbols[j]`.
//!
//! ## Mirrored edits
//!
//! `set` and `clear` on an off-diagonal cell always write its mirror
//! `(col, row)` too, so tables built through edits stay symmetric. Tables
//! handed in whole through `from_rows` (or deserialized) are taken as-is and
//! may be asymmetric or hold symbols outside the alphabet; the evaluator
//! reports those rather than rejecting them.

use serde::{Deserialize, Serialize};

use crate::core::{Alphabet, PuzzleError, Result, Symbol};

/// Coordinates of one table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell reflected across the diagonal.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self::new(self.col, self.row)
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row == self.col
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// n×n table of optional symbols, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct RelationTable {
    alphabet: Alphabet,
    cells: Vec<Option<Symbol>>,
}

impl RelationTable {
    /// A table with every cell empty.
    #[must_use]
    pub fn empty(alphabet: Alphabet) -> Self {
        let n = alphabet.len();
        Self {
            alphabet,
            cells: vec![None; n * n],
        }
    }

    /// The cyclic group table: `table[i][j] = symbols[(i + j) mod n]`.
    #[must_use]
    pub fn cyclic(alphabet: Alphabet) -> Self {
        let n = alphabet.len();
        let cells = (0..n * n)
            .map(|k| alphabet.get((k / n + k % n) % n).cloned())
            .collect();
        Self { alphabet, cells }
    }

    /// Build a table from explicit rows.
    ///
    /// Only the shape is checked. Cell contents are not required to be
    /// symmetric or to belong to the alphabet.
    pub fn from_rows(alphabet: Alphabet, rows: Vec<Vec<Option<Symbol>>>) -> Result<Self> {
        let n = alphabet.len();
        if rows.len() != n {
            return Err(PuzzleError::RowCount {
                expected: n,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(PuzzleError::ShapeMismatch {
                    expected: n,
                    row,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { alphabet, cells })
    }

    /// Number of symbols (rows, columns).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.alphabet.len()
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Contents of a cell. `None` when empty or out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Symbol> {
        self.at(cell.row, cell.col)
    }

    /// Contents of `table[row][col]`.
    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&Symbol> {
        let n = self.size();
        if row >= n || col >= n {
            return None;
        }
        self.cells[row * n + col].as_ref()
    }

    /// One row of the table.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<Symbol>] {
        let n = self.size();
        let start = (row * n).min(self.cells.len());
        let end = (start + n).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Write `symbol` into `cell` and its mirror.
    ///
    /// Rejects out-of-range cells and symbols outside the alphabet before
    /// anything is written.
    pub fn set(&mut self, cell: Cell, symbol: Symbol) -> Result<()> {
        let n = self.size();
        self.check_bounds(cell)?;
        self.alphabet.check(&symbol)?;

        if !cell.is_diagonal() {
            self.cells[cell.col * n + cell.row] = Some(symbol.clone());
        }
        self.cells[cell.row * n + cell.col] = Some(symbol);
        Ok(())
    }

    /// Empty `cell` and its mirror.
    pub fn clear(&mut self, cell: Cell) -> Result<()> {
        self.check_bounds(cell)?;
        self.clear_pair(cell);
        Ok(())
    }

    /// Empty `cell` and its mirror. `cell` must come from `cells()`.
    pub(super) fn clear_pair(&mut self, cell: Cell) {
        let n = self.size();
        self.cells[cell.row * n + cell.col] = None;
        self.cells[cell.col * n + cell.row] = None;
    }

    /// True when every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All cell coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size();
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Copy of the table as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<Symbol>>> {
        (0..self.size()).map(|r| self.row(r).to_vec()).collect()
    }

    fn check_bounds(&self, cell: Cell) -> Result<()> {
        let size = self.size();
        if cell.row >= size || cell.col >= size {
            return Err(PuzzleError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
                size,
            });
        }
        Ok(())
    }
}

/// Serialized form: the alphabet plus nested rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TableRepr {
    alphabet: Alphabet,
    rows: Vec<Vec<Option<Symbol>>>,
}

impl TryFrom<TableRepr> for RelationTable {
    type Error = PuzzleError;

    fn try_from(repr: TableRepr) -> Result<Self> {
        Self::from_rows(repr.alphabet, repr.rows)
    }
}

impl From<RelationTable> for TableRepr {
    fn from(table: RelationTable) -> Self {
        Self {
            rows: table.to_rows(),
            alphabet: table.alphabet,
        }
    }
}
