//! Symbols and alphabets.
//!
//! A `Symbol` is an opaque label. Puzzles draw their symbols from an
//! `Alphabet`, an ordered, duplicate-free list that also fixes each symbol's
//! index (row/column position in a group table, base-set order in topology).
//!
//! ```
//! use rust_axioms::core::{Alphabet, Symbol};
//!
//! let alphabet = Alphabet::default_prefix(4).unwrap();
//! assert_eq!(alphabet.len(), 4);
//! assert_eq!(alphabet.index_of(&Symbol::new("𐌂")), Some(2));
//! assert!(!alphabet.contains(&Symbol::new("x")));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, Result};

/// Symbols used by the games, rendered with an Old Italic font.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["𐌀", "𐌁", "𐌂", "𐌃", "𐌄", "𐌅"];

/// Opaque label drawn from a finite alphabet. Equality is by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The symbol's label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free set of symbols.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
    index: FxHashMap<Symbol, usize>,
}

impl Alphabet {
    /// Build an alphabet, rejecting empty or duplicated symbol lists.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(PuzzleError::EmptyAlphabet);
        }

        let mut index = FxHashMap::default();
        for (i, symbol) in symbols.iter().enumerate() {
            if index.insert(symbol.clone(), i).is_some() {
                return Err(PuzzleError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Build an alphabet from string labels.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Symbol::new).collect())
    }

    /// The first `size` symbols of [`DEFAULT_SYMBOLS`].
    pub fn default_prefix(size: usize) -> Result<Self> {
        if size == 0 || size > DEFAULT_SYMBOLS.len() {
            return Err(PuzzleError::AlphabetSize {
                requested: size,
                max: DEFAULT_SYMBOLS.len(),
            });
        }
        Self::from_labels(DEFAULT_SYMBOLS[..size].iter().copied())
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Position of `symbol`, if it belongs to the alphabet.
    #[inline]
    #[must_use]
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index.contains_key(symbol)
    }

    /// Reject symbols outside the alphabet with `UnknownSymbol`.
    pub fn check(&self, symbol: &Symbol) -> Result<()> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(PuzzleError::UnknownSymbol(symbol.clone()))
        }
    }

    /// Symbols in alphabet order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = PuzzleError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}
