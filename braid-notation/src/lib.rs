//! Text notation for braid words: free-form integer lists, the braced
//! knot-table cell format `{1;-2;3};{...}`, and a CSV-backed table of knots
//! in braid notation.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use braid_kernel::{BraidError, BraidWord};
use csv::ReaderBuilder;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while parsing notation or loading a knot table.
#[derive(Debug, Error)]
pub enum NotationError {
    /// A token that should be a signed generator index.
    #[error("invalid sigma token '{token}'")]
    InvalidSigma { token: String },

    /// A cell that is not of the braced `{s;s;...}` form.
    #[error("notation cell '{cell}' is not of the form {{s;s;...}}")]
    MalformedCell { cell: String },

    /// A knot-table row with a bad name or shape. Rows are counted from 1,
    /// excluding the header.
    #[error("knot table row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error(transparent)]
    Word(#[from] BraidError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

lazy_static! {
    // Knot-table naming: crossing number, an alternating/non-alternating
    // marker for eleven crossings and up, and the index within the class.
    // Examples: 3_1, 10_136, 11a_8, 13n_42.
    static ref KNOT_NAME: Regex =
        Regex::new(r"^\d{1,2}[an]?_\d+$").expect("invalid knot name pattern");
}

/// Returns true when `name` looks like a knot-table name such as `4_1`.
pub fn is_knot_name(name: &str) -> bool {
    KNOT_NAME.is_match(name)
}

/// Parses free-form input such as `"1 -2 3"` or `"1,-2,3"`.
pub fn parse_word(text: &str) -> Result<BraidWord, NotationError> {
    let mut sigmas = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        sigmas.push(parse_sigma(token)?);
    }
    Ok(BraidWord::new(sigmas)?)
}

/// Parses one braced notation such as `{1;-2;3}`. `{}` is the empty word.
pub fn parse_braced(cell: &str) -> Result<BraidWord, NotationError> {
    let trimmed = cell.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| NotationError::MalformedCell {
            cell: cell.to_string(),
        })?;
    parse_sigma_list(inner)
}

/// Parses a whole table cell, which may hold several alternative notations
/// for the same knot, separated as `{...};{...}`.
pub fn parse_notation_cell(cell: &str) -> Result<Vec<BraidWord>, NotationError> {
    cell.trim()
        .split("};{")
        .map(|part| parse_sigma_list(part.trim().trim_matches(|c| c == '{' || c == '}')))
        .collect()
}

fn parse_sigma_list(inner: &str) -> Result<BraidWord, NotationError> {
    if inner.is_empty() {
        return Ok(BraidWord::empty());
    }
    let mut sigmas = Vec::new();
    for token in inner.split(';') {
        sigmas.push(parse_sigma(token.trim())?);
    }
    Ok(BraidWord::new(sigmas)?)
}

fn parse_sigma(token: &str) -> Result<i32, NotationError> {
    token.parse::<i32>().map_err(|_| NotationError::InvalidSigma {
        token: token.to_string(),
    })
}

/// One row of the knot table CSV.
#[derive(Debug, Deserialize)]
struct KnotRow {
    name: String,
    notations: String,
}

/// Knots in braid notation, keyed by knot name.
///
/// Several alternative notations may be recorded for one knot; index 0 is
/// the preferred one. The backing CSV has a `name,notations` header, one
/// knot per row, with alternatives separated as `{...};{...}`.
#[derive(Debug, Clone, Default)]
pub struct KnotTable {
    knots: HashMap<String, Vec<BraidWord>>,
}

impl KnotTable {
    /// Loads a knot table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NotationError> {
        Self::from_reader(File::open(path)?)
    }

    /// Loads a knot table from any reader of CSV text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NotationError> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut knots = HashMap::new();
        for (i, record) in csv_reader.deserialize().enumerate() {
            let row = i + 1;
            let KnotRow { name, notations } = record?;
            if !is_knot_name(&name) {
                return Err(NotationError::MalformedRow {
                    row,
                    reason: format!("'{}' is not a knot name", name),
                });
            }
            let words = parse_notation_cell(&notations)?;
            if words.is_empty() {
                return Err(NotationError::MalformedRow {
                    row,
                    reason: "no notations".to_string(),
                });
            }
            knots.insert(name, words);
        }
        Ok(KnotTable { knots })
    }

    /// All notations recorded for `name`, preferred one first.
    pub fn get(&self, name: &str) -> Option<&[BraidWord]> {
        self.knots.get(name).map(Vec::as_slice)
    }

    /// Number of knots in the table.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Returns true if the table holds no knots.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Iterates over the knot names in the table, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.knots.keys().map(String::as_str)
    }
}
