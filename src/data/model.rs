use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single untyped value as read from the source
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring what spreadsheets and CSV exports hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – rows × columns, no schema guarantees
// ---------------------------------------------------------------------------

/// The source table exactly as read. Rows may differ in length and the first
/// rows may be headers rather than data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        RawTable { rows }
    }

    /// Number of rows, headers included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
