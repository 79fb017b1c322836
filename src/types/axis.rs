use serde::{Deserialize, Serialize};

/// Which header a component renders.
///
/// The string form is the literal tag passed to mount hooks so a shared parent
/// can tell the row header apart from its column-header sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Vertical axis: row labels on the left edge.
    Row,
    /// Horizontal axis: column labels on the top edge.
    Column,
}

impl Axis {
    /// Literal tag for this axis (`"row"` / `"column"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    /// Index into a `(x, y)` coordinate pair that carries this axis.
    pub fn coordinate_index(self) -> usize {
        match self {
            Self::Row => 1,
            Self::Column => 0,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
