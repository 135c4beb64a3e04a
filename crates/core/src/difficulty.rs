//! Recipe difficulty levels and their single-character persistence codes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How demanding a recipe is to prepare.
///
/// Serialized by name (`"EASY"`) at the API boundary; stored by
/// [`code`](Difficulty::code) in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hardest,
}

impl Difficulty {
    /// Every variant, in ascending order of difficulty.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hardest];

    /// The persistence code for this level.
    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "E",
            Difficulty::Moderate => "M",
            Difficulty::Hardest => "H",
        }
    }

    /// Parse an exact persistence code. Anything other than `E`, `M` or `H`
    /// is rejected.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "E" => Ok(Difficulty::Easy),
            "M" => Ok(Difficulty::Moderate),
            "H" => Ok(Difficulty::Hardest),
            other => Err(CoreError::InvalidCode {
                kind: "difficulty",
                code: other.to_string(),
            }),
        }
    }
}

/// Convert an optional difficulty to its column value.
pub fn encode(difficulty: Option<Difficulty>) -> Option<&'static str> {
    difficulty.map(Difficulty::code)
}

/// Convert a column value back to a difficulty.
///
/// A missing or empty code means "no difficulty set" and is not an error.
pub fn decode(code: Option<&str>) -> Result<Option<Difficulty>, CoreError> {
    match code {
        None | Some("") => Ok(None),
        Some(code) => Difficulty::from_code(code).map(Some),
    }
}
