//! Game configuration.

use std::fmt;

use crate::board::SymbolSet;

/// Plies without a capture or pawn move that end the game in a draw.
pub const DEFAULT_FIFTY_PLY_LIMIT: u32 = 50;

/// Error type for rejected option assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Settings of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Draw after this many quiet plies; 0 turns the rule off
    pub fifty_ply_limit: u32,
    /// Characters used by the board render
    pub symbols: SymbolSet,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            fifty_ply_limit: DEFAULT_FIFTY_PLY_LIMIT,
            symbols: SymbolSet::Unicode,
        }
    }
}

impl GameOptions {
    /// Set one option by name. Names are case-insensitive.
    ///
    /// - `fifty ply limit` / `fifty`: non-negative integer
    /// - `symbols`: `unicode` or `ascii`
    /// - `ascii`: `true`/`false` (shorthand for `symbols`)
    ///
    /// # Errors
    ///
    /// Returns [`OptionError`] for an unknown name or a value that does not
    /// parse; the options are left unchanged.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value_norm = value.trim().to_ascii_lowercase();
        let invalid = || OptionError::InvalidValue {
            name: name.trim().to_string(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "fifty ply limit" | "fifty-ply-limit" | "fifty" => {
                self.fifty_ply_limit = value_norm.parse::<u32>().map_err(|_| invalid())?;
            }
            "symbols" => {
                self.symbols = match value_norm.as_str() {
                    "unicode" => SymbolSet::Unicode,
                    "ascii" => SymbolSet::Ascii,
                    _ => return Err(invalid()),
                };
            }
            "ascii" => {
                self.symbols = match value_norm.as_str() {
                    "true" | "1" | "yes" => SymbolSet::Ascii,
                    "false" | "0" | "no" => SymbolSet::Unicode,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.trim().to_string(),
                })
            }
        }
        Ok(())
    }
}
