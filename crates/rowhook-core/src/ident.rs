//! SQL identifier and literal quoting.
//!
//! Trigger and table names land in DDL identifier positions where bind
//! parameters cannot protect them, so every name is allowlisted before
//! any statement text is built.

use thiserror::Error;

/// A name that cannot safely appear in an identifier position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not a safe SQL identifier")]
pub struct InvalidIdentifier(pub String);

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`; everything else is rejected.
pub fn check_identifier(name: &str) -> Result<&str, InvalidIdentifier> {
    let mut chars = name.chars();
    let ok = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if ok {
        Ok(name)
    } else {
        Err(InvalidIdentifier(name.to_string()))
    }
}

/// Double-quote a checked identifier for interpolation into DDL.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Single-quote a string literal for interpolation into DDL.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
