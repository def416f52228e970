//! Parser error types.

use thiserror::Error;

/// Error while turning header text into a binding model.
///
/// Every variant is fatal for the whole run: the CLI never writes a partial
/// binding file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown type `{token}` in declaration of `{function}`")]
    UnknownType { token: String, function: String },

    #[error("malformed parameter `{segment}` in declaration of `{function}`: expected `<type> <name>`")]
    MalformedParameter { segment: String, function: String },
}
