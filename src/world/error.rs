use thiserror::Error;

use super::validator::ValidationError;

/// Errors raised while turning a world file into a playable `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The world file is not valid TOML or does not match the expected layout.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} may not be empty")]
    Empty(&'static str),

    #[error("duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },

    #[error("unknown item kind '{kind}' on item '{item}'")]
    UnknownKind { item: String, kind: String },

    /// The world parsed, but references do not line up.
    #[error("invalid world: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}
