use thiserror::Error;

/// Errors from vocabulary extraction and mnemonic normalization.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenError {
    /// An entry in the named group has no `mnemonic` field.
    #[error("opcode {key} in the {group} group has no mnemonic")]
    MissingMnemonic { group: &'static str, key: String },

    /// A mnemonic that cannot become a valid variant identifier
    /// (empty, or containing non-alphabetic characters).
    #[error("mnemonic {0:?} is not a plain alphabetic token")]
    InvalidMnemonic(String),
}
