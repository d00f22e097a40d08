use crate::error::GenError;

/// Canonical variant identifier for a raw mnemonic: the token lowercased,
/// then the first character uppercased (`"ADD"` → `"Add"`, `"LD"` → `"Ld"`).
///
/// Anything outside plain ASCII-alphabetic tokens is rejected rather than
/// turned into an identifier the generated enum could not compile with.
pub fn normalize(mnemonic: &str) -> Result<String, GenError> {
    if mnemonic.is_empty() || !mnemonic.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(GenError::InvalidMnemonic(mnemonic.to_string()));
    }
    let mut ident = mnemonic.to_ascii_lowercase();
    ident[..1].make_ascii_uppercase();
    Ok(ident)
}
