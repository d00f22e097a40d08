//! Mnemonic-enum generation over a parsed opcode table.

pub mod emitter;
pub mod error;
pub mod ident;
pub mod vocab;

pub use error::GenError;
pub use vocab::Vocabulary;

use std::collections::BTreeSet;

use gbmnem_table::OpcodeTable;

/// Generate the complete enum block for an opcode table.
///
/// Extracts the mnemonic and operand-name vocabularies, normalizes every
/// mnemonic into identifier form, and renders the final text. All
/// validation happens before rendering starts, so a returned `Ok` is the
/// whole block and an `Err` means nothing was produced.
pub fn generate(table: &OpcodeTable) -> Result<String, GenError> {
    let vocab = Vocabulary::extract(table)?;
    log::debug!(
        "vocabulary: {} unprefixed + {} cbprefixed mnemonics, {} operand names",
        vocab.unprefixed.len(),
        vocab.cb_prefixed.len(),
        vocab.operand_names.len()
    );

    let unprefixed = normalize_set(&vocab.unprefixed)?;
    let cb_prefixed = normalize_set(&vocab.cb_prefixed)?;

    Ok(emitter::render(&unprefixed, &cb_prefixed, &vocab.operand_names))
}

/// Normalize a raw mnemonic set into sorted identifier form.
fn normalize_set(raw: &BTreeSet<String>) -> Result<BTreeSet<String>, GenError> {
    raw.iter().map(|mnemonic| ident::normalize(mnemonic)).collect()
}
