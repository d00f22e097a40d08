use std::collections::BTreeSet;
use std::fmt::Write;

/// Render the mnemonic enum as Rust source text, followed by the raw
/// operand-name set on its own line as a diagnostic.
///
/// Inputs are already-normalized identifiers; `BTreeSet` iteration gives
/// the lexicographic variant order, so the block is byte-identical for any
/// two tables with the same vocabularies. The `serde` attribute on the
/// generated enum maps each variant back to its original uppercase
/// spelling on the wire.
pub fn render(
    unprefixed: &BTreeSet<String>,
    cb_prefixed: &BTreeSet<String>,
    operand_names: &BTreeSet<String>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "/// Enum representing all possible opcode mnemonics.");
    let _ = writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]");
    let _ = writeln!(out, "#[serde(rename_all = \"UPPERCASE\")]");
    let _ = writeln!(out, "pub enum OpcodeMnemonic {{");

    for ident in unprefixed {
        let _ = writeln!(out, "    {ident},");
    }

    let _ = writeln!(out, "    // CB-Prefixed Opcodes");
    for ident in cb_prefixed {
        let _ = writeln!(out, "    {ident},");
    }

    let _ = writeln!(out, "}}");
    let _ = writeln!(out, "{operand_names:?}");

    out
}
