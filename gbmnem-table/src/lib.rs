//! Parser for gb-opcodes style SM83 instruction tables.

pub mod error;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

pub use error::TableError;

/// A group of instruction entries, keyed by opcode (e.g. `"0x00"`).
///
/// The keys are opaque here; nothing downstream depends on them beyond
/// uniqueness, and output ordering never derives from map order.
pub type OpcodeGroup = BTreeMap<String, OpcodeEntry>;

/// The root opcode document: single-byte instructions in `unprefixed`,
/// two-byte `0xCB`-prefixed instructions in `cbprefixed`. A document
/// missing either group fails to parse.
#[derive(Debug, Deserialize)]
pub struct OpcodeTable {
    pub unprefixed: OpcodeGroup,
    pub cbprefixed: OpcodeGroup,
}

/// One instruction entry. Real tables carry more fields (`bytes`,
/// `cycles`, `flags`, `immediate`); only the mnemonic and the operand
/// names matter here, the rest is ignored on deserialization.
///
/// `mnemonic` stays optional at this layer: a missing field is diagnosed
/// during vocabulary extraction, with the group and opcode key at hand.
#[derive(Debug, Deserialize)]
pub struct OpcodeEntry {
    pub mnemonic: Option<String>,
    #[serde(default)]
    pub operands: Vec<Operand>,
}

/// A named operand slot of an instruction entry.
#[derive(Debug, Deserialize)]
pub struct Operand {
    pub name: String,
}

impl OpcodeTable {
    /// Parse an opcode table from a JSON document already in memory.
    pub fn parse(json: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(json)?;
        log::debug!(
            "parsed opcode table: {} unprefixed, {} cbprefixed entries",
            table.unprefixed.len(),
            table.cbprefixed.len()
        );
        Ok(table)
    }

    /// Read and parse an opcode table from a file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                TableError::NotFound(path.to_path_buf())
            } else {
                TableError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse(&json)
    }
}
