use std::collections::BTreeSet;

use gbmnem_table::{OpcodeGroup, OpcodeTable};

use crate::error::GenError;

/// The distinct raw vocabularies of an opcode table.
///
/// Mnemonics are deduplicated per group on their original spelling;
/// many opcodes sharing a mnemonic (all the `LD` variants, say) collapse
/// to a single member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub unprefixed: BTreeSet<String>,
    pub cb_prefixed: BTreeSet<String>,
    pub operand_names: BTreeSet<String>,
}

impl Vocabulary {
    /// Walk both instruction groups and collect the three vocabularies.
    ///
    /// Operand names are collected from the `unprefixed` group only; the
    /// `cbprefixed` group never contributes to the name set.
    pub fn extract(table: &OpcodeTable) -> Result<Self, GenError> {
        let unprefixed = group_mnemonics("unprefixed", &table.unprefixed)?;
        let cb_prefixed = group_mnemonics("cbprefixed", &table.cbprefixed)?;

        let mut operand_names = BTreeSet::new();
        for entry in table.unprefixed.values() {
            for operand in &entry.operands {
                operand_names.insert(operand.name.clone());
            }
        }

        Ok(Self {
            unprefixed,
            cb_prefixed,
            operand_names,
        })
    }
}

fn group_mnemonics(
    group: &'static str,
    entries: &OpcodeGroup,
) -> Result<BTreeSet<String>, GenError> {
    let mut mnemonics = BTreeSet::new();
    for (key, entry) in entries {
        let mnemonic = entry.mnemonic.as_ref().ok_or_else(|| {
            GenError::MissingMnemonic {
                group,
                key: key.clone(),
            }
        })?;
        mnemonics.insert(mnemonic.clone());
    }
    Ok(mnemonics)
}
