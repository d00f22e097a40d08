//! Mnemonic normalization: pure, total over alphabetic tokens, and a hard
//! failure on anything else.

use gbmnem_gen::GenError;
use gbmnem_gen::ident::normalize;

#[test]
fn uppercase_tokens_become_capitalized() {
    assert_eq!(normalize("ADD").unwrap(), "Add");
    assert_eq!(normalize("LD").unwrap(), "Ld");
    assert_eq!(normalize("NOP").unwrap(), "Nop");
    assert_eq!(normalize("RETI").unwrap(), "Reti");
}

#[test]
fn lowercase_and_mixed_tokens_normalize_too() {
    assert_eq!(normalize("rst").unwrap(), "Rst");
    assert_eq!(normalize("sWaP").unwrap(), "Swap");
}

#[test]
fn single_letter_mnemonics_work() {
    assert_eq!(normalize("s").unwrap(), "S");
    assert_eq!(normalize("S").unwrap(), "S");
}

#[test]
fn normalization_is_idempotent() {
    let once = normalize("SCF").unwrap();
    assert_eq!(normalize(&once).unwrap(), once);
}

#[test]
fn uppercasing_a_normalized_ident_recovers_the_wire_name() {
    // The generated enum deserializes with an UPPERCASE rename rule, so
    // every variant must round-trip back to its raw table spelling.
    for raw in ["NOP", "LD", "RLC", "DAA", "XOR"] {
        assert_eq!(normalize(raw).unwrap().to_ascii_uppercase(), raw);
    }
}

#[test]
fn empty_token_is_rejected() {
    assert_eq!(
        normalize("").unwrap_err(),
        GenError::InvalidMnemonic(String::new())
    );
}

#[test]
fn tokens_with_digits_or_punctuation_are_rejected() {
    for bad in ["ILLEGAL_D3", "RST38", "LD A", "LD.W", "ÜBER"] {
        let err = normalize(bad).unwrap_err();
        assert_eq!(err, GenError::InvalidMnemonic(bad.to_string()), "{bad}");
    }
}
