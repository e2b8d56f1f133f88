//! Single-symbol algebra over the IUPAC nucleotide alphabet.
//!
//! The alphabet consists of the four bases `ACGT`, the eleven ambiguity
//! codes `RYKMSWBDHVN`, the internal gap `-`, the external gap `_` and the
//! missing-data marker `?`. All operations are pure functions of their
//! byte input(s) evaluated against compile-time tables.

use phf::phf_map;
use strum_macros::Display;

pub mod set;

pub use self::set::NucleotideSet;

/// Internal gap, arising from an alignment insertion.
pub const GAP: u8 = b'-';
/// External gap at the unaligned flanking ends of a sequence.
pub const EXTERNAL_GAP: u8 = b'_';
/// Missing-data marker. Not the same as N ("could be any base").
pub const MISSING: u8 = b'?';

/// Uppercases a lowercase letter strictly between `a` and `z`.
///
/// Both endpoints are excluded: `a` and `z` are never folded, so they fail
/// every membership test even though `A`-adjacent letters would pass.
/// Downstream files depend on this boundary behaviour; do not widen it.
pub(crate) fn fold_case(symbol: u8) -> u8 {
    if symbol > b'a' && symbol < b'z' {
        symbol - (b'a' - b'A')
    } else {
        symbol
    }
}

/// Checks whether a byte is part of the symbol alphabet.
/// Mostly useful during sanity checks.
pub fn is_valid(symbol: u8) -> bool {
    NucleotideSet::from_symbol(symbol).is_some() || matches!(symbol, GAP | EXTERNAL_GAP | MISSING)
}

/// True for the eleven ambiguity codes (a set of two or more bases);
/// false for bases, gaps, missing and unrecognized bytes.
pub fn is_ambiguous(symbol: u8) -> bool {
    NucleotideSet::from_symbol(symbol).is_some_and(|set| set.len() > 1)
}

/// True for symbols whose set is a non-empty subset of {A, G}:
/// the bases A and G, and the two-base code R.
pub fn is_purine(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'G' | b'R')
}

/// True for symbols whose set is a non-empty subset of {C, T}:
/// the bases C and T, and the two-base code Y.
pub fn is_pyrimidine(symbol: u8) -> bool {
    matches!(symbol, b'C' | b'T' | b'Y')
}

pub fn is_missing(symbol: u8) -> bool {
    symbol == MISSING
}

/// True for both the internal (`-`) and the external (`_`) gap.
pub fn is_gap(symbol: u8) -> bool {
    symbol == GAP || symbol == EXTERNAL_GAP
}

pub fn is_internal_gap(symbol: u8) -> bool {
    symbol == GAP
}

static COMPLEMENT: phf::Map<u8, u8> = phf_map! {
    b'A' => b'T',
    b'T' => b'A',
    b'C' => b'G',
    b'G' => b'C',
    b'R' => b'Y',
    b'Y' => b'R',
    b'K' => b'M',
    b'M' => b'K',
    b'S' => b'W',
    b'W' => b'S',
    b'N' => b'N',
    b'-' => b'-',
    b'_' => b'_',
    b'?' => b'?',
};

/// The complementary symbol: bases pair `A↔T` and `C↔G`, the two-base codes
/// pair with their mirror code, N and the gap/missing markers map to
/// themselves. Everything else — including lowercase input and the
/// three-base codes B, D, H and V, which have no involutive partner —
/// has no defined complement and yields `None`.
pub fn complement(symbol: u8) -> Option<u8> {
    COMPLEMENT.get(&symbol).copied()
}

/// Combines two symbols into the one representing "either could be true
/// here". Commutative; idempotent on bases and ambiguity codes.
///
/// Most specific rule first:
/// 1. missing data absorbs everything, including itself;
/// 2. two gaps combine to a gap, the internal gap dominating the external;
/// 3. a single gap is the identity against real sequence data;
/// 4. otherwise the result encodes the union of the two nucleotide sets.
///
/// An unrecognized byte reaching the set branch (rules 3 and 4) makes the
/// result undefined, yielding `None`.
pub fn consensus(a: u8, b: u8) -> Option<u8> {
    if a == MISSING || b == MISSING {
        return Some(MISSING);
    }
    if is_gap(a) && is_gap(b) {
        return Some(if a == GAP || b == GAP { GAP } else { EXTERNAL_GAP });
    }
    if is_gap(a) {
        return NucleotideSet::from_symbol(b).map(|_| b);
    }
    if is_gap(b) {
        return NucleotideSet::from_symbol(a).map(|_| a);
    }
    let set_a = NucleotideSet::from_symbol(a)?;
    let set_b = NucleotideSet::from_symbol(b)?;
    (set_a | set_b).symbol()
}

/// Symbol-level identity, gap-aware.
///
/// Invalid input and missing data never match. External gaps are alignment
/// artifacts and never match either; an internal gap matches only another
/// internal gap. With `ambiguities`, two letters count as identical when
/// their sets share at least one base (N matches everything); without,
/// ambiguity codes are collapsed to N before an exact comparison.
pub fn identical(a: u8, b: u8, ambiguities: bool) -> bool {
    if !is_valid(a) || !is_valid(b) {
        return false;
    }
    let a = fold_case(a);
    let b = fold_case(b);
    if a == MISSING || b == MISSING {
        return false;
    }
    if is_gap(a) || is_gap(b) {
        return a == GAP && b == GAP;
    }
    if ambiguities {
        match (NucleotideSet::from_symbol(a), NucleotideSet::from_symbol(b)) {
            (Some(set_a), Some(set_b)) => set_a.intersects(set_b),
            _ => false,
        }
    } else {
        let collapse = |s: u8| if matches!(s, b'A' | b'C' | b'G' | b'T') { s } else { b'N' };
        collapse(a) == collapse(b)
    }
}

/// One-character summary of how two symbols line up vertically, for
/// pairwise sequence displays: `|` where the symbols match, a space where
/// they don't. Gaps and invalid input never produce a match bar.
pub fn match_char(a: u8, b: u8, ambiguities: bool) -> u8 {
    if !is_valid(a) || !is_valid(b) || is_gap(a) || is_gap(b) {
        return b' ';
    }
    if a == b
        || ambiguities
            && NucleotideSet::from_symbol(a)
                .zip(NucleotideSet::from_symbol(b))
                .is_some_and(|(set_a, set_b)| set_a.intersects(set_b))
    {
        b'|'
    } else {
        b' '
    }
}

/// Coarse classification of a symbol, mostly useful for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SymbolClass {
    Base,
    Ambiguous,
    Gap,
    ExternalGap,
    Missing,
    Unrecognized,
}

pub fn classify(symbol: u8) -> SymbolClass {
    match symbol {
        MISSING => SymbolClass::Missing,
        GAP => SymbolClass::Gap,
        EXTERNAL_GAP => SymbolClass::ExternalGap,
        _ => match NucleotideSet::from_symbol(symbol) {
            Some(set) if set.len() == 1 => SymbolClass::Base,
            Some(_) => SymbolClass::Ambiguous,
            None => SymbolClass::Unrecognized,
        },
    }
}
