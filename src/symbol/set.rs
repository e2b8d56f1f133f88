//! 4-bit subset encoding of {A, C, G, T} underlying the consensus operator.

use std::ops::BitOr;

use super::fold_case;

const A: u8 = 0b0001;
const C: u8 = 0b0010;
const G: u8 = 0b0100;
const T: u8 = 0b1000;

/// Letter for every bit pattern, indexed by the pattern itself.
/// Index 0 (the empty set) has no letter.
const LETTERS: [u8; 16] = [
    0, b'A', b'C', b'M', b'G', b'R', b'S', b'V', b'T', b'W', b'Y', b'H', b'K', b'D', b'B', b'N',
];

/// The subset of {A, C, G, T} that a base or ambiguity letter stands for.
///
/// The 15 non-empty subsets map bijectively to the 15 letters of the
/// alphabet; combining two symbols is set union followed by reverse lookup.
/// Gaps and the missing marker carry no set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleotideSet(u8);

impl NucleotideSet {
    /// Looks up the set underlying a base or ambiguity letter.
    /// Lowercase input is folded with the same boundary rule as
    /// [`is_valid`](super::is_valid); gaps, missing and unrecognized
    /// bytes have no set.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        let bits = match fold_case(symbol) {
            b'A' => A,
            b'C' => C,
            b'G' => G,
            b'T' => T,
            b'R' => A | G,
            b'Y' => C | T,
            b'K' => G | T,
            b'M' => A | C,
            b'S' => C | G,
            b'W' => A | T,
            b'B' => C | G | T,
            b'D' => A | G | T,
            b'H' => A | C | T,
            b'V' => A | C | G,
            b'N' => A | C | G | T,
            _ => return None,
        };
        Some(Self(bits))
    }

    /// The letter encoding this set, or `None` for the empty set.
    pub fn symbol(self) -> Option<u8> {
        match LETTERS[self.0 as usize] {
            0 => None,
            letter => Some(letter),
        }
    }

    /// Number of bases in the set.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if the two sets share at least one base.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for NucleotideSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
