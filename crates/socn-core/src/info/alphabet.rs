//! The canonical amino-acid alphabet.
//!
//! Residues are a closed enumeration so that every distance lookup
//! is an array index rather than a string-keyed map lookup.
use strum::{Display, EnumIter};

/// Number of canonical amino acids.
pub const NUM_AMINO_ACIDS: usize = 20;

macro_rules! define_amino_acids {
    ($($name:ident: $code3:expr, $code1:literal, $idx:literal),* $(,)?) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
        pub enum AminoAcid {
            $($name),*
        }

        impl AminoAcid {
            pub const fn code3(&self) -> &'static str {
                match self {
                    $(Self::$name => $code3),*
                }
            }
            pub const fn code1(&self) -> char {
                match self {
                    $(Self::$name => $code1),*
                }
            }
            /// Row/column of this residue in a distance table.
            pub const fn index(&self) -> usize {
                match self {
                    $(Self::$name => $idx),*
                }
            }
            /// Upper-case one-letter code to residue. Anything else is `None`.
            pub const fn from_code1(code: char) -> Option<Self> {
                match code {
                    $($code1 => Some(Self::$name),)*
                    _ => None,
                }
            }
            pub const fn from_index(idx: usize) -> Option<Self> {
                match idx {
                    $($idx => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    }
}

define_amino_acids! {
    ALA: "ALA", 'A', 0,
    ARG: "ARG", 'R', 1,
    ASN: "ASN", 'N', 2,
    ASP: "ASP", 'D', 3,
    CYS: "CYS", 'C', 4,
    GLN: "GLN", 'Q', 5,
    GLU: "GLU", 'E', 6,
    GLY: "GLY", 'G', 7,
    HIS: "HIS", 'H', 8,
    ILE: "ILE", 'I', 9,
    LEU: "LEU", 'L', 10,
    LYS: "LYS", 'K', 11,
    MET: "MET", 'M', 12,
    PHE: "PHE", 'F', 13,
    PRO: "PRO", 'P', 14,
    SER: "SER", 'S', 15,
    THR: "THR", 'T', 16,
    TRP: "TRP", 'W', 17,
    TYR: "TYR", 'Y', 18,
    VAL: "VAL", 'V', 19,
}
