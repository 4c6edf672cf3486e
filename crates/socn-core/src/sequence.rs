//! Protein sequences over the canonical alphabet.

use crate::error::{Result, SocnError};
use crate::info::alphabet::AminoAcid;
use std::fmt;
use std::str::FromStr;

/// True when every character is one of the 20 canonical one-letter codes.
///
/// Case sensitive. The empty string is vacuously valid here;
/// [`ProteinSequence::new`] rejects it separately.
pub fn is_valid_protein(sequence: &str) -> bool {
    sequence.chars().all(|c| AminoAcid::from_code1(c).is_some())
}

/// A validated, immutable protein sequence with at least one residue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
}

impl ProteinSequence {
    /// Validate `sequence`, reporting the first offending symbol.
    pub fn new(sequence: &str) -> Result<Self> {
        if sequence.is_empty() {
            return Err(SocnError::EmptySequence);
        }
        let residues = sequence
            .chars()
            .enumerate()
            .map(|(i, symbol)| {
                AminoAcid::from_code1(symbol).ok_or(SocnError::InvalidSequence {
                    symbol,
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ProteinSequence { residues })
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Never true for a validated sequence.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl FromStr for ProteinSequence {
    type Err = SocnError;

    fn from_str(s: &str) -> Result<Self> {
        ProteinSequence::new(s)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.residues
            .iter()
            .try_for_each(|aa| write!(f, "{}", aa.code1()))
    }
}
