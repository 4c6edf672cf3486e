//! socn-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Sequence fixtures are included in the crate distribution as FASTA text.
//!
//! The test files are represented as `TestFile` objects which package the raw data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use socn_test_data::TestFile;
/// let (fasta_file, _temp) = TestFile::proteins_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Human ubiquitin (wrapped over two lines), insulin B chain (30 residues)
    /// and a 10 residue toy peptide.
    pub fn proteins_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/proteins.fasta"),
            suffix: "fasta",
        }
    }
    /// Two 22 residue peptides; the second carries a non-canonical `X`.
    pub fn invalid_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/invalid.fasta"),
            suffix: "fasta",
        }
    }

    /// Raw file contents.
    pub fn contents(&self) -> &'static str {
        std::str::from_utf8(self.filebinary).unwrap_or_default()
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

/// Named sequences shared by the unit tests.
pub mod sequences {
    /// Ten distinct residues; handy for hand-computed lag sums.
    pub const TOY: &str = "ACDEFGHIKL";
    /// Human insulin B chain, exactly 30 residues.
    pub const INSULIN_B: &str = "FVNQHLCGSHLVEALYLVCGERGFFYTPKT";
    /// Human ubiquitin, 76 residues.
    pub const UBIQUITIN: &str =
        "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG";
}
