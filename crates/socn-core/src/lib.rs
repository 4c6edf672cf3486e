//! # socn-core
//!
//! Sequence-order coupling numbers (SOCN) for protein sequences.
//!
//! __socn-core__ provides functionality for:
//! * Validating protein sequences against the 20 canonical amino acids
//! * Physicochemical distance tables between amino-acid pairs, loaded once per process
//! * Per-lag sums of squared distances between residues `d` positions apart
//! * Assembling results for many sequences into a [`polars`] `DataFrame`
//!
//! The main entry point is [`compute_socn`], or [`SocnConfig`] for non-default settings.
//!
//! ```
//! use socn_core::{SocnConfig, DistanceScale};
//!
//! let config = SocnConfig::builder()
//!     .max_lag(3)
//!     .scales(vec![DistanceScale::Grantham])
//!     .build();
//! let socn = config.compute("ACDEFGHIKL").unwrap();
//! assert_eq!(socn.labels(), ["grantham.lag1", "grantham.lag2", "grantham.lag3"]);
//! ```
//!
mod descriptor;
mod error;
mod featurize;
mod info;
mod sequence;

pub use self::descriptor::{ChiDescriptor, DescriptorValues, MolecularDescriptorEngine};
pub use self::error::{Result, SocnError};
pub use self::featurize::{
    compute_socn, compute_socn_with, descriptor_frame, lag_sums, socn_frame, socn_label, socn_labels, SocnConfig,
    SocnDescriptor, SocnValue, DEFAULT_MAX_LAG,
};
pub use self::info::alphabet::{AminoAcid, NUM_AMINO_ACIDS};
pub use self::info::scales::{load_distance_tables, DistanceScale, DistanceTable};
pub use self::sequence::{is_valid_protein, ProteinSequence};
