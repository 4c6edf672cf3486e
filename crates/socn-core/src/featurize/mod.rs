//! Sequence-order featurizers
//!
//! Returns a set of features calculated from a protein sequence:
//! - Sequence-order coupling numbers per lag and distance scale
//! - Tabular assembly of those numbers for batches of sequences
mod frame;
mod socn;

pub use frame::{descriptor_frame, socn_frame};
pub use socn::{
    compute_socn, compute_socn_with, lag_sums, socn_label, socn_labels, SocnConfig,
    SocnDescriptor, SocnValue, DEFAULT_MAX_LAG,
};
