//! Sequence-order coupling numbers.
//!
//! For a sequence `s` of length `N` and a distance table `T`, the coupling
//! number at lag `d` is
//!
//! ```text
//! tau_T(d) = sum_{i=1}^{N-d} T(s[i], s[i+d])^2
//! ```
//!
//! Each pairwise distance is squared before it is added to the sum.
//! Results for several tables are concatenated table by table, lags
//! ascending within each table.
use crate::error::{Result, SocnError};
use crate::info::scales::{DistanceScale, DistanceTable};
use crate::sequence::ProteinSequence;
use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Maximum lag used when none is configured.
pub const DEFAULT_MAX_LAG: usize = 30;

/// One named coupling number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocnValue {
    pub label: String,
    pub scale: String,
    pub lag: usize,
    pub value: f64,
}

/// Ordered coupling numbers for one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocnDescriptor {
    values: Vec<SocnValue>,
}

impl SocnDescriptor {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SocnValue> {
        self.values.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.value).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.label.as_str()).collect()
    }

    /// Look up a value by label, e.g. `"grantham.lag3"`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.label == label)
            .map(|v| v.value)
    }
}

impl IntoIterator for SocnDescriptor {
    type Item = SocnValue;
    type IntoIter = std::vec::IntoIter<SocnValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a SocnDescriptor {
    type Item = &'a SocnValue;
    type IntoIter = std::slice::Iter<'a, SocnValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Label for one output column.
pub fn socn_label(scale: &str, lag: usize) -> String {
    format!("{scale}.lag{lag}")
}

/// Column labels in output order, without computing anything.
pub fn socn_labels(max_lag: usize, scales: &[DistanceScale]) -> Vec<String> {
    scales
        .iter()
        .flat_map(|scale| (1..=max_lag).map(move |lag| socn_label(scale.name(), lag)))
        .collect()
}

/// Sum of squared distances between residues `lag` apart, for every lag
/// in `1..=max_lag`.
///
/// A lag equal to the sequence length has no residue pairs and yields `0.0`.
pub fn lag_sums(sequence: &ProteinSequence, table: &DistanceTable, max_lag: usize) -> Vec<f64> {
    let residues = sequence.residues();
    (1..=max_lag)
        .map(|lag| {
            residues
                .iter()
                .zip(residues.iter().skip(lag))
                .map(|(&a, &b)| {
                    let d = table.distance(a, b);
                    d * d
                })
                .sum::<f64>()
        })
        .collect()
}

fn check_lag(max_lag: usize) -> Result<()> {
    if max_lag == 0 {
        return Err(SocnError::InvalidLag { max_lag });
    }
    Ok(())
}

/// Coupling numbers of a validated sequence against arbitrary tables.
pub fn compute_socn_with(
    sequence: &ProteinSequence,
    max_lag: usize,
    tables: &[&DistanceTable],
) -> Result<SocnDescriptor> {
    check_lag(max_lag)?;
    if sequence.len() < max_lag {
        return Err(SocnError::SequenceTooShort {
            length: sequence.len(),
            max_lag,
        });
    }

    let mut values = Vec::with_capacity(tables.len() * max_lag);
    for table in tables {
        let sums = lag_sums(sequence, table, max_lag);
        values.extend(sums.into_iter().enumerate().map(|(i, value)| SocnValue {
            label: socn_label(table.name(), i + 1),
            scale: table.name().to_string(),
            lag: i + 1,
            value,
        }));
    }
    Ok(SocnDescriptor { values })
}

/// Coupling numbers against both packaged scales, `2 * max_lag` values.
///
/// ```
/// let socn = socn_core::compute_socn("ACDEFGHIKL", 2).unwrap();
/// assert_eq!(socn.labels(), ["physchem.lag1", "physchem.lag2", "grantham.lag1", "grantham.lag2"]);
/// assert_eq!(socn.get("grantham.lag1"), Some(147068.0));
/// ```
pub fn compute_socn(sequence: &str, max_lag: usize) -> Result<SocnDescriptor> {
    SocnConfig::builder().max_lag(max_lag).build().compute(sequence)
}

/// Settings for a coupling-number computation.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SocnConfig {
    #[builder(default = DEFAULT_MAX_LAG)]
    max_lag: usize,
    /// Tables to use, in output order.
    #[builder(default = DistanceScale::iter().collect())]
    scales: Vec<DistanceScale>,
}

impl Default for SocnConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SocnConfig {
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    pub fn scales(&self) -> &[DistanceScale] {
        &self.scales
    }

    pub fn labels(&self) -> Vec<String> {
        socn_labels(self.max_lag, &self.scales)
    }

    /// Validate `sequence` and compute its coupling numbers.
    ///
    /// Checks run in order: lag, sequence symbols, sequence length.
    pub fn compute(&self, sequence: &str) -> Result<SocnDescriptor> {
        check_lag(self.max_lag)?;
        let sequence = ProteinSequence::new(sequence)?;
        let tables = self
            .scales
            .iter()
            .map(|scale| scale.table())
            .collect::<Result<Vec<_>>>()?;
        compute_socn_with(&sequence, self.max_lag, &tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::alphabet::AminoAcid;
    use socn_test_data::sequences::{INSULIN_B, TOY, UBIQUITIN};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_toy_sequence_lag2() {
        let socn = compute_socn(TOY, 2).unwrap();
        assert_eq!(socn.len(), 4);
        assert_eq!(
            socn.labels(),
            vec!["physchem.lag1", "physchem.lag2", "grantham.lag1", "grantham.lag2"]
        );
        let values = socn.values();
        assert_close(values[0], 81.32727576);
        assert_close(values[1], 58.63454486);
        assert_eq!(values[2], 147068.0);
        assert_eq!(values[3], 114983.0);
    }

    #[test]
    fn test_matches_hand_computed_sum() {
        // lag 1 over ACDEFGHIKL on the Grantham scale
        let pairs = [195.0, 154.0, 45.0, 140.0, 153.0, 98.0, 94.0, 102.0, 107.0];
        let expected: f64 = pairs.iter().map(|d| d * d).sum();
        let socn = compute_socn(TOY, 1).unwrap();
        assert_eq!(socn.get("grantham.lag1"), Some(expected));
    }

    #[test]
    fn test_lag_equal_to_length_is_zero() {
        let socn = compute_socn(TOY, TOY.len()).unwrap();
        assert_eq!(socn.len(), 2 * TOY.len());
        assert_eq!(socn.get("physchem.lag10"), Some(0.0));
        assert_eq!(socn.get("grantham.lag10"), Some(0.0));
        assert_eq!(socn.get("grantham.lag9"), Some(9216.0));

        let seq = ProteinSequence::new("W").unwrap();
        let table = DistanceScale::Grantham.table().unwrap();
        assert_eq!(lag_sums(&seq, table, 1), vec![0.0]);
    }

    #[test]
    fn test_default_lag() {
        let config = SocnConfig::default();
        assert_eq!(config.max_lag(), DEFAULT_MAX_LAG);
        assert_eq!(config.scales(), &[DistanceScale::Physchem, DistanceScale::Grantham]);

        let socn = config.compute(UBIQUITIN).unwrap();
        assert_eq!(socn.len(), 60);
        assert_eq!(socn.labels()[30], "grantham.lag1");

        let socn = config.compute(INSULIN_B).unwrap();
        assert_eq!(socn.get("grantham.lag30"), Some(0.0));
    }

    #[test]
    fn test_single_scale_config() {
        let config = SocnConfig::builder()
            .max_lag(3)
            .scales(vec![DistanceScale::Grantham])
            .build();
        assert_eq!(config.labels(), vec!["grantham.lag1", "grantham.lag2", "grantham.lag3"]);
        let socn = config.compute("ACD").unwrap();
        assert_eq!(socn.values(), vec![61741.0, 15876.0, 0.0]);
    }

    #[test]
    fn test_toy_table() {
        let flat = DistanceTable::from_fn("flat", |a, b| if a == b { 0.0 } else { 2.0 }).unwrap();
        let seq = ProteinSequence::new(TOY).unwrap();
        let socn = compute_socn_with(&seq, 3, &[&flat, &flat]).unwrap();
        // every pair differs, so each term is 4 and lag d has N - d terms
        assert_eq!(socn.values(), vec![36.0, 32.0, 28.0, 36.0, 32.0, 28.0]);

        let repeat = ProteinSequence::new("GGGG").unwrap();
        let socn = compute_socn_with(&repeat, 2, &[&flat]).unwrap();
        assert_eq!(socn.values(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_squares_before_summing() {
        let by_index = DistanceTable::from_fn("index", |a, b| {
            (a.index() as f64 - b.index() as f64).abs()
        })
        .unwrap();
        // A=0, R=1, N=2: lag 1 terms are 1 and 1 -> 2, not (1 + 1)^2
        let seq = ProteinSequence::new("ARN").unwrap();
        let socn = compute_socn_with(&seq, 2, &[&by_index]).unwrap();
        assert_eq!(socn.values(), vec![2.0, 4.0]);
        assert_eq!(by_index.distance(AminoAcid::ALA, AminoAcid::ASN), 2.0);
    }

    #[test]
    fn test_concurrent_callers_share_tables() {
        let expected = compute_socn(UBIQUITIN, 30).unwrap();
        let bits = |d: &SocnDescriptor| d.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();

        let results: Vec<(Vec<u64>, usize, usize)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let socn = compute_socn(UBIQUITIN, 30).unwrap();
                        let physchem = DistanceScale::Physchem.table().unwrap();
                        let grantham = DistanceScale::Grantham.table().unwrap();
                        (
                            bits(&socn),
                            physchem as *const DistanceTable as usize,
                            grantham as *const DistanceTable as usize,
                        )
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let physchem = DistanceScale::Physchem.table().unwrap() as *const DistanceTable as usize;
        let grantham = DistanceScale::Grantham.table().unwrap() as *const DistanceTable as usize;
        for (values, p, g) in results {
            assert_eq!(values, bits(&expected));
            assert_eq!(p, physchem);
            assert_eq!(g, grantham);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            compute_socn("ACDXF", 2),
            Err(SocnError::InvalidSequence {
                symbol: 'X',
                position: 4
            })
        );
        assert_eq!(
            compute_socn(TOY, 11),
            Err(SocnError::SequenceTooShort {
                length: 10,
                max_lag: 11
            })
        );
        assert_eq!(compute_socn(TOY, 0), Err(SocnError::InvalidLag { max_lag: 0 }));
        assert_eq!(compute_socn("", 1), Err(SocnError::EmptySequence));
        // symbols are checked before length
        assert!(matches!(
            compute_socn("AZ", 5),
            Err(SocnError::InvalidSequence { symbol: 'Z', .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = compute_socn(TOY, 12).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sequence of length 10 is shorter than the maximum lag 12"
        );
    }

    #[test]
    fn test_serialize() {
        let socn = compute_socn("ACD", 1).unwrap();
        let json = serde_json::to_value(&socn).unwrap();
        assert_eq!(json["values"][1]["label"], "grantham.lag1");
        assert_eq!(json["values"][1]["lag"], 1);
        let back: SocnDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, socn);
    }
}
