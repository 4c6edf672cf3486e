//! # Distance Scales
//!
//! Physicochemical distance matrices between pairs of canonical amino acids.
//!
//! ## Packaged scales
//!
//! - `physchem` - Euclidean distance over z-scored Kyte-Doolittle hydropathy,
//!   Hopp-Woods hydrophilicity and side-chain mass (4 decimals).
//! - `grantham` - Grantham (1974) chemical distance.
//!
//! ## Data format
//!
//! Tab separated text. The header row is `#` followed by the 20 one-letter
//! codes; each following row is a one-letter code and its 20 distances.
//!
//! Packaged tables are parsed on first use and cached for the lifetime of the
//! process. Call [`load_distance_tables`] to pay that cost up front.
//!
use super::alphabet::{AminoAcid, NUM_AMINO_ACIDS};
use crate::error::{Result, SocnError};
use itertools::iproduct;
use log::debug;
use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Identifier of a packaged distance table.
///
/// Iteration order is the canonical output order of the descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DistanceScale {
    Physchem,
    Grantham,
}

static PHYSCHEM: OnceLock<Result<DistanceTable>> = OnceLock::new();
static GRANTHAM: OnceLock<Result<DistanceTable>> = OnceLock::new();

impl DistanceScale {
    /// Stable name used in output labels.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    fn source(&self) -> &'static str {
        match self {
            DistanceScale::Physchem => include_str!("scales/physchem.tsv"),
            DistanceScale::Grantham => include_str!("scales/grantham.tsv"),
        }
    }

    fn cell(&self) -> &'static OnceLock<Result<DistanceTable>> {
        match self {
            DistanceScale::Physchem => &PHYSCHEM,
            DistanceScale::Grantham => &GRANTHAM,
        }
    }

    /// The packaged table for this scale, parsed once per process.
    ///
    /// A load failure is cached too and returned on every call.
    pub fn table(&self) -> Result<&'static DistanceTable> {
        self.cell()
            .get_or_init(|| {
                debug!("loading distance table '{}'", self.name());
                DistanceTable::from_tsv(self.name(), self.source())
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

/// Force loading of every packaged table.
pub fn load_distance_tables() -> Result<()> {
    for scale in DistanceScale::iter() {
        scale.table()?;
    }
    Ok(())
}

/// A named, symmetric, fully populated 20x20 distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    name: String,
    distances: [[f64; NUM_AMINO_ACIDS]; NUM_AMINO_ACIDS],
}

impl DistanceTable {
    /// Parse a table from the packaged TSV layout.
    pub fn from_tsv(name: &str, text: &str) -> Result<Self> {
        let load_err = |reason: String| SocnError::TableLoad {
            table: name.to_string(),
            reason,
        };

        let mut lines = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| load_err("no header row".to_string()))?;
        let mut fields = header.split('\t');
        if fields.next() != Some("#") {
            return Err(load_err("header row must start with '#'".to_string()));
        }
        let columns = fields
            .map(|code| parse_code(code).ok_or_else(|| load_err(format!("unknown column '{code}'"))))
            .collect::<Result<Vec<AminoAcid>>>()?;
        if let Some(dup) = first_duplicate(&columns) {
            return Err(load_err(format!("duplicate column '{}'", dup.code1())));
        }

        let mut grid = [[None::<f64>; NUM_AMINO_ACIDS]; NUM_AMINO_ACIDS];
        let mut rows = Vec::with_capacity(NUM_AMINO_ACIDS);
        for (lineno, line) in lines.enumerate() {
            let mut fields = line.split('\t');
            let code = fields.next().unwrap_or_default();
            let row = parse_code(code)
                .ok_or_else(|| load_err(format!("unknown row '{code}' on data line {}", lineno + 1)))?;
            if rows.contains(&row) {
                return Err(load_err(format!("duplicate row '{code}'")));
            }
            rows.push(row);

            let values: Vec<&str> = fields.collect();
            if values.len() != columns.len() {
                return Err(load_err(format!(
                    "row '{code}' has {} values, expected {}",
                    values.len(),
                    columns.len()
                )));
            }
            for (col, raw) in columns.iter().zip(values) {
                let value: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| load_err(format!("bad value '{raw}' at {code}-{}", col.code1())))?;
                grid[row.index()][col.index()] = Some(value);
            }
        }

        let mut distances = [[0.0; NUM_AMINO_ACIDS]; NUM_AMINO_ACIDS];
        for (a, b) in iproduct!(AminoAcid::iter(), AminoAcid::iter()) {
            distances[a.index()][b.index()] =
                grid[a.index()][b.index()].ok_or_else(|| SocnError::MissingDistanceEntry {
                    table: name.to_string(),
                    a: a.code1(),
                    b: b.code1(),
                })?;
        }
        Self::checked(name, distances)
    }

    /// Build a table from a distance function. The function is called for
    /// every ordered pair and must be symmetric.
    pub fn from_fn<F>(name: &str, distance: F) -> Result<Self>
    where
        F: Fn(AminoAcid, AminoAcid) -> f64,
    {
        let mut distances = [[0.0; NUM_AMINO_ACIDS]; NUM_AMINO_ACIDS];
        for (a, b) in iproduct!(AminoAcid::iter(), AminoAcid::iter()) {
            distances[a.index()][b.index()] = distance(a, b);
        }
        Self::checked(name, distances)
    }

    fn checked(name: &str, distances: [[f64; NUM_AMINO_ACIDS]; NUM_AMINO_ACIDS]) -> Result<Self> {
        for (a, b) in iproduct!(AminoAcid::iter(), AminoAcid::iter()) {
            let ab = distances[a.index()][b.index()];
            let ba = distances[b.index()][a.index()];
            if !ab.is_finite() || ab < 0.0 {
                return Err(SocnError::TableLoad {
                    table: name.to_string(),
                    reason: format!("distance {}-{} is {ab}; expected a finite non-negative value", a.code1(), b.code1()),
                });
            }
            if ab != ba {
                return Err(SocnError::TableLoad {
                    table: name.to_string(),
                    reason: format!("asymmetric entry {}-{} ({ab} vs {ba})", a.code1(), b.code1()),
                });
            }
        }
        Ok(DistanceTable {
            name: name.to_string(),
            distances,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn distance(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        self.distances[a.index()][b.index()]
    }
}

fn parse_code(code: &str) -> Option<AminoAcid> {
    let mut chars = code.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AminoAcid::from_code1(c),
        _ => None,
    }
}

fn first_duplicate(codes: &[AminoAcid]) -> Option<AminoAcid> {
    codes
        .iter()
        .enumerate()
        .find(|(i, code)| codes[..*i].contains(code))
        .map(|(_, code)| *code)
}
