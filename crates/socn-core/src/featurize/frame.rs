//! Batch assembly of coupling numbers into a [`DataFrame`].
//!
//! One row per input sequence: an `id` column followed by one `f64`
//! column per label, in [`SocnConfig::labels`] order.
use super::socn::{SocnConfig, SocnDescriptor};
use crate::error::{Result, SocnError};
use log::info;
use polars::prelude::*;

/// Compute coupling numbers for `(id, sequence)` records.
///
/// Fails on the first bad record, wrapped in [`SocnError::Record`].
/// With the `parallel` feature records are computed on the rayon pool;
/// row order always follows `records`.
pub fn socn_frame<I, S>(records: &[(I, S)], config: &SocnConfig) -> Result<DataFrame>
where
    I: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    let compute = |(id, sequence): &(I, S)| -> Result<SocnDescriptor> {
        config
            .compute(sequence.as_ref())
            .map_err(|source| SocnError::Record {
                id: id.as_ref().to_string(),
                source: Box::new(source),
            })
    };

    #[cfg(feature = "parallel")]
    let rows = {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(compute)
            .collect::<Result<Vec<_>>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let rows = records.iter().map(compute).collect::<Result<Vec<_>>>()?;

    let labels = config.labels();
    info!(
        "assembled {} coupling numbers for {} sequences",
        labels.len(),
        rows.len()
    );

    let rows: Vec<(&str, SocnDescriptor)> = records
        .iter()
        .map(|(id, _)| id.as_ref())
        .zip(rows)
        .collect();
    descriptor_frame(&rows, &labels)
}

/// Assemble already computed descriptors into a [`DataFrame`].
///
/// Every descriptor must carry exactly `labels`, in order.
pub fn descriptor_frame<I>(rows: &[(I, SocnDescriptor)], labels: &[String]) -> Result<DataFrame>
where
    I: AsRef<str>,
{
    for (id, descriptor) in rows {
        if descriptor.labels() != labels {
            return Err(SocnError::Frame(format!(
                "record '{}' has {} columns that do not match the {} expected labels",
                id.as_ref(),
                descriptor.len(),
                labels.len()
            )));
        }
    }

    let matrix: Vec<Vec<f64>> = rows.iter().map(|(_, d)| d.values()).collect();
    let ids: Vec<&str> = rows.iter().map(|(id, _)| id.as_ref()).collect();

    let mut columns = Vec::with_capacity(labels.len() + 1);
    columns.push(Column::new("id".into(), ids));
    for (j, label) in labels.iter().enumerate() {
        let values: Vec<f64> = matrix.iter().map(|row| row[j]).collect();
        columns.push(Column::new(label.as_str().into(), values));
    }
    Ok(DataFrame::new(columns)?)
}
