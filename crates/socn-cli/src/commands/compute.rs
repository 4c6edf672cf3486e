use crate::cli::OutputFormat;
use crate::fasta;
use anyhow::{Context, Result};
use log::{info, warn};
use polars::prelude::{CsvWriter, SerWriter};
use serde::Serialize;
use socn_core::{descriptor_frame, load_distance_tables, SocnConfig, SocnDescriptor};
use std::path::PathBuf;

#[derive(Serialize)]
struct JsonRecord<'a> {
    id: &'a str,
    socn: &'a SocnDescriptor,
}

pub fn execute(
    input: PathBuf,
    output: PathBuf,
    max_lag: usize,
    format: OutputFormat,
    skip_invalid: bool,
) -> Result<()> {
    load_distance_tables().context("loading packaged distance tables")?;

    let records = fasta::read_file(&input)?;
    info!("read {} sequences from {}", records.len(), input.display());

    let config = SocnConfig::builder().max_lag(max_lag).build();
    let mut rows: Vec<(String, SocnDescriptor)> = Vec::with_capacity(records.len());
    for record in records {
        match config.compute(&record.sequence) {
            Ok(socn) => rows.push((record.id, socn)),
            Err(err) if skip_invalid => warn!("skipping '{}': {err}", record.id),
            Err(err) => return Err(err).with_context(|| format!("record '{}'", record.id)),
        }
    }

    // render fully before touching the output path
    let bytes = match format {
        OutputFormat::Csv => render_csv(&rows, &config)?,
        OutputFormat::Json => render_json(&rows)?,
    };
    std::fs::write(&output, bytes).with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}

fn render_csv(rows: &[(String, SocnDescriptor)], config: &SocnConfig) -> Result<Vec<u8>> {
    let mut df = descriptor_frame(rows, &config.labels())?;
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)
        .context("writing CSV")?;
    Ok(buf)
}

fn render_json(rows: &[(String, SocnDescriptor)]) -> Result<Vec<u8>> {
    let records: Vec<JsonRecord> = rows
        .iter()
        .map(|(id, socn)| JsonRecord { id, socn })
        .collect();
    serde_json::to_vec_pretty(&records).context("writing JSON")
}
