//! FASTA input, read with needletail.
use anyhow::{Context, Result};
use needletail::{parse_fastx_reader, FastxReader};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header.
    pub id: String,
    pub sequence: String,
}

/// Read every record of a FASTA file.
pub fn read_file(path: &Path) -> Result<Vec<FastaRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read(file).with_context(|| format!("parsing {}", path.display()))
}

/// Read every record from an in-memory or streamed source.
pub fn read<R: Read + Send>(source: R) -> Result<Vec<FastaRecord>> {
    let reader = parse_fastx_reader(source).context("opening FASTA stream")?;
    collect_records(reader)
}

fn collect_records(mut reader: Box<dyn FastxReader + '_>) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.context("malformed FASTA record")?;
        let header = String::from_utf8_lossy(record.id());
        let id = header.split_whitespace().next().unwrap_or_default().to_string();
        let sequence = String::from_utf8(record.seq().into_owned())
            .with_context(|| format!("record '{id}' is not valid UTF-8"))?;
        records.push(FastaRecord { id, sequence });
    }
    Ok(records)
}
