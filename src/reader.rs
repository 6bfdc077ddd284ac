//! Record extraction from delimited text files

use crate::error::Result;
use crate::DETECTION_BUFFER_SIZE;
use qsv_sniffer::metadata::Quote;
use qsv_sniffer::{SampleSize, Sniffer};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Delimiter and quoting used to parse and re-serialize rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    /// Quote character, or `None` for inputs that do not use quoting.
    pub quote: Option<u8>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: Some(b'"'),
        }
    }
}

/// How an input file is split into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Every line is one record, terminator included.
    Lines,
    /// Records are rows parsed with a detected delimiter and quoting.
    Delimited,
}

impl ReadStrategy {
    /// Pick a strategy from the file extension. Tabular extensions get
    /// delimiter-aware parsing; everything else is treated as plain lines.
    pub fn for_filename(filename: &str) -> Self {
        if let Some(extension) = Path::new(filename).extension().and_then(|s| s.to_str()) {
            if matches!(extension.to_lowercase().as_str(), "csv" | "tsv") {
                return Self::Delimited;
            }
        }
        Self::Lines
    }
}

/// Records parsed from an input file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Records {
    /// Raw lines with their terminators preserved.
    Lines(Vec<String>),
    /// Field rows plus the dialect that parsed them.
    Rows {
        dialect: Dialect,
        rows: Vec<Vec<String>>,
    },
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Self::Lines(lines) => lines.len(),
            Self::Rows { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read a whole file into records using the given strategy.
///
/// Decoding is permissive: byte sequences that are not valid UTF-8 are
/// dropped rather than reported, so stray binary junk in an otherwise
/// textual file never aborts a run.
pub fn read_records(path: &Path, strategy: ReadStrategy) -> Result<Records> {
    let raw = fs::read(path)?;
    let text = decode_permissive(&raw);

    match strategy {
        ReadStrategy::Lines => {
            let lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
            log::debug!("read {} lines from {}", lines.len(), path.display());
            Ok(Records::Lines(lines))
        }
        ReadStrategy::Delimited => {
            let dialect = detect_dialect(&raw);
            let rows = parse_rows(&text, dialect)?;
            log::debug!(
                "read {} rows from {} (delimiter {:?})",
                rows.len(),
                path.display(),
                dialect.delimiter as char
            );
            Ok(Records::Rows { dialect, rows })
        }
    }
}

/// Parse decoded text into field rows with the given dialect. A dialect
/// without a quote character turns quote processing off entirely, so
/// stray quotes are ordinary field bytes.
fn parse_rows(text: &str, dialect: Dialect) -> Result<Vec<Vec<String>>> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(dialect.delimiter)
        .has_headers(false)
        .flexible(true);
    match dialect.quote {
        Some(q) => builder.quote(q),
        None => builder.quoting(false),
    };

    let mut reader = builder.from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Decode bytes as UTF-8, dropping invalid sequences.
fn decode_permissive(raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Sniff delimiter and quoting from the start of the file. Detection
/// failures fall back to plain comma-separated values.
fn detect_dialect(raw: &[u8]) -> Dialect {
    let prefix = &raw[..raw.len().min(DETECTION_BUFFER_SIZE)];
    let mut sniffer = Sniffer::new();
    sniffer.sample_size(SampleSize::Bytes(DETECTION_BUFFER_SIZE));

    match sniffer.sniff_reader(Cursor::new(prefix)) {
        Ok(metadata) => {
            let quote = match metadata.dialect.quote {
                Quote::Some(q) => Some(q),
                Quote::None => None,
            };
            Dialect {
                delimiter: metadata.dialect.delimiter,
                quote,
            }
        }
        Err(err) => {
            log::debug!("dialect detection failed ({}), assuming plain CSV", err);
            Dialect::default()
        }
    }
}
