//! Sample serialization

use crate::error::Result;
use crate::reader::Records;
use crate::OUTPUT_PREFIX;
use std::fs;
use std::path::Path;

/// Name of the output file for a given input filename.
pub fn output_filename(input: &str) -> String {
    format!("{}{}", OUTPUT_PREFIX, input)
}

/// Write a sample to `path`, replacing any existing file.
///
/// Line records are written back exactly as read, terminators and all.
/// Rows are re-serialized with the dialect that parsed the input so the
/// output follows the same textual conventions; a dialect without a
/// quote character writes fields raw. Width differences between rows
/// are allowed, mirroring the tolerant parse.
pub fn write_sample(path: &Path, sample: &Records) -> Result<()> {
    match sample {
        Records::Lines(lines) => {
            fs::write(path, lines.concat())?;
        }
        Records::Rows { dialect, rows } => {
            let mut builder = csv::WriterBuilder::new();
            builder.delimiter(dialect.delimiter).flexible(true);
            match dialect.quote {
                Some(q) => builder.quote(q),
                None => builder.quote_style(csv::QuoteStyle::Never),
            };

            let mut writer = builder.from_path(path)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Dialect;
    use tempfile::TempDir;

    #[test]
    fn test_output_filename_gets_prefixed() {
        assert_eq!(output_filename("data.csv"), "samples-data.csv");
        assert_eq!(output_filename("notes.txt"), "samples-notes.txt");
    }

    #[test]
    fn test_lines_are_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-out.txt");

        let sample = Records::Lines(vec!["beta\n".to_string(), "alpha".to_string()]);
        write_sample(&path, &sample).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "beta\nalpha");
    }

    #[test]
    fn test_rows_use_the_input_dialect() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-out.csv");

        let sample = Records::Rows {
            dialect: Dialect {
                delimiter: b';',
                quote: Some(b'"'),
            },
            rows: vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d;e".to_string()],
            ],
        };
        write_sample(&path, &sample).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a;b\nc;\"d;e\"\n");
    }

    #[test]
    fn test_rows_of_differing_widths_are_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-ragged.csv");

        let sample = Records::Rows {
            dialect: Dialect::default(),
            rows: vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()],
                vec!["d".to_string(), "e".to_string(), "f".to_string()],
            ],
        };
        write_sample(&path, &sample).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\nc\nd,e,f\n");
    }

    #[test]
    fn test_quoteless_dialect_writes_quotes_raw() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-raw.csv");

        let sample = Records::Rows {
            dialect: Dialect {
                delimiter: b',',
                quote: None,
            },
            rows: vec![vec!["\"note".to_string(), "x".to_string()]],
        };
        write_sample(&path, &sample).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\"note,x\n");
    }

    #[test]
    fn test_empty_sample_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-empty.csv");

        write_sample(&path, &Records::Lines(Vec::new())).unwrap();

        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_existing_output_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples-out.txt");
        fs::write(&path, "stale content from an earlier run\n").unwrap();

        let sample = Records::Lines(vec!["fresh\n".to_string()]);
        write_sample(&path, &sample).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
