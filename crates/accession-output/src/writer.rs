//! Frame to CSV encoding.
//!
//! Output is `,`-delimited with `\n` line endings and quotes only where a
//! field needs them, so rerunning a job on unchanged input reproduces the
//! same bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use accession_ingest::frame::column_strings;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(inner)
}

fn encode<W: Write>(df: &DataFrame, wtr: &mut csv::Writer<W>, path: &Path) -> Result<()> {
    let csv_err = |err: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let header: Vec<&str> = df.get_columns().iter().map(|c| c.name().as_str()).collect();
    wtr.write_record(&header).map_err(csv_err)?;

    let columns = df
        .get_columns()
        .iter()
        .map(column_strings)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    for row in 0..df.height() {
        wtr.write_record(columns.iter().map(|values| values[row].as_str()))
            .map_err(csv_err)?;
    }
    Ok(())
}

/// Writes a frame to `path`, creating parent directories as needed.
pub fn write_frame_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = csv_writer(BufWriter::new(file));
    encode(df, &mut wtr, path)?;
    wtr.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = df.height(), "wrote CSV");
    Ok(())
}

/// Renders a frame to CSV text with the same encoding as [`write_frame_csv`].
pub fn render_frame_csv(df: &DataFrame) -> Result<String> {
    let mut wtr = csv_writer(Vec::new());
    encode(df, &mut wtr, Path::new("<memory>"))?;
    let bytes = wtr.into_inner().map_err(|err| OutputError::Csv {
        path: "<memory>".into(),
        message: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| OutputError::Csv {
        path: "<memory>".into(),
        message: err.to_string(),
    })
}
