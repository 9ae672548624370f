use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Whether a line of a BED-like file carries no data.
///
pub fn is_header_line(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty()
        || line.starts_with('#')
        || line.starts_with("track")
        || line.starts_with("browser")
}

///
/// Read the data lines of a BED-like file, skipping comments and headers.
///
/// # Arguments
///
/// - path: path to the (optionally gzip'd) file
///
pub fn read_data_lines(path: &Path) -> Result<Vec<String>> {
    let reader = get_dynamic_reader(path)?;
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read line from {:?}", path))?;
        if !is_header_line(&line) {
            lines.push(line);
        }
    }
    Ok(lines)
}
