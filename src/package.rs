//! Loading and saving document packages.
//!
//! A package is a versioned JSON file carrying a full [`Document`]. Saving
//! goes through a temporary sibling path and a rename, so a failed write
//! never leaves a truncated package at the destination.

use crate::error::{Error, Result};
use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Format tag written into every package.
pub const PACKAGE_FORMAT: &str = "reportdoc/1";

#[derive(Deserialize)]
struct PackageFile {
    format: String,
    document: Document,
}

#[derive(Serialize)]
struct PackageRef<'a> {
    format: &'a str,
    document: &'a Document,
}

/// Load a document package from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("loading document package from {}", path.display());
    let file = File::open(path)?;
    let package: PackageFile = serde_json::from_reader(BufReader::new(file))?;
    check_format(&package.format)?;
    Ok(package.document)
}

/// Load a document package from bytes.
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    let package: PackageFile = serde_json::from_slice(data)?;
    check_format(&package.format)?;
    Ok(package.document)
}

fn check_format(format: &str) -> Result<()> {
    if format != PACKAGE_FORMAT {
        return Err(Error::UnsupportedFormat(format.to_string()));
    }
    Ok(())
}

/// Save a document package to a file.
pub fn save<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    {
        let file = File::create(tmp)?;
        let mut writer = BufWriter::new(file);
        let package = PackageRef {
            format: PACKAGE_FORMAT,
            document,
        };
        serde_json::to_writer_pretty(&mut writer, &package)?;
        writer.flush()?;
    }
    fs::rename(tmp, path)?;

    log::info!("saved document package to {}", path.display());
    Ok(())
}
