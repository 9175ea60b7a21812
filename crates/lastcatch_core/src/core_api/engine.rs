use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::save::{SaveDocument, SaveModel};
use crate::summary;

use super::error::{CoreError, CoreErrorCode};
use super::types::Report;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Largest decompressed snapshot accepted from a gzip save.
pub const MAX_SNAPSHOT_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    Gzip,
    Json,
}

impl SaveFormat {
    /// Order in which variants are tried when no hint is given.
    pub const DETECTION_ORDER: [SaveFormat; 2] = [SaveFormat::Gzip, SaveFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaveFormat {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "gzip" | "gz" | "json.gz" => Ok(Self::Gzip),
            _ => Err(CoreError::new(
                CoreErrorCode::UnsupportedFormat,
                format!("unknown save format '{value}', expected one of: json, gzip"),
            )),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug)]
pub struct Session {
    format: SaveFormat,
    document: SaveDocument,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_path<P: AsRef<Path>>(
        &self,
        path: P,
        hint: Option<SaveFormat>,
    ) -> Result<Session, CoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        self.open_bytes(bytes, hint)
    }

    pub fn open_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        hint: Option<SaveFormat>,
    ) -> Result<Session, CoreError> {
        let bytes = bytes.as_ref();

        if let Some(format) = hint {
            return decode(bytes, format)
                .map(|document| Session { format, document })
                .map_err(|e| {
                    CoreError::new(
                        CoreErrorCode::Decode,
                        format!("failed to decode as {format}: {e}"),
                    )
                });
        }

        let mut failures = Vec::with_capacity(SaveFormat::DETECTION_ORDER.len());
        for format in SaveFormat::DETECTION_ORDER {
            match decode(bytes, format) {
                Ok(document) => {
                    tracing::debug!(%format, len = bytes.len(), "decoded save snapshot");
                    return Ok(Session { format, document });
                }
                Err(e) => {
                    tracing::debug!(%format, error = %e, "format variant rejected input");
                    failures.push(format!("{format}: {e}"));
                }
            }
        }

        Err(CoreError::new(
            CoreErrorCode::Decode,
            format!("unrecognized save format: {}", failures.join("; ")),
        ))
    }
}

impl Session {
    pub fn format(&self) -> SaveFormat {
        self.format
    }

    pub fn document(&self) -> &SaveDocument {
        &self.document
    }

    pub fn model(&self) -> &dyn SaveModel {
        &self.document
    }

    /// `None` when no creature in the save has a recorded acquisition date.
    pub fn summarize(&self) -> Option<Report> {
        summary::summarize(&self.document)
    }
}

fn decode(bytes: &[u8], format: SaveFormat) -> io::Result<SaveDocument> {
    match format {
        SaveFormat::Json => SaveDocument::from_slice(bytes),
        SaveFormat::Gzip => {
            if !bytes.starts_with(&GZIP_MAGIC) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "missing gzip header",
                ));
            }
            let json = inflate(bytes, MAX_SNAPSHOT_BYTES)?;
            SaveDocument::from_slice(&json)
        }
    }
}

fn inflate(bytes: &[u8], limit: u64) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(bytes)
        .take(limit + 1)
        .read_to_end(&mut out)?;
    if out.len() as u64 > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("decompressed snapshot exceeds {limit} bytes"),
        ));
    }
    Ok(out)
}
