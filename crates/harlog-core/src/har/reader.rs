use super::normalize::normalize_redirects;
use super::options::ReaderOptions;
use super::types::{Har, known_duration};
use crate::{Error, Result};
use std::path::Path;
use url::Url;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Har> {
        Self::from_file_with(path, &ReaderOptions::default())
    }

    /// Read and parse a HAR file with explicit reader options
    pub fn from_file_with(path: &Path, options: &ReaderOptions) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let content = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice_with(&content, options)
    }

    /// Parse a HAR file from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        Self::from_str_with(content, &ReaderOptions::default())
    }

    /// Parse a HAR file from a JSON string with explicit reader options
    pub fn from_str_with(content: &str, options: &ReaderOptions) -> Result<Har> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        tracing::debug!("Parsing HAR from string ({} bytes)", content.len());

        let har: Har = serde_json::from_str(content)?;
        Self::finish(har, options)
    }

    /// Parse a HAR file from raw UTF-8 bytes
    pub fn from_slice(content: &[u8]) -> Result<Har> {
        Self::from_slice_with(content, &ReaderOptions::default())
    }

    /// Parse a HAR file from raw UTF-8 bytes with explicit reader options
    pub fn from_slice_with(content: &[u8], options: &ReaderOptions) -> Result<Har> {
        match std::str::from_utf8(content) {
            Ok(text) => Self::from_str_with(text, options),
            Err(e) => {
                // Let serde_json report the bad bytes with their position
                tracing::debug!("HAR content is not valid UTF-8: {}", e);
                let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
                let har: Har = serde_json::from_slice(content)?;
                Self::finish(har, options)
            }
        }
    }

    fn finish(mut har: Har, options: &ReaderOptions) -> Result<Har> {
        if options.validate {
            Self::validate(&har)?;
        }

        let rewritten = normalize_redirects(&mut har, options.protocol_relative)?;

        tracing::info!(
            "Successfully parsed HAR with {} entries ({} redirects resolved)",
            har.log.entries.len(),
            rewritten
        );

        Ok(har)
    }

    /// Validate that a HAR structure is well-formed
    pub fn validate(har: &Har) -> Result<()> {
        tracing::debug!("Validating HAR structure");

        if har.log.entries.is_empty() {
            tracing::warn!("HAR file contains no entries");
        }

        for (idx, entry) in har.log.entries.iter().enumerate() {
            if !is_duration(entry.time) {
                return Err(Error::invalid(format!(
                    "Entry {} has invalid time {}",
                    idx, entry.time
                )));
            }
            for (phase, value) in entry.timings.phases() {
                if !is_duration(value) {
                    return Err(Error::invalid(format!(
                        "Entry {} has invalid {} timing {}",
                        idx, phase, value
                    )));
                }
            }
            if entry.request.method.is_empty() {
                return Err(Error::invalid(format!(
                    "Entry {} has empty request method",
                    idx
                )));
            }
            if let Err(e) = Url::parse(&entry.request.url) {
                return Err(Error::invalid(format!(
                    "Entry {} has invalid request URL '{}': {}",
                    idx, entry.request.url, e
                )));
            }
            if let (Some(page_ref), Some(_)) = (&entry.page_ref, &har.log.pages)
                && har.log.page(page_ref).is_none()
            {
                return Err(Error::invalid(format!(
                    "Entry {} references unknown page '{}'",
                    idx, page_ref
                )));
            }
        }

        tracing::debug!("HAR structure is valid");
        Ok(())
    }
}

/// A duration is either measured (non-negative) or exactly the -1 sentinel
fn is_duration(value: f64) -> bool {
    known_duration(value).is_some() || value == -1.0
}
