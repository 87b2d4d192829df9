// dalifetch - app/fetch.rs
//
// HTTP collaborators: results-page retrieval and per-structure downloads
// from the RCSB repository. The core layer never sees this module; it only
// consumes the text and the identifier list.

use crate::util::constants::{HTTP_TIMEOUT_SECS, RCSB_DOWNLOAD_BASE};
use crate::util::error::FetchError;
use reqwest::blocking::Client;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build the blocking HTTP client shared by page and structure fetches.
fn http_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|source| FetchError::Client { source })
}

/// Retrieve the results-page text.
///
/// An `http://` or `https://` source is fetched over the network; anything
/// else is read as a local file, which keeps the pipeline runnable against
/// a saved page.
pub fn read_report_source(source: &str) -> Result<String, FetchError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        tracing::info!(url = source, "Fetching results page");
        let response = http_client()?
            .get(source)
            .send()
            .map_err(|e| FetchError::Request {
                url: source.to_string(),
                source: e,
            })?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: source.to_string(),
                status: response.status(),
            });
        }
        response.text().map_err(|e| FetchError::Request {
            url: source.to_string(),
            source: e,
        })
    } else {
        tracing::info!(path = source, "Reading results page from file");
        std::fs::read_to_string(source).map_err(|e| FetchError::Io {
            path: PathBuf::from(source),
            source: e,
        })
    }
}

// =============================================================================
// Structure fetching
// =============================================================================

/// Retrieves one structure file per accepted identifier into the output
/// directory. The seam exists so the pipeline can run against a local fake
/// in tests; failures are per-identifier and the caller continues with the
/// remaining identifiers.
pub trait StructureFetcher {
    /// Fetch the structure file for `structure_id`, returning its on-disk
    /// path. Must be idempotent: fetching an already-present structure
    /// succeeds without re-downloading.
    fn fetch(&self, structure_id: &str, output_dir: &Path) -> Result<PathBuf, FetchError>;
}

/// Downloads `.pdb` files from the RCSB public repository.
pub struct RcsbFetcher {
    client: Client,
}

impl RcsbFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: http_client()?,
        })
    }

    /// Download URL for a structure id. RCSB file names are upper-case.
    fn download_url(structure_id: &str) -> String {
        format!("{RCSB_DOWNLOAD_BASE}{}.pdb", structure_id.to_uppercase())
    }
}

impl StructureFetcher for RcsbFetcher {
    fn fetch(&self, structure_id: &str, output_dir: &Path) -> Result<PathBuf, FetchError> {
        let target = output_dir.join(format!("{}.pdb", structure_id.to_uppercase()));
        if target.exists() {
            tracing::debug!(path = %target.display(), "Structure already present, skipping");
            return Ok(target);
        }

        let url = Self::download_url(structure_id);
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        let mut file = File::create(&target).map_err(|source| FetchError::Io {
            path: target.clone(),
            source,
        })?;
        io::copy(&mut response, &mut file).map_err(|source| FetchError::Io {
            path: target.clone(),
            source,
        })?;

        tracing::info!(structure_id, path = %target.display(), "Structure downloaded");
        Ok(target)
    }
}
