// dalifetch - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries enough context
// (line number, path, URL) to identify the failing stage from the top level.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all dalifetch operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DaliFetchError {
    /// Results-page parsing failed (the page layout has drifted).
    Parse(ParseError),

    /// Writing the structure list failed.
    Export(ExportError),

    /// Retrieving the results page failed.
    Fetch(FetchError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DaliFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DaliFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors raised while decoding the hit table.
///
/// Every variant is fatal: the row layout is pinned to the DALI Lite schema,
/// so a row that fails to decode signals that the server-side format has
/// changed. Skipping the row would hide that incompatibility, so the whole
/// run aborts instead. Line numbers are 1-based positions in the page text.
#[derive(Debug)]
pub enum ParseError {
    /// A hit row has fewer whitespace tokens than the schema requires.
    MissingTokens {
        line_number: usize,
        found: usize,
        required: usize,
    },

    /// The rank cell does not contain `>NUMBER<` markup.
    RankMarkup { line_number: usize, token: String },

    /// A numeric column does not parse as an integer.
    InvalidInteger {
        line_number: usize,
        column: &'static str,
        token: String,
        source: std::num::ParseIntError,
    },

    /// The identifier cell is too short to hold a PDB id plus a chain.
    ShortIdentifier { line_number: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTokens {
                line_number,
                found,
                required,
            } => write!(
                f,
                "line {line_number}: hit row has {found} tokens, schema requires \
                 at least {required}; the results-page layout has changed"
            ),
            Self::RankMarkup { line_number, token } => write!(
                f,
                "line {line_number}: rank cell '{token}' does not contain \
                 '>NUMBER<' markup"
            ),
            Self::InvalidInteger {
                line_number,
                column,
                token,
                source,
            } => write!(
                f,
                "line {line_number}: {column} cell '{token}' is not an integer: {source}"
            ),
            Self::ShortIdentifier { line_number, token } => write!(
                f,
                "line {line_number}: identifier cell '{token}' is shorter than \
                 a PDB id plus chain"
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInteger { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for DaliFetchError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the structure list.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing an output file.
    Io { path: PathBuf, source: io::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export to '{}' failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for DaliFetchError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors raised by the HTTP collaborators (results page and structure
/// downloads). A structure-download failure is reported per identifier and
/// never aborts the run; a results-page failure is fatal because there is
/// nothing to parse.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    Client { source: reqwest::Error },

    /// The HTTP request itself failed (connection, timeout, TLS).
    Request { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// I/O error while writing a downloaded file or reading a local report.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { source } => {
                write!(f, "cannot construct HTTP client: {source}")
            }
            Self::Request { url, source } => {
                write!(f, "request to '{url}' failed: {source}")
            }
            Self::Status { url, status } => {
                write!(f, "'{url}' answered {status}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error on '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FetchError> for DaliFetchError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

/// Convenience type alias for dalifetch results.
pub type Result<T> = std::result::Result<T, DaliFetchError>;
