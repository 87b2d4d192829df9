// dalifetch - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults,
// including the pinned DALI Lite results-page schema.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "dalifetch";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// DALI Lite results schema
// =============================================================================
//
// The results page embeds a fixed-format hit table in free-form HTML. The
// table begins immediately after a literal column-title line, and every row
// carries its fields at fixed whitespace-token positions. The layout is
// controlled by the DALI server and changes rarely; decoding is therefore
// positional on purpose, and any row that deviates aborts the run as schema
// drift. A server-side layout change means updating the offsets below,
// nothing else.

/// The literal column-title line that precedes the hit table. Matched
/// exactly, leading whitespace included.
pub const RESULTS_HEADER: &str =
    "    No:  Chain   Z    rmsd lali nres  %id PDB  Description";

/// Token index of the rank cell. The token is HTML of the form
/// `...>NUMBER<...`; the digits between the tags are the hit's rank.
pub const TOKEN_RANK: usize = 14;

/// Token index of the identifier cell: a 5+ character code whose first four
/// characters are the PDB id and whose last character is the chain.
pub const TOKEN_IDENTIFIER: usize = 15;

/// Token index of the aligned-residue count (`lali` column).
pub const TOKEN_ALIGNMENT_LENGTH: usize = 18;

/// Token index of the structure's residue count (`nres` column).
pub const TOKEN_RESIDUE_COUNT: usize = 19;

/// First token of the description; all tokens from here to the end of the
/// row belong to it, and the row's final character is a `;` delimiter.
pub const TOKEN_DESCRIPTION_START: usize = 24;

/// Length of a PDB identifier within the identifier cell.
pub const STRUCTURE_ID_LEN: usize = 4;

// =============================================================================
// Run defaults
// =============================================================================

/// Default cap on the number of hit rows scanned from the page.
pub const DEFAULT_MAX_CANDIDATES: usize = 100;

/// Name of the rendered report file inside the output directory.
pub const LIST_FILE_NAME: &str = "structures_list.txt";

/// Name of the optional JSON export beside the text report.
pub const JSON_FILE_NAME: &str = "structures_list.json";

// =============================================================================
// RCSB download
// =============================================================================

/// Base URL for per-structure file downloads from the RCSB repository.
pub const RCSB_DOWNLOAD_BASE: &str = "https://files.rcsb.org/download/";

/// HTTP timeout applied to the page fetch and each structure download.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";
