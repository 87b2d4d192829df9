// dalifetch - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no network
// dependencies. These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::path::PathBuf;

// =============================================================================
// Candidate (normalised output of parsing)
// =============================================================================

/// A single hit row decoded from the DALI results table.
///
/// This is the core data unit that flows through filtering and export.
/// Created once per parsed row and never mutated afterwards; a downloaded
/// structure is represented by the separate [`FetchedCandidate`] rather than
/// by annotating this record in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Rank assigned by the DALI server, extracted from the row's link
    /// markup. Rows arrive ordered by descending match quality.
    pub rank: u32,

    /// Four-character PDB identifier.
    pub structure_id: String,

    /// Chain selected by DALI for this hit. The identifier cell carries the
    /// PDB id in its first four characters and the chain in its last one.
    pub chain_id: char,

    /// Number of structurally aligned residues (`lali` column).
    pub alignment_length: u32,

    /// Total residue count of the hit structure (`nres` column).
    pub residue_count: u32,

    /// Free-text molecule description with the trailing delimiter stripped.
    pub description: String,
}

// =============================================================================
// Fetched candidate
// =============================================================================

/// An accepted candidate joined with the on-disk location of its structure
/// file after a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedCandidate {
    pub candidate: Candidate,

    /// Path of the downloaded structure file inside the output directory.
    pub path: PathBuf,
}

// =============================================================================
// Run summary
// =============================================================================

/// Outcome of a complete run, returned by `app::run::execute`.
///
/// Carries everything the caller needs to report to the user; the run itself
/// prints nothing to stdout.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Hit rows decoded from the page (before filtering).
    pub candidates_parsed: usize,

    /// Records that survived thresholds, keyword match, and dedup.
    pub accepted: Vec<Candidate>,

    /// Structures downloaded successfully, in acceptance order.
    pub fetched: Vec<FetchedCandidate>,

    /// Structure ids whose download failed. Failures are per-identifier and
    /// never abort the remaining downloads.
    pub failed: Vec<String>,

    /// Location of the rendered structure list, when one was written.
    /// `None` when the page yielded no candidates at all.
    pub list_path: Option<PathBuf>,
}

impl RunSummary {
    /// True when no candidate survived filtering (the "no matches" outcome,
    /// which is a normal exit rather than an error).
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
