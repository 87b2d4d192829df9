// dalifetch - app/run.rs
//
// Run orchestration: page text -> parser -> filter -> structure list ->
// per-identifier downloads. This is the single entry point; nothing here
// runs at module load, so the whole pipeline is drivable from tests with a
// fake fetcher and a saved page.
//
// Ordering is deliberate: the list file is written before any download is
// attempted, so a network failure can never leave a run without its report,
// and a format error aborts before any output exists at all.

use crate::app::fetch::{self, StructureFetcher};
use crate::core::export;
use crate::core::filter::{self, FilterCriteria};
use crate::core::model::{FetchedCandidate, RunSummary};
use crate::core::parser;
use crate::util::constants::{JSON_FILE_NAME, LIST_FILE_NAME};
use crate::util::error::{DaliFetchError, ExportError, Result};
use std::fs::{self, File};
use std::path::PathBuf;

/// Parameters of one run, assembled by the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Results page: URL or local file path.
    pub report: String,

    /// Directory receiving the structure list and downloaded files.
    pub output_dir: PathBuf,

    /// Minimum residue count (`nres`), inclusive.
    pub min_residue_count: u32,

    /// Minimum aligned-residue count (`lali`), inclusive.
    pub min_alignment_length: u32,

    /// Cap on the number of hit rows scanned from the page.
    pub max_candidates: usize,

    /// Required description keywords; one substring match suffices.
    pub keywords: Vec<String>,

    /// Also write the accepted set as JSON.
    pub json: bool,
}

/// Execute a full run and return its summary.
///
/// When the page yields no candidates at all, the run ends early with an
/// empty summary and writes nothing. When candidates were parsed but none
/// survived filtering, the structure list is still written header-only:
/// at that point the run demonstrably read a valid report, and the empty
/// table is the result.
pub fn execute(config: &RunConfig, fetcher: &dyn StructureFetcher) -> Result<RunSummary> {
    let page = fetch::read_report_source(&config.report)?;
    let candidates = parser::parse_report(&page, config.max_candidates)?;
    tracing::info!(candidates = candidates.len(), "Results page scanned");

    if candidates.is_empty() {
        return Ok(RunSummary::default());
    }

    let criteria = FilterCriteria {
        min_alignment_length: config.min_alignment_length,
        min_residue_count: config.min_residue_count,
        keywords: config.keywords.clone(),
    };
    let accepted = filter::apply_filters(&candidates, &criteria);

    fs::create_dir_all(&config.output_dir).map_err(|source| DaliFetchError::Io {
        path: config.output_dir.clone(),
        operation: "create output directory",
        source,
    })?;

    let list_path = config.output_dir.join(LIST_FILE_NAME);
    let list_file = File::create(&list_path).map_err(|source| ExportError::Io {
        path: list_path.clone(),
        source,
    })?;
    let rows = export::write_structure_list(&accepted, list_file, &list_path)?;
    tracing::info!(rows, path = %list_path.display(), "Structure list written");

    if config.json {
        let json_path = config.output_dir.join(JSON_FILE_NAME);
        let json_file = File::create(&json_path).map_err(|source| ExportError::Io {
            path: json_path.clone(),
            source,
        })?;
        export::export_json(&accepted, json_file, &json_path)?;
        tracing::info!(path = %json_path.display(), "JSON export written");
    }

    let mut fetched = Vec::new();
    let mut failed = Vec::new();
    for candidate in &accepted {
        match fetcher.fetch(&candidate.structure_id, &config.output_dir) {
            Ok(path) => fetched.push(FetchedCandidate {
                candidate: candidate.clone(),
                path,
            }),
            Err(e) => {
                // One bad identifier must not cost the rest of the set.
                tracing::warn!(
                    structure_id = %candidate.structure_id,
                    error = %e,
                    "Structure download failed"
                );
                failed.push(candidate.structure_id.clone());
            }
        }
    }

    Ok(RunSummary {
        candidates_parsed: candidates.len(),
        accepted,
        fetched,
        failed,
        list_path: Some(list_path),
    })
}
