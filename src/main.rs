// dalifetch - main.rs
//
// Binary entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the pipeline and printing the console summary

use clap::Parser;
use std::path::PathBuf;

use dalifetch::app::fetch::RcsbFetcher;
use dalifetch::app::run::{self, RunConfig};
use dalifetch::util::{constants, logging};

/// dalifetch - Download the PDB structures listed on a DALI results page.
///
/// Scans the page's hit table, keeps structures whose alignment and residue
/// counts pass the thresholds and whose description contains one of the
/// required keywords, writes a structure list into the output directory,
/// and downloads each accepted PDB file from RCSB.
#[derive(Parser, Debug)]
#[command(name = "dalifetch", version, about)]
struct Cli {
    /// DALI results page: a URL or a local file path.
    report: String,

    /// Directory for the structure list and downloaded PDB files.
    output_dir: PathBuf,

    /// Minimum residue count (nres) a hit must have.
    #[arg(short = 'r', long)]
    min_residues: u32,

    /// Minimum aligned-residue count (lali) a hit must have.
    #[arg(short = 'a', long)]
    min_alignment: u32,

    /// Maximum number of hit rows to scan from the page.
    #[arg(short = 'n', long, default_value_t = constants::DEFAULT_MAX_CANDIDATES)]
    max_candidates: usize,

    /// Required description keyword; repeatable, one match suffices.
    #[arg(short = 'k', long = "keyword", required = true)]
    keywords: Vec<String>,

    /// Also write the accepted set as structures_list.json.
    #[arg(long)]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        report = %cli.report,
        "dalifetch starting"
    );

    let fetcher = match RcsbFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!(error = %e, "Cannot initialise the RCSB fetcher");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let config = RunConfig {
        report: cli.report,
        output_dir: cli.output_dir,
        min_residue_count: cli.min_residues,
        min_alignment_length: cli.min_alignment,
        max_candidates: cli.max_candidates,
        keywords: cli.keywords,
        json: cli.json,
    };

    match run::execute(&config, &fetcher) {
        Ok(summary) if summary.is_empty() => {
            println!("No proteins were found that match your search criteria.");
        }
        Ok(summary) => {
            println!("{} structures found.", summary.accepted.len());
            println!("Done.");
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
