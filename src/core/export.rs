// dalifetch - core/export.rs
//
// Renders the accepted set as a fixed-width text table, plus a JSON export.
// Core layer: writes to any Write trait object.

use crate::core::model::Candidate;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Column-title line of the structure list.
const TABLE_HEADER: &str = "PDB_ID  chain  l_ali  n_res  description";

/// Dashed rule under the column titles.
const TABLE_RULE: &str = "------  -----  -----  -----  -----------";

/// Render the accepted records as a deterministic fixed-width table.
///
/// Two header lines followed by one line per record; zero records yield
/// exactly the two header lines. Identical input renders byte-identical
/// output, with no locale dependence.
pub fn render_table(records: &[Candidate]) -> String {
    let mut table = format!("{TABLE_HEADER}\n{TABLE_RULE}");

    for record in records {
        table.push('\n');
        table.push_str(&format!(
            "{:<6}  {:<5}  {:<5}  {:<5}  {}",
            record.structure_id,
            record.chain_id,
            record.alignment_length,
            record.residue_count,
            record.description
        ));
    }

    table
}

/// Write the rendered table, returning the number of data rows written.
pub fn write_structure_list<W: Write>(
    records: &[Candidate],
    mut writer: W,
    path: &Path,
) -> Result<usize, ExportError> {
    writer
        .write_all(render_table(records).as_bytes())
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.len())
}

/// Export the accepted records as a JSON array.
pub fn export_json<W: Write>(
    records: &[Candidate],
    writer: W,
    path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records.len())
}
