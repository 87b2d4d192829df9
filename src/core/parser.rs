// dalifetch - core/parser.rs
//
// Decodes the hit table embedded in a DALI Lite results page.
// Core layer: consumes page text, never touches the network or filesystem.
//
// The table is located by an exact match on the literal column-title line
// and decoded positionally using the token-offset schema pinned in
// util::constants. Malformed rows are fatal: the layout is externally
// controlled, so a row that fails to decode means the schema has drifted
// and silently skipping it would hide the incompatibility.

use crate::core::model::Candidate;
use crate::util::constants::{
    RESULTS_HEADER, STRUCTURE_ID_LEN, TOKEN_ALIGNMENT_LENGTH, TOKEN_DESCRIPTION_START,
    TOKEN_IDENTIFIER, TOKEN_RANK, TOKEN_RESIDUE_COUNT,
};
use crate::util::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

/// Parse the results page into an ordered sequence of candidates.
///
/// Scans for the header marker, then decodes every following line as a hit
/// row until `max_candidates` rows have been read or the input ends. A page
/// without the marker yields an empty sequence; an empty report is a
/// legitimate "nothing matched" outcome, not a format error.
pub fn parse_report(
    content: &str,
    max_candidates: usize,
) -> Result<Vec<Candidate>, ParseError> {
    let mut candidates = Vec::new();
    let mut in_table = false;

    for (line_idx, line) in content.lines().enumerate() {
        if !in_table {
            if line == RESULTS_HEADER {
                in_table = true;
            }
            continue;
        }

        if candidates.len() == max_candidates {
            break;
        }

        candidates.push(parse_row(line, line_idx + 1)?);
    }

    tracing::debug!(
        candidates = candidates.len(),
        header_found = in_table,
        "Results page parsed"
    );

    Ok(candidates)
}

/// Decode one hit row at its fixed token offsets.
fn parse_row(line: &str, line_number: usize) -> Result<Candidate, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    // The description starts at the highest offset and must be non-empty,
    // so the row needs at least one token past TOKEN_DESCRIPTION_START - 1.
    if tokens.len() <= TOKEN_DESCRIPTION_START {
        return Err(ParseError::MissingTokens {
            line_number,
            found: tokens.len(),
            required: TOKEN_DESCRIPTION_START + 1,
        });
    }

    let rank = parse_rank(tokens[TOKEN_RANK], line_number)?;
    let (structure_id, chain_id) = split_identifier(tokens[TOKEN_IDENTIFIER], line_number)?;
    let alignment_length = parse_count(tokens[TOKEN_ALIGNMENT_LENGTH], "lali", line_number)?;
    let residue_count = parse_count(tokens[TOKEN_RESIDUE_COUNT], "nres", line_number)?;

    let mut description = tokens[TOKEN_DESCRIPTION_START..].join(" ");
    // The row ends with a ';' delimiter that is not part of the description.
    description.pop();

    Ok(Candidate {
        rank,
        structure_id,
        chain_id,
        alignment_length,
        residue_count,
        description,
    })
}

/// Extract the rank from the cell's link markup (`...>NUMBER<...`).
fn parse_rank(token: &str, line_number: usize) -> Result<u32, ParseError> {
    static RANK_RE: OnceLock<Regex> = OnceLock::new();
    let re = RANK_RE.get_or_init(|| Regex::new(r">(\d+)<").expect("rank pattern is valid"));

    let caps = re.captures(token).ok_or_else(|| ParseError::RankMarkup {
        line_number,
        token: token.to_string(),
    })?;

    caps[1]
        .parse::<u32>()
        .map_err(|source| ParseError::InvalidInteger {
            line_number,
            column: "rank",
            token: token.to_string(),
            source,
        })
}

/// Split the identifier cell into PDB id (first four characters) and chain
/// (last character). Both halves come from the same token; a token shorter
/// than five characters cannot carry both and is malformed.
fn split_identifier(token: &str, line_number: usize) -> Result<(String, char), ParseError> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < STRUCTURE_ID_LEN + 1 {
        return Err(ParseError::ShortIdentifier {
            line_number,
            token: token.to_string(),
        });
    }

    let structure_id: String = chars[..STRUCTURE_ID_LEN].iter().collect();
    let chain_id = chars[chars.len() - 1];
    Ok((structure_id, chain_id))
}

/// Parse a numeric column as a non-negative integer.
fn parse_count(token: &str, column: &'static str, line_number: usize) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|source| ParseError::InvalidInteger {
            line_number,
            column,
            token: token.to_string(),
            source,
        })
}
