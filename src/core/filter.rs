// dalifetch - core/filter.rs
//
// Acceptance filter for parsed candidates.
// All criteria are AND-combined; dedup is by structure id, first seen wins.
// Core layer: pure logic, no I/O.

use crate::core::model::Candidate;
use std::collections::HashSet;

/// User-supplied acceptance thresholds.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Minimum aligned-residue count (`lali`), inclusive.
    pub min_alignment_length: u32,

    /// Minimum residue count (`nres`), inclusive.
    pub min_residue_count: u32,

    /// Description keywords; a candidate must contain at least one as a
    /// case-sensitive substring. Never empty (the CLI enforces this).
    pub keywords: Vec<String>,
}

/// Apply the criteria to candidates in sequence order, returning the
/// accepted subset.
///
/// A structure id is accepted at most once. The page orders hits by
/// descending match quality, so the first occurrence of an id is the
/// best-scoring chain for that structure; later duplicates are skipped
/// silently even when they would qualify on their own.
pub fn apply_filters(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    let mut accepted_ids: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    for candidate in candidates {
        if !meets_thresholds(candidate, criteria) {
            continue;
        }
        if accepted_ids.contains(&candidate.structure_id) {
            tracing::debug!(
                structure_id = %candidate.structure_id,
                chain = %candidate.chain_id,
                "Duplicate structure id skipped"
            );
            continue;
        }
        if !matches_keyword(candidate, &criteria.keywords) {
            continue;
        }

        accepted_ids.insert(candidate.structure_id.clone());
        accepted.push(candidate.clone());
    }

    tracing::debug!(
        candidates = candidates.len(),
        accepted = accepted.len(),
        "Filtering complete"
    );

    accepted
}

fn meets_thresholds(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    candidate.alignment_length >= criteria.min_alignment_length
        && candidate.residue_count >= criteria.min_residue_count
}

/// Case-sensitive, unanchored substring match against any keyword.
fn matches_keyword(candidate: &Candidate, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| candidate.description.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate(
        rank: u32,
        structure_id: &str,
        chain_id: char,
        alignment_length: u32,
        residue_count: u32,
        description: &str,
    ) -> Candidate {
        Candidate {
            rank,
            structure_id: structure_id.to_string(),
            chain_id,
            alignment_length,
            residue_count,
            description: description.to_string(),
        }
    }

    fn criteria(min_ali: u32, min_res: u32, keywords: &[&str]) -> FilterCriteria {
        FilterCriteria {
            min_alignment_length: min_ali,
            min_residue_count: min_res,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_thresholds_are_and_combined() {
        let candidates = vec![
            make_candidate(1, "1AAA", 'A', 320, 310, "Histone deacetylase"),
            // lali passes, nres fails
            make_candidate(2, "2BBB", 'B', 320, 200, "Histone deacetylase"),
            // nres passes, lali fails
            make_candidate(3, "3CCC", 'C', 200, 310, "Histone deacetylase"),
        ];
        let accepted = apply_filters(&candidates, &criteria(300, 300, &["Histone"]));
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].structure_id, "1AAA");
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive() {
        let candidates = vec![make_candidate(1, "1AAA", 'A', 300, 300, "Histone")];
        assert_eq!(
            apply_filters(&candidates, &criteria(300, 300, &["Histone"])).len(),
            1
        );
        assert_eq!(
            apply_filters(&candidates, &criteria(301, 300, &["Histone"])).len(),
            0
        );
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let candidates = vec![make_candidate(1, "1AAA", 'A', 320, 310, "Histone deacetylase")];

        assert!(apply_filters(&candidates, &criteria(300, 300, &["HISTONE"])).is_empty());
        assert_eq!(
            apply_filters(&candidates, &criteria(300, 300, &["Histone"])).len(),
            1
        );
        // Unanchored substring: an interior fragment matches too.
        assert_eq!(
            apply_filters(&candidates, &criteria(300, 300, &["deacetyl"])).len(),
            1
        );
    }

    #[test]
    fn test_any_keyword_suffices() {
        let candidates = vec![make_candidate(1, "1AAA", 'A', 320, 310, "Protein kinase domain")];
        let accepted = apply_filters(&candidates, &criteria(0, 0, &["Histone", "kinase"]));
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn test_duplicate_structure_id_first_seen_wins() {
        let candidates = vec![
            make_candidate(1, "1AAA", 'A', 320, 310, "Histone deacetylase"),
            // Same structure, different chain, would qualify on its own.
            make_candidate(2, "1AAA", 'B', 400, 400, "Histone deacetylase"),
            make_candidate(3, "2BBB", 'A', 320, 310, "Histone deacetylase"),
        ];
        let accepted = apply_filters(&candidates, &criteria(300, 300, &["Histone"]));

        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].structure_id, "1AAA");
        assert_eq!(accepted[0].chain_id, 'A');
        assert_eq!(accepted[1].structure_id, "2BBB");
    }

    /// A duplicate id whose first occurrence was rejected does not poison
    /// the later occurrence: only accepted records enter the dedup set.
    #[test]
    fn test_rejected_first_occurrence_does_not_block_later_one() {
        let candidates = vec![
            make_candidate(1, "1AAA", 'A', 100, 100, "Histone deacetylase"),
            make_candidate(2, "1AAA", 'B', 320, 310, "Histone deacetylase"),
        ];
        let accepted = apply_filters(&candidates, &criteria(300, 300, &["Histone"]));
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].chain_id, 'B');
    }

    #[test]
    fn test_discovery_order_preserved() {
        let candidates = vec![
            make_candidate(1, "3CCC", 'A', 310, 310, "Histone deacetylase"),
            make_candidate(2, "1AAA", 'A', 320, 320, "Histone deacetylase"),
            make_candidate(3, "2BBB", 'A', 330, 330, "Histone deacetylase"),
        ];
        let accepted = apply_filters(&candidates, &criteria(300, 300, &["Histone"]));
        let ids: Vec<&str> = accepted.iter().map(|c| c.structure_id.as_str()).collect();
        assert_eq!(ids, vec!["3CCC", "1AAA", "2BBB"]);
    }

    /// Raising either threshold never increases the accepted count.
    #[test]
    fn test_filtering_is_monotonic_in_thresholds() {
        let candidates = vec![
            make_candidate(1, "1AAA", 'A', 150, 160, "Histone deacetylase"),
            make_candidate(2, "2BBB", 'A', 250, 260, "Histone deacetylase"),
            make_candidate(3, "3CCC", 'A', 350, 360, "Histone deacetylase"),
        ];

        let mut previous = usize::MAX;
        for threshold in [0u32, 100, 200, 300, 400] {
            let count =
                apply_filters(&candidates, &criteria(threshold, threshold, &["Histone"])).len();
            assert!(
                count <= previous,
                "raising thresholds to {threshold} increased count {previous} -> {count}"
            );
            previous = count;
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(apply_filters(&[], &criteria(0, 0, &["x"])).is_empty());
    }
}
