//! Property tests for RRF fusion.

use std::collections::BTreeSet;

use proptest::prelude::*;

use quarry_core::models::{Document, RankedList};
use quarry_retrieval::search::rrf_fusion;

/// A ranked list drawn from a small id pool so cross-list overlap is
/// common. Ids are unique within a list, as a real source guarantees.
fn arb_ranked_list() -> impl Strategy<Value = RankedList> {
    prop::collection::vec(0usize..8, 0..8).prop_map(|ids| {
        let mut seen = BTreeSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .enumerate()
            .map(|(rank, id)| {
                Document::new(
                    format!("doc-{id}"),
                    format!("content {id}"),
                    1.0 / (rank as f64 + 1.0),
                )
            })
            .collect()
    })
}

fn id_union(lists: &[&RankedList]) -> BTreeSet<String> {
    lists
        .iter()
        .flat_map(|list| list.iter().map(|d| d.id.clone()))
        .collect()
}

proptest! {
    #[test]
    fn fusion_output_is_exactly_the_id_union(
        l1 in arb_ranked_list(),
        l2 in arb_ranked_list(),
    ) {
        let fused = rrf_fusion::fuse(&[l1.clone(), l2.clone()], 60);

        let expected = id_union(&[&l1, &l2]);
        let actual: BTreeSet<String> =
            fused.iter().map(|c| c.document.id.clone()).collect();

        prop_assert_eq!(&actual, &expected);
        // Each identifier appears exactly once.
        prop_assert_eq!(fused.len(), expected.len());
    }

    #[test]
    fn fusion_is_deterministic(
        l1 in arb_ranked_list(),
        l2 in arb_ranked_list(),
        k in 1u32..200,
    ) {
        let first: Vec<String> = rrf_fusion::fuse(&[l1.clone(), l2.clone()], k)
            .into_iter()
            .map(|c| c.document.id)
            .collect();
        let second: Vec<String> = rrf_fusion::fuse(&[l1, l2], k)
            .into_iter()
            .map(|c| c.document.id)
            .collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn fused_ranking_is_sorted_descending(
        l1 in arb_ranked_list(),
        l2 in arb_ranked_list(),
    ) {
        let fused = rrf_fusion::fuse(&[l1, l2], 60);
        for window in fused.windows(2) {
            prop_assert!(window[0].rrf_score >= window[1].rrf_score);
        }
    }

    #[test]
    fn fused_score_is_the_sum_of_rank_contributions(
        l1 in arb_ranked_list(),
        l2 in arb_ranked_list(),
        k in 1u32..200,
    ) {
        let fused = rrf_fusion::fuse(&[l1.clone(), l2.clone()], k);

        for candidate in &fused {
            let expected: f64 = [&l1, &l2]
                .iter()
                .filter_map(|list| {
                    list.iter()
                        .position(|d| d.id == candidate.document.id)
                        .map(|rank| 1.0 / (k as f64 + rank as f64))
                })
                .sum();
            prop_assert!((candidate.rrf_score - expected).abs() < 1e-12);
            prop_assert!(candidate.rrf_score > 0.0);
        }
    }

    #[test]
    fn dual_membership_outranks_single_membership(
        rank1 in 0usize..8,
        rank2 in 0usize..8,
        k in 1u32..200,
    ) {
        // A document present in both lists must score strictly higher than
        // the same document in either list alone, ranks held fixed.
        let pad = |rank: usize| -> RankedList {
            (0..rank)
                .map(|i| Document::new(format!("pad-{i}"), "pad", 0.5))
                .chain(std::iter::once(Document::new("target", "T", 0.9)))
                .collect()
        };

        let both = rrf_fusion::fuse(&[pad(rank1), pad(rank2)], k);
        let single = rrf_fusion::fuse(&[pad(rank1), vec![]], k);

        let score_of = |fused: &[rrf_fusion::FusedCandidate]| {
            fused
                .iter()
                .find(|c| c.document.id == "target")
                .map(|c| c.rrf_score)
                .unwrap_or_default()
        };

        prop_assert!(score_of(&both) > score_of(&single));
    }
}
