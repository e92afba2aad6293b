/// Balance ranker: best-balanced splits first.
use tracing::debug;

use crate::types::PartitionCandidate;

/// Sort by `score_difference` ascending and keep the first `top_k`.
///
/// The sort is stable, so equally balanced splits stay in enumeration order.
/// `top_k` larger than the candidate count returns everything; `top_k == 0`
/// returns nothing.
pub fn rank(mut candidates: Vec<PartitionCandidate>, top_k: usize) -> Vec<PartitionCandidate> {
    let available = candidates.len();
    candidates.sort_by_key(|c| c.score_difference);
    candidates.truncate(top_k);
    debug!(available, requested = top_k, selected = candidates.len(), "ranked team splits");
    candidates
}

/// Smallest achievable gap, if there are any candidates.
pub fn optimal_gap(candidates: &[PartitionCandidate]) -> Option<u64> {
    candidates.iter().map(|c| c.score_difference).min()
}

/// How many candidates tie for the smallest gap.
pub fn optimal_count(candidates: &[PartitionCandidate]) -> usize {
    match optimal_gap(candidates) {
        Some(best) => candidates.iter().filter(|c| c.score_difference == best).count(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CANONICAL_SPLITS;
    use crate::partition::enumerate;
    use crate::roster::RosterSnapshot;
    use crate::skill::{Rank, Tier};
    use crate::types::Participant;

    fn candidate(tag: i64, diff: u64) -> PartitionCandidate {
        PartitionCandidate {
            group_a: [tag, 0, 0, 0, 0],
            group_b: [0; 5],
            total_a: diff,
            total_b: 0,
            score_difference: diff,
        }
    }

    fn mixed_snapshot() -> RosterSnapshot {
        let players = [
            ("Iron", 3, 20),
            ("Silver", 1, 90),
            ("Gold", 4, 0),
            ("Gold", 2, 64),
            ("Platinum", 3, 12),
            ("Emerald", 4, 33),
            ("Diamond", 2, 80),
            ("Master", 4, 150),
            ("Bronze", 2, 5),
            ("Emerald", 1, 99),
        ];
        let participants = players
            .iter()
            .enumerate()
            .map(|(i, &(tier, division, lp))| {
                let rank = Rank::new(tier.parse::<Tier>().unwrap(), division, lp).unwrap();
                Participant::new(i as i64, format!("p{i}"), rank)
            })
            .collect();
        RosterSnapshot::from_participants(participants).unwrap()
    }

    #[test]
    fn test_rank_sorts_ascending_and_stable() {
        let input = vec![
            candidate(1, 30),
            candidate(2, 10),
            candidate(3, 30),
            candidate(4, 10),
            candidate(5, 0),
        ];
        let ranked = rank(input, 10);
        let order: Vec<i64> = ranked.iter().map(|c| c.group_a[0]).collect();
        assert_eq!(order, vec![5, 2, 4, 1, 3]);
    }

    #[test]
    fn test_rank_zero_is_empty() {
        assert!(rank(vec![candidate(1, 1)], 0).is_empty());
    }

    #[test]
    fn test_rank_matches_reference_sort() {
        let candidates = enumerate(&mixed_snapshot());
        let mut reference = candidates.clone();
        reference.sort_by(|a, b| a.score_difference.cmp(&b.score_difference));

        for top_k in [1, 5, 50, CANONICAL_SPLITS, 500] {
            let ranked = rank(candidates.clone(), top_k);
            let expected = top_k.min(reference.len());
            assert_eq!(ranked.len(), expected);
            assert_eq!(ranked, &reference[..expected]);
            assert!(ranked.windows(2).all(|w| w[0].score_difference <= w[1].score_difference));
        }
    }

    #[test]
    fn test_rank_clamps_large_top_k() {
        let candidates = enumerate(&mixed_snapshot());
        assert_eq!(rank(candidates.clone(), 50).len(), 50);
        assert_eq!(rank(candidates, 5000).len(), CANONICAL_SPLITS);
    }

    #[test]
    fn test_optimal_gap_and_count() {
        let input = vec![candidate(1, 30), candidate(2, 10), candidate(3, 10)];
        assert_eq!(optimal_gap(&input), Some(10));
        assert_eq!(optimal_count(&input), 2);
        assert_eq!(optimal_gap(&[]), None);
        assert_eq!(optimal_count(&[]), 0);
    }
}
