/// Partition enumerator: every distinct 5v5 split of a ten-player snapshot.
///
/// Walks all C(10, 5) = 252 five-member combinations in lexicographic index
/// order and pairs each with its complement. Every split shows up twice (once
/// per side), so candidates are folded by canonical key, leaving 126.
use std::collections::HashSet;

use tracing::debug;

use crate::constants::{CANONICAL_SPLITS, ROSTER_SIZE, TEAM_SIZE};
use crate::roster::RosterSnapshot;
use crate::types::{CanonicalKey, IndexedTeam, PartitionCandidate};

/// Lexicographic iterator over `TEAM_SIZE`-element index combinations of `0..ROSTER_SIZE`.
pub(crate) struct Combinations {
    indices: IndexedTeam,
    done: bool,
}

impl Combinations {
    pub fn new() -> Self {
        Combinations {
            indices: std::array::from_fn(|i| i),
            done: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = IndexedTeam;

    fn next(&mut self) -> Option<IndexedTeam> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // Rightmost slot that can still move up.
        let offset = ROSTER_SIZE - TEAM_SIZE;
        match (0..TEAM_SIZE).rev().find(|&i| self.indices[i] < i + offset) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..TEAM_SIZE {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Indices not in `team`, ascending.
pub(crate) fn complement(team: &IndexedTeam) -> IndexedTeam {
    let mut rest = [0usize; TEAM_SIZE];
    let mut filled = 0;
    for idx in 0..ROSTER_SIZE {
        if !team.contains(&idx) {
            rest[filled] = idx;
            filled += 1;
        }
    }
    debug_assert_eq!(filled, TEAM_SIZE);
    rest
}

fn team_total(scores: &[u64], team: &IndexedTeam) -> u64 {
    team.iter().map(|&idx| scores[idx]).sum()
}

/// Enumerate every canonical split of the snapshot.
///
/// Order is deterministic: first appearance during the lexicographic walk.
/// Splits with equal `score_difference` are all kept.
pub fn enumerate(snapshot: &RosterSnapshot) -> Vec<PartitionCandidate> {
    let id_map = snapshot.id_map();
    debug_assert_eq!(id_map.len(), ROSTER_SIZE);
    let scores: Vec<u64> = snapshot.participants().iter().map(|p| p.score()).collect();

    let mut seen: HashSet<CanonicalKey> = HashSet::with_capacity(CANONICAL_SPLITS);
    let mut candidates = Vec::with_capacity(CANONICAL_SPLITS);
    let mut raw = 0usize;

    for team1 in Combinations::new() {
        raw += 1;
        let team2 = complement(&team1);
        let total_a = team_total(&scores, &team1);
        let total_b = team_total(&scores, &team2);

        let candidate = PartitionCandidate {
            group_a: id_map.team_ids(&team1),
            group_b: id_map.team_ids(&team2),
            total_a,
            total_b,
            score_difference: total_a.abs_diff(total_b),
        };

        if seen.insert(candidate.canonical_key()) {
            candidates.push(candidate);
        }
    }

    debug!(raw, canonical = candidates.len(), "enumerated team splits");
    candidates
}
