use std::collections::HashMap;

use crate::constants::TEAM_SIZE;
use crate::error::{EngineError, EngineResult};
use crate::skill::Rank;

/// A champion and its mastery points. Display only; never used in scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasteryChampion {
    pub name: String,
    pub mastery_points: u64,
}

/// A roster entry as the engine sees it.
///
/// Participants are identified by caller-provided `i64` IDs. The score is
/// derived from the rank and can only change through [`Participant::set_rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Participant {
    pub id: i64,
    pub display_name: String,
    pub tag: String,
    pub region: String,
    rank: Rank,
    score: u64,
    /// Eligible for the next grouping.
    pub is_active: bool,
    pub mastery_champions: Vec<MasteryChampion>,
}

impl Participant {
    /// New active participant with empty tag and region.
    pub fn new(id: i64, display_name: impl Into<String>, rank: Rank) -> Self {
        Participant {
            id,
            display_name: display_name.into(),
            tag: String::new(),
            region: String::new(),
            rank,
            score: rank.score(),
            is_active: true,
            mastery_champions: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_mastery(mut self, champions: Vec<MasteryChampion>) -> Self {
        self.mastery_champions = champions;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Replace the rank and recompute the score.
    pub fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
        self.score = rank.score();
    }

    pub fn rank_label(&self) -> String {
        self.rank.label()
    }

    pub fn league_points(&self) -> u32 {
        self.rank.league_points()
    }

    /// `name#tag`, or just the name when no tag is known.
    pub fn handle(&self) -> String {
        if self.tag.is_empty() {
            self.display_name.clone()
        } else {
            format!("{}#{}", self.display_name, self.tag)
        }
    }
}

/// Sorted member IDs of both teams, smaller list first. Mirror splits share a key.
pub type CanonicalKey = ([i64; TEAM_SIZE], [i64; TEAM_SIZE]);

/// One way to split the roster into two teams of five.
///
/// `group_a`/`group_b` carry participant IDs in enumeration order. Which side
/// is "A" is arbitrary: identity is the unordered pair, see [`canonical_key`].
///
/// [`canonical_key`]: PartitionCandidate::canonical_key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionCandidate {
    pub group_a: [i64; TEAM_SIZE],
    pub group_b: [i64; TEAM_SIZE],
    pub total_a: u64,
    pub total_b: u64,
    /// `|total_a - total_b|`, the quantity being minimized.
    pub score_difference: u64,
}

impl PartitionCandidate {
    pub fn canonical_key(&self) -> CanonicalKey {
        let mut a = self.group_a;
        let mut b = self.group_b;
        a.sort_unstable();
        b.sort_unstable();
        if a <= b { (a, b) } else { (b, a) }
    }

    /// All ten member IDs, group A first.
    pub fn members(&self) -> impl Iterator<Item = i64> + '_ {
        self.group_a.iter().chain(self.group_b.iter()).copied()
    }
}

/// Internal team of roster indices (not caller IDs).
pub(crate) type IndexedTeam = [usize; TEAM_SIZE];

/// Maps between caller-provided i64 IDs and internal 0..N indices.
#[derive(Debug, Clone)]
pub(crate) struct IdMap {
    ids: Vec<i64>,
    id_to_idx: HashMap<i64, usize>,
}

impl IdMap {
    pub fn from_ids(ids: &[i64]) -> EngineResult<Self> {
        let mut id_to_idx = HashMap::with_capacity(ids.len());
        for (idx, &id) in ids.iter().enumerate() {
            if id_to_idx.insert(id, idx).is_some() {
                return Err(EngineError::DuplicateParticipant(id));
            }
        }
        Ok(IdMap {
            ids: ids.to_vec(),
            id_to_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn get_idx(&self, id: i64) -> Option<usize> {
        self.id_to_idx.get(&id).copied()
    }

    pub fn to_idx(&self, id: i64) -> usize {
        self.get_idx(id)
            .unwrap_or_else(|| panic!("Unknown participant ID: {}", id))
    }

    pub fn to_id(&self, idx: usize) -> i64 {
        self.ids[idx]
    }

    pub fn team_ids(&self, team: &IndexedTeam) -> [i64; TEAM_SIZE] {
        team.map(|idx| self.to_id(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Tier;

    fn gold(division: u8, lp: u32) -> Rank {
        Rank::new(Tier::Gold, division, lp).unwrap()
    }

    #[test]
    fn test_participant_score_tracks_rank() {
        let mut p = Participant::new(7, "Ahri Main", gold(4, 10));
        assert_eq!(p.score(), 1210);

        p.set_rank(gold(1, 80));
        assert_eq!(p.score(), 1580);
        assert_eq!(p.rank_label(), "Gold 1");
        assert_eq!(p.league_points(), 80);
    }

    #[test]
    fn test_participant_handle() {
        let p = Participant::new(1, "Faker", gold(2, 0));
        assert_eq!(p.handle(), "Faker");
        assert_eq!(p.with_tag("KR1").handle(), "Faker#KR1");
    }

    #[test]
    fn test_canonical_key_is_mirror_invariant() {
        let candidate = PartitionCandidate {
            group_a: [9, 1, 5, 3, 7],
            group_b: [0, 8, 2, 6, 4],
            total_a: 10,
            total_b: 12,
            score_difference: 2,
        };
        let mirror = PartitionCandidate {
            group_a: candidate.group_b,
            group_b: candidate.group_a,
            total_a: candidate.total_b,
            total_b: candidate.total_a,
            score_difference: 2,
        };
        assert_eq!(candidate.canonical_key(), ([0, 2, 4, 6, 8], [1, 3, 5, 7, 9]));
        assert_eq!(candidate.canonical_key(), mirror.canonical_key());
    }

    #[test]
    fn test_id_map_round_trip() {
        let map = IdMap::from_ids(&[100, 200, 300]).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.to_idx(200), 1);
        assert_eq!(map.to_id(2), 300);
        assert_eq!(map.get_idx(400), None);
    }

    #[test]
    fn test_id_map_rejects_duplicates() {
        let err = IdMap::from_ids(&[1, 2, 1]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateParticipant(1));
    }

    #[test]
    #[should_panic(expected = "Unknown participant ID")]
    fn test_id_map_unknown_id_panics() {
        let map = IdMap::from_ids(&[1, 2]).unwrap();
        map.to_idx(3);
    }
}
