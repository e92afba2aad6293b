/// Roster sources and the ten-player snapshot a grouping runs against.
///
/// The engine never owns the record store. It asks an injected
/// [`RosterSource`] for the active participants once per request and works on
/// that copy.
use tracing::debug;

use crate::constants::ROSTER_SIZE;
use crate::error::{EngineError, EngineResult};
use crate::skill::Rank;
use crate::types::{IdMap, Participant};

/// Anything that can list the participants eligible for the next grouping.
pub trait RosterSource {
    /// Participants with `is_active == true`, in store order.
    fn active_participants(&self) -> Vec<Participant>;
}

impl RosterSource for [Participant] {
    fn active_participants(&self) -> Vec<Participant> {
        self.iter().filter(|p| p.is_active).cloned().collect()
    }
}

/// Owned, in-memory roster. Stands in for the external record store in tests
/// and in the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    participants: Vec<Participant>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_participants(participants: Vec<Participant>) -> EngineResult<Self> {
        let ids: Vec<i64> = participants.iter().map(|p| p.id).collect();
        IdMap::from_ids(&ids)?;
        Ok(InMemoryRoster { participants })
    }

    pub fn add(&mut self, participant: Participant) -> EngineResult<()> {
        if self.get(participant.id).is_some() {
            return Err(EngineError::DuplicateParticipant(participant.id));
        }
        self.participants.push(participant);
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Option<Participant> {
        let pos = self.participants.iter().position(|p| p.id == id)?;
        Some(self.participants.remove(pos))
    }

    pub fn get(&self, id: i64) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Toggle eligibility without deleting. Returns false for an unknown ID.
    pub fn set_active(&mut self, id: i64, is_active: bool) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.is_active = is_active;
                true
            }
            None => false,
        }
    }

    /// Store a refreshed rank; the score follows. Returns false for an unknown ID.
    pub fn update_rank(&mut self, id: i64, rank: Rank) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.set_rank(rank);
                true
            }
            None => false,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_active).count()
    }
}

impl RosterSource for InMemoryRoster {
    fn active_participants(&self) -> Vec<Participant> {
        self.participants.as_slice().active_participants()
    }
}

/// Immutable view of exactly `ROSTER_SIZE` distinct participants.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    participants: Vec<Participant>,
    id_map: IdMap,
}

impl RosterSnapshot {
    /// Copy the active participants out of `source`.
    pub fn capture<S: RosterSource + ?Sized>(source: &S) -> EngineResult<Self> {
        Self::from_participants(source.active_participants())
    }

    /// Build a snapshot from an already filtered list. `is_active` is not re-checked.
    pub fn from_participants(participants: Vec<Participant>) -> EngineResult<Self> {
        if participants.len() != ROSTER_SIZE {
            debug!(actual = participants.len(), "rejecting roster of wrong size");
            return Err(EngineError::RosterSize {
                expected: ROSTER_SIZE,
                actual: participants.len(),
            });
        }
        let ids: Vec<i64> = participants.iter().map(|p| p.id).collect();
        let id_map = IdMap::from_ids(&ids)?;
        Ok(RosterSnapshot {
            participants,
            id_map,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: i64) -> Option<&Participant> {
        self.id_map.get_idx(id).map(|idx| &self.participants[idx])
    }

    /// Participant by ID. Panics if the ID is not part of this snapshot.
    pub fn participant(&self, id: i64) -> &Participant {
        &self.participants[self.id_map.to_idx(id)]
    }

    pub(crate) fn id_map(&self) -> &IdMap {
        &self.id_map
    }

    pub fn total_score(&self) -> u64 {
        self.participants.iter().map(Participant::score).sum()
    }
}
