//! teamsplit-core: Pure-computation 5v5 roster balancing.
//!
//! Ten ranked participants → every distinct split into two teams of five →
//! splits ranked by score gap → top K labeled and shuffled for display.
//! No IO, no storage, no network — bring your own roster.
//!
//! Participants are identified by caller-provided `i64` IDs.
//!
//! # Quick start
//!
//! ```rust
//! use teamsplit_core::{group_roster, GroupingOptions, Participant, Rank};
//!
//! let labels = [
//!     "Gold 4", "Gold 3", "Gold 2", "Gold 1", "Platinum 4",
//!     "Platinum 3", "Platinum 2", "Platinum 1", "Diamond 4", "Diamond 3",
//! ];
//! let roster: Vec<Participant> = labels
//!     .iter()
//!     .enumerate()
//!     .map(|(i, label)| {
//!         let rank = Rank::parse_label(label, 0).unwrap();
//!         Participant::new(i as i64, format!("player{i}"), rank)
//!     })
//!     .collect();
//!
//! let options = GroupingOptions { top_k: 3, ..GroupingOptions::default() };
//! let result = group_roster(roster.as_slice(), &options, &mut rand::rng()).unwrap();
//!
//! for split in &result.splits {
//!     let gap = split.candidate.score_difference;
//!     println!("#{} (gap {gap})\n{}", split.rank, split.presentation.summary());
//! }
//! ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod partition;
pub mod presentation;
pub mod ranking;
pub mod roster;
pub mod skill;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{GroupingEngine, GroupingOptions, GroupingResult, RankedSplit, group_roster};
pub use error::{EngineError, EngineResult};
pub use partition::enumerate;
pub use presentation::{
    PresentedMember, PresentedSplit, PresentedTeam, Side, SideLabels, choose_featured, present,
};
pub use ranking::{optimal_count, optimal_gap, rank};
pub use roster::{InMemoryRoster, RosterSnapshot, RosterSource};
pub use skill::{Rank, Tier, best_rank, compute_score};
pub use types::{CanonicalKey, MasteryChampion, Participant, PartitionCandidate};
