/// Grouping engine orchestrator.
///
/// One request: snapshot the active roster, enumerate every canonical split,
/// rank by balance, present the top K. Pure computation, no IO; the caller
/// supplies the roster source and the random source.
use rand::Rng;
use tracing::{debug, info};

use crate::constants::DEFAULT_TOP_K;
use crate::error::{EngineError, EngineResult};
use crate::partition::enumerate;
use crate::presentation::{PresentedSplit, SideLabels, present};
use crate::ranking::{optimal_count, optimal_gap, rank};
use crate::roster::{RosterSnapshot, RosterSource};
use crate::types::PartitionCandidate;

/// Configuration for one grouping request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingOptions {
    /// How many alternatives to present. Clamped to the number of splits.
    pub top_k: usize,
    pub labels: SideLabels,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        GroupingOptions {
            top_k: DEFAULT_TOP_K,
            labels: SideLabels::default(),
        }
    }
}

/// A selected split: its 1-based position, the raw candidate and its display form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedSplit {
    pub rank: usize,
    pub candidate: PartitionCandidate,
    pub presentation: PresentedSplit,
}

/// Result of one grouping request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingResult {
    /// Best first.
    pub splits: Vec<RankedSplit>,
    /// Canonical splits considered (126 for a valid roster).
    pub candidates_considered: usize,
    /// Smallest achievable gap over all candidates.
    pub optimal_gap: u64,
    /// Candidates tied at `optimal_gap`.
    pub optimal_count: usize,
}

pub struct GroupingEngine {
    options: GroupingOptions,
}

impl GroupingEngine {
    pub fn new(options: GroupingOptions) -> Self {
        GroupingEngine { options }
    }

    pub fn options(&self) -> &GroupingOptions {
        &self.options
    }

    /// Capture the active roster from `source` and group it.
    ///
    /// Fails with `RosterSize` before any enumeration if the active count is not ten.
    pub fn group<S, R>(&self, source: &S, rng: &mut R) -> EngineResult<GroupingResult>
    where
        S: RosterSource + ?Sized,
        R: Rng + ?Sized,
    {
        let snapshot = RosterSnapshot::capture(source)?;
        self.group_snapshot(&snapshot, rng)
    }

    pub fn group_snapshot<R: Rng + ?Sized>(
        &self,
        snapshot: &RosterSnapshot,
        rng: &mut R,
    ) -> EngineResult<GroupingResult> {
        let candidates = enumerate(snapshot);
        let available = candidates.len();
        let best = optimal_gap(&candidates);
        let tied = optimal_count(&candidates);

        let selected = rank(candidates, self.options.top_k);
        let Some(best) = best.filter(|_| !selected.is_empty()) else {
            return Err(EngineError::EmptySelection {
                requested: self.options.top_k,
                available,
            });
        };

        let splits: Vec<RankedSplit> = selected
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| {
                let presentation = present(&candidate, snapshot, &self.options.labels, rng);
                debug!(
                    rank = i + 1,
                    gap = candidate.score_difference,
                    primary = presentation.primary.total,
                    secondary = presentation.secondary.total,
                    "presented split"
                );
                RankedSplit {
                    rank: i + 1,
                    candidate,
                    presentation,
                }
            })
            .collect();

        info!(
            considered = available,
            shown = splits.len(),
            optimal_gap = best,
            optimal_count = tied,
            "grouping complete"
        );

        Ok(GroupingResult {
            splits,
            candidates_considered: available,
            optimal_gap: best,
            optimal_count: tied,
        })
    }
}

/// Group the active roster of `source` in one call.
pub fn group_roster<S, R>(
    source: &S,
    options: &GroupingOptions,
    rng: &mut R,
) -> EngineResult<GroupingResult>
where
    S: RosterSource + ?Sized,
    R: Rng + ?Sized,
{
    GroupingEngine::new(options.clone()).group(source, rng)
}
