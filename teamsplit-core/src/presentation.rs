/// Presentation adapter: turns a ranked split into two labeled, display-ordered teams.
///
/// Labeling and shuffling are cosmetic. Neither touches candidate identity
/// or the ranking; the caller supplies the random source so shuffles can be
/// reproduced in tests.
use std::fmt;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::constants::{DEFAULT_PRIMARY_LABEL, DEFAULT_SECONDARY_LABEL, TEAM_SIZE};
use crate::roster::RosterSnapshot;
use crate::types::PartitionCandidate;

/// Display names for the two sides. The primary side always holds the lower (or equal) total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideLabels {
    pub primary: String,
    pub secondary: String,
}

impl Default for SideLabels {
    fn default() -> Self {
        SideLabels {
            primary: DEFAULT_PRIMARY_LABEL.to_string(),
            secondary: DEFAULT_SECONDARY_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Primary,
    Secondary,
}

/// A member line as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentedMember {
    pub id: i64,
    pub display_name: String,
    pub rank_label: String,
    pub league_points: u32,
    pub score: u64,
}

impl fmt::Display for PresentedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}, {}LP, Score: {})",
            self.display_name, self.rank_label, self.league_points, self.score
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentedTeam {
    pub side: Side,
    pub label: String,
    pub total: u64,
    /// Display order, shuffled.
    pub members: Vec<PresentedMember>,
}

impl fmt::Display for PresentedTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Score: {})", self.label, self.total)?;
        for member in &self.members {
            writeln!(f, "{member}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentedSplit {
    pub primary: PresentedTeam,
    pub secondary: PresentedTeam,
    pub score_difference: u64,
}

impl PresentedSplit {
    /// Plain-text summary suitable for pasting into chat.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PresentedSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.primary, self.secondary)
    }
}

fn present_team<R: Rng + ?Sized>(
    group: &[i64; TEAM_SIZE],
    total: u64,
    side: Side,
    label: &str,
    snapshot: &RosterSnapshot,
    rng: &mut R,
) -> PresentedTeam {
    let mut members: Vec<PresentedMember> = group
        .iter()
        .map(|&id| {
            let p = snapshot.participant(id);
            PresentedMember {
                id,
                display_name: p.display_name.clone(),
                rank_label: p.rank_label(),
                league_points: p.league_points(),
                score: p.score(),
            }
        })
        .collect();
    members.shuffle(rng);

    PresentedTeam {
        side,
        label: label.to_string(),
        total,
        members,
    }
}

/// Label and shuffle one candidate for display.
///
/// `candidate` must come from `snapshot`; an unknown member ID panics.
/// The primary side is shuffled first, then the secondary.
pub fn present<R: Rng + ?Sized>(
    candidate: &PartitionCandidate,
    snapshot: &RosterSnapshot,
    labels: &SideLabels,
    rng: &mut R,
) -> PresentedSplit {
    let ((primary, primary_total), (secondary, secondary_total)) =
        if candidate.total_a <= candidate.total_b {
            ((&candidate.group_a, candidate.total_a), (&candidate.group_b, candidate.total_b))
        } else {
            ((&candidate.group_b, candidate.total_b), (&candidate.group_a, candidate.total_a))
        };

    let primary = present_team(
        primary,
        primary_total,
        Side::Primary,
        &labels.primary,
        snapshot,
        rng,
    );
    let secondary = present_team(
        secondary,
        secondary_total,
        Side::Secondary,
        &labels.secondary,
        snapshot,
        rng,
    );
    PresentedSplit {
        primary,
        secondary,
        score_difference: candidate.score_difference,
    }
}

/// Pick one split uniformly at random to feature, e.g. when the operator
/// wants a single suggestion rather than the full list. `None` if empty.
pub fn choose_featured<'a, T, R: Rng + ?Sized>(splits: &'a [T], rng: &mut R) -> Option<&'a T> {
    splits.choose(rng)
}
