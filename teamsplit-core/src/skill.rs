/// Score model: collapses a tiered competitive rank into one comparable integer.
///
/// Every tier spans four division steps of `POINTS_PER_DIVISION` each, so
/// higher tiers always outrank lower ones regardless of league points, and
/// within a tier a better division always beats a worse one. The three apex
/// tiers have no divisions and sit on their tier's bottom step, ordered by
/// league points alone.
use std::fmt;
use std::str::FromStr;

use crate::constants::{DIVISIONS_PER_TIER, POINTS_PER_DIVISION};
use crate::error::{EngineError, EngineResult};

/// Competitive tier, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// 0-based position in the tier ladder.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// False for master, grandmaster and challenger.
    pub fn has_divisions(self) -> bool {
        self < Tier::Master
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Iron => "Iron",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Emerald => "Emerald",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
            Tier::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = EngineError;

    /// Case-insensitive tier name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Tier::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::invalid_rank(s, "unknown tier"))
    }
}

/// Map a division to its effective value: the given division for divided
/// tiers (validated to 1-4), the bottom division for apex tiers.
fn effective_division(tier: Tier, division: u8) -> EngineResult<u8> {
    if !tier.has_divisions() {
        return Ok(DIVISIONS_PER_TIER);
    }
    if !(1..=DIVISIONS_PER_TIER).contains(&division) {
        return Err(EngineError::invalid_rank(
            format!("{tier} {division}"),
            format!("division must be between 1 and {DIVISIONS_PER_TIER}"),
        ));
    }
    Ok(division)
}

/// Score for an already-normalized division. Any `u32` LP fits in `u64`,
/// as does a team total of five such scores.
fn score_of(tier: Tier, division: u8, league_points: u32) -> u64 {
    let division_rank = u64::from(DIVISIONS_PER_TIER - division);
    let steps = u64::from(tier.index()) * u64::from(DIVISIONS_PER_TIER) + division_rank;
    steps * POINTS_PER_DIVISION + u64::from(league_points)
}

/// Compute the skill score for a rank.
///
/// `score = (tier_index * 4 + (4 - effective_division)) * 100 + league_points`
///
/// League points are not clamped; callers supply LP consistent with the
/// tier/division bucket. The division is ignored for apex tiers so upstream
/// placeholders are tolerated.
pub fn compute_score(tier: Tier, division: u8, league_points: u32) -> EngineResult<u64> {
    let division = effective_division(tier, division)?;
    Ok(score_of(tier, division, league_points))
}

/// Parse a division token: arabic ("2") or roman ("II").
fn parse_division(raw: &str) -> Option<u8> {
    match raw.to_ascii_uppercase().as_str() {
        "1" | "I" => Some(1),
        "2" | "II" => Some(2),
        "3" | "III" => Some(3),
        "4" | "IV" => Some(4),
        other => other.parse().ok(),
    }
}

/// A validated rank: tier, normalized division and league points.
///
/// Only constructible through [`Rank::new`] or [`Rank::parse_label`], so the
/// score of a `Rank` is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rank {
    tier: Tier,
    division: u8,
    league_points: u32,
}

impl Rank {
    pub fn new(tier: Tier, division: u8, league_points: u32) -> EngineResult<Self> {
        let division = effective_division(tier, division)?;
        Ok(Rank {
            tier,
            division,
            league_points,
        })
    }

    /// Parse a label such as `"Gold 2"`, `"emerald IV"` or `"Master"`.
    ///
    /// Apex tiers accept (and discard) a trailing division placeholder.
    pub fn parse_label(label: &str, league_points: u32) -> EngineResult<Self> {
        let mut parts = label.split_whitespace();
        let tier: Tier = parts
            .next()
            .ok_or_else(|| EngineError::invalid_rank(label, "empty rank label"))?
            .parse()
            .map_err(|_| EngineError::invalid_rank(label, "unknown tier"))?;

        let division = match parts.next() {
            Some(_) if !tier.has_divisions() => DIVISIONS_PER_TIER,
            Some(raw) => parse_division(raw).ok_or_else(|| {
                EngineError::invalid_rank(label, format!("division \"{raw}\" is not a number"))
            })?,
            None if tier.has_divisions() => {
                return Err(EngineError::invalid_rank(label, "missing division"));
            }
            None => DIVISIONS_PER_TIER,
        };

        if parts.next().is_some() {
            return Err(EngineError::invalid_rank(label, "unexpected text after division"));
        }

        Rank::new(tier, division, league_points).map_err(|e| match e {
            EngineError::InvalidRank { reason, .. } => EngineError::invalid_rank(label, reason),
            other => other,
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Effective division: always `DIVISIONS_PER_TIER` for apex tiers.
    pub fn division(&self) -> u8 {
        self.division
    }

    pub fn league_points(&self) -> u32 {
        self.league_points
    }

    pub fn score(&self) -> u64 {
        score_of(self.tier, self.division, self.league_points)
    }

    /// Same rank, different league points.
    pub fn with_league_points(self, league_points: u32) -> Self {
        Rank {
            league_points,
            ..self
        }
    }

    /// Human-readable label without LP: `"Gold 2"`, `"Master"`.
    pub fn label(&self) -> String {
        if self.tier.has_divisions() {
            format!("{} {}", self.tier, self.division)
        } else {
            self.tier.to_string()
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}LP", self.label(), self.league_points)
    }
}

/// Highest-scoring rank across several queue entries (solo, flex, ...).
///
/// The first entry wins ties. Returns `None` for an unranked player.
pub fn best_rank<I: IntoIterator<Item = Rank>>(ranks: I) -> Option<Rank> {
    ranks
        .into_iter()
        .reduce(|best, rank| if rank.score() > best.score() { rank } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(tier: Tier, division: u8, lp: u32) -> u64 {
        compute_score(tier, division, lp).unwrap()
    }

    #[test]
    fn test_score_formula_anchor_points() {
        assert_eq!(score(Tier::Iron, 4, 0), 0);
        assert_eq!(score(Tier::Iron, 1, 99), 399);
        assert_eq!(score(Tier::Gold, 4, 0), 1200);
        assert_eq!(score(Tier::Gold, 2, 45), 1445);
        assert_eq!(score(Tier::Diamond, 1, 0), 2700);
        assert_eq!(score(Tier::Master, 4, 0), 2800);
        assert_eq!(score(Tier::Challenger, 4, 1200), 4800);
    }

    #[test]
    fn test_score_strictly_increasing_in_tier() {
        for pair in Tier::ALL.windows(2) {
            let lower = score(pair[0], 1, 99);
            let higher = score(pair[1], 4, 0);
            assert!(higher > lower, "{} should outrank {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_score_strictly_increasing_in_division() {
        for tier in Tier::ALL.into_iter().filter(|t| t.has_divisions()) {
            for division in 2..=4u8 {
                let better = score(tier, division - 1, 0);
                let worse = score(tier, division, 99);
                assert!(better > worse, "{tier} {} vs {tier} {division}", division - 1);
            }
        }
    }

    #[test]
    fn test_score_strictly_increasing_in_league_points() {
        for tier in Tier::ALL {
            for lp in 0..100 {
                assert!(score(tier, 3, lp + 1) > score(tier, 3, lp));
            }
        }
    }

    #[test]
    fn test_unbounded_apex_league_points() {
        assert_eq!(score(Tier::Challenger, 4, u32::MAX - 10), 3600 + u64::from(u32::MAX - 10));
        assert_eq!(score(Tier::Challenger, 4, u32::MAX), 3600 + u64::from(u32::MAX));

        let rank = Rank::new(Tier::Grandmaster, 1, u32::MAX).unwrap();
        assert_eq!(rank.score(), 3200 + u64::from(u32::MAX));
        assert!(rank.score() > Rank::new(Tier::Challenger, 4, 0).unwrap().score());
    }

    #[test]
    fn test_apex_tiers_ignore_division() {
        for tier in [Tier::Master, Tier::Grandmaster, Tier::Challenger] {
            let base = score(tier, 4, 250);
            for division in [0, 1, 2, 3, 9] {
                assert_eq!(score(tier, division, 250), base);
            }
        }
    }

    #[test]
    fn test_invalid_division_rejected_for_divided_tiers() {
        for division in [0u8, 5, 200] {
            let err = compute_score(Tier::Gold, division, 10).unwrap_err();
            assert!(matches!(err, EngineError::InvalidRank { .. }), "{err:?}");
        }
    }

    #[test]
    fn test_identical_ranks_identical_scores() {
        let a = Rank::new(Tier::Emerald, 3, 42).unwrap();
        let b = Rank::parse_label("emerald 3", 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.score(), b.score());
        assert_eq!(a.score(), score(Tier::Emerald, 3, 42));
    }

    #[test]
    fn test_tier_from_str_case_insensitive() {
        assert_eq!("gold".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!("GRANDMASTER".parse::<Tier>().unwrap(), Tier::Grandmaster);
        assert_eq!(" Platinum ".parse::<Tier>().unwrap(), Tier::Platinum);
        assert!("mithril".parse::<Tier>().is_err());
    }

    #[test]
    fn test_parse_label() {
        let rank = Rank::parse_label("Gold 2", 45).unwrap();
        assert_eq!(rank.tier(), Tier::Gold);
        assert_eq!(rank.division(), 2);
        assert_eq!(rank.league_points(), 45);

        let roman = Rank::parse_label("platinum IV", 0).unwrap();
        assert_eq!(roman.division(), 4);

        let master = Rank::parse_label("Master", 120).unwrap();
        assert_eq!(master.division(), 4);
        assert_eq!(master.score(), 2920);

        let placeholder = Rank::parse_label("challenger 1", 900).unwrap();
        assert_eq!(placeholder.division(), 4);
    }

    #[test]
    fn test_parse_label_errors() {
        for label in ["", "Gold", "Gold five", "Gold 5", "Gold 2 extra", "Wood 3"] {
            let err = Rank::parse_label(label, 0).unwrap_err();
            match err {
                EngineError::InvalidRank { input, .. } => assert_eq!(input, label),
                other => panic!("unexpected error for {label:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_label_rendering() {
        assert_eq!(Rank::new(Tier::Silver, 1, 3).unwrap().label(), "Silver 1");
        assert_eq!(Rank::new(Tier::Grandmaster, 2, 3).unwrap().label(), "Grandmaster");
        assert_eq!(Rank::new(Tier::Bronze, 3, 77).unwrap().to_string(), "Bronze 3, 77LP");
    }

    #[test]
    fn test_best_rank_picks_highest_score() {
        let solo = Rank::new(Tier::Gold, 1, 20).unwrap();
        let flex = Rank::new(Tier::Platinum, 4, 0).unwrap();
        assert_eq!(best_rank([solo, flex]), Some(flex));
        assert_eq!(best_rank([flex, solo]), Some(flex));
        assert_eq!(best_rank(Vec::new()), None);
    }

    #[test]
    fn test_best_rank_keeps_first_on_tie() {
        let a = Rank::new(Tier::Master, 4, 10).unwrap();
        let b = Rank::new(Tier::Master, 1, 10).unwrap();
        assert_eq!(a.score(), b.score());
        assert_eq!(best_rank([a, b]), Some(a));
    }
}
