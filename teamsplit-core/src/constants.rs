/// Active participants required for one grouping request.
///
/// The exhaustive split search is sized for exactly this roster. The cost is
/// C(n, TEAM_SIZE), so larger rosters are rejected up front rather than
/// enumerated.
pub const ROSTER_SIZE: usize = 10;

/// Members per team.
pub const TEAM_SIZE: usize = ROSTER_SIZE / 2;

/// C(10, 5): raw five-member combinations drawn from the roster.
pub const RAW_COMBINATIONS: usize = 252;

/// Distinct unordered splits left once every mirror image is folded into its twin.
pub const CANONICAL_SPLITS: usize = RAW_COMBINATIONS / 2;

/// Divisions inside a divided tier. Division 4 is the lowest, 1 the highest.
pub const DIVISIONS_PER_TIER: u8 = 4;

/// Score width of a single division step.
pub const POINTS_PER_DIVISION: u64 = 100;

/// Number of alternatives shown when the caller does not ask for a specific count.
pub const DEFAULT_TOP_K: usize = 5;

pub const DEFAULT_PRIMARY_LABEL: &str = "Blue Team";
pub const DEFAULT_SECONDARY_LABEL: &str = "Red Team";
