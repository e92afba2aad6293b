/// Roster file parsing.
///
/// Two formats, auto-detected:
///   - JSON array of participant records
///   - plain text, one `name#tag, Rank, LP[, inactive]` per line
use serde::Deserialize;
use std::path::Path;
use teamsplit_core::{MasteryChampion, Participant, Rank};

use crate::bail;

fn default_active() -> bool {
    true
}

/// One participant as stored in a JSON roster file.
#[derive(Debug, Deserialize)]
struct ParticipantRecord {
    id: Option<i64>,
    name: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    region: String,
    /// Rank label, e.g. "Gold 2" or "Master".
    rank: String,
    #[serde(default)]
    lp: u32,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    mastery: Vec<MasteryChampion>,
}

impl ParticipantRecord {
    fn into_participant(self, position: usize) -> Result<Participant, String> {
        let rank =
            Rank::parse_label(&self.rank, self.lp).map_err(|e| format!("{}: {e}", self.name))?;
        Ok(Participant::new(self.id.unwrap_or(position as i64), self.name, rank)
            .with_tag(self.tag)
            .with_region(self.region)
            .with_mastery(self.mastery)
            .with_active(self.active))
    }
}

/// Split `name#tag` into its parts. The tag is optional.
fn split_handle(handle: &str) -> (String, String) {
    match handle.rsplit_once('#') {
        Some((name, tag)) => (name.trim().to_string(), tag.trim().to_string()),
        None => (handle.trim().to_string(), String::new()),
    }
}

fn parse_line(line: &str, position: usize) -> Result<Participant, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(format!("expected \"name#tag, Rank, LP[, inactive]\", got \"{line}\""));
    }

    let (name, tag) = split_handle(fields[0]);
    if name.is_empty() {
        return Err("empty participant name".to_string());
    }

    let lp: u32 = fields[2]
        .trim_end_matches("LP")
        .trim_end_matches("lp")
        .trim()
        .parse()
        .map_err(|_| format!("invalid LP \"{}\"", fields[2]))?;
    let rank = Rank::parse_label(fields[1], lp).map_err(|e| e.to_string())?;

    let active = match fields.get(3).map(|s| s.to_ascii_lowercase()) {
        None => true,
        Some(flag) if flag == "active" => true,
        Some(flag) if flag == "inactive" => false,
        Some(flag) => {
            return Err(format!("unknown flag \"{flag}\", use \"active\" or \"inactive\""));
        }
    };

    Ok(Participant::new(position as i64, name, rank)
        .with_tag(tag)
        .with_active(active))
}

/// Parse roster content as either a JSON array or one participant per line.
/// IDs default to the 0-based position in the file.
pub fn parse_roster_from_str(content: &str) -> Result<Vec<Participant>, String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let records: Vec<ParticipantRecord> = serde_json::from_str(trimmed)
            .map_err(|e| format!("Roster looks like JSON but failed to parse: {e}"))?;
        return records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_participant(i))
            .collect();
    }

    trimmed
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .enumerate()
        .map(|(position, (line_no, line))| {
            parse_line(line, position).map_err(|e| format!("line {line_no}: {e}"))
        })
        .collect()
}

/// Load a roster file, exiting with an error message on failure.
pub fn load_roster(path: &Path) -> Vec<Participant> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read roster file {}: {e}", path.display())));
    parse_roster_from_str(&content)
        .unwrap_or_else(|e| bail(format!("Invalid roster file {}: {e}", path.display())))
}
