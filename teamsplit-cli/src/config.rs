/// Config file loading and creation for the teamsplit CLI.
///
/// Config lives at ~/.config/teamsplit/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default)]
pub struct TeamsplitConfig {
    pub roster: Option<PathBuf>,
    pub top_k: Option<usize>,
    pub primary_label: Option<String>,
    pub secondary_label: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# teamsplit configuration
# All values here can be overridden by CLI flags.

# Roster file used when --roster is not given.
# JSON array of participants, or one \"name#tag, Rank, LP\" per line.
# roster = \"/path/to/roster.txt\"

# Number of alternative team splits to show
# top_k = 5

# Label for the side with the lower (or equal) total score
# primary_label = \"Blue Team\"

# Label for the other side
# secondary_label = \"Red Team\"
";

/// Returns the default config path: ~/.config/teamsplit/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("teamsplit").join("config.toml")
}

pub fn parse_config(content: &str) -> Result<TeamsplitConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> TeamsplitConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TeamsplitConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            bail(format!("Failed to create directory {}: {e}", parent.display()))
        });
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let cfg = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(cfg.roster.is_none());
        assert!(cfg.top_k.is_none());
        assert!(cfg.primary_label.is_none());
        assert!(cfg.secondary_label.is_none());
    }

    #[test]
    fn test_parse_config_values() {
        let content = "top_k = 3\nroster = \"team.json\"\nprimary_label = \"Order\"\n";
        let cfg = parse_config(content).unwrap();
        assert_eq!(cfg.top_k, Some(3));
        assert_eq!(cfg.roster, Some(PathBuf::from("team.json")));
        assert_eq!(cfg.primary_label.as_deref(), Some("Order"));
        assert!(cfg.secondary_label.is_none());
    }

    #[test]
    fn test_parse_config_rejects_bad_types() {
        assert!(parse_config("top_k = \"five\"").is_err());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let cfg = load_config(Path::new("/nonexistent/teamsplit/config.toml"));
        assert!(cfg.top_k.is_none());
    }
}
