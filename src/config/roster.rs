use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::parse_context;

/// A team and the full names of its members
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub players: Vec<String>,
}

impl TeamConfig {
    pub fn new(name: &str, players: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            players: players.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Built-in placeholder roster, used when no roster file is given
pub fn get_teams() -> Vec<TeamConfig> {
    vec![
        TeamConfig::new("Team A", &["Player One", "Player Two", "Player Three"]),
        TeamConfig::new("Team B", &["Player Four", "Player Five", "Player Six"]),
    ]
}

/// Load the roster from a JSON file, or fall back to the built-in one
pub fn load_roster(path: Option<&Path>) -> Result<Vec<TeamConfig>> {
    let Some(path) = path else {
        info!("No roster file given, using built-in roster");
        return Ok(get_teams());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let teams = parse_roster(&json)
        .with_context(|| format!("Invalid roster file {}", path.display()))?;

    info!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}

fn parse_roster(json: &str) -> Result<Vec<TeamConfig>> {
    serde_json::from_str(json).context(parse_context("roster"))
}
