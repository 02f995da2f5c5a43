use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

// --- Auth ---

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

// --- Search ---

/// Raw search response; only the players section is used
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub players: Option<PlayersSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayersSection {
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(default)]
    pub source: Option<HitSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitSource {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub location: Option<LocationInfo>,
    #[serde(rename = "myUtrSingles", default)]
    pub rating_singles: Option<f64>,
    #[serde(rename = "myUtrDoubles", default)]
    pub rating_doubles: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct LocationInfo {
    #[serde(default)]
    pub display: Option<String>,
}

/// Profile ids come back as numbers from some endpoints and strings from others
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for PlayerId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => PlayerId::new(n.to_string()),
            RawId::Text(s) => PlayerId::new(s),
        }
    }
}

// --- Player ---

/// Raw player profile response
#[derive(Debug, Deserialize)]
pub struct PlayerResponse {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "myUtrSingles", default)]
    pub rating_singles: Option<f64>,
    #[serde(rename = "myUtrDoubles", default)]
    pub rating_doubles: Option<f64>,
    #[serde(rename = "myUtrProgressSingles", default)]
    pub progress_singles: Option<f64>,
    #[serde(rename = "myUtrProgressDoubles", default)]
    pub progress_doubles: Option<f64>,
}
