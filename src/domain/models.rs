use std::fmt;

/// Opaque profile identifier in the ratings directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full name as typed in the roster, split for matching.
///
/// The first token must equal a hit's first name; the last token only has to
/// appear somewhere in the hit's last name, so "Ana Garcia" still finds
/// "Ana Garcia-Lopez".
#[derive(Debug, Clone, PartialEq)]
pub struct NameQuery {
    full_name: String,
    first_name: String,
    last_name_key: String,
}

impl NameQuery {
    pub fn parse(full_name: &str) -> Self {
        let mut tokens = full_name.split_whitespace();
        let first_name = tokens.next().unwrap_or_default().to_lowercase();
        let last_name_key = tokens
            .next_back()
            .map(str::to_lowercase)
            .unwrap_or_else(|| first_name.clone());

        Self {
            full_name: full_name.trim().to_string(),
            first_name,
            last_name_key,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name_key(&self) -> &str {
        &self.last_name_key
    }

    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
    }
}

/// One profile returned by a name search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub location_display: Option<String>,
    pub rating_singles: Option<f64>,
    pub rating_doubles: Option<f64>,
}

/// Ratings of one roster member, as fetched for a resolved profile
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRatingRecord {
    pub display_name: String,
    pub singles_rating: Option<f64>,
    pub doubles_rating: Option<f64>,
    pub singles_reliability_pct: Option<f64>,
    pub doubles_reliability_pct: Option<f64>,
}

impl PlayerRatingRecord {
    /// Placeholder for a member that could not be resolved or fetched
    pub fn unresolved(query_name: &str) -> Self {
        Self {
            display_name: query_name.to_string(),
            singles_rating: None,
            doubles_rating: None,
            singles_reliability_pct: None,
            doubles_reliability_pct: None,
        }
    }
}

/// Reliable-only averages of a team
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupSummary {
    pub average_singles: Option<f64>,
    pub average_doubles: Option<f64>,
}

/// Everything printed for one team
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub name: String,
    pub players: Vec<PlayerRatingRecord>,
    pub summary: GroupSummary,
}
