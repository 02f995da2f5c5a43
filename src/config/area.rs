use std::collections::HashSet;

use crate::matching::HomeArea;

/// Region code that counts as "home" when no home city matches
pub const HOME_REGION: &str = "tx";

/// Houston area cities, suburbs included. Lower-cased to match parsed locations.
pub fn get_home_cities() -> Vec<&'static str> {
    vec![
        "houston",
        "sugar land",
        "pearland",
        "katy",
        "the woodlands",
        "league city",
        "missouri city",
        "manvel",
    ]
}

/// Geographic preferences used to disambiguate search results
#[derive(Debug, Clone)]
pub struct AreaSettings {
    pub home_cities: HashSet<String>,
    pub home_region: String,
}

impl Default for AreaSettings {
    fn default() -> Self {
        Self {
            home_cities: get_home_cities().into_iter().map(str::to_string).collect(),
            home_region: HOME_REGION.to_string(),
        }
    }
}

impl AreaSettings {
    pub fn home_area(&self) -> HomeArea<'_> {
        HomeArea::new(&self.home_cities, &self.home_region)
    }
}
