use log::debug;
use std::collections::HashSet;
use std::fmt;

use super::scorer::ScoredCandidate;
use crate::domain::PlayerId;

/// Outcome of identity resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentity {
    Resolved(PlayerId),
    Unresolved,
}

impl ResolvedIdentity {
    pub fn id(&self) -> Option<&PlayerId> {
        match self {
            ResolvedIdentity::Resolved(id) => Some(id),
            ResolvedIdentity::Unresolved => None,
        }
    }
}

/// Which rule picked the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    HomeCity,
    HomeRegion,
    MostActive,
}

impl ResolutionTier {
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionTier::HomeCity => "home area",
            ResolutionTier::HomeRegion => "home region",
            ResolutionTier::MostActive => "most active",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Home cities (lower-cased) and the home region code
#[derive(Debug, Clone, Copy)]
pub struct HomeArea<'a> {
    cities: &'a HashSet<String>,
    region: &'a str,
}

impl<'a> HomeArea<'a> {
    pub fn new(cities: &'a HashSet<String>, region: &'a str) -> Self {
        Self { cities, region }
    }

    pub fn is_home_city(&self, city: &str) -> bool {
        self.cities.contains(city)
    }

    pub fn is_home_region(&self, region: &str) -> bool {
        self.region == region
    }
}

/// The selected candidate together with the tier that selected it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'c> {
    pub candidate: &'c ScoredCandidate,
    pub tier: ResolutionTier,
}

/// Pick one candidate, or `None` when there are no candidates at all.
///
/// Tiers are tried in order and each scans candidates in input order:
/// 1. home city with a non-zero activity score
/// 2. home region with a non-zero activity score
/// 3. highest activity score, first occurrence wins ties
pub fn select<'c>(candidates: &'c [ScoredCandidate], area: HomeArea<'_>) -> Option<Resolution<'c>> {
    find_home_city(candidates, area)
        .map(|candidate| Resolution {
            candidate,
            tier: ResolutionTier::HomeCity,
        })
        .or_else(|| {
            find_home_region(candidates, area).map(|candidate| Resolution {
                candidate,
                tier: ResolutionTier::HomeRegion,
            })
        })
        .or_else(|| {
            find_most_active(candidates).map(|candidate| Resolution {
                candidate,
                tier: ResolutionTier::MostActive,
            })
        })
}

/// Reduce scored candidates to a single profile id
pub fn resolve(candidates: &[ScoredCandidate], area: HomeArea<'_>) -> ResolvedIdentity {
    match select(candidates, area) {
        Some(resolution) => {
            debug!(
                "Selected {} match: {}, {}, ID: {}, Activity Score: {}",
                resolution.tier,
                resolution.candidate.city().unwrap_or("Unknown"),
                resolution.candidate.region().unwrap_or("Unknown"),
                resolution.candidate.id(),
                resolution.candidate.activity_score
            );
            ResolvedIdentity::Resolved(resolution.candidate.id().clone())
        }
        None => ResolvedIdentity::Unresolved,
    }
}

fn find_home_city<'c>(candidates: &'c [ScoredCandidate], area: HomeArea<'_>) -> Option<&'c ScoredCandidate> {
    candidates
        .iter()
        .find(|c| c.is_active() && c.city().is_some_and(|city| area.is_home_city(city)))
}

fn find_home_region<'c>(candidates: &'c [ScoredCandidate], area: HomeArea<'_>) -> Option<&'c ScoredCandidate> {
    candidates
        .iter()
        .find(|c| c.is_active() && c.region().is_some_and(|region| area.is_home_region(region)))
}

fn find_most_active(candidates: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let (first, rest) = candidates.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if candidate.activity_score > best.activity_score {
            candidate
        } else {
            best
        }
    }))
}
