//! Turning a noisy name search into a single profile id.
//!
//! [`score_candidates`] keeps the hits whose names fit the query and attaches a
//! parsed location and activity score; [`resolve`] then picks one of them with a
//! first-match-wins policy: home city, then home region, then most active.

pub mod location;
pub mod resolver;
pub mod scorer;

pub use location::{ParsedLocation, parse_location};
pub use resolver::{HomeArea, Resolution, ResolutionTier, ResolvedIdentity, resolve, select};
pub use scorer::{ScoredCandidate, score_candidates};
