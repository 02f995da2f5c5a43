use crate::domain::{GroupSummary, PlayerRatingRecord};

/// Reliability at or above which a rating is no longer provisional
pub const FULL_RELIABILITY: f64 = 100.0;

/// Average the reliable singles and doubles ratings of a roster.
///
/// A rating counts only when it is present, positive and its reliability is
/// present and at least [`FULL_RELIABILITY`]. Singles and doubles are filtered
/// independently. No rounding happens here.
pub fn aggregate(roster: &[PlayerRatingRecord]) -> GroupSummary {
    let singles = collect_reliable(roster, |p| (p.singles_rating, p.singles_reliability_pct));
    let doubles = collect_reliable(roster, |p| (p.doubles_rating, p.doubles_reliability_pct));

    GroupSummary {
        average_singles: calculate_mean(&singles),
        average_doubles: calculate_mean(&doubles),
    }
}

pub fn is_reliable(rating: Option<f64>, reliability_pct: Option<f64>) -> bool {
    match (rating, reliability_pct) {
        (Some(rating), Some(reliability)) => rating > 0.0 && reliability >= FULL_RELIABILITY,
        _ => false,
    }
}

fn collect_reliable<F>(roster: &[PlayerRatingRecord], field: F) -> Vec<f64>
where
    F: Fn(&PlayerRatingRecord) -> (Option<f64>, Option<f64>),
{
    roster
        .iter()
        .map(field)
        .filter(|&(rating, reliability)| is_reliable(rating, reliability))
        .filter_map(|(rating, _)| rating)
        .collect()
}

fn calculate_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}
