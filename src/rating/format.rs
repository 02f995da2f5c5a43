use super::aggregate::FULL_RELIABILITY;

/// Shown wherever a rating or average is unavailable
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a player's rating, annotated when the directory marks it provisional.
///
/// A missing reliability is shown without annotation, even though the same
/// rating is left out of team averages.
pub fn format_rating(rating: Option<f64>, reliability_pct: Option<f64>) -> String {
    let Some(rating) = rating else {
        return NOT_AVAILABLE.to_string();
    };

    match reliability_pct {
        Some(pct) if pct < FULL_RELIABILITY => format!("{} ({}% reliable)", rating, pct),
        _ => rating.to_string(),
    }
}

/// Render a team average with two decimals
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.2}", value),
        None => NOT_AVAILABLE.to_string(),
    }
}
