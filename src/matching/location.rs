const SEPARATOR: &str = ", ";

/// City and region of a profile, lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLocation {
    pub city: Option<String>,
    pub region: Option<String>,
}

/// Parse a display location such as `"Houston, TX"`.
///
/// Only the first two `", "`-separated parts are used, so
/// `"Houston, TX, USA"` still yields region `"tx"`. Never fails.
pub fn parse_location(display: Option<&str>) -> ParsedLocation {
    let Some(display) = display else {
        return ParsedLocation::default();
    };

    let mut parts = display.split(SEPARATOR);
    let city = parts.next().and_then(non_empty_lower);
    let region = parts.next().and_then(non_empty_lower);

    ParsedLocation { city, region }
}

fn non_empty_lower(part: &str) -> Option<String> {
    if part.is_empty() {
        None
    } else {
        Some(part.to_lowercase())
    }
}
