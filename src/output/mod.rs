//! Text rendering of reports. Rendering returns lines; printing is separate.

use colored::Colorize;
use std::io::IsTerminal;

use crate::domain::{PlayerRatingRecord, TeamReport};
use crate::rating::{format_average, format_rating};
use crate::services::ResolutionReport;

pub fn render_team_header(report: &TeamReport) -> String {
    format!("**Team: {}**", report.name)
}

pub fn render_player(player: &PlayerRatingRecord) -> String {
    format!(
        "- **{}**: Singles UTR: {}, Doubles UTR: {}",
        player.display_name,
        format_rating(player.singles_rating, player.singles_reliability_pct),
        format_rating(player.doubles_rating, player.doubles_reliability_pct)
    )
}

pub fn render_averages(report: &TeamReport) -> Vec<String> {
    vec![
        "**Team Averages:**".to_string(),
        format!("- Average Singles UTR: {}", format_average(report.summary.average_singles)),
        format!("- Average Doubles UTR: {}", format_average(report.summary.average_doubles)),
    ]
}

/// Body of a team block, without the header
pub fn render_team_body(report: &TeamReport) -> Vec<String> {
    let mut lines: Vec<String> = report.players.iter().map(render_player).collect();
    lines.extend(render_averages(report));
    lines.push(String::new());
    lines
}

pub fn render_resolution(report: &ResolutionReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Search for {}: {} hits, {} matching candidates",
        report.query.full_name(),
        report.total_hits,
        report.candidates.len()
    )];

    for candidate in &report.candidates {
        lines.push(format!(
            "- {} {} (ID: {}): City: {}, Region: {}, Singles: {}, Doubles: {}, Activity Score: {}",
            candidate.hit.first_name,
            candidate.hit.last_name,
            candidate.id(),
            candidate.city().unwrap_or("Unknown"),
            candidate.region().unwrap_or("Unknown"),
            candidate.hit.rating_singles.unwrap_or(0.0),
            candidate.hit.rating_doubles.unwrap_or(0.0),
            candidate.activity_score
        ));
    }

    lines.push(match &report.selected {
        Some((id, tier)) => format!("Selected ID {} ({} match)", id, tier),
        None => "Unresolved: no matching profile".to_string(),
    });
    lines
}

pub fn print_team_report(report: &TeamReport) {
    let header = render_team_header(report);
    if std::io::stdout().is_terminal() {
        println!("{}", header.as_str().bold());
    } else {
        println!("{}", header);
    }
    print_lines(&render_team_body(report));
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
