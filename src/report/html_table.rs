use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::ProjectMetadata;

/// Font colors used to flag cells
pub struct HighlightColor;
impl HighlightColor {
    pub const COMMITS: &'static str = "green";
    pub const BRANCHES: &'static str = "red";
    pub const RECENT: &'static str = "blue";
}

/// Commit counts above this are flagged.
pub const COMMIT_HIGHLIGHT_THRESHOLD: u64 = 10_000;
/// Branch counts above this are flagged.
pub const BRANCH_WARNING_THRESHOLD: u64 = 100;
/// Offset applied to GitLab's UTC timestamps before display.
pub const TIMESTAMP_OFFSET_HOURS: i64 = 8;
/// Activity newer than this many days before the run date is flagged.
pub const RECENT_ACTIVITY_DAYS: i64 = 30;

const HEADERS: [&str; 9] = [
    "number",
    "path",
    "commits",
    "branches",
    "tags",
    "contributors",
    "forks",
    "repository size",
    "last activity date",
];

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `2020-02-26T09:55:47.215Z` -> `2020-02-26 17:55:47`
///
/// Sub-second precision and the zone suffix are dropped before the fixed
/// offset is applied. Returns `None` when the input is not a timestamp.
pub fn convert_last_activity(last_activity_at: &str) -> Option<String> {
    let truncated = last_activity_at.get(..19)?.replacen('T', " ", 1);
    let parsed = NaiveDateTime::parse_from_str(&truncated, DATETIME_FORMAT).ok()?;
    let shifted = parsed + Duration::hours(TIMESTAMP_OFFSET_HOURS);
    Some(shifted.format(DATETIME_FORMAT).to_string())
}

/// True when `date` (`YYYY-MM-DD`) is strictly after `today - 30 days`.
pub fn is_recent_activity(date: &str, today: NaiveDate) -> bool {
    if date.is_empty() {
        return false;
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date > today - Duration::days(RECENT_ACTIVITY_DAYS),
        Err(_) => false,
    }
}

/// Bytes to mebibytes, one decimal place.
pub fn format_repository_size(bytes: u64) -> String {
    format!("{:.1}M", bytes as f64 / (1024.0 * 1024.0))
}

fn highlight(color: &str, value: impl std::fmt::Display) -> String {
    format!("<font color='{}'>{}</font>", color, value)
}

fn cell(content: impl std::fmt::Display) -> String {
    format!("<td>{}</td>", content)
}

fn render_row(number: usize, project: &ProjectMetadata, today: NaiveDate) -> String {
    let mut row = String::from("<tr>");

    row += &cell(number);
    row += &cell(format!(
        "<a href='{}'>{}</a>",
        project.http_url_to_repo, project.path_with_namespace
    ));

    if project.commit_count > COMMIT_HIGHLIGHT_THRESHOLD {
        row += &cell(highlight(HighlightColor::COMMITS, project.commit_count));
    } else {
        row += &cell(project.commit_count);
    }

    if project.branch_count > BRANCH_WARNING_THRESHOLD {
        row += &cell(highlight(HighlightColor::BRANCHES, project.branch_count));
    } else {
        row += &cell(project.branch_count);
    }

    row += &cell(project.tag_count);
    row += &cell(project.contributors_count);
    row += &cell(project.forks_count);
    row += &cell(format_repository_size(project.repository_size));

    let activity_date: String = convert_last_activity(&project.last_activity_at)
        .map(|converted| converted.chars().take(10).collect())
        .unwrap_or_default();
    if is_recent_activity(&activity_date, today) {
        row += &cell(highlight(HighlightColor::RECENT, &activity_date));
    } else {
        row += &cell(&activity_date);
    }

    row += "</tr>";
    row
}

/// Render the ranked projects as an HTML table. `today` is the run date
/// used for the recent-activity highlight.
pub fn render_table(projects: &[ProjectMetadata], today: NaiveDate) -> String {
    let mut table = String::from("<table border='1' cellspacing='0'>");

    table += "<tr>";
    for header in HEADERS {
        table += &cell(header);
    }
    table += "</tr>";

    for (i, project) in projects.iter().enumerate() {
        table += &render_row(i + 1, project, today);
    }

    table += "</table>";
    table
}
