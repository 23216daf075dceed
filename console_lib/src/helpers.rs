//! Formatting and naming helpers exposed to the application root.

use std::fmt::Display;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use console_api::types::{
    DataSource, Database, Environment, Instance, Project, RowStatus, DEFAULT_PROJECT_ID,
};
use regex::Regex;

const ARCHIVED_SUFFIX: &str = " (Archived)";

/// Formats a unix timestamp (seconds) relative to the local clock.
pub fn humanize_ts(ts: i64) -> String {
    humanize_ts_at(ts, &Local::now())
}

/// Formats `ts` in `now`'s timezone: `HH:MM` today, `Mon D` this year, `Mon D YYYY` otherwise.
pub fn humanize_ts_at<Tz>(ts: i64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::<Utc>::from_timestamp(ts, 0) else {
        return String::new();
    };
    let time = utc.with_timezone(&now.timezone());
    if time.year() == now.year() {
        if time.ordinal() == now.ordinal() {
            return time.format("%H:%M").to_string();
        }
        return time.format("%b %-d").to_string();
    }
    time.format("%b %-d %Y").to_string()
}

/// Prefixes `http://` unless the string already names an http(s) scheme.
pub fn urlfy(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

fn non_alnum() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").ok()).as_ref()
}

/// Lowercases and collapses every run of non-alphanumerics into one `-`.
pub fn slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let collapsed = match non_alnum() {
        Some(re) => re.replace_all(&lower, "-").into_owned(),
        None => lower,
    };
    collapsed.trim_matches('-').to_string()
}

/// Parses the trailing ID of a slug such as `prod-db-42`.
pub fn id_from_slug(slug: &str) -> Option<i64> {
    slug.rsplit('-').next()?.parse().ok()
}

fn with_archived(name: &str, status: RowStatus) -> String {
    match status {
        RowStatus::Archived => format!("{}{}", name, ARCHIVED_SUFFIX),
        RowStatus::Normal => name.to_string(),
    }
}

pub fn environment_name(environment: &Environment) -> String {
    with_archived(&environment.name, environment.row_status)
}

pub fn environment_slug(environment: &Environment) -> String {
    format!("{}-{}", slug(&environment.name), environment.id)
}

pub fn project_name(project: &Project) -> String {
    let name = if project.id == DEFAULT_PROJECT_ID {
        "Unassigned"
    } else {
        project.name.as_str()
    };
    with_archived(name, project.row_status)
}

pub fn project_slug(project: &Project) -> String {
    format!("{}-{}", slug(&project.name), project.id)
}

pub fn instance_name(instance: &Instance) -> String {
    with_archived(&instance.name, instance.row_status)
}

pub fn instance_slug(instance: &Instance) -> String {
    format!(
        "{}-{}-{}",
        slug(&instance.environment.name),
        slug(&instance.name),
        instance.id
    )
}

pub fn database_slug(database: &Database) -> String {
    format!("{}-{}", slug(&database.name), database.id)
}

pub fn data_source_slug(data_source: &DataSource) -> String {
    format!("{}-{}", slug(&data_source.name), data_source.id)
}
