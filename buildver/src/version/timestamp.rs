// internal crates
use crate::version::errors::UnixDateErr;

// external crates
use chrono::{DateTime, NaiveDateTime, Utc};

// Unix `date` default output minus the timezone field.
const NAIVE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Parses the Unix `date` default output format, e.g.
/// `Thu Feb 14 15:04:05 SAST 2019`. chrono's `%Z` is format-only, so
/// the timezone field is validated as an abbreviation and dropped; the
/// remaining fields parse as a naive datetime taken as UTC, which is
/// what `time.Parse` does for abbreviations outside the zone database.
pub(crate) fn parse_unix_date(input: &str) -> Result<DateTime<Utc>, UnixDateErr> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(UnixDateErr::FieldCount {
            found: fields.len(),
        });
    }

    let zone = fields[4];
    if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(UnixDateErr::Zone {
            zone: zone.to_string(),
        });
    }

    let without_zone = format!(
        "{} {} {} {} {}",
        fields[0], fields[1], fields[2], fields[3], fields[5]
    );
    let naive = NaiveDateTime::parse_from_str(&without_zone, NAIVE_FORMAT)?;
    Ok(naive.and_utc())
}
