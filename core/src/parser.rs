//! Record parser: `"<steps>,<duration>"` or `"<steps>,<label>,<duration>"`.

use chrono::Duration;
use log::debug;

use crate::error::{TrainingError, TrainingResult};
use crate::models::{ActivityKind, ActivityRecord, RecordForm};

const FIELD_SEPARATOR: char = ',';

/// Parses and validates a raw record.
///
/// Checks run in a fixed order: field count, then steps, then duration. The
/// activity label is never rejected here; unknown labels come back as
/// [`ActivityKind::Unsupported`].
pub fn parse_record(raw: &str) -> TrainingResult<ActivityRecord> {
    let fields: Vec<&str> = raw.trim().split(FIELD_SEPARATOR).map(str::trim).collect();

    let (steps_field, kind, duration_field, form) = match fields.as_slice() {
        [steps, duration] => (*steps, ActivityKind::Walking, *duration, RecordForm::DailySteps),
        [steps, label, duration] => (*steps, resolve_activity(label), *duration, RecordForm::Training),
        _ => {
            return Err(TrainingError::MalformedInput {
                record: raw.to_string(),
                fields: fields.len(),
            })
        }
    };

    let steps = parse_steps(steps_field)?;
    let duration = parse_duration(duration_field)?;

    debug!("parsed record {raw:?}: steps={steps} kind={kind} duration={duration}");
    Ok(ActivityRecord { steps, kind, duration, form })
}

/// Positive base-10 integer. Signs, blanks and overflow are all rejected.
pub fn parse_steps(field: &str) -> TrainingResult<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TrainingError::InvalidSteps(field.to_string()));
    }
    match field.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TrainingError::InvalidSteps(field.to_string())),
    }
}

/// `<hours>h<minutes>m`, both parts required, total strictly positive.
pub fn parse_duration(field: &str) -> TrainingResult<Duration> {
    let invalid = || TrainingError::InvalidDuration(field.to_string());

    let (hours, minutes) = field
        .strip_suffix('m')
        .and_then(|rest| rest.split_once('h'))
        .ok_or_else(invalid)?;

    let hours = parse_component(hours).ok_or_else(invalid)?;
    let minutes = parse_component(minutes).ok_or_else(invalid)?;

    let total = Duration::try_hours(hours)
        .zip(Duration::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .ok_or_else(invalid)?;

    if total <= Duration::zero() {
        return Err(invalid());
    }
    Ok(total)
}

fn parse_component(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Maps a label to a kind. Case-insensitive; also accepts the legacy
/// Russian labels (`Ходьба`, `Бег`).
pub fn resolve_activity(label: &str) -> ActivityKind {
    match label.trim().to_lowercase().as_str() {
        "walking" | "walk" | "ходьба" => ActivityKind::Walking,
        "running" | "run" | "бег" => ActivityKind::Running,
        _ => ActivityKind::Unsupported(label.trim().to_string()),
    }
}
