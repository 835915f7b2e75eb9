use chrono_tz::Tz;

use crate::errors::{SchedulerError, SchedulerResult};

/// Parses an IANA zone identifier such as `America/New_York`.
///
/// The zone is only a label on a slot; every comparison happens on UTC
/// instants.
pub fn parse_timezone(name: &str) -> SchedulerResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| SchedulerError::Validation(format!("Unknown timezone: {}", name)))
}
