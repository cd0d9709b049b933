use chrono::NaiveDate;

use crate::dashboard::types::DashboardFilter;
use crate::{ClientError, ClientResult};

pub fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> ClientResult<DashboardFilter> {
    let parsed_from = match from {
        Some(value) => Some(parse_iso_date_strict(value, "from", command)?),
        None => None,
    };
    let parsed_to = match to {
        Some(value) => Some(parse_iso_date_strict(value, "to", command)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (parsed_from, parsed_to)
        && start > end
    {
        return Err(ClientError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(command),
        ));
    }

    Ok(DashboardFilter {
        from: parsed_from,
        to: parsed_to,
    })
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Lenient parse for dates read back from storage. Rows that fail here are
/// skipped by the snapshot loader rather than failing the whole pass.
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with valid calendar values."),
            Some(command),
        )
    })
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{build_filter, parse_stored_date};

    #[test]
    fn build_filter_rejects_inverted_ranges() {
        let result = build_filter(Some("2024-03-01"), Some("2024-02-01"), "dashboard");
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn build_filter_rejects_impossible_calendar_dates() {
        let result = build_filter(Some("2024-02-31"), None, "dashboard");
        assert!(result.is_err());
    }

    #[test]
    fn build_filter_accepts_open_ended_windows() {
        let result = build_filter(None, Some("2024-02-01"), "dashboard");
        assert!(result.is_ok());
        if let Ok(filter) = result {
            assert!(filter.from.is_none());
            assert!(filter.to.is_some());
        }
    }

    #[test]
    fn stored_date_parse_is_shape_strict() {
        assert!(parse_stored_date("2024-01-02").is_some());
        assert!(parse_stored_date("2024-1-2").is_none());
        assert!(parse_stored_date("01/02/2024").is_none());
        assert!(parse_stored_date("2024-13-01").is_none());
    }
}
