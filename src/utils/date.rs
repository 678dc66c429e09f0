use chrono::{Local, NaiveDateTime};

/// Layout of every timestamp written to the call history.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in the local timezone.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_is_zero_padded() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap();
        assert_eq!(format_timestamp(at), "2025-03-07 08:05:09");
    }

    #[test]
    fn formatted_timestamp_reads_back() {
        let at = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let text = format_timestamp(at);
        assert_eq!(NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).unwrap(), at);
    }
}
