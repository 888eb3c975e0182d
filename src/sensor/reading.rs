use chrono::NaiveDateTime;

// Fractional seconds are only written when non-zero.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub controller: String,

    pub sensor: String,

    pub value: f64,

    pub timestamp: NaiveDateTime,
}

impl Reading {
    /// ISO-8601 timestamp without an offset, e.g. `2023-05-20T00:05:00`.
    pub fn timestamp_iso8601(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn reading_at(timestamp: NaiveDateTime) -> Reading {
        Reading {
            controller: "c-1".to_owned(),
            sensor: "temperature".to_owned(),
            value: 21.5,
            timestamp,
        }
    }

    #[test]
    fn formats_whole_seconds_without_fraction() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 5, 20)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();

        assert_eq!(
            reading_at(timestamp).timestamp_iso8601(),
            "2023-05-20T00:05:00"
        );
    }

    #[test]
    fn keeps_sub_second_precision() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 5, 20)
            .unwrap()
            .and_hms_milli_opt(13, 45, 7, 250)
            .unwrap();

        assert_eq!(
            reading_at(timestamp).timestamp_iso8601(),
            "2023-05-20T13:45:07.250"
        );
    }
}
