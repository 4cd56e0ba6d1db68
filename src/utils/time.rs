use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Whole days elapsed between two instants; negative if `to` precedes `from`.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn days_between_truncates_partial_days() {
        let start = now();
        assert_eq!(days_between(start, start + Duration::hours(23)), 0);
        assert_eq!(days_between(start, start + Duration::hours(25)), 1);
        assert_eq!(days_between(start, start + Duration::days(30)), 30);
    }
}
