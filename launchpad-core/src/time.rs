//! Small time helpers for order deadlines

use chrono::{Duration, Utc};

/// Unix timestamp a given number of minutes from now
pub fn future_epoch_in_minutes(minutes: i64) -> i64 {
    (Utc::now() + Duration::minutes(minutes)).timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_epoch_is_in_the_future() {
        let now = Utc::now().timestamp();
        let future = future_epoch_in_minutes(5);
        assert!(future > now);
        assert!(future <= now + 5 * 60 + 1);
    }
}
