//! Commit age heat classification
//!
//! Maps a revision's age to one of nine discrete buckets, newest first.
//! Each bucket carries a fixed color token used for the gutter border.

use chrono::{DateTime, Utc};

/// Discrete age bucket for a revision, ordered newest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeatBucket {
    /// Up to 2 days old
    Days2,
    /// Up to 5 days old
    Days5,
    /// Up to 10 days old
    Days10,
    /// Up to 15 days old
    Days15,
    /// Up to 60 days old
    Days60,
    /// Up to 180 days old
    Days180,
    /// Up to a year old
    Days365,
    /// Up to two years old
    Days720,
    /// Older than two years
    Older,
}

impl HeatBucket {
    /// Classify an age in whole days (inclusive upper bounds)
    pub fn from_age_days(days: i64) -> Self {
        if days <= 2 {
            HeatBucket::Days2
        } else if days <= 5 {
            HeatBucket::Days5
        } else if days <= 10 {
            HeatBucket::Days10
        } else if days <= 15 {
            HeatBucket::Days15
        } else if days <= 60 {
            HeatBucket::Days60
        } else if days <= 180 {
            HeatBucket::Days180
        } else if days <= 365 {
            HeatBucket::Days365
        } else if days <= 720 {
            HeatBucket::Days720
        } else {
            HeatBucket::Older
        }
    }

    /// CSS color token for this bucket
    pub fn color_token(self) -> &'static str {
        match self {
            HeatBucket::Days2 => "var(--blame-orange-50)",
            HeatBucket::Days5 => "var(--blame-orange-100)",
            HeatBucket::Days10 => "var(--blame-orange-200)",
            HeatBucket::Days15 => "var(--blame-orange-300)",
            HeatBucket::Days60 => "var(--blame-orange-400)",
            HeatBucket::Days180 => "var(--blame-deep-orange-600)",
            HeatBucket::Days365 => "var(--blame-deep-orange-700)",
            HeatBucket::Days720 => "var(--blame-deep-orange-800)",
            HeatBucket::Older => "var(--blame-deep-orange-900)",
        }
    }
}

/// Classifies revision timestamps against a fixed reference instant
///
/// The reference is captured once per engine instance so every line in a
/// render pass is judged consistently.
#[derive(Debug, Clone, Copy)]
pub struct HeatClassifier {
    now: DateTime<Utc>,
}

impl HeatClassifier {
    /// Create a classifier with an explicit reference instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// The reference instant
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Classify a revision timestamp into its heat bucket
    pub fn classify(&self, timestamp: DateTime<Utc>) -> HeatBucket {
        let days = self.now.signed_duration_since(timestamp).num_days();
        HeatBucket::from_age_days(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_boundaries_land_in_newer_bucket() {
        let cases = [
            (2, HeatBucket::Days2),
            (5, HeatBucket::Days5),
            (10, HeatBucket::Days10),
            (15, HeatBucket::Days15),
            (60, HeatBucket::Days60),
            (180, HeatBucket::Days180),
            (365, HeatBucket::Days365),
            (720, HeatBucket::Days720),
        ];
        for (days, expected) in cases {
            assert_eq!(HeatBucket::from_age_days(days), expected, "age {days}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(HeatBucket::from_age_days(0), HeatBucket::Days2);
        assert_eq!(HeatBucket::from_age_days(10000), HeatBucket::Older);
    }

    #[test]
    fn test_just_past_boundary() {
        assert_eq!(HeatBucket::from_age_days(3), HeatBucket::Days5);
        assert_eq!(HeatBucket::from_age_days(721), HeatBucket::Older);
    }

    #[test]
    fn test_classifier_uses_whole_days() {
        let classifier = HeatClassifier::new(reference_now());
        // 2 days and 23 hours is still 2 whole days
        let timestamp = reference_now() - Duration::hours(2 * 24 + 23);
        assert_eq!(classifier.classify(timestamp), HeatBucket::Days2);
    }

    #[test]
    fn test_future_timestamp_is_newest() {
        let classifier = HeatClassifier::new(reference_now());
        let timestamp = reference_now() + Duration::days(3);
        assert_eq!(classifier.classify(timestamp), HeatBucket::Days2);
    }
}
