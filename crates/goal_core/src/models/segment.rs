//! Time-segment buckets for goal minutes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::minute::Minute;

/// Bucket of match time a goal was scored in.
///
/// Variants are declared in chronological order, so the derived `Ord`
/// sorts first-half stoppage time between `31-45` and `46-60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "0-15")]
    Early,
    #[serde(rename = "16-30")]
    FirstHalfMid,
    #[serde(rename = "31-45")]
    FirstHalfLate,
    #[serde(rename = "45+")]
    FirstHalfStoppage,
    #[serde(rename = "46-60")]
    SecondHalfEarly,
    #[serde(rename = "61-75")]
    SecondHalfMid,
    #[serde(rename = "76-90")]
    SecondHalfLate,
    #[serde(rename = "91+")]
    Late,
}

impl Segment {
    pub const ALL: [Segment; 8] = [
        Segment::Early,
        Segment::FirstHalfMid,
        Segment::FirstHalfLate,
        Segment::FirstHalfStoppage,
        Segment::SecondHalfEarly,
        Segment::SecondHalfMid,
        Segment::SecondHalfLate,
        Segment::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Segment::Early => "0-15",
            Segment::FirstHalfMid => "16-30",
            Segment::FirstHalfLate => "31-45",
            Segment::FirstHalfStoppage => "45+",
            Segment::SecondHalfEarly => "46-60",
            Segment::SecondHalfMid => "61-75",
            Segment::SecondHalfLate => "76-90",
            Segment::Late => "91+",
        }
    }

    /// Classify a goal minute.
    ///
    /// `45+x` is first-half stoppage and `90+x` is `91+`. Stoppage time on
    /// any other base (extra-time periods, odd data) falls back to the base
    /// minute on the regular clock.
    pub fn classify(minute: Minute) -> Segment {
        match minute {
            Minute::Stoppage { base: 45, .. } => Segment::FirstHalfStoppage,
            Minute::Stoppage { base: 90, .. } => Segment::Late,
            other => Segment::for_clock_minute(other.clock_minute()),
        }
    }

    fn for_clock_minute(minute: u32) -> Segment {
        match minute {
            0..=15 => Segment::Early,
            16..=30 => Segment::FirstHalfMid,
            31..=45 => Segment::FirstHalfLate,
            46..=60 => Segment::SecondHalfEarly,
            61..=75 => Segment::SecondHalfMid,
            76..=90 => Segment::SecondHalfLate,
            _ => Segment::Late,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(raw: &str) -> Segment {
        Segment::classify(raw.parse().unwrap())
    }

    /// Regular-clock minutes each bucket covers; `45+` has none.
    fn clock_range(segment: Segment) -> Option<std::ops::RangeInclusive<u32>> {
        match segment.label() {
            "0-15" => Some(0..=15),
            "16-30" => Some(16..=30),
            "31-45" => Some(31..=45),
            "46-60" => Some(46..=60),
            "61-75" => Some(61..=75),
            "76-90" => Some(76..=90),
            "91+" => Some(91..=u32::MAX),
            _ => None,
        }
    }

    #[test]
    fn test_every_clock_minute_lands_in_its_own_range() {
        for m in 0..=200u32 {
            let seg = Segment::classify(Minute::regular(m));
            let range = clock_range(seg).expect("regular minutes never map to 45+");
            assert!(range.contains(&m), "{m} classified as {seg}");
            let owners = Segment::ALL
                .iter()
                .filter(|s| clock_range(**s).is_some_and(|r| r.contains(&m)))
                .count();
            assert_eq!(owners, 1, "minute {m} covered by {owners} buckets");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_str("0"), Segment::Early);
        assert_eq!(classify_str("15"), Segment::Early);
        assert_eq!(classify_str("16"), Segment::FirstHalfMid);
        assert_eq!(classify_str("30"), Segment::FirstHalfMid);
        assert_eq!(classify_str("31"), Segment::FirstHalfLate);
        assert_eq!(classify_str("45"), Segment::FirstHalfLate);
        assert_eq!(classify_str("46"), Segment::SecondHalfEarly);
        assert_eq!(classify_str("60"), Segment::SecondHalfEarly);
        assert_eq!(classify_str("75"), Segment::SecondHalfMid);
        assert_eq!(classify_str("90"), Segment::SecondHalfLate);
        assert_eq!(classify_str("91"), Segment::Late);
        assert_eq!(classify_str("118"), Segment::Late);
    }

    #[test]
    fn test_stoppage_time() {
        assert_eq!(classify_str("45+2"), Segment::FirstHalfStoppage);
        assert_eq!(classify_str("90+3"), Segment::Late);
        assert_eq!(classify_str("45+0"), Segment::FirstHalfStoppage);
    }

    #[test]
    fn test_stoppage_on_other_base_uses_base_minute() {
        assert_eq!(classify_str("60+1"), Segment::SecondHalfEarly);
        assert_eq!(classify_str("30+1"), Segment::FirstHalfMid);
        assert_eq!(classify_str("105+1"), Segment::Late);
        assert_eq!(classify_str("120+2"), Segment::Late);
    }

    #[test]
    fn test_labels_sort_chronologically() {
        let labels: Vec<_> = Segment::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["0-15", "16-30", "31-45", "45+", "46-60", "61-75", "76-90", "91+"]);
        let mut sorted = Segment::ALL;
        sorted.sort();
        assert_eq!(sorted, Segment::ALL);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Segment::FirstHalfStoppage).unwrap();
        assert_eq!(json, "\"45+\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The bucket a minute is classified into is the one whose range holds it.
            #[test]
            fn prop_regular_minutes_partition(m in 0u32..10_000) {
                let seg = Segment::classify(Minute::regular(m));
                let range = clock_range(seg);
                prop_assert!(range.is_some_and(|r| r.contains(&m)));
                let owners = Segment::ALL
                    .iter()
                    .filter(|s| clock_range(**s).is_some_and(|r| r.contains(&m)))
                    .count();
                prop_assert_eq!(owners, 1);
            }

            /// Any string of the minute grammar parses and classifies.
            #[test]
            fn prop_minute_grammar_never_fails(raw in "[0-9]{1,4}(\\+[0-9]{1,2})?") {
                let minute: Minute = raw.parse().unwrap();
                let seg = Segment::classify(minute);
                prop_assert!(Segment::ALL.contains(&seg));
            }
        }
    }
}
