use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time interval `[start, end)`.
///
/// All scheduling windows in the system (availability slots, session windows,
/// room occupancy) use this representation, so two back-to-back windows such
/// as `[10:00, 11:00)` and `[11:00, 12:00)` do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a new window. Validity (`start < end`) is checked by the
    /// operations that accept caller input, not here.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// A window is valid when it has positive length.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// True iff the two half-open intervals intersect:
    /// `self.start < other.end && other.start < self.end`.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `inner` lies fully within `self`.
    pub fn contains(&self, inner: &TimeWindow) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeWindow;
    use chrono::{TimeZone, Utc};

    fn window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2025, 6, 2, start_h, start_m, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 2, end_h, end_m, 0).unwrap(),
        )
    }

    #[test]
    fn test_overlap_partial() {
        let a = window(10, 0, 11, 0);
        let b = window(10, 30, 11, 30);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let a = window(10, 0, 12, 0);
        let b = window(10, 30, 11, 0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_disjoint() {
        let a = window(10, 0, 11, 0);
        let b = window(12, 0, 13, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_adjacent() {
        // Half-open: sharing a boundary instant is not an overlap.
        let a = window(10, 0, 11, 0);
        let b = window(11, 0, 12, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_identical() {
        let a = window(10, 0, 11, 0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_contains_exact() {
        let a = window(10, 0, 11, 0);
        assert!(a.contains(&a));
    }

    #[test]
    fn test_contains_inner() {
        let outer = window(10, 0, 12, 0);
        let inner = window(10, 30, 11, 30);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_contains_overhang() {
        let outer = window(10, 0, 11, 0);
        let inner = window(10, 30, 11, 30);
        assert!(!outer.contains(&inner));
    }

    #[test]
    fn test_validity() {
        assert!(window(10, 0, 11, 0).is_valid());
        assert!(!window(11, 0, 10, 0).is_valid());
        assert!(!window(10, 0, 10, 0).is_valid());
    }

    #[test]
    fn test_duration() {
        assert_eq!(window(10, 0, 11, 30).duration().num_minutes(), 90);
    }
}
