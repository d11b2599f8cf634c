//! Item Identifier Generation

use crate::models::ItemId;

/// Largest stamp kept from storage; above this a JS number loses precision
pub const MAX_STAMP: u64 = (1 << 53) - 1;

/// Source of fresh item identifiers
pub trait IdSource {
    fn next_id(&mut self) -> ItemId;

    /// Called for every id loaded from storage so fresh ids stay clear of them
    fn observe(&mut self, _id: &ItemId) {}
}

/// Millisecond wall-clock stamps, bumped when the clock has not advanced
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    fn issue(&mut self, now_ms: u64) -> ItemId {
        let stamp = now_ms.max(self.last.saturating_add(1));
        self.last = stamp;
        ItemId::Stamp(stamp)
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> ItemId {
        self.issue(js_sys::Date::now() as u64)
    }

    fn observe(&mut self, id: &ItemId) {
        match id {
            ItemId::Stamp(stamp) if *stamp <= MAX_STAMP => self.last = self.last.max(*stamp),
            _ => {}
        }
    }
}

/// Deterministic ids for tests: 1, 2, 3, ...
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.next += 1;
        ItemId::Stamp(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ids_follow_clock() {
        let mut ids = ClockIds::default();
        assert_eq!(ids.issue(1_000), ItemId::Stamp(1_000));
        assert_eq!(ids.issue(2_500), ItemId::Stamp(2_500));
    }

    #[test]
    fn test_clock_ids_strictly_increase_within_one_tick() {
        let mut ids = ClockIds::default();
        let a = ids.issue(5_000);
        let b = ids.issue(5_000);
        let c = ids.issue(4_999);
        assert_eq!(a, ItemId::Stamp(5_000));
        assert_eq!(b, ItemId::Stamp(5_001));
        assert_eq!(c, ItemId::Stamp(5_002));
    }

    #[test]
    fn test_clock_ids_skip_observed_stamps() {
        let mut ids = ClockIds::default();
        ids.observe(&ItemId::Stamp(9_000));
        ids.observe(&ItemId::Label("old".into()));
        assert_eq!(ids.issue(8_000), ItemId::Stamp(9_001));
    }

    #[test]
    fn test_clock_ids_ignore_stamps_past_max() {
        let mut ids = ClockIds::default();
        ids.observe(&ItemId::Stamp(u64::MAX));
        ids.observe(&ItemId::Stamp(MAX_STAMP + 1));
        let fresh = ids.issue(1_718_000_000_000);
        assert_eq!(fresh, ItemId::Stamp(1_718_000_000_000));
        assert_ne!(fresh, ItemId::Stamp(u64::MAX));

        ids.observe(&ItemId::Stamp(MAX_STAMP));
        assert_eq!(ids.issue(1_718_000_000_001), ItemId::Stamp(MAX_STAMP + 1));
    }
}
