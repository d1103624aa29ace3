//! Derived power metric.

use crate::model::Record;

/// Sum of the six stat fields. Computed in `u64` so it cannot overflow.
pub fn power(record: &Record) -> u64 {
    record.stats().iter().map(|&s| u64::from(s)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::record_with_stats;
    use proptest::prelude::*;

    #[test]
    fn sums_all_six_stats() {
        let r = record_with_stats(1, "Bulbasaur", [45, 49, 49, 65, 65, 45]);
        assert_eq!(power(&r), 318);
    }

    #[test]
    fn zero_stats_have_zero_power() {
        let r = record_with_stats(1, "Nothing", [0; 6]);
        assert_eq!(power(&r), 0);
    }

    #[test]
    fn max_stats_do_not_overflow() {
        let r = record_with_stats(1, "Huge", [u32::MAX; 6]);
        assert_eq!(power(&r), 6 * u64::from(u32::MAX));
    }

    proptest! {
        #[test]
        fn power_is_exact_sum(stats in proptest::array::uniform6(any::<u32>())) {
            let r = record_with_stats(1, "Any", stats);
            let expected: u64 = stats.iter().map(|&s| s as u64).sum();
            prop_assert_eq!(power(&r), expected);
        }
    }
}
