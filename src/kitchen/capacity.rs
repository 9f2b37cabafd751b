//! The admission predicate gating entry into the preparing set.

/// Returns whether an order with `candidate_items` cart items may start
/// preparing while `preparing_items` items are already on the line.
///
/// Capacity is counted in item instances, not in orders, and is not weighted
/// by preparation time or priority. The check is pure: callers may probe it
/// speculatively without committing any state.
pub fn can_admit(candidate_items: usize, preparing_items: usize, max_preparing_items: usize) -> bool {
    preparing_items + candidate_items <= max_preparing_items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_exactly_the_limit() {
        assert!(can_admit(4, 0, 4));
        assert!(can_admit(2, 2, 4));
        assert!(can_admit(1, 3, 4));
    }

    #[test]
    fn rejects_one_past_the_limit() {
        assert!(!can_admit(5, 0, 4));
        assert!(!can_admit(2, 3, 4));
        assert!(!can_admit(1, 4, 4));
    }

    #[test]
    fn empty_cart_always_fits() {
        assert!(can_admit(0, 4, 4));
        assert!(can_admit(0, 0, 0));
    }
}
