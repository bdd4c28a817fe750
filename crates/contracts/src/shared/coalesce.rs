//! Coalescing helpers for payloads whose keys were renamed over time.

/// Returns the first value that is present (neither missing nor null).
///
/// Callers pass every historical spelling of a field in priority order:
///
/// ```rust
/// use contracts::shared::coalesce::pick_first_defined;
///
/// let upper: Option<i64> = None;
/// let lower = Some(7);
/// assert_eq!(pick_first_defined([upper, lower]), Some(7));
/// ```
pub fn pick_first_defined<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_wins() {
        assert_eq!(pick_first_defined([None, Some(1), Some(2)]), Some(1));
    }

    #[test]
    fn test_all_missing() {
        let empty: [Option<&str>; 3] = [None, None, None];
        assert_eq!(pick_first_defined(empty), None);
    }

    #[test]
    fn test_falsy_values_are_kept() {
        // zero and empty string are defined values
        assert_eq!(pick_first_defined([None, Some(0), Some(5)]), Some(0));
        assert_eq!(pick_first_defined([Some(""), Some("x")]), Some(""));
    }
}
