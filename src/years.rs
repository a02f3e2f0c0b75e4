//! Award Period Year Resolution
//!
//! Turns a start/end date pair into the list of calendar years the award spans.

/// Resolve a `YYYY-MM-DD` start/end pair into the ascending list of calendar
/// years covered by the period. Returns an empty list when either date is
/// missing or malformed, or when the end date falls before the start date.
///
/// Date strings are parsed component-wise rather than through `js_sys::Date`
/// so the result can never shift by a day across timezones.
///
/// An end date of exactly January 1 excludes that final year: the award holds
/// no funded days in it.
pub fn years_in_range(start: &str, end: &str) -> Vec<i32> {
    let Some((start_year, start_month, start_day)) = parse_ymd(start) else {
        return Vec::new();
    };
    let Some((end_year, end_month, end_day)) = parse_ymd(end) else {
        return Vec::new();
    };

    // Compare at (year, month, day) granularity, never by millisecond math.
    if (end_year, end_month, end_day) < (start_year, start_month, start_day) {
        return Vec::new();
    }

    let last_year = if end_month == 1 && end_day == 1 {
        end_year - 1
    } else {
        end_year
    };

    (start_year..=last_year).collect()
}

/// Parse a literal `YYYY-MM-DD` string into numeric components.
fn parse_ymd(text: &str) -> Option<(i32, u32, u32)> {
    let mut parts = text.split('-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_year_range() {
        assert_eq!(
            years_in_range("2023-06-01", "2025-06-01"),
            vec![2023, 2024, 2025]
        );
    }

    #[test]
    fn test_single_year_range() {
        assert_eq!(years_in_range("2024-02-01", "2024-11-30"), vec![2024]);
    }

    #[test]
    fn test_january_first_end_excludes_final_year() {
        assert_eq!(years_in_range("2023-06-01", "2025-01-01"), vec![2023, 2024]);
    }

    #[test]
    fn test_january_second_end_keeps_final_year() {
        assert_eq!(
            years_in_range("2023-06-01", "2025-01-02"),
            vec![2023, 2024, 2025]
        );
    }

    #[test]
    fn test_same_day_january_first_is_empty() {
        // Start and end on the same January 1: exclusion removes the only year.
        assert_eq!(years_in_range("2024-01-01", "2024-01-01"), Vec::<i32>::new());
    }

    #[test]
    fn test_end_before_start_is_empty() {
        assert_eq!(years_in_range("2025-06-01", "2023-06-01"), Vec::<i32>::new());
        // Same year, earlier month.
        assert_eq!(years_in_range("2024-06-01", "2024-05-31"), Vec::<i32>::new());
        // Same month, earlier day.
        assert_eq!(years_in_range("2024-06-02", "2024-06-01"), Vec::<i32>::new());
    }

    #[test]
    fn test_blank_or_partial_input_is_empty() {
        assert_eq!(years_in_range("", "2024-06-01"), Vec::<i32>::new());
        assert_eq!(years_in_range("2024-06-01", ""), Vec::<i32>::new());
        assert_eq!(years_in_range("2024-06", "2025-06-01"), Vec::<i32>::new());
    }

    #[test]
    fn test_garbage_input_is_empty() {
        assert_eq!(years_in_range("not-a-date", "2025-06-01"), Vec::<i32>::new());
        assert_eq!(years_in_range("2024-xx-01", "2025-06-01"), Vec::<i32>::new());
        assert_eq!(
            years_in_range("2024-06-01-07", "2025-06-01"),
            Vec::<i32>::new()
        );
    }

    #[test]
    fn test_boundary_days_included() {
        // End on December 31 keeps the final year.
        assert_eq!(
            years_in_range("2023-01-01", "2024-12-31"),
            vec![2023, 2024]
        );
    }
}
