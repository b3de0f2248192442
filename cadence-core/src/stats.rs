//! Shared rate arithmetic.

/// Completion rate as a 0-100 integer, rounded to nearest.
///
/// Convention: an empty denominator is 0%, never a division error.
pub fn completion_rate(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate_rounds_to_nearest() {
        assert_eq!(completion_rate(2, 4), 50);
        assert_eq!(completion_rate(2, 3), 67); // 66.6 rounds up
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(3, 3), 100);
    }

    #[test]
    fn test_completion_rate_zero_denominator() {
        assert_eq!(completion_rate(0, 0), 0);
    }
}
