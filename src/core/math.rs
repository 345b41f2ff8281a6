//! Integer arithmetic for templates. Nothing here panics: overflow wraps and
//! division by zero yields 0.

pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub fn mul(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

pub fn div(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    a.wrapping_div(b)
}

pub fn modulo(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    a.wrapping_rem(b)
}

/// Longest range `seq` will build.
pub const MAX_SEQ_LEN: i64 = 10_000;

/// Inclusive range; empty when `end < start` or when it would hold more
/// than [`MAX_SEQ_LEN`] items.
pub fn seq(start: i64, end: i64) -> Vec<i64> {
    let span = i128::from(end) - i128::from(start) + 1;
    if span > i128::from(MAX_SEQ_LEN) {
        tracing::debug!("seq({}, {}) exceeds {} items", start, end, MAX_SEQ_LEN);
        return Vec::new();
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(sub(2, 3), -1);
        assert_eq!(mul(4, -3), -12);
        assert_eq!(div(7, 2), 3);
        assert_eq!(div(7, 0), 0);
        assert_eq!(modulo(7, 3), 1);
        assert_eq!(modulo(7, 0), 0);
        assert_eq!(div(i64::MIN, -1), i64::MIN);
    }

    #[test]
    fn test_seq() {
        assert_eq!(seq(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(seq(3, 3), vec![3]);
        assert!(seq(5, 1).is_empty());
    }

    #[test]
    fn test_seq_rejects_oversized_ranges() {
        assert_eq!(seq(1, MAX_SEQ_LEN).len(), MAX_SEQ_LEN as usize);
        assert!(seq(0, MAX_SEQ_LEN).is_empty());
        assert!(seq(0, i64::MAX).is_empty());
        assert!(seq(i64::MIN, i64::MAX).is_empty());
        assert_eq!(seq(i64::MAX - 1, i64::MAX), vec![i64::MAX - 1, i64::MAX]);
    }
}
