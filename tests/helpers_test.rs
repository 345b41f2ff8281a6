use chrono::{Duration, TimeZone, Utc};
use uxr_ds::{
    bool_state, bool_yes_no, format_date, format_date_time, format_number, format_time, time_ago,
    truncate, FixedClock, Pagination, TimeFormatter, TimeInput,
};

#[test]
fn test_pagination_lengths_by_regime() {
    let cases = [(1, 3, 3), (1, 7, 7), (1, 10, 6), (5, 10, 5), (9, 10, 6)];
    for (current, total, want_len) in cases {
        let p = Pagination::new(current, total);
        assert_eq!(
            p.page_numbers.len(),
            want_len,
            "Pagination::new({}, {}) gave {:?}",
            current,
            total,
            p.page_numbers
        );
        assert_eq!(p.current_page, current);
        assert_eq!(p.total_pages, total);
    }

    assert_eq!(Pagination::new(1, 10).page_numbers, vec![1, 2, 3, 4, 5, 10]);
    assert_eq!(Pagination::new(5, 10).page_numbers, vec![1, 4, 5, 6, 10]);
    assert_eq!(Pagination::new(9, 10).page_numbers, vec![1, 6, 7, 8, 9, 10]);
}

#[test]
fn test_pagination_endpoints_always_visible() {
    for total in 8..40 {
        for current in 1..=total {
            let pages = Pagination::new(current, total).page_numbers;
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(pages.contains(&current));
            assert!(pages.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
    assert_eq!(format_number(-1234), "-1,234");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("hello world", 8), "hello...");
    assert_eq!(truncate("hi", 2), "hi");
    assert_eq!(truncate("hello", 3), "hel");
    for s in ["", "a", "hello world", "ünïcödé"] {
        assert_eq!(truncate(s, s.len()), s);
    }
}

#[test]
fn test_time_ago_against_system_clock() {
    assert_eq!(time_ago(Utc::now() - Duration::seconds(30)), "just now");
    assert_eq!(time_ago(Utc::now() - Duration::minutes(5)), "5 minutes ago");
    assert_eq!(time_ago(""), "");
    assert_eq!(time_ago(TimeInput::Absent), "");
    assert_eq!(time_ago(0i64), "");
    assert_eq!(time_ago(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()), "");
}

#[test]
fn test_time_ago_with_injected_clock() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let formatter = TimeFormatter::new().with_clock(FixedClock(now));

    assert_eq!(formatter.time_ago(now - Duration::days(1)), "yesterday");
    assert_eq!(formatter.time_ago(now - Duration::days(14)), "2 weeks ago");
    assert_eq!(formatter.time_ago(now - Duration::days(60)), "2 months ago");
    assert_eq!(formatter.time_ago(now - Duration::days(800)), "2 years ago");
}

#[test]
fn test_absolute_formatters() {
    assert_eq!(format_date("2024-06-15"), "Jun 15, 2024");
    assert_eq!(format_date("2024-06-15T10:30:00Z"), "Jun 15, 2024");
    assert_eq!(format_time("2024-06-15T10:30:00Z"), "Jun 15, 2024 10:30 AM");

    let instant = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap();
    assert_eq!(format_date_time(instant), "Jun 15, 2024 14:30");

    assert_eq!(format_date(""), "");
    assert_eq!(format_time(0i64), "");
    assert_eq!(format_date_time("pending"), "pending");
}

#[test]
fn test_bool_helpers() {
    assert_eq!(bool_state(true, None), "pass");
    assert_eq!(bool_state(false, None), "fail");
    assert_eq!(bool_state(false, Some("warn")), "warn");
    assert_eq!(bool_yes_no(true), "Yes");
    assert_eq!(bool_yes_no(false), "No");
}
