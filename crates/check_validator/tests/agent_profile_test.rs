//! End-to-end checks over a realistic record.
//!
//! Every unit kind is exercised through the public API, and each failing
//! scenario asserts the exact message a caller would print.

use check_validator::{
    BoxedCheck, RunOptions, Validate, ValidationError, Value, between, compare_with, email,
    email_list, eq, gt, gte, iban, ip, is_in, lt, lte, mac, matches, ne, not_in, required, run,
    run_with, url, values, vat,
};
use chrono::{Duration, Utc};
use std::collections::HashMap;

fn first_error(result: Result<(), ValidationError>) -> String {
    result.expect_err("run should fail").to_string()
}

#[test]
fn test_full_profile_passes() {
    let name = "Bond, James Bond";
    let email_address = "007@example.co.uk";
    let hobbies = vec!["gadgets", "shaken drinks", "puns"];
    let weapon_caliber = 7.65;
    let movies = 25;
    let today = Utc::now();
    let now = today + Duration::seconds(1);
    let tomorrow = today + Duration::days(1);
    let contacts = HashMap::from([("M", "m@example.co.uk"), ("Q", "q@example.co.uk")]);

    let result = check_validator::run![
        // Required checks
        required![name],
        required![email_address],
        required![movies],
        required![hobbies.clone()],
        // Equality checks
        eq(name, "Bond, James Bond"),
        eq(movies, 25),
        eq(hobbies.clone(), vec!["gadgets", "shaken drinks", "puns"]),
        ne(email_address, "m@example.co.uk"),
        ne(contacts.clone(), HashMap::from([("Dr. No", "no@example.com")])),
        ne(tomorrow, today),
        // Ordering checks
        lt(movies, 26),
        lte(weapon_caliber, 7.65),
        gt(tomorrow, today),
        gte(movies, 25),
        between(now, today, tomorrow),
        // Membership checks
        is_in(movies, [20, 25, 30]),
        is_in(hobbies[0], ["martini", "gadgets", "cars"]),
        not_in(weapon_caliber, [418, 45, 99, 308]),
        not_in(hobbies.clone(), values![vec!["suits", "cards"], vec!["losing"]]),
        // Pattern checks
        matches("Dr. No", r"\w+\. \w+", true),
        matches("Nick Nack", r"\D+\s{1}Nack", true),
        // Format checks
        iban("IE64IRCE92050112345678", true),
        vat("NO939194428", true),
        email(email_address, true),
        email_list("M <m@example.co.uk>, Q <q@example.co.uk>", true),
        url("https://bond.example.com", true),
        ip("127.0.0.1", true),
        mac("A3:4D:7A:8A:50:B8", true),
    ];

    assert!(result.is_ok(), "unexpected failure: {result:?}");
}

// ============================================================================
// Presence
// ============================================================================

#[test]
fn test_empty_string_is_missing() {
    let email_address = String::new();
    assert_eq!(
        first_error(check_validator::run![required![email_address]]),
        "empty argument"
    );
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_equality_failures() {
    assert_eq!(
        first_error(check_validator::run![eq(3, 4)]),
        "`eq` comparison failed: `3` is not equal to `4`"
    );
    assert_eq!(
        first_error(check_validator::run![
            eq(1, 1),
            eq("a", "a"),
            eq(vec!["a", "b", "c"], vec!["a", "b", "d"]),
            eq(Vec::<String>::new(), Value::Nil),
        ]),
        "`eq` comparison failed: `[a b c]` is not equal to `[a b d]`"
    );
}

#[test]
fn test_inequality_failures() {
    assert_eq!(
        first_error(check_validator::run![ne(2, 2)]),
        "`ne` comparison failed: `2` is equal to `2`"
    );

    let left = HashMap::from([(1, 1), (2, 2), (3, 3)]);
    let right = HashMap::from([(1, 1), (2, 2), (3, 4)]);
    assert_eq!(
        first_error(check_validator::run![
            ne(1, 2),
            ne("a", "b"),
            ne(left, right),
            ne(vec!["a", "b", "c"], vec!["a", "b", "c"]),
            ne(Vec::<String>::new(), Vec::<String>::new()),
        ]),
        "`ne` comparison failed: `[a b c]` is equal to `[a b c]`"
    );
}

#[test]
fn test_maps_keep_key_types() {
    let int_keyed = HashMap::from([(1, 1)]);
    let string_keyed = HashMap::from([("1".to_string(), 1)]);
    assert!(ne(int_keyed.clone(), string_keyed.clone()).evaluate().is_ok());
    assert_eq!(
        eq(int_keyed, string_keyed).evaluate().unwrap_err().to_string(),
        "`eq` comparison failed: `map[1:1]` is not equal to `map[1:1]`"
    );

    assert_eq!(
        first_error(check_validator::run![eq(
            HashMap::from([(2, 2), (10, 10)]),
            HashMap::from([(2, 2)])
        )]),
        "`eq` comparison failed: `map[2:2 10:10]` is not equal to `map[2:2]`"
    );
}

#[test]
fn test_optionals_print_wrapped() {
    assert_eq!(
        first_error(check_validator::run![eq(Some(3), 3)]),
        "`eq` comparison failed: `Some(3)` is not equal to `3`"
    );
    assert!(eq(Some(3), Some(3)).evaluate().is_ok());
}

#[test]
fn test_ordering_failures() {
    let cases = [
        (lt(2, 2), lt(6.7, 4.5), "`lt` comparison failed: `6.7` is not less than `4.5`"),
        (
            lte(3, 2),
            lte(4.6, 4.5),
            "`lte` comparison failed: `4.6` is not less than or equal to `4.5`",
        ),
        (gt(2, 2), gt(3.1, 4.3), "`gt` comparison failed: `3.1` is not greater than `4.3`"),
        (
            gte(2, 3),
            gte(3.1, 4.3),
            "`gte` comparison failed: `3.1` is not greater than or equal to `4.3`",
        ),
    ];

    for (integer_case, float_case, expected) in cases {
        assert!(integer_case.evaluate().is_err());
        assert_eq!(first_error(run([float_case])), expected);
    }
}

#[test]
fn test_timestamps_order_by_instant() {
    let now = Utc::now();
    assert!(check_validator::run![lte(now, now), gte(now, now), eq(now, now)].is_ok());
    assert!(lt(now, now).evaluate().is_err());
    assert!(gt(now, now).evaluate().is_err());
}

#[test]
fn test_mixed_categories_fail_conversion() {
    assert_eq!(
        first_error(run([compare_with(3, "lt".parse().unwrap(), "3")])),
        "cannot convert `string` to type int64"
    );
}

#[test]
fn test_between_failures() {
    assert_eq!(
        first_error(check_validator::run![between(2, 3, 4)]),
        "`gte` comparison failed: `2` is not greater than or equal to `3`"
    );
    assert_eq!(
        first_error(check_validator::run![
            between(5, 1, 10),
            between(2.3, 1.0, 5.0),
            between(10.5, 11.2, 15.3),
        ]),
        "`gte` comparison failed: `10.5` is not greater than or equal to `11.2`"
    );
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_in_failures() {
    assert_eq!(
        first_error(check_validator::run![is_in("a", ["b", "c", "d"])]),
        "`in` comparison failed: `a` not in `[b c d]`"
    );
    assert_eq!(
        first_error(check_validator::run![
            is_in(2, [2, 3, 4]),
            is_in(vec![1, 2, 3], [vec![2, 3, 4], vec![3, 4, 5]]),
        ]),
        "`in` comparison failed: `[1 2 3]` not in `[[2 3 4] [3 4 5]]`"
    );
}

#[test]
fn test_not_in_failures() {
    assert_eq!(
        first_error(check_validator::run![not_in("a", ["a", "c", "d"])]),
        "`not in` comparison failed: `a` in `[a c d]`"
    );
    assert_eq!(
        first_error(check_validator::run![
            not_in(2, [1, 3, 4]),
            not_in(vec![1, 2, 3], [vec![2, 3, 4], vec![1, 2, 3]]),
        ]),
        "`not in` comparison failed: `[1 2 3]` in `[[2 3 4] [1 2 3]]`"
    );
}

// ============================================================================
// Patterns and formats
// ============================================================================

#[test]
fn test_pattern_failures() {
    assert_eq!(
        first_error(check_validator::run![matches("32", r"\D+", true)]),
        r"`32` does not match pattern `\D+`"
    );
    assert_eq!(
        first_error(check_validator::run![
            matches("abc", r"\w+", true),
            matches("abc", r"\d+", true),
        ]),
        r"`abc` does not match pattern `\d+`"
    );
}

#[test]
fn test_format_failures_stop_at_first() {
    let cases = vec![
        (
            check_validator::run![email("", false), email("Alice <aliceexample.com>", true)],
            "invalid email address `Alice <aliceexample.com>`",
        ),
        (
            check_validator::run![
                email_list("Eve <eve@example.com>, Bob <bob@example.com>", true),
                email_list("", false),
                email_list("Bob <bob@example.com>,,", true),
            ],
            "invalid email address ``",
        ),
        (
            check_validator::run![url("", false), url("https://example com", true)],
            "invalid URL `https://example com`",
        ),
        (
            check_validator::run![
                iban("SV43ACAT00000000000000123123", true),
                iban("00CY2100200195000035700123", true),
            ],
            "invalid IBAN `00CY2100200195000035700123`",
        ),
        (
            check_validator::run![vat("ATU00000024", true), vat("AT0000", true)],
            "invalid VAT number `AT0000`",
        ),
        (
            check_validator::run![ip("::1", true), ip("23.55.3212", true)],
            "invalid IP address `23.55.3212`",
        ),
        (
            check_validator::run![mac("5F-7C-F5-12-FF-E7", true), mac("77-6B-00--79-DF-4C", true)],
            "invalid mac address `77-6B-00--79-DF-4C`",
        ),
    ];

    for (result, expected) in cases {
        assert_eq!(first_error(result), expected);
    }
}

// ============================================================================
// Runner
// ============================================================================

#[test]
fn test_report_lists_every_failure() {
    let checks: Vec<BoxedCheck> = vec![
        Box::new(required![""]),
        Box::new(eq(1, 1)),
        Box::new(mac("00:0a:95:9d:68:16:00", true)),
    ];
    let report = run_with(checks, &RunOptions::new().with_fail_fast(false));

    assert!(!report.passed);
    let messages: Vec<String> = report
        .failures
        .iter()
        .map(|f| f.error.to_string())
        .collect();
    assert_eq!(
        messages,
        vec!["empty argument", "invalid mac address `00:0a:95:9d:68:16:00`"]
    );
    assert_eq!(report.stats.checks_total, 3);
}
