//!  Skybook Booking Shell
//!
//!  Copyright (C) 2026  Skybook contributors
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Field validator behavior against a small fixed reference set.
//!
//! Run with:
//!     cargo test --test t_field_validators

use chrono::NaiveDate;
use skybook_booking_shell::ReferenceCodes;
use skybook_booking_shell::field_validators::{
    air_date_days_ahead, is_valid_airline, is_valid_airport, parse_seat_count, parse_trip_length,
    shop_date_days_ahead,
};

fn codes() -> ReferenceCodes {
    ReferenceCodes::from_lines(["AAA", "AAB", "SFO", "JFK"], ["AA", "QF", "DL"])
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
}

#[test]
fn test_airport_membership() {
    let codes = codes();
    for known in ["AAA", "AAB", "SFO", "JFK"] {
        assert!(is_valid_airport(&codes, known), "{known} should be valid");
    }
    for unknown in ["AA", "AAAA", "aaa", "ZZZ", "", "SF0"] {
        assert!(
            !is_valid_airport(&codes, unknown),
            "{unknown} should be invalid"
        );
    }
}

#[test]
fn test_airline_designator_exact_three_digits() {
    let codes = codes();
    assert!(is_valid_airline(&codes, "AA123"));
    assert!(is_valid_airline(&codes, "QF001"));

    // Only one digit.
    assert!(!is_valid_airline(&codes, "AA1"));
    assert!(!is_valid_airline(&codes, "AA12"));
    assert!(!is_valid_airline(&codes, "AA1234"));
    // Unknown prefix, lowercase prefix, non-digit tail.
    assert!(!is_valid_airline(&codes, "ZZ123"));
    assert!(!is_valid_airline(&codes, "aa123"));
    assert!(!is_valid_airline(&codes, "AA12a"));
    assert!(!is_valid_airline(&codes, "AA 23"));
    // Too short to hold a prefix, and non-ASCII input.
    assert!(!is_valid_airline(&codes, "A"));
    assert!(!is_valid_airline(&codes, ""));
    assert!(!is_valid_airline(&codes, "ÅÅ123"));
}

#[test]
fn test_date_windows() {
    // Today itself is never bookable; the difference must be strictly positive.
    assert_eq!(air_date_days_ahead("2026-08-26", today()), None);
    assert_eq!(shop_date_days_ahead("2026-08-26", today()), None);

    // 100 days ahead is shop-valid, 101 days is air-valid only.
    assert_eq!(shop_date_days_ahead("2026-12-04", today()), Some(100));
    assert_eq!(shop_date_days_ahead("2026-12-05", today()), None);
    assert_eq!(air_date_days_ahead("2026-12-05", today()), Some(101));

    // Malformed tokens never validate and never panic.
    for bad in [
        "2026-9-1",
        "26-09-01",
        "2026-13-01",
        "2026-02-30",
        "2026/09/01",
        "tomorrow",
        "",
    ] {
        assert_eq!(air_date_days_ahead(bad, today()), None, "{bad:?}");
    }
}

#[test]
fn test_seat_and_trip_bounds() {
    assert_eq!(parse_seat_count("1"), Some(1));
    assert_eq!(parse_seat_count("10"), Some(10));
    assert_eq!(parse_seat_count("0"), None);
    assert_eq!(parse_seat_count("11"), None);

    assert_eq!(parse_trip_length("0"), Some(0));
    assert_eq!(parse_trip_length("20"), Some(20));
    assert_eq!(parse_trip_length("-1"), None);
    assert_eq!(parse_trip_length("21"), None);

    // Malformed numerics are invalid, not a crash.
    for bad in ["", "ten", "1.5", "0x5", "184467440737095516160"] {
        assert_eq!(parse_seat_count(bad), None, "{bad:?}");
        assert_eq!(parse_trip_length(bad), None, "{bad:?}");
    }
}
