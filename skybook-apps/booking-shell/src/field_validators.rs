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

//! # Field Validators
//!
//! Side-effect free validators, one per domain field. Every function is
//! total: malformed tokens (non-digits, overflow, bad calendar dates)
//! come back as `false`/`None`, never as a panic.
//!
//! Date validators take `today` explicitly so window arithmetic is
//! deterministic under test; callers pass `Local::now().date_naive()`.

use chrono::NaiveDate;

use crate::reference_codes::ReferenceCodes;

/// Longest allowed gap, in days, between outbound and return of a round trip.
pub const MAX_RETURN_WINDOW_DAYS: u8 = 20;

/// Fare shopping only looks this many days ahead.
pub const SHOP_WINDOW_DAYS: i64 = 100;

/// Seat count bounds for one segment.
pub const MIN_SEATS: u8 = 1;
pub const MAX_SEATS: u8 = 10;

/// Single-letter fare cabin, e.g. `C` for business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinClass {
    PremiumFirst,
    First,
    PremiumBusiness,
    Business,
    PremiumEconomy,
    Economy,
}

impl CabinClass {
    /// Parse a one-character cabin token. Anything other than a single
    /// letter from {P, F, J, C, S, Y} is rejected.
    pub fn from_code(token: &str) -> Option<Self> {
        match token {
            "P" => Some(Self::PremiumFirst),
            "F" => Some(Self::First),
            "J" => Some(Self::PremiumBusiness),
            "C" => Some(Self::Business),
            "S" => Some(Self::PremiumEconomy),
            "Y" => Some(Self::Economy),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::PremiumFirst => 'P',
            Self::First => 'F',
            Self::PremiumBusiness => 'J',
            Self::Business => 'C',
            Self::PremiumEconomy => 'S',
            Self::Economy => 'Y',
        }
    }
}

/// True iff the token is a known airport code (exact, case-sensitive).
pub fn is_valid_airport(codes: &ReferenceCodes, token: &str) -> bool {
    codes.is_airport(token)
}

/// True iff the token is an airline flight designator: a known two-letter
/// prefix followed by exactly three ASCII digits.
pub fn is_valid_airline(codes: &ReferenceCodes, token: &str) -> bool {
    if !token.is_ascii() || token.len() != 5 {
        return false;
    }
    let (prefix, flight_number) = token.split_at(2);
    codes.is_airline_prefix(prefix) && flight_number.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a return-trip length token: base-10 integer in [0, 20].
pub fn parse_trip_length(token: &str) -> Option<u8> {
    let days: u8 = token.parse().ok()?;
    (days <= MAX_RETURN_WINDOW_DAYS).then_some(days)
}

/// True iff the token is a single valid cabin letter.
pub fn is_valid_cabin(token: &str) -> bool {
    CabinClass::from_code(token).is_some()
}

/// Parse a seat-count token: base-10 integer in [1, 10].
pub fn parse_seat_count(token: &str) -> Option<u8> {
    let seats: u8 = token.parse().ok()?;
    (MIN_SEATS..=MAX_SEATS).contains(&seats).then_some(seats)
}

/// Parse a strict `YYYY-MM-DD` token into a real calendar date.
///
/// The shape is checked byte-for-byte before handing off to chrono,
/// because chrono's `%Y-%m-%d` also accepts unpadded variants like
/// `2026-7-7` which the grammar must reject.
pub fn parse_iso_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digit_positions = [0usize, 1, 2, 3, 5, 6, 8, 9];
    if !digit_positions.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return None;
    }
    let year: i32 = token[..4].parse().ok()?;
    let month: u32 = token[5..7].parse().ok()?;
    let day: u32 = token[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validate a bookable travel date: strict `YYYY-MM-DD`, real calendar
/// date, strictly after `today`. Returns how many days ahead it lies.
pub fn air_date_days_ahead(token: &str, today: NaiveDate) -> Option<i64> {
    let date = parse_iso_date(token)?;
    let days_ahead = (date - today).num_days();
    (days_ahead > 0).then_some(days_ahead)
}

/// Validate a shoppable travel date: air-date valid and at most
/// [`SHOP_WINDOW_DAYS`] days ahead.
pub fn shop_date_days_ahead(token: &str, today: NaiveDate) -> Option<i64> {
    let days_ahead = air_date_days_ahead(token, today)?;
    (days_ahead <= SHOP_WINDOW_DAYS).then_some(days_ahead)
}
