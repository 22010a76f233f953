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

//! # Fare-Shop Request Grammar
//!
//! Parses the argument tokens of a `shop` command:
//!
//! ```text
//! shop flight fares <ORIGIN> <DEST> OneWay <CABIN> <DATE>
//! shop flight fares <ORIGIN> <DEST> Return <LENGTH> <CABIN> <DATE>
//! ```
//!
//! The request is only ever valid as a whole; a failed field makes the
//! whole command invalid and nothing is persisted.

use chrono::NaiveDate;

use crate::field_validators::{
    CabinClass, is_valid_airport, parse_iso_date, parse_trip_length, shop_date_days_ahead,
};
use crate::reference_codes::ReferenceCodes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    OneWay,
    /// Round trip with the longest allowed outbound/return gap in days.
    Return { window_days: u8 },
}

/// A fully validated `shop` command. Transient; exists only while the
/// line that produced it is being evaluated.
#[derive(Debug, Clone)]
pub struct FareShopRequest {
    pub origin: String,
    pub destination: String,
    pub trip_type: TripType,
    pub cabin: CabinClass,
    pub travel_date: NaiveDate,
}

impl FareShopRequest {
    /// Parse and validate the tokens following the `shop` keyword.
    /// Returns `None` on any shape or field failure.
    pub fn parse(args: &[&str], codes: &ReferenceCodes, today: NaiveDate) -> Option<Self> {
        let ["flight", "fares", origin, destination, rest @ ..] = args else {
            return None;
        };

        // Exactly OneWay or Return-with-length; extra or missing tokens fail.
        let (trip_type, cabin_token, date_token) = match rest {
            ["OneWay", cabin, date] => (TripType::OneWay, cabin, date),
            ["Return", length, cabin, date] => {
                let window_days = parse_trip_length(length)?;
                (TripType::Return { window_days }, cabin, date)
            }
            _ => return None,
        };

        if !is_valid_airport(codes, origin)
            || !is_valid_airport(codes, destination)
            || origin == destination
        {
            return None;
        }

        let cabin = CabinClass::from_code(cabin_token)?;
        shop_date_days_ahead(date_token, today)?;
        let travel_date = parse_iso_date(date_token)?;

        Some(Self {
            origin: (*origin).to_string(),
            destination: (*destination).to_string(),
            trip_type,
            cabin,
            travel_date,
        })
    }
}
