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

//! # Booking Segment Grammar
//!
//! One flight leg inside an open booking request:
//!
//! ```text
//! seg <ORIGIN> <DEST> <AIRLINE> <DATE> <CABIN> <SEATS>
//! ```

use chrono::NaiveDate;

use crate::field_validators::{
    CabinClass, air_date_days_ahead, is_valid_airline, is_valid_airport, parse_iso_date,
    parse_seat_count,
};
use crate::reference_codes::ReferenceCodes;

/// A validated flight leg buffered inside an open booking request.
#[derive(Debug, Clone)]
pub struct Segment {
    pub origin: String,
    pub destination: String,
    /// Full flight designator, e.g. `AA123`.
    pub airline: String,
    pub travel_date: NaiveDate,
    pub cabin: CabinClass,
    pub seats: u8,
}

impl Segment {
    /// Parse and validate the six tokens following the `seg` keyword.
    /// All six fields must validate and origin must differ from
    /// destination; otherwise `None`.
    pub fn parse(args: &[&str], codes: &ReferenceCodes, today: NaiveDate) -> Option<Self> {
        let [origin, destination, airline, date, cabin, seats] = args else {
            return None;
        };

        if !is_valid_airport(codes, origin)
            || !is_valid_airport(codes, destination)
            || origin == destination
            || !is_valid_airline(codes, airline)
        {
            return None;
        }

        air_date_days_ahead(date, today)?;
        let travel_date = parse_iso_date(date)?;
        let cabin = CabinClass::from_code(cabin)?;
        let seats = parse_seat_count(seats)?;

        Some(Self {
            origin: (*origin).to_string(),
            destination: (*destination).to_string(),
            airline: (*airline).to_string(),
            travel_date,
            cabin,
            seats,
        })
    }
}
