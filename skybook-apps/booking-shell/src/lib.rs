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

// Library for skybook-booking-shell
// Line-oriented validator for airline fare-shop and booking commands.

pub mod field_validators;
mod interpreter;
mod reference_codes;
mod segment;
mod shop_request;

// Re-export commonly used items
pub use interpreter::{CommandInterpreter, Verdict};
pub use reference_codes::{ReferenceCodes, ReferenceCodesError};
pub use segment::Segment;
pub use shop_request::{FareShopRequest, TripType};

pub use field_validators::CabinClass;
