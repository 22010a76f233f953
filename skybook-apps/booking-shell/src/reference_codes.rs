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

//! # Reference Code Sets
//!
//! The two immutable code sets the validators check against: valid airport
//! codes and valid airline designator prefixes. Loaded once at startup from
//! newline-delimited files, read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceCodesError {
    #[error("failed to read code list {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("code list {path} contains no codes")]
    Empty { path: String },
}

/// Immutable lookup sets for airport codes and airline prefixes.
///
/// Safe to share across sessions behind an `Arc`; nothing mutates after
/// construction.
#[derive(Debug)]
pub struct ReferenceCodes {
    airports: HashSet<String>,
    airline_prefixes: HashSet<String>,
}

impl ReferenceCodes {
    /// Load both code sets from newline-delimited files, one code per line.
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn load(
        airport_path: &Path,
        airline_path: &Path,
    ) -> Result<Self, ReferenceCodesError> {
        let airports = read_code_file(airport_path)?;
        let airline_prefixes = read_code_file(airline_path)?;
        tracing::debug!(
            "Loaded {} airport codes from {} and {} airline prefixes from {}",
            airports.len(),
            airport_path.display(),
            airline_prefixes.len(),
            airline_path.display()
        );
        Ok(Self {
            airports,
            airline_prefixes,
        })
    }

    /// Build the sets directly from string iterators. Used by tests.
    pub fn from_lines<A, B>(airports: A, airline_prefixes: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            airports: airports.into_iter().map(Into::into).collect(),
            airline_prefixes: airline_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-sensitive exact membership test against the airport set.
    pub fn is_airport(&self, code: &str) -> bool {
        self.airports.contains(code)
    }

    /// Case-sensitive exact membership test against the airline prefix set.
    pub fn is_airline_prefix(&self, prefix: &str) -> bool {
        self.airline_prefixes.contains(prefix)
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn airline_prefix_count(&self) -> usize {
        self.airline_prefixes.len()
    }
}

fn read_code_file(path: &Path) -> Result<HashSet<String>, ReferenceCodesError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        ReferenceCodesError::Unreadable {
            path: path.display().to_string(),
            source,
        }
    })?;

    let codes: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if codes.is_empty() {
        return Err(ReferenceCodesError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(codes)
}
