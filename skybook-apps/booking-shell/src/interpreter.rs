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

//! # Command Interpreter
//!
//! One interpreter instance per session. Consumes one input line at a
//! time, dispatches on the leading keyword and drives the multi-line
//! booking-request protocol:
//!
//! - `shop …` is evaluated standalone.
//! - `air book req` opens a booking request; `seg` lines buffer legs;
//!   `EOC` closes and answers for the whole request.
//!
//! Invalid lines inside an open booking request abort it immediately
//! (strict-immediate policy): the offending line answers `Error`, the
//! buffered segments are discarded and the session returns to idle.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::reference_codes::ReferenceCodes;
use crate::segment::Segment;
use crate::shop_request::FareShopRequest;

/// Binary outcome of one evaluated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("OK"),
            Verdict::Rejected => f.write_str("Error"),
        }
    }
}

const IDLE_PROMPT: &str = "skybook> ";

fn continuation_prompt() -> String {
    // Right-aligned to the idle prompt width so input columns line up.
    format!("{:>width$}", "... ", width = IDLE_PROMPT.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    CollectingSegments,
}

/// Per-session command interpreter.
///
/// Holds the session's own prompt and booking-request accumulator; the
/// reference code sets are shared read-only across sessions.
#[derive(Debug)]
pub struct CommandInterpreter {
    codes: Arc<ReferenceCodes>,
    state: SessionState,
    segments: Vec<Segment>,
    prompt: String,
}

impl CommandInterpreter {
    pub fn new(codes: Arc<ReferenceCodes>) -> Self {
        Self {
            codes,
            state: SessionState::Idle,
            segments: Vec::new(),
            prompt: IDLE_PROMPT.to_string(),
        }
    }

    /// The prompt the REPL should display before the next line.
    /// Switches to a continuation style while a booking request is open.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Evaluate one input line against the current local date.
    pub fn eval_line(&mut self, line: &str) -> Option<Verdict> {
        self.eval_line_at(line, chrono::Local::now().date_naive())
    }

    /// Evaluate one input line with an explicit `today`, so date-window
    /// rules are deterministic under test.
    ///
    /// Returns `None` for lines that legitimately produce no output: a
    /// valid `air book req` opener and a valid buffered `seg` line.
    pub fn eval_line_at(&mut self, line: &str, today: NaiveDate) -> Option<Verdict> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            // Blank input is never a command.
            return Some(self.abort());
        };

        match keyword {
            "shop" => {
                if self.state == SessionState::CollectingSegments {
                    return Some(self.abort());
                }
                if FareShopRequest::parse(args, &self.codes, today).is_some() {
                    Some(Verdict::Accepted)
                } else {
                    Some(Verdict::Rejected)
                }
            }
            "air" => {
                if self.state == SessionState::CollectingSegments {
                    return Some(self.abort());
                }
                if args == ["book", "req"] {
                    self.state = SessionState::CollectingSegments;
                    self.prompt = continuation_prompt();
                    None
                } else {
                    Some(Verdict::Rejected)
                }
            }
            "seg" => match self.state {
                SessionState::Idle => Some(Verdict::Rejected),
                SessionState::CollectingSegments => {
                    match Segment::parse(args, &self.codes, today) {
                        Some(segment) => {
                            self.segments.push(segment);
                            None
                        }
                        None => Some(self.abort()),
                    }
                }
            },
            // Trailing tokens after EOC are ignored, matching the original
            // terminator behavior.
            "EOC" => match self.state {
                SessionState::Idle => Some(Verdict::Rejected),
                SessionState::CollectingSegments => {
                    let verdict = if self.segments.is_empty() {
                        Verdict::Rejected
                    } else {
                        Verdict::Accepted
                    };
                    self.reset();
                    Some(verdict)
                }
            },
            _ => Some(self.abort()),
        }
    }

    /// Discard any in-progress booking request and answer `Error`.
    fn abort(&mut self) -> Verdict {
        self.reset();
        Verdict::Rejected
    }

    fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.segments.clear();
        self.prompt = IDLE_PROMPT.to_string();
    }
}
