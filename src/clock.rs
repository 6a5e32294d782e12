//! Time source for done-markers and report timestamps.
//!
//! Unit tests pin "now" through a thread-local override so date-dependent
//! output stays deterministic.

use jiff::{Zoned, civil::Date};

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
thread_local! {
	static MOCK_TIMESTAMP: Cell<Option<jiff::Timestamp>> = const { Cell::new(None) };
}

/// Current moment in the system time zone (UTC when mocked).
pub fn now() -> Zoned {
	#[cfg(test)]
	if let Some(ts) = MOCK_TIMESTAMP.with(|ts| ts.get()) {
		return ts.to_zoned(jiff::tz::TimeZone::UTC);
	}
	Zoned::now()
}

/// Current local date, as written into `x YYYY-MM-DD ` markers.
pub fn today() -> Date {
	now().date()
}

#[cfg(test)]
pub fn set_timestamp(timestamp: jiff::Timestamp) {
	MOCK_TIMESTAMP.with(|ts| ts.set(Some(timestamp)));
}
