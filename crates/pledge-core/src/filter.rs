//! Eligibility rules: which patrons count as active and paying.
//!
//! Each patron is checked in a fixed order and rejected by the first rule it
//! fails:
//!
//! 1. Free tier (tier contains `"Free"`), not counted here since the parser
//!    already tallies free-tier patrons.
//! 2. Last charge status other than `paid`, counted as unpaid.
//! 3. Access expiration strictly before the reference instant, counted as
//!    expired. Values that do not parse as `YYYY-MM-DD HH:MM:SS` are ignored.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use pledge_model::Patron;

/// Format of the access expiration column. Timestamps are read as UTC.
pub const EXPIRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a patron was left out of the paying set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    FreeTier,
    Unpaid,
    Expired,
}

/// Patrons that passed every rule, with the counted rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    /// Paying patrons in input order.
    pub retained: Vec<Patron>,
    pub expired_access: usize,
    pub unpaid_status: usize,
}

/// Splits `patrons` into the paying set and rejection counts as of `now`.
pub fn filter_patrons(patrons: Vec<Patron>, now: DateTime<Utc>) -> FilterResult {
    let mut result = FilterResult::default();
    for patron in patrons {
        match rejection(&patron, now) {
            None => result.retained.push(patron),
            Some(Rejection::Unpaid) => result.unpaid_status += 1,
            Some(Rejection::Expired) => result.expired_access += 1,
            Some(Rejection::FreeTier) => {}
        }
    }
    debug!(
        retained = result.retained.len(),
        expired_access = result.expired_access,
        unpaid_status = result.unpaid_status,
        "filtered patrons"
    );
    result
}

/// First rule `patron` fails, or `None` if it is eligible.
pub fn rejection(patron: &Patron, now: DateTime<Utc>) -> Option<Rejection> {
    if patron.is_free_tier() {
        return Some(Rejection::FreeTier);
    }
    if !patron.has_paid_status() {
        return Some(Rejection::Unpaid);
    }
    let expired = patron
        .access_expiration
        .as_deref()
        .and_then(parse_expiration)
        .is_some_and(|expiration| expiration < now);
    if expired {
        return Some(Rejection::Expired);
    }
    None
}

/// Parses an access expiration timestamp, `None` if it is malformed.
pub fn parse_expiration(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, EXPIRATION_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
