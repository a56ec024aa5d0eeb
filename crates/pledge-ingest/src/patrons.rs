//! Conversion of raw export rows into [`Patron`] records.

use tracing::debug;

use pledge_model::{PATRON_FIELD_COUNT, Patron};

/// Column holding the access expiration timestamp.
const ACCESS_EXPIRATION_FIELD: usize = 26;

/// Patrons parsed from an export, with the free-tier tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPatrons {
    pub patrons: Vec<Patron>,
    /// Parsed records whose tier contains `"Free"`.
    pub free_tier: usize,
    /// Data rows dropped for having fewer than [`PATRON_FIELD_COUNT`] fields.
    pub skipped_rows: usize,
}

/// Parses every row after the header.
///
/// Rows shorter than [`PATRON_FIELD_COUNT`] are skipped without error.
pub fn parse_patrons(rows: &[Vec<String>]) -> ParsedPatrons {
    let mut parsed = ParsedPatrons::default();
    for row in rows.iter().skip(1) {
        let Some(patron) = patron_from_fields(row) else {
            parsed.skipped_rows += 1;
            continue;
        };
        if patron.is_free_tier() {
            parsed.free_tier += 1;
        }
        parsed.patrons.push(patron);
    }
    debug!(
        patron_count = parsed.patrons.len(),
        free_tier = parsed.free_tier,
        skipped_rows = parsed.skipped_rows,
        "parsed patrons"
    );
    parsed
}

/// Maps one row onto a [`Patron`] by position. Extra trailing fields are
/// ignored.
pub fn patron_from_fields(row: &[String]) -> Option<Patron> {
    if row.len() < PATRON_FIELD_COUNT {
        return None;
    }
    let field = |idx: usize| row[idx].clone();
    let expiration = &row[ACCESS_EXPIRATION_FIELD];
    Some(Patron {
        name: field(0),
        email: field(1),
        discord: field(2),
        patron_status: field(3),
        follows_you: field(4),
        free_member: field(5),
        free_trial: field(6),
        lifetime_amount: field(7),
        pledge_amount: field(8),
        charge_frequency: field(9),
        tier: field(10),
        addressee: field(11),
        street: field(12),
        city: field(13),
        state: field(14),
        zip: field(15),
        country: field(16),
        phone: field(17),
        patronage_since_date: field(18),
        last_charge_date: field(19),
        last_charge_status: field(20),
        additional_details: field(21),
        user_id: field(22),
        last_updated: field(23),
        currency: field(24),
        max_posts: field(25),
        access_expiration: (!expiration.is_empty()).then(|| expiration.clone()),
        next_charge_date: field(27),
        full_country_name: field(28),
        subscription_source: field(29),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[(usize, &str)]) -> Vec<String> {
        let mut row = vec![String::new(); PATRON_FIELD_COUNT];
        for (idx, value) in values {
            row[*idx] = (*value).to_string();
        }
        row
    }

    #[test]
    fn maps_fields_by_position() {
        let fields = row(&[
            (0, "Alice"),
            (1, "alice@example.com"),
            (10, "Gold"),
            (20, "Paid"),
            (26, "2030-01-01 00:00:00"),
            (29, "Web"),
        ]);
        let patron = patron_from_fields(&fields).expect("full row");
        assert_eq!(patron.name, "Alice");
        assert_eq!(patron.email, "alice@example.com");
        assert_eq!(patron.tier, "Gold");
        assert_eq!(patron.last_charge_status, "Paid");
        assert_eq!(
            patron.access_expiration.as_deref(),
            Some("2030-01-01 00:00:00")
        );
        assert_eq!(patron.subscription_source, "Web");
    }

    #[test]
    fn empty_expiration_is_absent() {
        let patron = patron_from_fields(&row(&[(0, "Bob")])).unwrap();
        assert_eq!(patron.access_expiration, None);
    }

    #[test]
    fn short_row_is_rejected() {
        let mut fields = row(&[(0, "Carol")]);
        fields.pop();
        assert!(patron_from_fields(&fields).is_none());
    }

    #[test]
    fn header_is_never_parsed() {
        let rows = vec![row(&[(0, "Name"), (10, "Free")])];
        let parsed = parse_patrons(&rows);
        assert!(parsed.patrons.is_empty());
        assert_eq!(parsed.free_tier, 0);
    }
}
