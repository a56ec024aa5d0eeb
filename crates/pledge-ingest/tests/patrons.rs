//! Tests for the patron parser.

use proptest::prelude::*;

use pledge_ingest::parse_patrons;
use pledge_model::PATRON_FIELD_COUNT;

fn header() -> Vec<String> {
    (0..PATRON_FIELD_COUNT).map(|idx| format!("Col{idx}")).collect()
}

fn patron_row(name: &str, email: &str, tier: &str) -> Vec<String> {
    let mut row = vec![String::new(); PATRON_FIELD_COUNT];
    row[0] = name.to_string();
    row[1] = email.to_string();
    row[10] = tier.to_string();
    row
}

#[test]
fn parses_patrons_and_counts_free_tier() {
    let rows = vec![
        header(),
        patron_row("Alice", "a@b.com", "Gold"),
        patron_row("Bob", "b@b.com", "Free"),
    ];
    let parsed = parse_patrons(&rows);
    assert_eq!(parsed.patrons.len(), 2);
    assert_eq!(parsed.free_tier, 1);
    assert_eq!(parsed.patrons[0].name, "Alice");
    assert_eq!(parsed.patrons[1].tier, "Free");
}

#[test]
fn free_marker_is_a_substring_match() {
    let rows = vec![
        header(),
        patron_row("A", "", "Free Trial"),
        patron_row("B", "", "  Free  "),
        patron_row("C", "", "free"),
        patron_row("D", "", "FREE"),
    ];
    let parsed = parse_patrons(&rows);
    assert_eq!(parsed.free_tier, 2);
}

#[test]
fn extra_fields_are_accepted() {
    let mut row = patron_row("Eve", "e@b.com", "Silver");
    row.push("extra".to_string());
    let parsed = parse_patrons(&[header(), row]);
    assert_eq!(parsed.patrons.len(), 1);
}

#[test]
fn empty_input_yields_nothing() {
    let parsed = parse_patrons(&[]);
    assert!(parsed.patrons.is_empty());
    assert_eq!(parsed.free_tier, 0);
}

fn arb_row() -> impl Strategy<Value = Vec<String>> {
    (
        0usize..=PATRON_FIELD_COUNT + 2,
        prop::sample::select(vec!["Gold", "Free", "Free Trial", "Silver", "", "free"]),
        "[A-Za-z]{0,8}",
    )
        .prop_map(|(len, tier, name)| {
            let mut row = vec![String::new(); len];
            if len > 0 {
                row[0] = name;
            }
            if len > 10 {
                row[10] = tier.to_string();
            }
            row
        })
}

proptest! {
    #[test]
    fn short_rows_never_parse(rows in prop::collection::vec(arb_row(), 0..40)) {
        let mut input = vec![header()];
        input.extend(rows.iter().cloned());
        let parsed = parse_patrons(&input);

        let well_formed = rows.iter().filter(|row| row.len() >= PATRON_FIELD_COUNT).count();
        prop_assert_eq!(parsed.patrons.len(), well_formed);
        prop_assert_eq!(parsed.skipped_rows, rows.len() - well_formed);

        let free = parsed.patrons.iter().filter(|p| p.tier.contains("Free")).count();
        prop_assert_eq!(parsed.free_tier, free);
    }
}
