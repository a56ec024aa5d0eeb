use tracing::debug;

use pledge_model::{Patron, TierGroups};

/// Groups patrons by trimmed tier label and sorts each group by name.
///
/// Patrons with a blank tier are dropped. Names compare case-insensitively and
/// the sort is stable, so equal names keep their input order.
pub fn group_by_tier(patrons: Vec<Patron>) -> TierGroups {
    let mut groups = TierGroups::new();
    for patron in patrons {
        let tier = patron.tier_key();
        if tier.is_empty() {
            continue;
        }
        groups.entry(tier.to_string()).or_default().push(patron);
    }
    for patrons in groups.values_mut() {
        patrons.sort_by_cached_key(Patron::sort_key);
    }
    debug!(tier_count = groups.len(), "grouped patrons by tier");
    groups
}

/// Names of a tier group in display order.
pub fn tier_names(patrons: &[Patron]) -> Vec<String> {
    patrons.iter().map(|patron| patron.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patron(name: &str, tier: &str) -> Patron {
        Patron {
            name: name.to_string(),
            tier: tier.to_string(),
            ..Patron::default()
        }
    }

    #[test]
    fn groups_and_sorts() {
        let groups = group_by_tier(vec![
            patron("Charlie", "Gold"),
            patron("Alice", "Gold"),
            patron("Bob", "Silver"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(tier_names(&groups["Gold"]), vec!["Alice", "Charlie"]);
        assert_eq!(tier_names(&groups["Silver"]), vec!["Bob"]);
    }

    #[test]
    fn tier_key_is_trimmed_but_case_sensitive() {
        let groups = group_by_tier(vec![
            patron("A", " Gold "),
            patron("B", "Gold"),
            patron("C", "gold"),
        ]);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Gold", "gold"]);
        assert_eq!(groups["Gold"].len(), 2);
    }

    #[test]
    fn blank_tier_is_dropped() {
        let groups = group_by_tier(vec![patron("A", "   "), patron("B", "")]);
        assert!(groups.is_empty());
    }

    #[test]
    fn equal_names_keep_input_order() {
        let mut first = patron("alice", "Gold");
        first.email = "first@example.com".to_string();
        let mut second = patron("ALICE", "Gold");
        second.email = "second@example.com".to_string();
        let groups = group_by_tier(vec![first, patron("Aaron", "Gold"), second]);
        let emails: Vec<&str> = groups["Gold"].iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, vec!["", "first@example.com", "second@example.com"]);
    }
}
