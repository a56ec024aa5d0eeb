use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of fields a pledge export row must carry to become a [`Patron`].
pub const PATRON_FIELD_COUNT: usize = 30;

/// Substring marking a free (non-paying) tier. Matched case-sensitively.
pub const FREE_TIER_MARKER: &str = "Free";

/// Charge status a patron needs to count as paying.
pub const PAID_STATUS: &str = "paid";

/// Tier label to patrons sorted by name (case-insensitive).
pub type TierGroups = BTreeMap<String, Vec<Patron>>;

/// One row of a pledge export.
///
/// Fields are kept as the raw export strings. Only `tier`,
/// `last_charge_status` and `access_expiration` are interpreted by the
/// pipeline; the rest is carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub name: String,
    pub email: String,
    pub discord: String,
    pub patron_status: String,
    pub follows_you: String,
    pub free_member: String,
    pub free_trial: String,
    pub lifetime_amount: String,
    pub pledge_amount: String,
    pub charge_frequency: String,
    pub tier: String,
    pub addressee: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub patronage_since_date: String,
    pub last_charge_date: String,
    pub last_charge_status: String,
    pub additional_details: String,
    pub user_id: String,
    pub last_updated: String,
    pub currency: String,
    pub max_posts: String,
    /// `None` when the export cell is empty.
    pub access_expiration: Option<String>,
    pub next_charge_date: String,
    pub full_country_name: String,
    pub subscription_source: String,
}

impl Patron {
    /// True when the raw tier label contains [`FREE_TIER_MARKER`].
    pub fn is_free_tier(&self) -> bool {
        self.tier.contains(FREE_TIER_MARKER)
    }

    /// True when the last charge status is `paid`, ignoring case and padding.
    pub fn has_paid_status(&self) -> bool {
        self.last_charge_status.trim().to_lowercase() == PAID_STATUS
    }

    /// Tier label used as the grouping key.
    pub fn tier_key(&self) -> &str {
        self.tier.trim()
    }

    /// Key used to order patrons within a tier.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
