//! Core pledge pipeline: eligibility filtering, tier grouping, and the
//! label-sheet layout engine.

pub mod filter;
pub mod group;
pub mod layout;

pub use filter::{
    EXPIRATION_FORMAT, FilterResult, Rejection, filter_patrons, parse_expiration, rejection,
};
pub use group::{group_by_tier, tier_names};
pub use layout::layout_names;
