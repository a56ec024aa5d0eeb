//! Data model for the pledge sorter.
//!
//! Plain data shared by every stage of the pipeline: the [`Patron`] record,
//! tier groups, the layout parameters and results of the label-sheet engine,
//! the resolved [`Settings`], and the [`RunSummary`] shown at the end of a run.

pub mod error;
pub mod layout;
pub mod patron;
pub mod settings;
pub mod summary;

pub use error::{LayoutError, Result, SettingsError};
pub use layout::{LabelLayout, LayoutParams, PositionedName};
pub use patron::{FREE_TIER_MARKER, PAID_STATUS, PATRON_FIELD_COUNT, Patron, TierGroups};
pub use settings::Settings;
pub use summary::{OutputPaths, RunSummary, TierOutput};
