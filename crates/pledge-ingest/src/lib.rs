//! Pledge export ingestion: CSV loading, patron parsing, and settings loading.

pub mod csv_reader;
pub mod error;
pub mod patrons;
pub mod settings;

pub use csv_reader::{ensure_data_rows, read_csv_rows, read_csv_rows_from};
pub use error::{IngestError, Result};
pub use patrons::{ParsedPatrons, parse_patrons, patron_from_fields};
pub use settings::{SETTINGS_FILE, load_settings, parse_color_list, parse_color_map, parse_settings};
