/// Data model for imgtally.
///
/// Re-exports the subtype record and supporting helpers.
pub mod count;
pub mod record;

pub use count::format_count;
pub use record::{grand_total, sort_descending, SubtypeRecord};
