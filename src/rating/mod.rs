pub mod aggregate;
pub mod format;

pub use aggregate::{FULL_RELIABILITY, aggregate, is_reliable};
pub use format::{NOT_AVAILABLE, format_average, format_rating};
