//! Violation strategies, one per constraint kind.
//!
//! - `enumeration` - escape the allowed value set
//! - `length` - truncate or pad a string outside its length bounds
//! - `bounds` - replace a number with one outside its bounds

mod bounds;
mod enumeration;
mod length;

pub use bounds::violate_bounds;
pub use enumeration::violate_enum;
pub use length::violate_length;
