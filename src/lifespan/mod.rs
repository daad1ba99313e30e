//! Lifespan reference data
//!
//! - `category.rs` - SystemCategory enum
//! - `table.rs` - LifespanTable, profiles and regional overrides

pub mod category;
pub mod table;

pub use category::SystemCategory;
pub use table::{
    LifespanOverrides, LifespanTable, SystemLifespanProfile, FALLBACK_DISPLAY_PRIORITY,
    FALLBACK_LIFESPAN_YEARS,
};
