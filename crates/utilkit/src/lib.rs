//! Stateless helper functions for everyday application code.
//!
//! Each helper is independent: nothing here holds shared state, performs I/O
//! or spawns work. Mutating helpers only touch the value the caller passes in.
//!
//! # Modules
//!
//! - [`slice`] - find, filter and remove elements in slices and vectors
//! - [`fields`] - read and write record fields by name with type checks
//! - [`map`] - get-or-create access for hash maps
//! - [`case`] - `PascalCase` / `snake_case` conversion
//! - [`datetime`] - minute offsets, fixed zones and IANA zone conversion
//! - [`origin`] - host label extraction from `Origin` headers
//! - [`nullable`] - zero-means-absent optional values

pub mod case;
pub mod datetime;
pub mod error;
pub mod fields;
pub mod map;
pub mod nullable;
pub mod origin;
pub mod slice;

// Re-export commonly used items at crate root for convenience
pub use case::{to_pascal_case, to_snake_case};
pub use datetime::{
    align_clock, convert_timezone, offset_time, offset_to_zone, parse_zone,
    zone_name_to_offset_minutes, zone_name_to_offset_minutes_at, FixedZone,
};
pub use error::{FieldAccessError, SliceError, TimeError, UtilError};
pub use fields::{get_field, set_field, AsAny, FieldSchema, FieldSchemaBuilder, Reflect};
pub use map::{get_or_create, get_or_create_with};
pub use nullable::{to_nullable, to_nullable_int};
pub use origin::parse_origin_label;
pub use slice::{
    filter, filter_refs, find_first, find_first_deref, find_first_mut, remove_ordered,
    remove_unordered,
};
