//! Value Objects
//!
//! Immutable types with validation, identified by their value.

mod destination_key;
mod object_headers;

pub use destination_key::{DestinationKey, KeyError};
pub use object_headers::{ObjectAcl, ObjectHeaders, CACHE_CONTROL, FALLBACK_CONTENT_TYPE};
