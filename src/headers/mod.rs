//! HTTP Header Multimap.
//!
//! Header fields are kept in insertion order with their original casing. Lookup compares names
//! ASCII case-insensitively, and repeated names are retained as separate fields.
mod map;
mod iter;

pub use map::{HeaderMap, Header};
pub use iter::{Iter, GetAll};


/// Standard header names used by the client.
pub mod standard {
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_ENCODING: &str = "Content-Encoding";
    pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
}
