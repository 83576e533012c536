//! HTTP Protocol value types.
mod method;
mod status;
mod version;

pub use method::{Method, UnknownMethod};
pub use status::StatusCode;
pub use version::Version;
