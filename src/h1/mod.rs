//! HTTP/1.1 Protocol.
//!
//! - [`parser`] response parser state machine
//! - [`serializer`] request serializer
pub mod parser;
pub mod serializer;
mod error;

pub use error::ParseError;
pub use parser::Parser;
pub use serializer::Serializer;
