//! Blocking HTTP/1.1 Client
//!
//! Sends requests over a single persistent connection and reads responses incrementally, with
//! tolerance for network reads split at any byte position.
//!
//! ```no_run
//! use duta::{Request, Session};
//!
//! let mut session = Session::connect("127.0.0.1:8080")?;
//!
//! let mut response = Request::get("/").send(&mut session)?;
//! println!("{} {}", response.status(), response.reason());
//! println!("{}", response.body().read_string()?);
//! # Ok::<(), duta::Error>(())
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod common;
pub mod http;
pub mod headers;
pub mod io;
pub mod h1;
pub mod body;
pub mod request;
pub mod response;

mod config;
mod error;
mod session;

pub use config::{Config, DEFAULT_READ_SIZE, DEFAULT_TIMEOUT};
pub use error::Error;
pub use session::Session;

pub use body::{Body, BodyError};
pub use headers::HeaderMap;
pub use http::{Method, StatusCode, Version};
pub use request::Request;
pub use response::Response;
