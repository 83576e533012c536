use std::time::Duration;

/// Default read and write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Default maximum bytes read from the stream at once.
pub const DEFAULT_READ_SIZE: usize = 4 * 1024;

/// [`Session`] configuration.
///
/// ```
/// use std::time::Duration;
/// use duta::Config;
///
/// let config = Config::new()
///     .read_timeout(Some(Duration::from_secs(5)))
///     .max_headers_size(64 * 1024);
/// assert_eq!(config.get_max_headers_size(), 64 * 1024);
/// ```
///
/// [`Session`]: crate::Session
#[derive(Clone, Debug)]
pub struct Config {
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    read_size: usize,
    status_line_size: usize,
    max_status_line_size: usize,
    headers_size: usize,
    max_headers_size: usize,
    render_size: usize,
    request_headers: usize,
    response_headers: usize,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! setters {
    ($($(#[$doc:meta])* $field:ident, $getter:ident: $ty:ty;)*) => {
        impl Config {
            $(
                $(#[$doc])*
                #[inline]
                pub const fn $field(mut self, value: $ty) -> Self {
                    self.$field = value;
                    self
                }

                #[inline]
                pub const fn $getter(&self) -> $ty {
                    self.$field
                }
            )*
        }
    };
}

impl Config {
    pub const fn new() -> Self {
        Self {
            read_timeout: Some(DEFAULT_TIMEOUT),
            write_timeout: Some(DEFAULT_TIMEOUT),
            read_size: DEFAULT_READ_SIZE,
            status_line_size: 256,
            max_status_line_size: 1024,
            headers_size: 2 * 1024,
            max_headers_size: 32 * 1024,
            render_size: 2 * 1024,
            request_headers: 10,
            response_headers: 7,
        }
    }
}

setters! {
    /// Stream read timeout, `None` blocks indefinitely.
    read_timeout, get_read_timeout: Option<Duration>;
    /// Stream write timeout, `None` blocks indefinitely.
    write_timeout, get_write_timeout: Option<Duration>;
    /// Maximum bytes read from the stream at once.
    read_size, get_read_size: usize;
    /// Initial status line buffer capacity.
    status_line_size, get_status_line_size: usize;
    /// Status line length limit, longer status line is [`ParseError::StatusLineTooLong`].
    ///
    /// [`ParseError::StatusLineTooLong`]: crate::h1::ParseError::StatusLineTooLong
    max_status_line_size, get_max_status_line_size: usize;
    /// Initial header section buffer capacity.
    headers_size, get_headers_size: usize;
    /// Header section length limit, larger section is [`ParseError::HeadersTooLarge`].
    ///
    /// [`ParseError::HeadersTooLarge`]: crate::h1::ParseError::HeadersTooLarge
    max_headers_size, get_max_headers_size: usize;
    /// Initial request render buffer capacity.
    render_size, get_render_size: usize;
    /// Initial request header slots.
    request_headers, get_request_headers: usize;
    /// Initial response header slots.
    response_headers, get_response_headers: usize;
}
