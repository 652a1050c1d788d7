//! The text-to-layout pipeline: sanitize raw input, then interpret it into layout directives.

mod auto_format;
mod interpret;
mod sanitize;
mod spans;

pub use auto_format::auto_format;
pub use interpret::interpret;
pub use sanitize::{is_sanitized, sanitize};
pub use spans::segment;
