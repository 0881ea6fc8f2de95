mod error;
mod http;

pub use error::*;
pub use http::*;
