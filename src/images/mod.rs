pub mod api;
pub mod error;
pub mod response;
pub mod util;
mod source;
