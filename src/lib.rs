//! Client for the Cloudflare Images API: upload, paginated listing and
//! delivery URLs.

#[macro_use] extern crate log;

pub mod account;
pub mod images;

pub use account::Account;
pub use images::api::{Api, SortOrder};
pub use images::error::Error;
pub use images::response::{ApiError, ImagePage, ImageRecord, UploadResult};
pub use images::util::image_delivery_url;
