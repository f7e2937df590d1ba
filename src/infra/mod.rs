mod http_client;
mod json_store;

pub use http_client::*;
pub use json_store::*;
