pub mod api_client;
pub mod token;

pub use api_client::ApiClient;
pub use token::{StaticTokenProvider, TokenProvider};
