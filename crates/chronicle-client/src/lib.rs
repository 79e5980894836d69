//! Chronicle API Client
//!
//! Talks to the external article API over plain HTTP.
//!
//! - **Reads**: [`ApiClient::fetch_article`], [`ApiClient::fetch_articles`],
//!   [`ApiClient::fetch_drafts`]
//! - **Admin mutations**: [`ApiClient::publish`], [`ApiClient::delete_article`]
//! - **Effect runner**: [`ApiClient::perform`] executes an
//!   [`AdminEffect`](chronicle_core::AdminEffect) and returns the follow-up event
//!
//! Requests go through a [`Transport`]; the default [`BrowserTransport`] uses
//! the Fetch API and only works inside a browser.
//!
//! # Example
//!
//! ```ignore
//! use chronicle_client::ApiClient;
//!
//! let client = ApiClient::new("http://127.0.0.1:8000");
//! let stories = client.fetch_articles(Some("Tech")).await?;
//! ```

pub mod admin;
pub mod articles;
pub mod error;
pub mod settings;
pub mod transport;

pub use articles::ApiClient;
pub use error::{ClientError, Result};
pub use settings::{SITE_SETTINGS_PATH, fetch_site_settings};
pub use transport::{ApiRequest, ApiResponse, BrowserTransport, Transport};
