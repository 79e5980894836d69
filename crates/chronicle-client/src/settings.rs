//! Browser bootstrap: load the site settings served next to the bundle.

use chronicle_core::SiteSettings;

use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, Transport};

/// Where the host serves [`SiteSettings`].
pub const SITE_SETTINGS_PATH: &str = "/site-config.json";

/// Fetch the site settings from `url`.
pub async fn fetch_site_settings<T: Transport>(transport: &T, url: &str) -> Result<SiteSettings> {
    let response = transport.send(ApiRequest::get(url)).await?;

    if !response.ok() {
        return Err(ClientError::status(response.status, url));
    }

    Ok(serde_json::from_str(&response.body)?)
}
