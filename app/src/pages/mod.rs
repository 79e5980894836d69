//! Routed pages.

mod admin;
mod article;
mod home;

pub use admin::AdminPage;
pub use article::ArticlePage;
pub use home::HomePage;

use chronicle_client::ClientError;
use leptos::prelude::*;

/// Visible error state for a page whose data could not be loaded.
#[component]
fn LoadError(
    /// What failed.
    error: ClientError,
) -> impl IntoView {
    let title = match error {
        ClientError::NotFound(_) => "Article not found.",
        ClientError::Transport(_) | ClientError::Decode(_) => "Something went wrong.",
    };

    view! {
      <div class="chronicle-error" role="alert">
        <h1>{title}</h1>
        <p>{error.to_string()}</p>
        <a href="/">"Back to All Stories"</a>
      </div>
    }
}
