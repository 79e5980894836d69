//! Listing page.

use chronicle_ui::ArticleListing;
use leptos::prelude::*;

use super::LoadError;
use crate::{api_client, category_filter};

/// Published articles, optionally filtered by `?category=`.
#[component]
pub fn HomePage() -> impl IntoView {
    let client = api_client();
    let category = category_filter();

    let articles = LocalResource::new(move || {
        let client = client.clone();
        let category = category.get();
        async move { client.fetch_articles(category.as_deref()).await }
    });

    view! {
      <Suspense fallback=|| view! { <p class="chronicle-loading">"Loading stories..."</p> }>
        {move || {
          articles
            .get()
            .map(|result| match result {
              Ok(list) => {
                view! { <ArticleListing articles=list category=category.get_untracked() /> }
                  .into_any()
              }
              Err(error) => view! { <LoadError error=error /> }.into_any(),
            })
        }}
      </Suspense>
    }
}
