//! Chronicle application shell: router, pages and shared context.

pub mod admin;
pub mod pages;

use chronicle_client::ApiClient;
use chronicle_core::SiteSettings;
use chronicle_ui::{SiteFooter, SiteHeader};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_query_map,
};

use crate::pages::{AdminPage, ArticlePage, HomePage};

#[component]
pub fn App(
    /// Settings loaded at startup.
    settings: SiteSettings,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_context(ApiClient::new(&settings.api_base_url));
    provide_context(settings.clone());

    view! {
      <Title text=settings.title.clone() />
      <Meta name="description" content=settings.tagline.clone() />

      <Router>
        <Masthead />
        <main class="chronicle-main">
          <Routes fallback=|| view! { <p class="chronicle-error">"Page not found."</p> }>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticlePage />
            <Route path=StaticSegment("admin") view=AdminPage />
          </Routes>
        </main>
        <SiteFooter title=settings.title.clone() />
      </Router>
    }
}

/// Header bound to the current category filter.
#[component]
fn Masthead() -> impl IntoView {
    let settings = site_settings();

    view! {
      <SiteHeader
        title=settings.title
        categories=settings.categories
        active_category=category_filter()
      />
    }
}

/// Settings provided by [`App`], or the defaults outside of it.
pub fn site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

/// API client provided by [`App`].
pub fn api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(&site_settings().api_base_url))
}

/// The `?category=` filter of the current URL; empty counts as none.
pub fn category_filter() -> Signal<Option<String>> {
    let query = use_query_map();
    Signal::derive(move || {
        query
            .with(|q| q.get("category"))
            .filter(|category| !category.trim().is_empty())
    })
}
