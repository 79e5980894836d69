//! Chronicle UI Components
//!
//! Leptos components for the Chronicle frontend.
//!
//! # Components
//!
//! ## Blocks
//! - [`ArticleBody`] - Parses article text and renders its blocks in order
//! - [`ContentBlockView`] - One content block as one element
//!
//! ## Article
//! - [`ArticleListing`] - Hero story plus "More Stories" grid
//! - [`HeroArticle`] / [`ArticleCard`] - Listing entries
//! - [`ArticleDetail`] - Full article page body
//!
//! ## Navigation
//! - [`SiteHeader`] - Masthead with category navigation and today's date
//! - [`SiteFooter`] - Copyright and satire notice
//!
//! ## Admin
//! - [`StatusBanner`], [`AdminTabs`], [`DraftCard`], [`PublishedRow`]
//! - [`ConfirmationModal`] - Delete confirmation dialog
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use chronicle_ui::ArticleListing;
//!
//! #[component]
//! fn Home(articles: Vec<chronicle_core::Article>) -> impl IntoView {
//!     view! { <ArticleListing articles=articles category=None /> }
//! }
//! ```

pub mod admin;
pub mod article;
pub mod blocks;
pub mod navigation;

pub use admin::{AdminTabs, ConfirmationModal, DraftCard, PublishedRow, StatusBanner};
pub use article::{ArticleCard, ArticleDetail, ArticleListing, HeroArticle};
pub use blocks::{ArticleBody, BlockElement, BlockMarkup, ContentBlockView, block_markup};
pub use navigation::{NavItem, SiteFooter, SiteHeader};
