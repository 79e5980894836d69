//! Chronicle Core Library
//!
//! Core types for The Absurd Chronicle front end: the article model, the
//! content block parser, the admin panel state machine, and site configuration.

pub mod admin;
pub mod article;
pub mod blocks;
pub mod config;
pub mod error;

pub use admin::{AdminEffect, AdminEvent, AdminState, AdminTab, ConfirmState, Mutation, reduce};
pub use article::{Article, ArticleId, ArticleStatus};
pub use blocks::{ContentBlock, parse_content};
pub use config::{Config, SiteSettings};
pub use error::{CoreError, Result};
