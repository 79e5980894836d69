//! Site header and footer.

use chrono::{Datelike, Local, NaiveDate};
use chronicle_core::article::category_href;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// A header navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Entry linking to the listing filtered by `category`.
    pub fn category(category: &str) -> Self {
        Self::new(category, category_href(category))
    }
}

/// Masthead date, e.g. "Tuesday, July 8, 2025".
pub fn masthead_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Site masthead with category navigation.
#[component]
pub fn SiteHeader(
    /// Site title, links home.
    #[prop(into)]
    title: String,
    /// Categories in display order.
    categories: Vec<String>,
    /// Category of the current listing, if any.
    #[prop(into)]
    active_category: Signal<Option<String>>,
) -> impl IntoView {
    let items: Vec<NavItem> = categories.iter().map(|c| NavItem::category(c)).collect();
    let today = masthead_date(Local::now().date_naive());

    view! {
      <header class="chronicle-header">
        <div class="chronicle-masthead">
          <a href="/" class="chronicle-site-title">
            {title}
          </a>
          <p class="chronicle-date">{today}</p>
        </div>
        <nav class="chronicle-nav" aria-label="Categories">
          <ul class="chronicle-nav-list">
            {items
              .into_iter()
              .map(|item| {
                let label = item.label.clone();
                let is_active = Memo::new(move |_| {
                  active_category.get().as_deref() == Some(label.as_str())
                });
                view! {
                  <li class="chronicle-nav-item" class:active=is_active>
                    <a
                      href=item.url
                      class="chronicle-nav-link"
                      aria-current=move || { if is_active.get() { Some("page") } else { None } }
                    >
                      {item.label}
                    </a>
                  </li>
                }
              })
              .collect_view()}
          </ul>
        </nav>
      </header>
    }
}

/// Site footer.
#[component]
pub fn SiteFooter(
    /// Site title for the copyright line.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let copyright = format!("\u{a9} {} {title}. All Rights Reserved.", Local::now().year());

    view! {
      <footer class="chronicle-footer">
        <p>{copyright}</p>
        <p class="chronicle-footer-note">
          "This is a satirical website for entertainment purposes. Do not take it seriously."
        </p>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_nav_item() {
        let item = NavItem::category("Tech");
        assert_eq!(item.label, "Tech");
        assert_eq!(item.url, "/?category=Tech");
    }

    #[test]
    fn test_category_nav_item_with_reserved_characters() {
        let item = NavItem::category("Arts & Culture");
        assert_eq!(item.label, "Arts & Culture");
        assert_eq!(item.url, "/?category=Arts%20%26%20Culture");
    }

    #[test]
    fn test_masthead_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 8).unwrap();
        assert_eq!(masthead_date(date), "Tuesday, July 8, 2025");
    }

    #[test]
    fn test_nav_item_serialization() {
        let item = NavItem::new("World", "/?category=World");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"World\""));
        assert!(json.contains("\"url\":\"/?category=World\""));
    }
}
