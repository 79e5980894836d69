//! Article listing and detail components.

use chronicle_core::Article;
use chronicle_core::article::{CARD_EXCERPT_CHARS, HERO_EXCERPT_CHARS, listing_title};
use leptos::prelude::*;

use crate::blocks::ArticleBody;

/// Shown when a listing has no articles.
pub const EMPTY_LISTING_MESSAGE: &str = "No articles found for this category.";

/// Split a listing into its hero and the "More Stories" rest.
///
/// The first article in server order is the hero. `None` for an empty listing.
pub fn split_listing(articles: Vec<Article>) -> Option<(Article, Vec<Article>)> {
    let mut articles = articles.into_iter();
    let hero = articles.next()?;
    Some((hero, articles.collect()))
}

/// Compact listing entry.
#[component]
pub fn ArticleCard(
    /// The article to show.
    article: Article,
) -> impl IntoView {
    let excerpt = article.excerpt(CARD_EXCERPT_CHARS);

    view! {
      <div class="chronicle-card">
        <h3 class="chronicle-card-title">
          <a href=article.url_path()>{article.headline.clone()}</a>
        </h3>
        <p class="chronicle-card-excerpt">{excerpt}</p>
        <small class="chronicle-card-date">{article.display_date()}</small>
      </div>
    }
}

/// Lead story at the top of a listing.
#[component]
pub fn HeroArticle(
    /// The article to show.
    article: Article,
) -> impl IntoView {
    let excerpt = article.excerpt(HERO_EXCERPT_CHARS);
    let byline = format!("By {} on {}", article.author, article.display_date());

    view! {
      <div class="chronicle-hero">
        <h2 class="chronicle-hero-title">
          <a href=article.url_path()>{article.headline.clone()}</a>
        </h2>
        <p class="chronicle-hero-excerpt">{excerpt}</p>
        <small class="chronicle-byline">{byline}</small>
      </div>
    }
}

/// Listing page body.
///
/// The first article (the API returns newest first) becomes the hero, the
/// rest go in the grid.
#[component]
pub fn ArticleListing(
    /// Articles in server order.
    articles: Vec<Article>,
    /// Active category filter.
    category: Option<String>,
) -> impl IntoView {
    let title = listing_title(category.as_deref());

    let body = match split_listing(articles) {
        Some((hero, rest)) => {
            view! {
              <HeroArticle article=hero />
              <h2 class="chronicle-section-title">"More Stories"</h2>
              <div class="chronicle-grid">
                {rest
                  .into_iter()
                  .map(|article| view! { <ArticleCard article=article /> })
                  .collect_view()}
              </div>
            }
                .into_any()
        }
        None => view! { <p class="chronicle-empty">{EMPTY_LISTING_MESSAGE}</p> }.into_any(),
    };

    view! {
      <section class="chronicle-listing">
        <h1 class="chronicle-section-title">{title}</h1>
        {body}
      </section>
    }
}

/// Full article view.
#[component]
pub fn ArticleDetail(
    /// The article to show.
    article: Article,
) -> impl IntoView {
    view! {
      <div class="chronicle-detail">
        <div class="chronicle-back">
          <a href="/">"\u{2190} Back to All Stories"</a>
        </div>

        <article class="chronicle-article">
          <figure class="chronicle-cover">
            <img src=article.cover_image_url() alt=article.headline.clone() />
            <figcaption>"A representational image for the story."</figcaption>
          </figure>

          <h1 class="chronicle-article-title">{article.headline.clone()}</h1>

          <div class="chronicle-article-meta">
            <span>"By " {article.author.clone()}</span>
            <span>"Published on " {article.display_date()}</span>
          </div>

          <ArticleBody content=article.content.clone() />
        </article>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "headline": format!("Headline {id}"),
            "content": "Body",
            "author": "Staff",
            "status": "published",
            "created_at": "2024-03-01T12:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_first_article_is_hero_and_rest_keep_order() {
        let listing = vec![article("a1"), article("a2"), article("a3")];
        let (hero, rest) = split_listing(listing).unwrap();
        assert_eq!(hero.id.as_str(), "a1");
        let ids: Vec<&str> = rest.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a2", "a3"]);
    }

    #[test]
    fn test_single_article_has_no_more_stories() {
        let (hero, rest) = split_listing(vec![article("a1")]).unwrap();
        assert_eq!(hero.id.as_str(), "a1");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_empty_listing_has_no_hero() {
        assert!(split_listing(Vec::new()).is_none());
        assert_eq!(EMPTY_LISTING_MESSAGE, "No articles found for this category.");
    }
}
