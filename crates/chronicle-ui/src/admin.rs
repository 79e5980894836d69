//! Admin panel widgets.
//!
//! Stateless: every component renders from signals and reports clicks
//! through callbacks. The page owns the state.

use chronicle_core::Article;
use chronicle_core::admin::{AdminTab, StatusKind, StatusMessage};
use leptos::prelude::*;

use crate::blocks::ArticleBody;

/// Question asked before a delete.
pub const DELETE_CONFIRMATION_MESSAGE: &str =
    "Are you sure you want to permanently delete this article?";

/// Shown on an empty drafts tab.
pub const NO_DRAFTS_MESSAGE: &str = "No drafts are waiting for approval.";

/// Shown on an empty published tab.
pub const NO_PUBLISHED_MESSAGE: &str = "No articles have been published yet.";

/// CSS class for a status message tone.
pub fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "chronicle-status chronicle-status-info",
        StatusKind::Success => "chronicle-status chronicle-status-success",
        StatusKind::Error => "chronicle-status chronicle-status-error",
    }
}

/// Tab label with its item count, e.g. "Drafts (3)".
pub fn tab_label(tab: AdminTab, count: usize) -> String {
    format!("{} ({count})", tab.label())
}

/// Transient status line under the page title.
#[component]
pub fn StatusBanner(
    /// Message to show, if any.
    #[prop(into)]
    status: Signal<Option<StatusMessage>>,
) -> impl IntoView {
    move || {
        status.get().map(|message| {
            view! {
              <p class=status_class(message.kind) role="status">
                {message.text}
              </p>
            }
        })
    }
}

/// Drafts / published tab bar.
#[component]
pub fn AdminTabs(
    /// Selected tab.
    #[prop(into)]
    active: Signal<AdminTab>,
    /// Number of drafts and published articles.
    #[prop(into)]
    counts: Signal<(usize, usize)>,
    /// Called with the clicked tab.
    on_select: Callback<AdminTab>,
) -> impl IntoView {
    let tab_button = move |tab: AdminTab| {
        let count = move || {
            let (drafts, published) = counts.get();
            match tab {
                AdminTab::Drafts => drafts,
                AdminTab::Published => published,
            }
        };
        let selected = move || active.get() == tab;

        view! {
          <button
            class="chronicle-tab"
            class:active=selected
            role="tab"
            aria-selected=move || if selected() { "true" } else { "false" }
            on:click=move |_| on_select.run(tab)
          >
            {move || tab_label(tab, count())}
          </button>
        }
    };

    view! {
      <nav class="chronicle-tabs" role="tablist" aria-label="Tabs">
        {tab_button(AdminTab::Drafts)}
        {tab_button(AdminTab::Published)}
      </nav>
    }
}

/// Collapsible draft with publish and delete actions.
#[component]
pub fn DraftCard(
    /// The draft.
    article: Article,
    /// Whether the body is shown.
    #[prop(into)]
    expanded: Signal<bool>,
    /// Whether the actions are unavailable.
    #[prop(into)]
    disabled: Signal<bool>,
    /// Header clicked.
    on_toggle: Callback<()>,
    /// Publish clicked.
    on_publish: Callback<()>,
    /// Delete clicked.
    on_delete: Callback<()>,
) -> impl IntoView {
    let content = article.content.clone();

    view! {
      <div class="chronicle-draft" class:expanded=move || expanded.get()>
        <div
          class="chronicle-draft-header"
          role="button"
          aria-expanded=move || if expanded.get() { "true" } else { "false" }
          on:click=move |_| on_toggle.run(())
        >
          <h3 class="chronicle-draft-title">{article.headline.clone()}</h3>
          <span class="chronicle-draft-chevron" aria-hidden="true">
            "\u{25bc}"
          </span>
        </div>

        <Show when=move || expanded.get()>
          <div class="chronicle-draft-body">
            <ArticleBody content=content.clone() />
            <div class="chronicle-actions">
              <button
                class="chronicle-button chronicle-button-primary"
                disabled=move || disabled.get()
                on:click=move |ev: web_sys::MouseEvent| {
                  ev.stop_propagation();
                  on_publish.run(());
                }
              >
                "Publish"
              </button>
              <button
                class="chronicle-button chronicle-button-secondary"
                disabled=move || disabled.get()
                on:click=move |ev: web_sys::MouseEvent| {
                  ev.stop_propagation();
                  on_delete.run(());
                }
              >
                "Delete Draft"
              </button>
            </div>
          </div>
        </Show>
      </div>
    }
}

/// One row of the published tab.
#[component]
pub fn PublishedRow(
    /// The published article.
    article: Article,
    /// Whether the delete action is unavailable.
    #[prop(into)]
    disabled: Signal<bool>,
    /// Delete clicked.
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="chronicle-published">
        <div>
          <h3 class="chronicle-published-title">
            <a href=article.url_path()>{article.headline.clone()}</a>
          </h3>
          <p class="chronicle-published-date">"Published on: " {article.display_date()}</p>
        </div>
        <button
          class="chronicle-button chronicle-button-danger"
          disabled=move || disabled.get()
          on:click=move |_| on_delete.run(())
        >
          "Delete"
        </button>
      </div>
    }
}

/// Whether a key press dismisses the confirmation dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Delete confirmation dialog.
///
/// Escape and clicks on the overlay count as cancel. Cancel takes focus when
/// the dialog opens, so Escape works right away.
#[component]
pub fn ConfirmationModal(
    /// Whether the dialog is shown.
    #[prop(into)]
    open: Signal<bool>,
    /// Whether the delete is already under way.
    #[prop(into)]
    busy: Signal<bool>,
    /// Confirm clicked.
    on_confirm: Callback<()>,
    /// Cancel clicked, Escape pressed, or overlay clicked.
    on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel_ref = NodeRef::<leptos::html::Button>::new();

    // Runs again once the button is mounted.
    Effect::new(move |_| {
        if open.get() {
            if let Some(button) = cancel_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            on_cancel.run(());
        }
    };

    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
      <Show when=move || open.get()>
        <div
          class="chronicle-modal-overlay"
          on:click=move |_| on_cancel.run(())
          on:keydown=on_keydown
        >
          <div
            class="chronicle-modal-content"
            role="alertdialog"
            aria-modal="true"
            on:click=on_content_click
          >
            <p class="chronicle-modal-message">{DELETE_CONFIRMATION_MESSAGE}</p>
            <div class="chronicle-modal-actions">
              <button
                node_ref=cancel_ref
                class="chronicle-button chronicle-button-secondary"
                disabled=move || busy.get()
                on:click=move |_| on_cancel.run(())
              >
                "Cancel"
              </button>
              <button
                class="chronicle-button chronicle-button-danger"
                disabled=move || busy.get()
                on:click=move |_| on_confirm.run(())
              >
                "Confirm Delete"
              </button>
            </div>
          </div>
        </div>
      </Show>
    }
}
