//! Admin panel page.

use chronicle_core::admin::{AdminTab, ArticleFeed};
use chronicle_core::{AdminEvent, AdminState, Article};
use chronicle_ui::admin::{NO_DRAFTS_MESSAGE, NO_PUBLISHED_MESSAGE};
use chronicle_ui::{AdminTabs, ConfirmationModal, DraftCard, PublishedRow, StatusBanner};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::admin::AdminController;
use crate::{api_client, site_settings};

/// Drafts awaiting approval and published articles, with publish and
/// delete actions.
#[component]
pub fn AdminPage() -> impl IntoView {
    let settings = site_settings();
    let controller = AdminController::new(api_client(), settings.status_message_delay());
    controller.load();

    let state = controller.state();
    let panel = Memo::new(move |_| state.with(|s| (s.tab, s.articles.clone())));

    view! {
      <Title text="Admin Panel" />
      <section class="chronicle-admin">
        <ConfirmationModal
          open=Signal::derive(move || state.with(|s| s.delete_target().is_some()))
          busy=Signal::derive(move || state.with(AdminState::is_busy))
          on_confirm=Callback::new(move |_| controller.dispatch(AdminEvent::ConfirmDelete))
          on_cancel=Callback::new(move |_| controller.dispatch(AdminEvent::CancelDelete))
        />

        <header class="chronicle-admin-header">
          <h1>"Admin Panel"</h1>
          <p>"Manage all articles"</p>
          <StatusBanner status=Signal::derive(move || state.with(|s| s.status.clone())) />
        </header>

        <AdminTabs
          active=Signal::derive(move || state.with(|s| s.tab))
          counts=Signal::derive(move || state.with(AdminState::counts))
          on_select=Callback::new(move |tab| controller.dispatch(AdminEvent::SelectTab(tab)))
        />

        <div class="chronicle-tab-panel" role="tabpanel">
          {move || {
            let (tab, feed) = panel.get();
            match feed {
              ArticleFeed::Loading => {
                view! { <p class="chronicle-loading">"Loading articles..."</p> }.into_any()
              }
              ArticleFeed::Failed(message) => {
                view! {
                  <p class="chronicle-error" role="alert">
                    "Could not load articles: "
                    {message}
                  </p>
                }
                  .into_any()
              }
              ArticleFeed::Ready(lists) => {
                match tab {
                  AdminTab::Drafts => drafts_panel(controller, lists.drafts),
                  AdminTab::Published => published_panel(controller, lists.published),
                }
              }
            }
          }}
        </div>
      </section>
    }
}

fn drafts_panel(controller: AdminController, drafts: Vec<Article>) -> AnyView {
    if drafts.is_empty() {
        return view! { <p class="chronicle-empty">{NO_DRAFTS_MESSAGE}</p> }.into_any();
    }

    let state = controller.state();
    let disabled = Signal::derive(move || state.with(|s| !s.can_mutate()));

    view! {
      <div class="chronicle-draft-list">
        {drafts
          .into_iter()
          .map(|article| {
            let id = article.id.clone();
            let expanded = {
              let id = id.clone();
              Signal::derive(move || state.with(|s| s.is_expanded(&id)))
            };
            let on_toggle = {
              let id = id.clone();
              Callback::new(move |_| controller.dispatch(AdminEvent::ToggleDraft(id.clone())))
            };
            let on_publish = {
              let id = id.clone();
              Callback::new(move |_| controller.dispatch(AdminEvent::Publish(id.clone())))
            };
            let on_delete = Callback::new(move |_| {
              controller.dispatch(AdminEvent::RequestDelete(id.clone()))
            });

            view! {
              <DraftCard
                article=article
                expanded=expanded
                disabled=disabled
                on_toggle=on_toggle
                on_publish=on_publish
                on_delete=on_delete
              />
            }
          })
          .collect_view()}
      </div>
    }
        .into_any()
}

fn published_panel(controller: AdminController, published: Vec<Article>) -> AnyView {
    if published.is_empty() {
        return view! { <p class="chronicle-empty">{NO_PUBLISHED_MESSAGE}</p> }.into_any();
    }

    let state = controller.state();
    let disabled = Signal::derive(move || state.with(|s| !s.can_mutate()));

    view! {
      <div class="chronicle-published-list">
        {published
          .into_iter()
          .map(|article| {
            let id = article.id.clone();
            let on_delete = Callback::new(move |_| {
              controller.dispatch(AdminEvent::RequestDelete(id.clone()))
            });

            view! { <PublishedRow article=article disabled=disabled on_delete=on_delete /> }
          })
          .collect_view()}
      </div>
    }
        .into_any()
}
