//! Admin controller: runs the admin reducer inside the reactive runtime.
//!
//! Events go through [`reduce`]; the resulting effects become API calls
//! (via [`ApiClient::perform`]) or timers, whose outcomes are dispatched
//! back as events.

use std::time::Duration;

use chronicle_client::ApiClient;
use chronicle_core::{AdminEffect, AdminEvent, AdminState, reduce};
use leptos::{prelude::*, task::spawn_local};

/// Handle to the admin page state. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy)]
pub struct AdminController {
    state: RwSignal<AdminState>,
    client: StoredValue<ApiClient>,
}

impl AdminController {
    /// Create a controller with an empty, loading state.
    pub fn new(client: ApiClient, status_timeout: Duration) -> Self {
        Self {
            state: RwSignal::new(AdminState::new(status_timeout)),
            client: StoredValue::new(client),
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> ReadSignal<AdminState> {
        self.state.read_only()
    }

    /// Fetch both article lists.
    pub fn load(self) {
        self.run(AdminEffect::Refetch);
    }

    /// Apply one event and start the effects it asks for.
    ///
    /// Events arriving after the page was torn down are dropped.
    pub fn dispatch(self, event: AdminEvent) {
        let Some(current) = self.state.try_get_untracked() else {
            log::debug!("Admin page gone, dropping {event:?}");
            return;
        };

        let (next, effects) = reduce(current, event);
        self.state.set(next);

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: AdminEffect) {
        if let AdminEffect::ClearStatusAfter { ticket, delay } = effect {
            set_timeout(
                move || self.dispatch(AdminEvent::StatusExpired(ticket)),
                delay,
            );
            return;
        }

        let Some(client) = self.client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Some(event) = client.perform(effect).await {
                self.dispatch(event);
            }
        });
    }
}
