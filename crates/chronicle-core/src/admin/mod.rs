//! Admin panel state machine
//!
//! The admin page is driven by a pure reducer:
//! `(AdminState, AdminEvent) -> (AdminState, Vec<AdminEffect>)`.
//!
//! The reducer never performs I/O. Requests and timers are described as
//! [`AdminEffect`]s; whoever hosts the page executes them and feeds the
//! outcome back in as another [`AdminEvent`].

mod event;
mod reducer;
mod state;

pub use event::{AdminEffect, AdminEvent, Mutation};
pub use reducer::reduce;
pub use state::{
    AdminState, AdminTab, ArticleFeed, ArticleLists, ConfirmState, STATUS_MESSAGE_TIMEOUT,
    StatusKind, StatusMessage,
};
