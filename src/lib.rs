//! # QC-Lite Core
//!
//! State and interaction logic for the QC-Lite issue tracker: the entity
//! model, an observable in-memory store, kanban drag-and-drop, the ticket
//! form and the projections each screen renders from.
//!
//! Nothing here depends on a UI toolkit. A front end owns one [`AppStore`],
//! subscribes to it, and forwards user gestures to the store, the
//! [`DragCoordinator`] or the [`TicketForm`].

pub mod auth;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use dnd::{DragCoordinator, DropTarget};
pub use domain::{
    Alert, AlertType, BoardConfig, Column, NewAlert, NewSprint, NewTicket, Priority, Sprint,
    SprintStatus, SprintUpdate, Ticket, TicketId, TicketStatus, TicketUpdate, User, UserId,
};
pub use error::{QcError, Result};
pub use export::{FileSnapshotSink, SnapshotSink};
pub use form::{FormMode, TicketDraft, TicketForm};
pub use store::{AppState, AppStore, StoreEvent, SubscriptionId};
pub use views::Route;
