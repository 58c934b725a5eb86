//! Drag-and-drop of ticket cards between board columns.
//!
//! The coordinator turns a finished gesture into at most one
//! [`AppStore::move_ticket`] call. Dropping on a column moves the card into
//! that column; dropping on another card moves it into that card's column.
//! Reordering inside a column is not persisted.

use crate::domain::{BoardConfig, Ticket, TicketId, TicketStatus};
use crate::store::{AppState, AppStore};
use tracing::{debug, trace};

/// What the pointer was released over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column's drop zone
    Column(TicketStatus),
    /// Another ticket card
    Ticket(TicketId),
}

/// Works out which status a dragged ticket should move to, if any.
///
/// Returns `None` when there is no target, the target is unknown, or the
/// ticket would end up in the column it started in.
pub fn resolve_drop(
    tickets: &[Ticket],
    board: &BoardConfig,
    active_id: &TicketId,
    target: Option<&DropTarget>,
) -> Option<(TicketId, TicketStatus)> {
    let active = tickets.iter().find(|t| &t.id == active_id)?;

    let new_status = match target? {
        DropTarget::Column(status) if board.has_column(*status) => *status,
        DropTarget::Column(_) => return None,
        DropTarget::Ticket(over_id) if over_id == active_id => return None,
        DropTarget::Ticket(over_id) => tickets.iter().find(|t| &t.id == over_id)?.status,
    };

    (new_status != active.status).then(|| (active.id.clone(), new_status))
}

/// Tracks the ticket being dragged so a floating preview can be drawn
#[derive(Debug, Default)]
pub struct DragCoordinator {
    board: BoardConfig,
    active: Option<Ticket>,
}

impl DragCoordinator {
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            active: None,
        }
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// The ticket under the pointer, captured when the drag started
    pub fn active_ticket(&self) -> Option<&Ticket> {
        self.active.as_ref()
    }

    /// Captures the dragged ticket; unknown ids start no drag
    pub fn drag_start(&mut self, state: &AppState, id: &TicketId) -> Option<&Ticket> {
        self.active = state.ticket(id).cloned();
        match &self.active {
            Some(ticket) => trace!(ticket_id = %ticket.id, "Drag started"),
            None => trace!(ticket_id = %id, "Drag ignored, ticket not found"),
        }
        self.active.as_ref()
    }

    /// Column the card would land in if released now, for highlighting.
    /// Never touches the store.
    pub fn drag_over(&self, state: &AppState, target: Option<&DropTarget>) -> Option<TicketStatus> {
        let active = self.active.as_ref()?;
        resolve_drop(&state.tickets, &self.board, &active.id, target).map(|(_, status)| status)
    }

    /// Finishes the gesture and applies the move, if it changes anything.
    ///
    /// Returns the status the ticket was moved to. The active drag is cleared
    /// whatever the outcome.
    pub fn drag_end(
        &mut self,
        store: &mut AppStore,
        target: Option<&DropTarget>,
    ) -> Option<TicketStatus> {
        let active = self.active.take()?;

        match resolve_drop(store.tickets(), &self.board, &active.id, target) {
            Some((id, status)) => {
                debug!(ticket_id = %id, status = %status.as_str(), "Drop moves ticket");
                store.move_ticket(&id, status);
                Some(status)
            }
            None => {
                debug!(ticket_id = %active.id, target = ?target, "Drop left ticket in place");
                None
            }
        }
    }

    /// Abandons the drag (e.g. Escape during a keyboard drag)
    pub fn drag_cancel(&mut self) {
        self.active = None;
    }
}
