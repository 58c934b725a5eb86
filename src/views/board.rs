use crate::domain::{BoardConfig, Priority, Ticket, TicketId, TicketStatus};
use crate::store::AppState;
use chrono::NaiveDate;
use serde::Serialize;

/// A ticket card as drawn on the board and in sprint lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: TicketId,
    pub title: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    /// Assignee display name; `None` renders the placeholder avatar
    pub assignee: Option<String>,
    pub assignee_avatar: Option<String>,
}

impl CardView {
    pub fn new(state: &AppState, ticket: &Ticket) -> Self {
        let assignee = ticket.assignee_id.as_ref().and_then(|id| state.user(id));
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            priority: ticket.priority,
            due_date: ticket.due_date,
            tags: ticket.tags.clone(),
            assignee: assignee.map(|u| u.name.clone()),
            assignee_avatar: assignee.map(|u| u.avatar.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub title: String,
    pub status: TicketStatus,
    pub cards: Vec<CardView>,
}

impl ColumnView {
    /// Cards shown in the column badge
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the "Drop tickets here" placeholder is shown
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The kanban board: one column per configured status, search applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn build(state: &AppState, config: &BoardConfig) -> Self {
        let visible = state.filtered_tickets();
        let columns = config
            .columns
            .iter()
            .map(|column| ColumnView {
                title: column.title.clone(),
                status: column.status,
                cards: column
                    .tickets(&visible)
                    .into_iter()
                    .map(|ticket| CardView::new(state, ticket))
                    .collect(),
            })
            .collect();

        Self {
            name: config.name.clone(),
            columns,
        }
    }

    pub fn column(&self, status: TicketStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status == status)
    }
}
