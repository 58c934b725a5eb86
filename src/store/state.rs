use crate::domain::{
    filter_tickets, Alert, AlertId, Sprint, SprintId, Ticket, TicketId, User, UserId,
};
use serde::Serialize;

/// Snapshot of everything the application knows.
///
/// Views read from this; only [`AppStore`](super::AppStore) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub tickets: Vec<Ticket>,
    pub sprints: Vec<Sprint>,
    pub alerts: Vec<Alert>,
    pub users: Vec<User>,
    pub search_query: String,
    pub current_user_id: Option<UserId>,
    pub is_logged_in: bool,
}

impl AppState {
    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    pub fn sprint(&self, id: &SprintId) -> Option<&Sprint> {
        self.sprints.iter().find(|s| &s.id == id)
    }

    pub fn alert(&self, id: &AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| &a.id == id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// The selected user, if the id still resolves
    pub fn current_user(&self) -> Option<&User> {
        self.current_user_id.as_ref().and_then(|id| self.user(id))
    }

    /// Tickets matching the current search query, in store order
    pub fn filtered_tickets(&self) -> Vec<&Ticket> {
        filter_tickets(&self.tickets, &self.users, &self.search_query)
    }

    /// Display name of a ticket's assignee; dangling ids read as unassigned
    pub fn assignee_name(&self, ticket: &Ticket) -> &str {
        ticket
            .assignee_id
            .as_ref()
            .and_then(|id| self.user(id))
            .map(|u| u.name.as_str())
            .unwrap_or("Unassigned")
    }

    /// Display name of whoever created a ticket, "Unknown" if unresolved
    pub fn creator_name(&self, ticket: &Ticket) -> &str {
        ticket
            .created_by
            .as_ref()
            .and_then(|id| self.user(id))
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Display name of a ticket's sprint; dangling ids read as no sprint
    pub fn sprint_name(&self, ticket: &Ticket) -> &str {
        ticket
            .sprint_id
            .as_ref()
            .and_then(|id| self.sprint(id))
            .map(|s| s.name.as_str())
            .unwrap_or("No sprint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_creator_name() {
        let mut state = AppState::demo(Utc::now());
        let id = TicketId::new("t2");

        let seeded = state.ticket(&id).unwrap().clone();
        assert_eq!(state.creator_name(&seeded), "Unknown");

        let ticket = Ticket {
            created_by: Some(UserId::new("u1")),
            ..seeded
        };
        assert_eq!(state.creator_name(&ticket), "Alice Johnson");

        state.users.retain(|u| u.id.as_str() != "u1");
        assert_eq!(state.creator_name(&ticket), "Unknown");
    }
}
