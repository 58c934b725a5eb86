//! The application store: the single source of truth every view reads.
//!
//! Mutators run to completion and then notify each subscriber synchronously
//! with the updated state and an event describing what happened. Unknown ids
//! turn updates and deletes into silent no-ops; subscribers are still told
//! about the attempt, the same way a reactive store re-renders on every set.

mod seed;
mod state;

pub use seed::demo_users;
pub use state::AppState;

use crate::auth;
use crate::domain::{
    id::generate_id, Alert, AlertId, NewAlert, NewSprint, NewTicket, Sprint, SprintId,
    SprintUpdate, Ticket, TicketId, TicketStatus, TicketUpdate, UserId,
};
use crate::error::Result;
use chrono::Utc;
use tracing::{debug, info, trace, warn};

/// What a mutator did, passed to subscribers alongside the new state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TicketAdded(TicketId),
    TicketUpdated(TicketId),
    TicketDeleted(TicketId),
    TicketMoved { id: TicketId, status: TicketStatus },
    SprintAdded(SprintId),
    SprintUpdated(SprintId),
    AlertAdded(AlertId),
    AlertCleared(AlertId),
    LoggedIn(UserId),
    LoggedOut,
    CurrentUserChanged(UserId),
    SearchQueryChanged(String),
}

/// Handle returned by [`AppStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState, &StoreEvent)>;

/// Owns the application state and the subscriber list
pub struct AppStore {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store seeded with the demo users, sprints, tickets and alerts
    pub fn demo() -> Self {
        Self::new(AppState::demo(Utc::now()))
    }

    /// Current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.state.tickets
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.state.sprints
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.state.alerts
    }

    pub fn users(&self) -> &[crate::domain::User] {
        &self.state.users
    }

    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.state.ticket(id)
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in
    }

    /// Registers a listener called after every mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState, &StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &event);
        }
    }

    /// Appends a ticket with a fresh id and the current timestamp
    pub fn add_ticket(&mut self, data: NewTicket) -> TicketId {
        let tickets = &self.state.tickets;
        let id = TicketId::new(generate_id(|candidate| {
            tickets.iter().any(|t| t.id.as_str() == candidate)
        }));

        debug!(ticket_id = %id, status = %data.status.as_str(), "Adding ticket");
        self.state
            .tickets
            .push(Ticket::from_new(id.clone(), data, Utc::now()));
        self.notify(StoreEvent::TicketAdded(id.clone()));
        id
    }

    /// Merges the given fields into the matching ticket
    pub fn update_ticket(&mut self, id: &TicketId, update: TicketUpdate) {
        match self.state.tickets.iter_mut().find(|t| &t.id == id) {
            Some(ticket) => {
                debug!(ticket_id = %id, "Updating ticket");
                ticket.apply(update);
            }
            None => trace!(ticket_id = %id, "Update ignored, ticket not found"),
        }
        self.notify(StoreEvent::TicketUpdated(id.clone()));
    }

    /// Removes the ticket without touching anything that references it
    pub fn delete_ticket(&mut self, id: &TicketId) {
        let before = self.state.tickets.len();
        self.state.tickets.retain(|t| &t.id != id);
        if self.state.tickets.len() == before {
            trace!(ticket_id = %id, "Delete ignored, ticket not found");
        } else {
            debug!(ticket_id = %id, "Deleted ticket");
        }
        self.notify(StoreEvent::TicketDeleted(id.clone()));
    }

    /// Sets a ticket's status; the drag-and-drop entry point
    pub fn move_ticket(&mut self, id: &TicketId, status: TicketStatus) {
        match self.state.tickets.iter_mut().find(|t| &t.id == id) {
            Some(ticket) => {
                debug!(
                    ticket_id = %id,
                    from = %ticket.status.as_str(),
                    to = %status.as_str(),
                    "Moving ticket"
                );
                ticket.apply(TicketUpdate::status(status));
            }
            None => trace!(ticket_id = %id, "Move ignored, ticket not found"),
        }
        self.notify(StoreEvent::TicketMoved {
            id: id.clone(),
            status,
        });
    }

    pub fn add_sprint(&mut self, data: NewSprint) -> SprintId {
        let sprints = &self.state.sprints;
        let id = SprintId::new(generate_id(|candidate| {
            sprints.iter().any(|s| s.id.as_str() == candidate)
        }));

        debug!(sprint_id = %id, name = %data.name, "Adding sprint");
        self.state.sprints.push(Sprint::from_new(id.clone(), data));
        self.notify(StoreEvent::SprintAdded(id.clone()));
        id
    }

    pub fn update_sprint(&mut self, id: &SprintId, update: SprintUpdate) {
        match self.state.sprints.iter_mut().find(|s| &s.id == id) {
            Some(sprint) => {
                debug!(sprint_id = %id, "Updating sprint");
                sprint.apply(update);
            }
            None => trace!(sprint_id = %id, "Update ignored, sprint not found"),
        }
        self.notify(StoreEvent::SprintUpdated(id.clone()));
    }

    /// Prepends an alert so the list stays newest first
    pub fn add_alert(&mut self, data: NewAlert) -> AlertId {
        let alerts = &self.state.alerts;
        let id = AlertId::new(generate_id(|candidate| {
            alerts.iter().any(|a| a.id.as_str() == candidate)
        }));

        debug!(alert_id = %id, alert_type = %data.alert_type, "Adding alert");
        self.state
            .alerts
            .insert(0, Alert::from_new(id.clone(), data, Utc::now()));
        self.notify(StoreEvent::AlertAdded(id.clone()));
        id
    }

    pub fn clear_alert(&mut self, id: &AlertId) {
        self.state.alerts.retain(|a| &a.id != id);
        debug!(alert_id = %id, "Cleared alert");
        self.notify(StoreEvent::AlertCleared(id.clone()));
    }

    /// Signs in one of the demo users.
    ///
    /// On failure the state is left untouched and nobody is notified.
    pub fn login(&mut self, username: &str, password: &str) -> Result<UserId> {
        let user_id = match auth::authenticate(&self.state.users, username, password) {
            Ok(user) => user.id.clone(),
            Err(err) => {
                warn!(username = %username.trim(), "Login failed");
                return Err(err);
            }
        };

        info!(user_id = %user_id, "Logged in");
        self.state.is_logged_in = true;
        self.state.current_user_id = Some(user_id.clone());
        self.notify(StoreEvent::LoggedIn(user_id.clone()));
        Ok(user_id)
    }

    pub fn logout(&mut self) {
        info!("Logged out");
        self.state.is_logged_in = false;
        self.notify(StoreEvent::LoggedOut);
    }

    pub fn set_current_user(&mut self, id: UserId) {
        debug!(user_id = %id, "Switching current user");
        self.state.current_user_id = Some(id.clone());
        self.notify(StoreEvent::CurrentUserChanged(id));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        trace!(query = %query, "Search query changed");
        self.state.search_query = query.clone();
        self.notify(StoreEvent::SearchQueryChanged(query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlertType, Priority, SprintStatus};
    use crate::error::QcError;
    use chrono::Duration;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn t(id: &str) -> TicketId {
        TicketId::new(id)
    }

    #[test]
    fn test_add_ticket_assigns_unique_id_and_timestamp() {
        let mut store = AppStore::demo();
        let before = Utc::now();

        let mut ids = HashSet::new();
        for i in 0..50 {
            let id = store.add_ticket(NewTicket::new(format!("Ticket {}", i)));
            assert!(ids.insert(id));
        }

        let all: HashSet<&TicketId> = store.tickets().iter().map(|t| &t.id).collect();
        assert_eq!(all.len(), store.tickets().len());

        let last = store.tickets().last().unwrap();
        assert_eq!(last.title, "Ticket 49");
        assert!(last.created_at >= before);
    }

    #[test]
    fn test_move_ticket_changes_only_target() {
        let mut store = AppStore::demo();
        let others: Vec<Ticket> = store
            .tickets()
            .iter()
            .filter(|ticket| ticket.id != t("t1"))
            .cloned()
            .collect();

        store.move_ticket(&t("t1"), TicketStatus::Done);

        assert_eq!(store.ticket(&t("t1")).unwrap().status, TicketStatus::Done);
        for other in others {
            assert_eq!(store.ticket(&other.id), Some(&other));
        }
    }

    #[test]
    fn test_update_ticket_merges_fields() {
        let mut store = AppStore::demo();
        store.update_ticket(
            &t("t2"),
            TicketUpdate {
                priority: Some(Priority::High),
                tags: Some(vec!["ui".to_string()]),
                ..Default::default()
            },
        );

        let ticket = store.ticket(&t("t2")).unwrap();
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.tags, vec!["ui"]);
        assert_eq!(ticket.title, "Implement dark mode");
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut store = AppStore::demo();
        let snapshot = store.state().clone();

        store.update_ticket(&t("missing"), TicketUpdate::status(TicketStatus::Done));
        store.move_ticket(&t("missing"), TicketStatus::Done);
        store.delete_ticket(&t("missing"));
        store.update_sprint(&SprintId::new("missing"), SprintUpdate::default());
        store.clear_alert(&AlertId::new("missing"));

        assert_eq!(store.state(), &snapshot);
    }

    #[test]
    fn test_unknown_ids_still_notify_once() {
        let mut store = AppStore::demo();
        let events = Rc::new(RefCell::new(Vec::<StoreEvent>::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));

        store.update_ticket(&t("missing"), TicketUpdate::status(TicketStatus::Done));
        store.move_ticket(&t("missing"), TicketStatus::Done);
        store.delete_ticket(&t("missing"));
        store.update_sprint(&SprintId::new("missing"), SprintUpdate::default());
        store.clear_alert(&AlertId::new("missing"));

        assert_eq!(
            events.borrow().as_slice(),
            &[
                StoreEvent::TicketUpdated(t("missing")),
                StoreEvent::TicketMoved {
                    id: t("missing"),
                    status: TicketStatus::Done,
                },
                StoreEvent::TicketDeleted(t("missing")),
                StoreEvent::SprintUpdated(SprintId::new("missing")),
                StoreEvent::AlertCleared(AlertId::new("missing")),
            ]
        );
    }

    #[test]
    fn test_delete_ticket_leaves_references_alone() {
        let mut store = AppStore::demo();
        let sprints = store.sprints().to_vec();
        let users = store.users().to_vec();

        store.delete_ticket(&t("t1"));

        assert_eq!(store.tickets().len(), 3);
        assert!(store.ticket(&t("t1")).is_none());
        assert_eq!(store.sprints(), sprints.as_slice());
        assert_eq!(store.users(), users.as_slice());
        assert_eq!(
            store.ticket(&t("t2")).unwrap().sprint_id,
            Some(SprintId::new("s1"))
        );
    }

    #[test]
    fn test_sprint_lifecycle() {
        let mut store = AppStore::demo();
        let now = Utc::now();
        let id = store.add_sprint(NewSprint {
            name: "Sprint 12".to_string(),
            start_date: now + Duration::days(25),
            end_date: now + Duration::days(39),
            status: SprintStatus::Planned,
        });

        store.update_sprint(
            &id,
            SprintUpdate {
                status: Some(SprintStatus::Active),
                ..Default::default()
            },
        );

        let sprint = store.state().sprint(&id).unwrap();
        assert_eq!(sprint.name, "Sprint 12");
        assert!(sprint.is_active());
        assert_eq!(store.sprints().len(), 3);
    }

    #[test]
    fn test_alerts_are_newest_first() {
        let mut store = AppStore::demo();
        let id = store.add_alert(NewAlert::new(
            AlertType::Error,
            "Deploy failed",
            "Rollback started.",
        ));

        assert_eq!(store.alerts()[0].id, id);
        assert_eq!(store.alerts().len(), 3);

        let ids: Vec<AlertId> = store.alerts().iter().map(|a| a.id.clone()).collect();
        for id in &ids {
            store.clear_alert(id);
        }
        assert!(store.alerts().is_empty());
    }

    #[test]
    fn test_login_success_and_failure() {
        let mut store = AppStore::demo();

        let err = store.login("alice", "wrong").unwrap_err();
        assert!(matches!(err, QcError::InvalidCredentials));
        assert!(!store.is_logged_in());

        let id = store.login("bob", auth::DEMO_PASSWORD).unwrap();
        assert_eq!(id, UserId::new("u2"));
        assert!(store.is_logged_in());
        assert_eq!(store.state().current_user().unwrap().name, "Bob Smith");

        store.logout();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_subscribers_see_updated_state() {
        let mut store = AppStore::demo();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state, event| {
            let status = state.ticket(&TicketId::new("t1")).map(|t| t.status);
            sink.borrow_mut().push((event.clone(), status));
        });

        store.move_ticket(&t("t1"), TicketStatus::InReview);
        store.set_search_query("login");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            (
                StoreEvent::TicketMoved {
                    id: t("t1"),
                    status: TicketStatus::InReview
                },
                Some(TicketStatus::InReview)
            )
        );
        assert_eq!(seen[1].0, StoreEvent::SearchQueryChanged("login".to_string()));
    }

    #[test]
    fn test_failed_login_does_not_notify() {
        let mut store = AppStore::demo();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        let _ = store.login("alice", "nope");
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = AppStore::demo();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.set_current_user(UserId::new("u3"));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.set_current_user(UserId::new("u2"));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.state().current_user_id, Some(UserId::new("u2")));
    }
}
