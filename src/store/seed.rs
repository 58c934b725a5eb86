use super::AppState;
use crate::domain::{
    Alert, AlertId, AlertType, NewAlert, NewSprint, NewTicket, Priority, Sprint, SprintId,
    SprintStatus, Ticket, TicketId, TicketStatus, User, UserId,
};
use chrono::{DateTime, Duration, Utc};

impl AppState {
    /// Demo data set, with every date placed relative to `now`.
    ///
    /// Alice is preselected as the current user but nobody is logged in.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            tickets: demo_tickets(now),
            sprints: demo_sprints(now),
            alerts: demo_alerts(now),
            users: demo_users(),
            search_query: String::new(),
            current_user_id: Some(UserId::new("u1")),
            is_logged_in: false,
        }
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        User::new("u1", "Alice Johnson"),
        User::new("u2", "Bob Smith"),
        User::new("u3", "Charlie Brown"),
    ]
}

fn demo_sprints(now: DateTime<Utc>) -> Vec<Sprint> {
    vec![
        Sprint::from_new(
            SprintId::new("s1"),
            NewSprint {
                name: "Sprint 10".to_string(),
                start_date: now - Duration::days(5),
                end_date: now + Duration::days(9),
                status: SprintStatus::Active,
            },
        ),
        Sprint::from_new(
            SprintId::new("s2"),
            NewSprint {
                name: "Sprint 11".to_string(),
                start_date: now + Duration::days(10),
                end_date: now + Duration::days(24),
                status: SprintStatus::Planned,
            },
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_ticket(
    id: &str,
    title: &str,
    description: &str,
    status: TicketStatus,
    priority: Priority,
    assignee: Option<&str>,
    tags: &[&str],
    created_at: DateTime<Utc>,
) -> Ticket {
    let data = NewTicket {
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        assignee_id: assignee.map(UserId::new),
        sprint_id: assignee.map(|_| SprintId::new("s1")),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_by: None,
        due_date: None,
    };
    Ticket::from_new(TicketId::new(id), data, created_at)
}

fn demo_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    vec![
        demo_ticket(
            "t1",
            "Fix login page crash",
            "The application crashes when clicking the login button on Safari.",
            TicketStatus::InProgress,
            Priority::High,
            Some("u1"),
            &["bug", "auth"],
            now - Duration::days(2),
        ),
        demo_ticket(
            "t2",
            "Implement dark mode",
            "Add dark mode support across the entire application.",
            TicketStatus::Todo,
            Priority::Medium,
            Some("u2"),
            &["feature", "ui"],
            now - Duration::days(5),
        ),
        demo_ticket(
            "t3",
            "Update API documentation",
            "Reflect recent changes in the user endpoints.",
            TicketStatus::Done,
            Priority::Low,
            Some("u3"),
            &["docs"],
            now - Duration::days(10),
        ),
        demo_ticket(
            "t4",
            "Investigate slow database queries",
            "Querying the orders table is taking > 2s.",
            TicketStatus::Backlog,
            Priority::High,
            None,
            &["performance", "backend"],
            now - Duration::days(15),
        ),
    ]
}

fn demo_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert::from_new(
            AlertId::new("a1"),
            NewAlert::new(AlertType::Warning, "High CPU Usage", "Server CPU usage is at 92%."),
            now,
        ),
        Alert::from_new(
            AlertId::new("a2"),
            NewAlert::new(
                AlertType::Success,
                "Backup Successful",
                "Daily database backup completed successfully.",
            ),
            now - Duration::days(1),
        ),
    ]
}
