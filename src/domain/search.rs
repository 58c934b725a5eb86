//! Free-text ticket filtering shared by the chart, board and calendar views.

use crate::domain::{id::UserId, ticket::Ticket, user::User};

/// Filters tickets by a case-insensitive substring query.
///
/// The query is matched against the title, description, tags, id and the
/// display names of the assignee and creator. A blank query keeps every
/// ticket. Order is preserved.
pub fn filter_tickets<'a, I>(tickets: I, users: &[User], query: &str) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tickets.into_iter().collect();
    }

    tickets
        .into_iter()
        .filter(|ticket| search_text(ticket, users).contains(&query))
        .collect()
}

/// Lowercased haystack a ticket is matched against
fn search_text(ticket: &Ticket, users: &[User]) -> String {
    let tags = ticket.tags.join(" ");
    [
        ticket.title.as_str(),
        ticket.description.as_str(),
        tags.as_str(),
        ticket.id.as_str(),
        user_name(users, ticket.assignee_id.as_ref()),
        user_name(users, ticket.created_by.as_ref()),
    ]
    .join(" ")
    .to_lowercase()
}

fn user_name<'a>(users: &'a [User], id: Option<&UserId>) -> &'a str {
    id.and_then(|id| users.iter().find(|u| &u.id == id))
        .map(|u| u.name.as_str())
        .unwrap_or_default()
}
