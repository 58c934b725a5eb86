use crate::domain::{Alert, Priority, Ticket, TicketStatus};
use crate::store::{AppState, AppStore};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Days covered by the "tickets created" chart
pub const CHART_DAYS: i64 = 7;

/// Counters shown across the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub high_priority: usize,
}

impl TicketSummary {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        tickets
            .into_iter()
            .fold(Self::default(), |mut summary, ticket| {
                summary.total += 1;
                match ticket.status {
                    TicketStatus::Done => summary.done += 1,
                    TicketStatus::InProgress | TicketStatus::InReview => summary.in_progress += 1,
                    TicketStatus::Todo | TicketStatus::Backlog => summary.todo += 1,
                }
                if ticket.priority == Priority::High {
                    summary.high_priority += 1;
                }
                summary
            })
    }
}

/// One bar of the tickets-created chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub label: String,
    pub tickets: usize,
}

/// Tickets created on each of the last seven days, oldest first.
///
/// Creation timestamps are bucketed by their UTC date.
pub fn tickets_per_day<'a>(
    tickets: impl IntoIterator<Item = &'a Ticket>,
    today: NaiveDate,
) -> Vec<ChartPoint> {
    let tickets: Vec<&Ticket> = tickets.into_iter().collect();

    (0..CHART_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            ChartPoint {
                date,
                label: date.format("%a").to_string(),
                tickets: tickets
                    .iter()
                    .filter(|t| t.created_at.date_naive() == date)
                    .count(),
            }
        })
        .collect()
}

/// Alerts for the health panel, newest first. Empty means all clear.
pub fn health_alerts(state: &AppState) -> &[Alert] {
    &state.alerts
}

/// Badge count on the notification bell
pub fn unread_alerts(state: &AppState) -> usize {
    state.alerts.len()
}

/// "Clear all" from the alerts menu, one dismissal per alert
pub fn clear_all_alerts(store: &mut AppStore) {
    let ids: Vec<_> = store.alerts().iter().map(|a| a.id.clone()).collect();
    for id in &ids {
        store.clear_alert(id);
    }
}
