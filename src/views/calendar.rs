//! Due-date lookups for the calendar screen. Laying out the month grid is
//! left to the renderer.

use crate::domain::Ticket;
use crate::store::AppState;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Searched tickets due on `date`, in store order
pub fn tickets_due_on(state: &AppState, date: NaiveDate) -> Vec<&Ticket> {
    state
        .filtered_tickets()
        .into_iter()
        .filter(|t| t.due_date == Some(date))
        .collect()
}

/// Searched tickets with a due date, grouped by that date
pub fn tickets_by_due_date(state: &AppState) -> BTreeMap<NaiveDate, Vec<&Ticket>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Ticket>> = BTreeMap::new();
    for ticket in state.filtered_tickets() {
        if let Some(date) = ticket.due_date {
            by_date.entry(date).or_default().push(ticket);
        }
    }
    by_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TicketId, TicketUpdate};
    use crate::store::AppStore;

    fn due(store: &mut AppStore, id: &str, date: NaiveDate) {
        store.update_ticket(
            &TicketId::new(id),
            TicketUpdate {
                due_date: Some(Some(date)),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_grouping_by_due_date() {
        let mut store = AppStore::demo();
        let march_9 = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let march_12 = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        due(&mut store, "t1", march_9);
        due(&mut store, "t2", march_9);
        due(&mut store, "t4", march_12);

        let groups = tickets_by_due_date(store.state());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&march_9].len(), 2);
        assert_eq!(tickets_due_on(store.state(), march_12)[0].id.as_str(), "t4");
        let march_1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(tickets_due_on(store.state(), march_1).is_empty());
    }

    #[test]
    fn test_search_hides_calendar_entries() {
        let mut store = AppStore::demo();
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        due(&mut store, "t1", day);
        due(&mut store, "t2", day);
        store.set_search_query("safari");

        let found = tickets_due_on(store.state(), day);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "t1");
    }
}
