use crate::domain::{Sprint, SprintId, SprintStatus, SprintUpdate, Ticket, TicketStatus};
use crate::store::{AppState, AppStore};

/// A sprint with the tickets assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct SprintSummary<'a> {
    pub sprint: &'a Sprint,
    pub tickets: Vec<&'a Ticket>,
}

impl<'a> SprintSummary<'a> {
    pub fn new(state: &'a AppState, sprint: &'a Sprint) -> Self {
        Self {
            sprint,
            tickets: state
                .tickets
                .iter()
                .filter(|t| t.sprint_id.as_ref() == Some(&sprint.id))
                .collect(),
        }
    }

    pub fn issue_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn done_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Done)
            .count()
    }

    /// Tickets being worked on, which includes those in review
    pub fn in_progress_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| matches!(t.status, TicketStatus::InProgress | TicketStatus::InReview))
            .count()
    }

    /// Completed share in percent, rounded; 0 for an empty sprint
    pub fn progress(&self) -> u8 {
        percent(self.done_count(), self.issue_count())
    }

    /// Share of the progress bar drawn as in progress
    pub fn in_progress_percent(&self) -> u8 {
        percent(self.in_progress_count(), self.issue_count())
    }
}

/// `part / total` as a percentage rounded half up
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (2 * total)) as u8
}

/// What the sprints screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct SprintOverview<'a> {
    /// The first sprint marked active, if any
    pub active: Option<SprintSummary<'a>>,
    pub planned: Vec<SprintSummary<'a>>,
}

impl<'a> SprintOverview<'a> {
    pub fn build(state: &'a AppState) -> Self {
        Self {
            active: state
                .sprints
                .iter()
                .find(|s| s.is_active())
                .map(|s| SprintSummary::new(state, s)),
            planned: state
                .sprints
                .iter()
                .filter(|s| s.status == SprintStatus::Planned)
                .map(|s| SprintSummary::new(state, s))
                .collect(),
        }
    }
}

/// "Start Sprint" on a planned sprint. Other active sprints are left as
/// they are.
pub fn start_sprint(store: &mut AppStore, id: &SprintId) {
    store.update_sprint(
        id,
        SprintUpdate {
            status: Some(SprintStatus::Active),
            ..Default::default()
        },
    );
}
