//! Ticket create/edit form.
//!
//! The form is closed, creating a new ticket, or editing an existing one.
//! Field edits only touch the draft; the store sees nothing until
//! [`TicketForm::submit`]. Closing for any reason throws the draft away.

use crate::domain::{
    NewTicket, Priority, SprintId, TicketId, TicketStatus, TicketUpdate, UserId,
};
use crate::error::{QcError, Result};
use crate::store::{AppState, AppStore};
use chrono::NaiveDate;
use tracing::debug;

/// Which ticket the form is working on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TicketId),
}

/// Field values being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub assignee_id: Option<UserId>,
    pub sprint_id: Option<SprintId>,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    mode: Option<FormMode>,
    draft: TicketDraft,
    tag_input: String,
}

impl TicketForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&FormMode> {
        self.mode.as_ref()
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    /// Opens a blank form.
    ///
    /// Status defaults to the column the form was opened from (backlog
    /// otherwise) and the assignee to the current user.
    pub fn open_create(&mut self, state: &AppState, initial_status: Option<TicketStatus>) {
        self.draft = TicketDraft {
            status: initial_status.unwrap_or_default(),
            assignee_id: state.current_user_id.clone(),
            ..Default::default()
        };
        self.tag_input.clear();
        self.mode = Some(FormMode::Create);
    }

    /// Opens the form on an existing ticket; returns false if it is gone
    pub fn open_edit(&mut self, state: &AppState, id: &TicketId) -> bool {
        let Some(ticket) = state.ticket(id) else {
            return false;
        };

        self.draft = TicketDraft {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
            assignee_id: ticket.assignee_id.clone(),
            sprint_id: ticket.sprint_id.clone(),
            tags: ticket.tags.clone(),
            due_date: ticket.due_date,
        };
        self.tag_input.clear();
        self.mode = Some(FormMode::Edit(id.clone()));
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.draft.status = status;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Selects an assignee; the empty selection means unassigned
    pub fn set_assignee(&mut self, value: &str) {
        self.draft.assignee_id = (!value.is_empty()).then(|| UserId::new(value));
    }

    /// Selects a sprint; the empty selection means no sprint
    pub fn set_sprint(&mut self, value: &str) {
        self.draft.sprint_id = (!value.is_empty()).then(|| SprintId::new(value));
    }

    /// Sets the due date from a `YYYY-MM-DD` input.
    ///
    /// Anything after a `T` is dropped so full timestamps collapse to their
    /// date. An empty value clears the due date.
    pub fn set_due_date(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            self.draft.due_date = None;
            return Ok(());
        }

        let date_part = value.split('T').next().unwrap_or(value);
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| QcError::Validation(format!("Invalid due date: {}", value)))?;
        self.draft.due_date = Some(date);
        Ok(())
    }

    pub fn set_tag_input(&mut self, value: impl Into<String>) {
        self.tag_input = value.into();
    }

    /// Commits the tag input (the Enter key).
    ///
    /// Appends the trimmed value unless it is empty or already present, then
    /// clears the input. Returns whether a tag was added.
    pub fn commit_tag(&mut self) -> bool {
        let tag = self.tag_input.trim().to_string();
        if tag.is_empty() {
            return false;
        }

        self.tag_input.clear();
        if self.draft.tags.contains(&tag) {
            return false;
        }
        self.draft.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.draft.tags.retain(|t| t != tag);
    }

    /// Writes the draft to the store and closes the form.
    ///
    /// A blank title is rejected and the form stays open.
    pub fn submit(&mut self, store: &mut AppStore) -> Result<TicketId> {
        let Some(mode) = self.mode.clone() else {
            return Err(QcError::Validation("Ticket form is not open".to_string()));
        };
        if self.draft.title.trim().is_empty() {
            return Err(QcError::Validation("Title is required".to_string()));
        }

        let draft = std::mem::take(&mut self.draft);
        let id = match mode {
            FormMode::Create => {
                let created_by = store.state().current_user_id.clone();
                store.add_ticket(NewTicket {
                    title: draft.title,
                    description: draft.description,
                    status: draft.status,
                    priority: draft.priority,
                    assignee_id: draft.assignee_id,
                    sprint_id: draft.sprint_id,
                    tags: draft.tags,
                    created_by,
                    due_date: draft.due_date,
                })
            }
            FormMode::Edit(id) => {
                store.update_ticket(
                    &id,
                    TicketUpdate {
                        title: Some(draft.title),
                        description: Some(draft.description),
                        status: Some(draft.status),
                        priority: Some(draft.priority),
                        assignee_id: Some(draft.assignee_id),
                        sprint_id: Some(draft.sprint_id),
                        tags: Some(draft.tags),
                        created_by: None,
                        due_date: Some(draft.due_date),
                    },
                );
                id
            }
        };

        debug!(ticket_id = %id, "Ticket form submitted");
        self.close();
        Ok(id)
    }

    /// Cancel, backdrop click, or after a successful submit
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
