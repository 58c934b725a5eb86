use crate::domain::ticket::{Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Configuration for a kanban board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub status: TicketStatus,
}

impl Column {
    pub fn new(title: impl Into<String>, status: TicketStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }

    /// Tickets belonging to this column, in the order given
    pub fn tickets<'a>(&self, tickets: &[&'a Ticket]) -> Vec<&'a Ticket> {
        tickets
            .iter()
            .copied()
            .filter(|ticket| ticket.status == self.status)
            .collect()
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            columns: TicketStatus::ALL
                .into_iter()
                .map(|status| Column::new(status.to_string(), status))
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Gets the column configuration for a status
    pub fn column_for_status(&self, status: TicketStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }

    /// Whether a drop zone for this status exists on the board
    pub fn has_column(&self, status: TicketStatus) -> bool {
        self.column_for_status(status).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let board = BoardConfig::default();
        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Backlog", "To Do", "In Progress", "In Review", "Done"]
        );
    }

    #[test]
    fn test_column_lookup() {
        let board = BoardConfig::default();
        let column = board.column_for_status(TicketStatus::InReview).unwrap();
        assert_eq!(column.title, "In Review");

        let trimmed = BoardConfig {
            name: "Small".to_string(),
            columns: vec![Column::new("Done", TicketStatus::Done)],
        };
        assert!(!trimmed.has_column(TicketStatus::Todo));
        assert!(trimmed.has_column(TicketStatus::Done));
    }
}
