//! Read-only projections the screens render from.
//!
//! Everything here is recomputed from an [`AppState`](crate::store::AppState)
//! snapshot; nothing is cached between renders.

pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod navigation;
pub mod settings;
pub mod sprints;

pub use board::{BoardView, CardView, ColumnView};
pub use dashboard::{ChartPoint, TicketSummary};
pub use navigation::Route;
pub use settings::{AccountSettings, Preferences, Settings, SettingsExport, TicketsPerPage};
pub use sprints::{SprintOverview, SprintSummary};
