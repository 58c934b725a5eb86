pub mod alert;
pub mod board;
pub mod id;
pub mod search;
pub mod sprint;
pub mod ticket;
pub mod user;

pub use alert::{Alert, AlertType, NewAlert};
pub use board::{BoardConfig, Column};
pub use id::{AlertId, SprintId, TicketId, UserId};
pub use search::filter_tickets;
pub use sprint::{NewSprint, Sprint, SprintStatus, SprintUpdate};
pub use ticket::{NewTicket, Priority, Ticket, TicketStatus, TicketUpdate};
pub use user::User;
