//! Domain types and the collection view model for the kaneo client.
//!
//! Everything in this crate is pure: it orders, groups and classifies data
//! fetched elsewhere, and describes mutations as [`intent::MutationIntent`]
//! values for the HTTP layer to execute.

mod de;
pub mod enums;
pub mod intent;
pub mod notification;
pub mod ordering;
pub mod project;
pub mod snapshot;
pub mod task;
pub mod text;
pub mod urgency;
