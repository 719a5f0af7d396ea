//! Shared type definitions for the Parkwatch entity model.
//!
//! Every crate in the workspace refers to parks, lodges, people, and
//! entry authorizations through the types defined here.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Ticket and annual pass categories
//! - [`geo`] -- The [`Coordinates`] value type for park and lodge positions

pub mod enums;
pub mod geo;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use enums::{ParseKindError, PassType, TicketType};
pub use geo::Coordinates;
pub use ids::{AnnualPassId, LodgeId, ParkId, RangerId, TicketId, VisitorId};
