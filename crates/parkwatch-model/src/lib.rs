//! Parks, lodges, rangers, visitors, tickets, and annual passes.
//!
//! This crate is the in-memory entity graph for park visitor management.
//! A [`Park`] is the aggregation root: it owns its lodges and rangers,
//! which are registered explicitly after construction. Visitors carry
//! their current [`Ticket`] and [`AnnualPass`] and an append-only visit
//! history. Every time-dependent rule reads "now" from a
//! [`parkwatch_core::Clock`] supplied by the caller.
//!
//! Everything here is single-threaded and synchronous. A multi-threaded
//! host must serialize access to shared parks and visitors itself.
//!
//! # Modules
//!
//! - [`admission`] -- Gate admission combining ticket use, pass visits,
//!   history, and the daily counter.
//! - [`annual_pass`] -- Calendar-year passes with a set of parks visited.
//! - [`error`] -- [`ModelError`], the single error type of this crate.
//! - [`lodge`] -- Room inventory and location fallback.
//! - [`park`] -- The aggregation root and child registration.
//! - [`ranger`] -- Park employees with on/off-duty state.
//! - [`ticket`] -- Single-use, same-day entry tickets.
//! - [`user`] -- The [`User`] trait, [`UserProfile`], and [`Person`].
//! - [`visitor`] -- Visitors, their holdings, and visit history.

pub mod admission;
pub mod annual_pass;
pub mod error;
pub mod lodge;
pub mod park;
pub mod ranger;
pub mod ticket;
pub mod user;
pub mod visitor;

// Re-export primary types at crate root.
pub use admission::{Admission, DenialReason, admit};
pub use annual_pass::AnnualPass;
pub use error::ModelError;
pub use lodge::Lodge;
pub use park::Park;
pub use ranger::Ranger;
pub use ticket::Ticket;
pub use user::{Person, User, UserProfile};
pub use visitor::{Visit, Visitor};
