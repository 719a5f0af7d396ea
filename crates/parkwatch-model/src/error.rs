//! Error types for the `parkwatch-model` crate.
//!
//! Running out of lodge rooms is not an error: [`Lodge::book_room`]
//! returns `false` and leaves the retry policy to the caller.
//!
//! [`Lodge::book_room`]: crate::lodge::Lodge::book_room

use parkwatch_types::{LodgeId, ParkId, RangerId, TicketId, VisitorId};

/// Errors that can occur while building or mutating the entity graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A constructor argument is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// The offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The lodge is already registered with this park.
    #[error("lodge {0} is already registered")]
    DuplicateLodge(LodgeId),

    /// The ranger is already registered with this park.
    #[error("ranger {0} is already registered")]
    DuplicateRanger(RangerId),

    /// A lodge or ranger was created for a different park.
    #[error("entity belongs to park {found}, not park {expected}")]
    ParkMismatch {
        /// The park doing the registration.
        expected: ParkId,
        /// The park named by the entity's back-reference.
        found: ParkId,
    },

    /// No lodge with this ID is registered with the park.
    #[error("lodge not found: {0}")]
    LodgeNotFound(LodgeId),

    /// The ticket has already been used for entry.
    #[error("ticket {0} has already been used")]
    TicketAlreadyUsed(TicketId),

    /// A ticket or pass issued to one visitor was handed to another.
    #[error("holding issued to visitor {holder} cannot be assigned to visitor {visitor}")]
    HolderMismatch {
        /// The visitor receiving the holding.
        visitor: VisitorId,
        /// The visitor the holding was issued to.
        holder: VisitorId,
    },
}
