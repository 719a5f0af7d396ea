//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Parks, lodges, rangers, visitors, tickets, and annual passes each get
//! their own ID type, so a `LodgeId` can never be handed to an API that
//! expects a `ParkId`. IDs are UUID v7 and therefore sort by creation time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a park (the aggregation root).
    ParkId
}

define_id! {
    /// Unique identifier for a lodge inside a park.
    LodgeId
}

define_id! {
    /// Unique identifier for a ranger employed by a park.
    RangerId
}

define_id! {
    /// Unique identifier for a visitor.
    VisitorId
}

define_id! {
    /// Unique identifier for a single ticket.
    TicketId
}

define_id! {
    /// Unique identifier for an annual pass.
    AnnualPassId
}
