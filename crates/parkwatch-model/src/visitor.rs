//! Visitors and their holdings.
//!
//! A [`Visitor`] holds at most one current [`Ticket`] and at most one
//! current [`AnnualPass`]. Earlier tickets are not kept; assigning a new one
//! hands the previous holding back to the caller.
//!
//! The visit history is an append-only log. Unlike
//! [`AnnualPass::record_park_visit`] it keeps duplicates: two visits to the
//! same park on the same day are two entries.

use chrono::NaiveDate;
use parkwatch_core::Clock;
use parkwatch_types::{ParkId, VisitorId};
use serde::{Deserialize, Serialize};

use crate::annual_pass::AnnualPass;
use crate::error::ModelError;
use crate::ticket::Ticket;
use crate::user::{User, UserProfile};

/// One entry in a visitor's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// The park visited.
    pub park_id: ParkId,
    /// The date of the visit.
    pub date: NaiveDate,
}

/// A park visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Unique identifier.
    id: VisitorId,
    /// Name, contact details, and creation time.
    profile: UserProfile,
    /// Age in years.
    pub age: u32,
    /// Current ticket, if any.
    ticket: Option<Ticket>,
    /// Current annual pass, if any.
    annual_pass: Option<AnnualPass>,
    /// Every recorded visit, oldest first.
    visit_history: Vec<Visit>,
}

impl Visitor {
    /// Create a visitor with no ticket, no pass, and no history.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        age: u32,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: VisitorId::new(),
            profile: UserProfile::new(name, email, phone, clock),
            age,
            ticket: None,
            annual_pass: None,
            visit_history: Vec::new(),
        }
    }

    /// Unique visitor identifier.
    pub const fn id(&self) -> VisitorId {
        self.id
    }

    // -------------------------------------------------------------------
    // Holdings
    // -------------------------------------------------------------------

    /// The current ticket, if any.
    pub const fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// The current ticket, for redemption.
    pub fn ticket_mut(&mut self) -> Option<&mut Ticket> {
        self.ticket.as_mut()
    }

    /// Make `ticket` the current ticket, returning the one it replaces.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::HolderMismatch`] if the ticket was issued to a
    /// different visitor. The current ticket is kept in that case.
    pub fn assign_ticket(&mut self, ticket: Ticket) -> Result<Option<Ticket>, ModelError> {
        if ticket.visitor_id() != self.id {
            return Err(ModelError::HolderMismatch {
                visitor: self.id,
                holder: ticket.visitor_id(),
            });
        }
        tracing::debug!(visitor = %self.id, ticket = %ticket.id(), "ticket assigned");
        Ok(self.ticket.replace(ticket))
    }

    /// Remove and return the current ticket.
    pub fn take_ticket(&mut self) -> Option<Ticket> {
        self.ticket.take()
    }

    /// The current annual pass, if any.
    pub const fn annual_pass(&self) -> Option<&AnnualPass> {
        self.annual_pass.as_ref()
    }

    /// The current annual pass, for recording visits.
    pub fn annual_pass_mut(&mut self) -> Option<&mut AnnualPass> {
        self.annual_pass.as_mut()
    }

    /// Make `pass` the current annual pass, returning the one it replaces.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::HolderMismatch`] if the pass was issued to a
    /// different visitor.
    pub fn assign_annual_pass(
        &mut self,
        pass: AnnualPass,
    ) -> Result<Option<AnnualPass>, ModelError> {
        if pass.visitor_id() != self.id {
            return Err(ModelError::HolderMismatch {
                visitor: self.id,
                holder: pass.visitor_id(),
            });
        }
        tracing::debug!(visitor = %self.id, pass = %pass.id(), year = pass.year(), "annual pass assigned");
        Ok(self.annual_pass.replace(pass))
    }

    // -------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------

    /// Append a visit to the history. Any date is accepted.
    pub fn record_visit(&mut self, park_id: ParkId, date: NaiveDate) {
        self.visit_history.push(Visit { park_id, date });
        tracing::debug!(visitor = %self.id, park = %park_id, %date, "visit recorded");
    }

    /// All recorded visits, oldest first.
    pub fn visit_history(&self) -> &[Visit] {
        &self.visit_history
    }
}

impl User for Visitor {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
