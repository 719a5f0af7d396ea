//! Gate admission: redeem a visitor's holding and record the visit.
//!
//! [`admit`] checks the visitor's current ticket first, then their annual
//! pass:
//!
//! 1. A ticket for this park that is valid today is used (entry time
//!    stamped).
//! 2. Otherwise an annual pass valid this calendar year records the park.
//! 3. Otherwise entry is denied and nothing changes.
//!
//! On entry the visit is appended to the visitor's history with today's
//! date and the park's daily counter goes up by one.

use chrono::{DateTime, Utc};
use parkwatch_core::Clock;
use parkwatch_types::{AnnualPassId, TicketId};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::park::Park;
use crate::visitor::Visitor;

/// Why a visitor was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The visitor holds neither a ticket nor a pass.
    NoHolding,
    /// The ticket is used, dated another day, or for another park, and
    /// there is no valid pass to fall back on.
    TicketNotValid,
    /// The only holding is a pass for a different year.
    PassExpired,
}

/// Result of presenting a visitor at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Admission {
    /// Admitted on a ticket, which is now used.
    Ticket {
        /// The ticket that was used.
        ticket: TicketId,
        /// The stamped entry time.
        entry_time: DateTime<Utc>,
    },
    /// Admitted on an annual pass.
    AnnualPass {
        /// The pass that was shown.
        pass: AnnualPassId,
        /// Whether this was the first time the pass was used at this park.
        first_visit: bool,
    },
    /// Turned away.
    Denied {
        /// Why.
        reason: DenialReason,
    },
}

impl Admission {
    /// Whether the visitor got in.
    pub const fn is_admitted(&self) -> bool {
        !matches!(self, Self::Denied { .. })
    }
}

/// Admit `visitor` to `park` if they hold a valid ticket or pass.
///
/// # Errors
///
/// Propagates [`ModelError::TicketAlreadyUsed`] from ticket redemption.
pub fn admit(
    visitor: &mut Visitor,
    park: &mut Park,
    clock: &dyn Clock,
) -> Result<Admission, ModelError> {
    let park_id = park.id();

    let admission = if let Some(ticket) = visitor
        .ticket_mut()
        .filter(|t| t.park_id() == park_id && t.is_valid(clock))
    {
        let entry_time = ticket.use_ticket(clock)?;
        Admission::Ticket {
            ticket: ticket.id(),
            entry_time,
        }
    } else if let Some(pass) = visitor.annual_pass_mut().filter(|p| p.is_valid(clock)) {
        Admission::AnnualPass {
            pass: pass.id(),
            first_visit: pass.record_park_visit(park_id),
        }
    } else {
        let reason = if visitor.ticket().is_some() {
            DenialReason::TicketNotValid
        } else if visitor.annual_pass().is_some() {
            DenialReason::PassExpired
        } else {
            DenialReason::NoHolding
        };
        tracing::info!(visitor = %visitor.id(), park = %park_id, ?reason, "entry denied");
        return Ok(Admission::Denied { reason });
    };

    visitor.record_visit(park_id, clock.today());
    let count = park.record_admission();
    tracing::info!(
        visitor = %visitor.id(),
        park = %park_id,
        visitors_today = count,
        ?admission,
        "visitor admitted"
    );
    Ok(admission)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use parkwatch_core::FixedClock;
    use parkwatch_types::{Coordinates, PassType};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::annual_pass::AnnualPass;
    use crate::ticket::Ticket;

    fn clock() -> FixedClock {
        let mut clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
        clock.advance(TimeDelta::hours(10)).unwrap();
        clock
    }

    fn setup(clock: &FixedClock) -> (Visitor, Park) {
        let visitor = Visitor::new("Ada", "ada@example.org", "555-0100", 34, clock);
        let park = Park::new("Acadia", Coordinates::new(44.3, -68.2), 198.6).unwrap();
        (visitor, park)
    }

    #[test]
    fn valid_ticket_is_used_on_entry() {
        let clock = clock();
        let (mut visitor, mut park) = setup(&clock);
        let ticket = Ticket::new(park.id(), visitor.id(), clock.today(), dec!(35));
        let ticket_id = ticket.id();
        visitor.assign_ticket(ticket).unwrap();

        let admission = admit(&mut visitor, &mut park, &clock).unwrap();
        assert_eq!(
            admission,
            Admission::Ticket {
                ticket: ticket_id,
                entry_time: clock.now(),
            }
        );
        assert!(visitor.ticket().unwrap().is_used());
        assert_eq!(visitor.visit_history().len(), 1);
        assert_eq!(park.visitors_today(), 1);
    }

    #[test]
    fn used_ticket_is_denied_second_time() {
        let clock = clock();
        let (mut visitor, mut park) = setup(&clock);
        let ticket = Ticket::new(park.id(), visitor.id(), clock.today(), dec!(35));
        visitor.assign_ticket(ticket).unwrap();

        assert!(admit(&mut visitor, &mut park, &clock).unwrap().is_admitted());
        let again = admit(&mut visitor, &mut park, &clock).unwrap();
        assert_eq!(
            again,
            Admission::Denied {
                reason: DenialReason::TicketNotValid
            }
        );
        assert_eq!(visitor.visit_history().len(), 1);
        assert_eq!(park.visitors_today(), 1);
    }

    #[test]
    fn ticket_for_other_park_falls_back_to_pass() {
        let clock = clock();
        let (mut visitor, mut park) = setup(&clock);
        let elsewhere = Park::new("Zion", Coordinates::new(37.3, -113.0), 595.9).unwrap();
        visitor
            .assign_ticket(Ticket::new(elsewhere.id(), visitor.id(), clock.today(), dec!(35)))
            .unwrap();
        visitor
            .assign_annual_pass(AnnualPass::new(2024, visitor.id(), dec!(80), PassType::Individual, &clock))
            .unwrap();

        let admission = admit(&mut visitor, &mut park, &clock).unwrap();
        assert!(matches!(admission, Admission::AnnualPass { first_visit: true, .. }));
        assert!(!visitor.ticket().unwrap().is_used());

        let again = admit(&mut visitor, &mut park, &clock).unwrap();
        assert!(matches!(again, Admission::AnnualPass { first_visit: false, .. }));
        assert_eq!(visitor.annual_pass().unwrap().parks_visited().len(), 1);
        assert_eq!(visitor.visit_history().len(), 2);
        assert_eq!(park.visitors_today(), 2);
    }

    #[test]
    fn expired_pass_is_denied() {
        let clock = clock();
        let (mut visitor, mut park) = setup(&clock);
        visitor
            .assign_annual_pass(AnnualPass::new(2023, visitor.id(), dec!(80), PassType::Senior, &clock))
            .unwrap();
        let admission = admit(&mut visitor, &mut park, &clock).unwrap();
        assert_eq!(
            admission,
            Admission::Denied {
                reason: DenialReason::PassExpired
            }
        );
        assert!(visitor.visit_history().is_empty());
    }

    #[test]
    fn empty_handed_visitor_is_denied() {
        let clock = clock();
        let (mut visitor, mut park) = setup(&clock);
        let admission = admit(&mut visitor, &mut park, &clock).unwrap();
        assert!(!admission.is_admitted());
        assert_eq!(park.visitors_today(), 0);
    }
}
