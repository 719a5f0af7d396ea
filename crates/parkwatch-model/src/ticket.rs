//! Tickets: entry authorization for one visitor at one park.
//!
//! A ticket has two states, unused and used, and only moves forward:
//!
//! ```text
//! Unused --use_ticket()--> Used
//! ```
//!
//! It is valid for entry only while unused and only on its purchase date.
//! Using an already-used ticket is refused with
//! [`ModelError::TicketAlreadyUsed`] and leaves the original entry time
//! in place.

use chrono::{DateTime, NaiveDate, Utc};
use parkwatch_core::{Clock, DefaultsConfig};
use parkwatch_types::{ParkId, TicketId, TicketType, VisitorId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An entry ticket.
///
/// `entry_time` is set exactly when the ticket is used. A stored record
/// that breaks this is rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TicketRecord")]
pub struct Ticket {
    /// Unique identifier.
    id: TicketId,
    /// The park this ticket admits to.
    park_id: ParkId,
    /// The visitor the ticket was issued to.
    visitor_id: VisitorId,
    /// The only date the ticket is valid on.
    purchase_date: NaiveDate,
    /// Price paid.
    price: Decimal,
    /// Whether the ticket has been redeemed.
    used: bool,
    /// Redemption time, present iff `used`.
    entry_time: Option<DateTime<Utc>>,
    /// Ticket category.
    ticket_type: TicketType,
}

/// Unchecked serialized form of a [`Ticket`].
#[derive(Deserialize)]
struct TicketRecord {
    id: TicketId,
    park_id: ParkId,
    visitor_id: VisitorId,
    purchase_date: NaiveDate,
    price: Decimal,
    used: bool,
    entry_time: Option<DateTime<Utc>>,
    ticket_type: TicketType,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = ModelError;

    fn try_from(record: TicketRecord) -> Result<Self, Self::Error> {
        if record.used != record.entry_time.is_some() {
            return Err(ModelError::InvalidArgument {
                field: "entry_time",
                reason: format!(
                    "must be set exactly when the ticket is used (used = {})",
                    record.used
                ),
            });
        }
        Ok(Self {
            id: record.id,
            park_id: record.park_id,
            visitor_id: record.visitor_id,
            purchase_date: record.purchase_date,
            price: record.price,
            used: record.used,
            entry_time: record.entry_time,
            ticket_type: record.ticket_type,
        })
    }
}

impl Ticket {
    /// Issue an unused single-day ticket.
    pub fn new(
        park_id: ParkId,
        visitor_id: VisitorId,
        purchase_date: NaiveDate,
        price: Decimal,
    ) -> Self {
        Self {
            id: TicketId::new(),
            park_id,
            visitor_id,
            purchase_date,
            price,
            used: false,
            entry_time: None,
            ticket_type: TicketType::default(),
        }
    }

    /// Issue an unused ticket of the configured default type.
    pub fn from_defaults(
        park_id: ParkId,
        visitor_id: VisitorId,
        purchase_date: NaiveDate,
        price: Decimal,
        defaults: &DefaultsConfig,
    ) -> Self {
        Self::new(park_id, visitor_id, purchase_date, price).with_ticket_type(defaults.ticket_type)
    }

    /// Change the ticket category.
    #[must_use]
    pub const fn with_ticket_type(mut self, ticket_type: TicketType) -> Self {
        self.ticket_type = ticket_type;
        self
    }

    /// Unique ticket identifier.
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// The park this ticket admits to.
    pub const fn park_id(&self) -> ParkId {
        self.park_id
    }

    /// The visitor this ticket was issued to.
    pub const fn visitor_id(&self) -> VisitorId {
        self.visitor_id
    }

    /// Date of purchase.
    pub const fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Price paid.
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Ticket category.
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Whether the ticket has been used for entry.
    pub const fn is_used(&self) -> bool {
        self.used
    }

    /// When the ticket was used, if it has been.
    pub const fn entry_time(&self) -> Option<DateTime<Utc>> {
        self.entry_time
    }

    /// Whether the ticket admits entry right now: unused and bought today.
    pub fn is_valid(&self, clock: &dyn Clock) -> bool {
        !self.used && self.purchase_date == clock.today()
    }

    /// Mark the ticket used and stamp the entry time.
    ///
    /// Returns the recorded entry time.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::TicketAlreadyUsed`] if the ticket was used
    /// before. Nothing is modified in that case.
    pub fn use_ticket(&mut self, clock: &dyn Clock) -> Result<DateTime<Utc>, ModelError> {
        if self.used {
            return Err(ModelError::TicketAlreadyUsed(self.id));
        }
        let now = clock.now();
        self.used = true;
        self.entry_time = Some(now);
        tracing::info!(
            ticket = %self.id,
            park = %self.park_id,
            visitor = %self.visitor_id,
            ticket_type = %self.ticket_type,
            "ticket used"
        );
        Ok(now)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeDelta;
    use parkwatch_core::FixedClock;
    use rust_decimal_macros::dec;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
    }

    fn ticket(purchase_date: NaiveDate) -> Ticket {
        Ticket::new(ParkId::new(), VisitorId::new(), purchase_date, dec!(35.00))
    }

    #[test]
    fn new_ticket_defaults() {
        let t = ticket(today());
        assert!(!t.is_used());
        assert_eq!(t.entry_time(), None);
        assert_eq!(t.ticket_type(), TicketType::SingleDay);
        assert_eq!(t.price(), dec!(35.00));
    }

    #[test]
    fn valid_today_then_invalid_after_use() {
        let mut clock = FixedClock::on_date(today());
        clock.advance(TimeDelta::hours(9)).unwrap();
        let mut t = ticket(today());
        assert!(t.is_valid(&clock));

        let stamped = t.use_ticket(&clock).unwrap();
        assert!(t.is_used());
        assert_eq!(t.entry_time(), Some(stamped));
        assert_eq!(stamped, clock.now());
        assert!(!t.is_valid(&clock));
    }

    #[test]
    fn yesterdays_ticket_is_invalid_even_unused() {
        let clock = FixedClock::on_date(today());
        let yesterday = today().pred_opt().unwrap();
        let t = ticket(yesterday);
        assert!(!t.is_used());
        assert!(!t.is_valid(&clock));
    }

    #[test]
    fn ticket_expires_at_midnight() {
        let mut clock = FixedClock::on_date(today());
        let t = ticket(today());
        assert!(t.is_valid(&clock));
        clock.advance(TimeDelta::days(1)).unwrap();
        assert!(!t.is_valid(&clock));
    }

    #[test]
    fn second_use_is_refused_and_keeps_entry_time() {
        let mut clock = FixedClock::on_date(today());
        let mut t = ticket(today());
        let first = t.use_ticket(&clock).unwrap();

        clock.advance(TimeDelta::hours(2)).unwrap();
        assert_eq!(t.use_ticket(&clock), Err(ModelError::TicketAlreadyUsed(t.id())));
        assert_eq!(t.entry_time(), Some(first));
    }

    #[test]
    fn from_defaults_applies_configured_type() {
        let defaults = DefaultsConfig {
            ticket_type: TicketType::Group,
            ..DefaultsConfig::default()
        };
        let t = Ticket::from_defaults(ParkId::new(), VisitorId::new(), today(), dec!(90), &defaults);
        assert_eq!(t.ticket_type(), TicketType::Group);
    }

    #[test]
    fn used_ticket_survives_serde() {
        let mut t = ticket(today());
        t.use_ticket(&FixedClock::on_date(today())).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        let restored: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(restored, t);
    }

    #[test]
    fn record_with_inconsistent_use_state_is_rejected() {
        let mut used = ticket(today());
        used.use_ticket(&FixedClock::on_date(today())).unwrap();

        let mut stamped_but_unused = serde_json::to_value(&used).unwrap();
        stamped_but_unused["used"] = serde_json::json!(false);
        assert!(serde_json::from_value::<Ticket>(stamped_but_unused).is_err());

        let mut used_without_stamp = serde_json::to_value(&used).unwrap();
        used_without_stamp["entry_time"] = serde_json::Value::Null;
        let err = serde_json::from_value::<Ticket>(used_without_stamp).unwrap_err();
        assert!(err.to_string().contains("entry_time"), "{err}");
    }
}
