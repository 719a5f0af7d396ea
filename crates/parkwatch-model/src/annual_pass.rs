//! Annual passes: multi-park entry for one calendar year.
//!
//! Validity is keyed to the calendar year number, not to time elapsed since
//! purchase. A pass for 2024 bought on 31 December 2024 stops being valid
//! on 1 January 2025.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use parkwatch_core::{Clock, DefaultsConfig};
use parkwatch_types::{AnnualPassId, ParkId, PassType, VisitorId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A year-scoped pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPass {
    /// Unique identifier.
    id: AnnualPassId,
    /// Calendar year the pass covers.
    year: i32,
    /// The visitor the pass was issued to.
    visitor_id: VisitorId,
    /// Price paid.
    price: Decimal,
    /// Pass category.
    pass_type: PassType,
    /// Date of purchase, taken from the issuing clock.
    purchase_date: NaiveDate,
    /// Parks entered with the pass, each once.
    parks_visited: BTreeSet<ParkId>,
}

impl AnnualPass {
    /// Issue a pass for `year`, purchased today according to `clock`.
    pub fn new(
        year: i32,
        visitor_id: VisitorId,
        price: Decimal,
        pass_type: PassType,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: AnnualPassId::new(),
            year,
            visitor_id,
            price,
            pass_type,
            purchase_date: clock.today(),
            parks_visited: BTreeSet::new(),
        }
    }

    /// Issue a pass of the configured default type.
    pub fn from_defaults(
        year: i32,
        visitor_id: VisitorId,
        price: Decimal,
        defaults: &DefaultsConfig,
        clock: &dyn Clock,
    ) -> Self {
        Self::new(year, visitor_id, price, defaults.pass_type, clock)
    }

    /// Unique pass identifier.
    pub const fn id(&self) -> AnnualPassId {
        self.id
    }

    /// The calendar year the pass covers.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The visitor this pass was issued to.
    pub const fn visitor_id(&self) -> VisitorId {
        self.visitor_id
    }

    /// Price paid.
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Pass category.
    pub const fn pass_type(&self) -> PassType {
        self.pass_type
    }

    /// Date of purchase.
    pub const fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Parks entered with this pass, each listed once.
    pub const fn parks_visited(&self) -> &BTreeSet<ParkId> {
        &self.parks_visited
    }

    /// Whether the current calendar year is the pass year.
    pub fn is_valid(&self, clock: &dyn Clock) -> bool {
        clock.year() == self.year
    }

    /// Record that the pass was used at `park`.
    ///
    /// Returns `true` if this is the first visit to that park.
    pub fn record_park_visit(&mut self, park: ParkId) -> bool {
        let first = self.parks_visited.insert(park);
        if first {
            tracing::debug!(pass = %self.id, park = %park, "new park on annual pass");
        }
        first
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use parkwatch_core::FixedClock;
    use rust_decimal_macros::dec;

    use super::*;

    fn on(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock::on_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn purchase_date_comes_from_clock() {
        let clock = on(2024, 3, 10);
        let pass = AnnualPass::new(2024, VisitorId::new(), dec!(80), PassType::Family, &clock);
        assert_eq!(pass.purchase_date(), clock.today());
        assert_eq!(pass.pass_type(), PassType::Family);
        assert!(pass.parks_visited().is_empty());
    }

    #[test]
    fn valid_only_in_its_calendar_year() {
        let pass = AnnualPass::new(2024, VisitorId::new(), dec!(80), PassType::Individual, &on(2024, 1, 1));
        assert!(pass.is_valid(&on(2024, 1, 1)));
        assert!(pass.is_valid(&on(2024, 12, 31)));
        assert!(!pass.is_valid(&on(2023, 12, 31)));
        assert!(!pass.is_valid(&on(2025, 1, 1)));
    }

    #[test]
    fn december_purchase_expires_on_new_year() {
        let bought = on(2024, 12, 30);
        let pass = AnnualPass::new(2024, VisitorId::new(), dec!(80), PassType::Senior, &bought);
        assert!(pass.is_valid(&bought));
        assert!(!pass.is_valid(&on(2025, 1, 1)));
    }

    #[test]
    fn park_visits_are_a_set() {
        let mut pass =
            AnnualPass::new(2024, VisitorId::new(), dec!(80), PassType::Individual, &on(2024, 5, 5));
        let p = ParkId::new();
        let q = ParkId::new();
        assert!(pass.record_park_visit(p));
        assert!(!pass.record_park_visit(p));
        assert!(pass.record_park_visit(q));
        assert_eq!(pass.parks_visited().len(), 2);
        assert!(pass.parks_visited().contains(&p));
    }

    #[test]
    fn from_defaults_applies_configured_type() {
        let defaults = DefaultsConfig {
            pass_type: PassType::Senior,
            ..DefaultsConfig::default()
        };
        let pass = AnnualPass::from_defaults(2024, VisitorId::new(), dec!(20), &defaults, &on(2024, 2, 2));
        assert_eq!(pass.pass_type(), PassType::Senior);
    }
}
