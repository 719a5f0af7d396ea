//! Parks: the aggregation root of the entity graph.
//!
//! A [`Park`] exclusively owns its lodges and rangers. Children are created
//! on their own and then registered explicitly with [`Park::add_lodge`] and
//! [`Park::add_ranger`]; registration checks the child's park
//! back-reference and rejects duplicates, so each child appears exactly
//! once.

use parkwatch_core::DefaultsConfig;
use parkwatch_core::config::DEFAULT_OPENING_HOURS;
use parkwatch_types::{Coordinates, LodgeId, ParkId, RangerId};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::lodge::Lodge;
use crate::ranger::Ranger;

/// A national park.
///
/// A deserialized park is checked like a constructed one: the area must be
/// valid and every stored lodge and ranger goes through registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParkRecord")]
pub struct Park {
    /// Unique identifier.
    id: ParkId,
    /// Display name.
    pub name: String,
    /// Current position; lodges without their own location follow it.
    location: Coordinates,
    /// Area in square kilometres, finite and non-negative.
    area_km2: f64,
    /// Opening hours as displayed at the gate, e.g. `"8:00-18:00"`.
    pub opening_hours: String,
    /// Admissions since the last daily reset.
    visitors_today: u32,
    /// Year the park was established, if known.
    pub established_year: Option<i32>,
    /// Registered lodges, in registration order.
    lodges: Vec<Lodge>,
    /// Registered rangers, in registration order.
    rangers: Vec<Ranger>,
}

/// Unchecked serialized form of a [`Park`].
#[derive(Deserialize)]
struct ParkRecord {
    id: ParkId,
    name: String,
    location: Coordinates,
    area_km2: f64,
    opening_hours: String,
    visitors_today: u32,
    established_year: Option<i32>,
    lodges: Vec<Lodge>,
    rangers: Vec<Ranger>,
}

impl TryFrom<ParkRecord> for Park {
    type Error = ModelError;

    fn try_from(record: ParkRecord) -> Result<Self, Self::Error> {
        check_area(record.area_km2)?;
        let mut park = Self {
            id: record.id,
            name: record.name,
            location: record.location,
            area_km2: record.area_km2,
            opening_hours: record.opening_hours,
            visitors_today: record.visitors_today,
            established_year: record.established_year,
            lodges: Vec::with_capacity(record.lodges.len()),
            rangers: Vec::with_capacity(record.rangers.len()),
        };
        for lodge in record.lodges {
            park.add_lodge(lodge)?;
        }
        for ranger in record.rangers {
            park.add_ranger(ranger)?;
        }
        Ok(park)
    }
}

fn check_area(area_km2: f64) -> Result<(), ModelError> {
    if !area_km2.is_finite() || area_km2 < 0.0 {
        return Err(ModelError::InvalidArgument {
            field: "area_km2",
            reason: format!("must be a finite, non-negative area, got {area_km2}"),
        });
    }
    Ok(())
}

impl Park {
    /// Create a park with default opening hours and no lodges or rangers.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if `area_km2` is negative or
    /// not finite.
    pub fn new(
        name: impl Into<String>,
        location: Coordinates,
        area_km2: f64,
    ) -> Result<Self, ModelError> {
        check_area(area_km2)?;
        Ok(Self {
            id: ParkId::new(),
            name: name.into(),
            location,
            area_km2,
            opening_hours: DEFAULT_OPENING_HOURS.to_owned(),
            visitors_today: 0,
            established_year: None,
            lodges: Vec::new(),
            rangers: Vec::new(),
        })
    }

    /// Create a park whose opening hours come from configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Park::new`].
    pub fn from_defaults(
        name: impl Into<String>,
        location: Coordinates,
        area_km2: f64,
        defaults: &DefaultsConfig,
    ) -> Result<Self, ModelError> {
        Ok(Self::new(name, location, area_km2)?.with_opening_hours(defaults.opening_hours.clone()))
    }

    /// Replace the opening hours.
    #[must_use]
    pub fn with_opening_hours(mut self, hours: impl Into<String>) -> Self {
        self.opening_hours = hours.into();
        self
    }

    /// Set the year the park was established.
    #[must_use]
    pub fn with_established_year(mut self, year: i32) -> Self {
        self.established_year = Some(year);
        self
    }

    // -------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------

    /// Unique park identifier.
    pub const fn id(&self) -> ParkId {
        self.id
    }

    /// The park's position.
    pub const fn location(&self) -> Coordinates {
        self.location
    }

    /// Move the park. Lodges without their own location follow.
    pub const fn set_location(&mut self, location: Coordinates) {
        self.location = location;
    }

    /// Area in square kilometres.
    pub const fn area_km2(&self) -> f64 {
        self.area_km2
    }

    /// Number of admissions recorded since the last daily reset.
    pub const fn visitors_today(&self) -> u32 {
        self.visitors_today
    }

    /// Count one admission through the gate.
    ///
    /// Saturates at `u32::MAX`. Returns the new count.
    pub fn record_admission(&mut self) -> u32 {
        self.visitors_today = self.visitors_today.saturating_add(1);
        self.visitors_today
    }

    /// Zero the daily admission counter.
    pub fn reset_daily_count(&mut self) {
        tracing::debug!(park = %self.id, visitors = self.visitors_today, "daily count reset");
        self.visitors_today = 0;
    }

    // -------------------------------------------------------------------
    // Lodges
    // -------------------------------------------------------------------

    /// Register a lodge with this park and take ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParkMismatch`] if the lodge was created for a
    /// different park, or [`ModelError::DuplicateLodge`] if a lodge with the
    /// same ID is already registered. The park is unchanged on error.
    pub fn add_lodge(&mut self, lodge: Lodge) -> Result<LodgeId, ModelError> {
        if lodge.park_id() != self.id {
            return Err(ModelError::ParkMismatch {
                expected: self.id,
                found: lodge.park_id(),
            });
        }
        let id = lodge.id();
        if self.lodge(id).is_some() {
            return Err(ModelError::DuplicateLodge(id));
        }
        tracing::debug!(park = %self.id, lodge = %id, name = %lodge.name, "lodge registered");
        self.lodges.push(lodge);
        Ok(id)
    }

    /// All lodges, in registration order.
    pub fn lodges(&self) -> &[Lodge] {
        &self.lodges
    }

    /// Look up a lodge by ID.
    pub fn lodge(&self, id: LodgeId) -> Option<&Lodge> {
        self.lodges.iter().find(|l| l.id() == id)
    }

    /// Look up a lodge by ID for mutation.
    pub fn lodge_mut(&mut self, id: LodgeId) -> Option<&mut Lodge> {
        self.lodges.iter_mut().find(|l| l.id() == id)
    }

    /// Effective location of a registered lodge.
    ///
    /// The lodge's own location if set, otherwise this park's current
    /// location.
    pub fn lodge_location(&self, id: LodgeId) -> Option<Coordinates> {
        self.lodge(id).map(|l| l.resolve_location(self.location))
    }

    /// Book a room in one of this park's lodges.
    ///
    /// `Ok(false)` means the lodge is full.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LodgeNotFound`] if no such lodge is registered.
    pub fn book_room(&mut self, id: LodgeId) -> Result<bool, ModelError> {
        self.lodge_mut(id)
            .map(Lodge::book_room)
            .ok_or(ModelError::LodgeNotFound(id))
    }

    // -------------------------------------------------------------------
    // Rangers
    // -------------------------------------------------------------------

    /// Register a ranger with this park and take ownership of them.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParkMismatch`] if the ranger was hired for a
    /// different park, or [`ModelError::DuplicateRanger`] if a ranger with
    /// the same ID is already registered. The park is unchanged on error.
    pub fn add_ranger(&mut self, ranger: Ranger) -> Result<RangerId, ModelError> {
        if ranger.park_id() != self.id {
            return Err(ModelError::ParkMismatch {
                expected: self.id,
                found: ranger.park_id(),
            });
        }
        let id = ranger.id();
        if self.ranger(id).is_some() {
            return Err(ModelError::DuplicateRanger(id));
        }
        tracing::debug!(
            park = %self.id,
            ranger = %id,
            employee_id = ranger.employee_id(),
            "ranger registered"
        );
        self.rangers.push(ranger);
        Ok(id)
    }

    /// All rangers, in registration order.
    pub fn rangers(&self) -> &[Ranger] {
        &self.rangers
    }

    /// Look up a ranger by ID.
    pub fn ranger(&self, id: RangerId) -> Option<&Ranger> {
        self.rangers.iter().find(|r| r.id() == id)
    }

    /// Look up a ranger by ID for mutation (e.g. to clock in).
    pub fn ranger_mut(&mut self, id: RangerId) -> Option<&mut Ranger> {
        self.rangers.iter_mut().find(|r| r.id() == id)
    }

    /// Rangers currently on duty.
    pub fn rangers_on_duty(&self) -> impl Iterator<Item = &Ranger> {
        self.rangers.iter().filter(|r| r.is_on_duty())
    }
}
