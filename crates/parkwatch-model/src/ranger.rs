//! Rangers: park employees with an on/off-duty flag.

use parkwatch_core::Clock;
use parkwatch_types::{ParkId, RangerId};
use serde::{Deserialize, Serialize};

use crate::user::{User, UserProfile};

/// A park employee.
///
/// Starts off duty. Register with the owning park through
/// [`Park::add_ranger`](crate::park::Park::add_ranger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranger {
    /// Unique identifier.
    id: RangerId,
    /// Name, contact details, and creation time.
    profile: UserProfile,
    /// Staff number.
    employee_id: String,
    /// Back-reference to the employing park.
    park_id: ParkId,
    /// On-duty flag, flipped by `clock_in`/`clock_out`.
    is_on_duty: bool,
}

impl Ranger {
    /// Create an off-duty ranger employed by `park_id`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        park_id: ParkId,
        employee_id: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: RangerId::new(),
            profile: UserProfile::new(name, email, phone, clock),
            employee_id: employee_id.into(),
            park_id,
            is_on_duty: false,
        }
    }

    /// Unique ranger identifier.
    pub const fn id(&self) -> RangerId {
        self.id
    }

    /// Staff number assigned by the park service.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The park this ranger works at.
    pub const fn park_id(&self) -> ParkId {
        self.park_id
    }

    /// Whether the ranger is currently on duty.
    pub const fn is_on_duty(&self) -> bool {
        self.is_on_duty
    }

    /// Go on duty. Calling it again while on duty changes nothing.
    pub fn clock_in(&mut self) {
        self.is_on_duty = true;
        tracing::debug!(ranger = %self.id, employee_id = %self.employee_id, "clocked in");
    }

    /// Go off duty. Calling it again while off duty changes nothing.
    pub fn clock_out(&mut self) {
        self.is_on_duty = false;
        tracing::debug!(ranger = %self.id, employee_id = %self.employee_id, "clocked out");
    }
}

impl User for Ranger {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
