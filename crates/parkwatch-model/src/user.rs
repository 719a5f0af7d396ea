//! Identity attributes shared by everyone the model tracks.
//!
//! There is no standalone "user" entity. [`UserProfile`] is the common
//! field set, embedded by [`Visitor`] and [`Ranger`]; the [`User`] trait
//! gives uniform read access to it; and [`Person`] lets callers hold either
//! kind and match on which one they have.

use chrono::{DateTime, Utc};
use parkwatch_core::Clock;
use serde::{Deserialize, Serialize};

use crate::ranger::Ranger;
use crate::visitor::Visitor;

/// Name, contact details, and creation time of a person.
///
/// `created_at` is stamped from the clock at construction and has no
/// setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email. Not validated.
    pub email: String,
    /// Contact phone number. Not validated.
    pub phone: String,
    /// When the profile was created. Never changes.
    created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile stamped with `clock.now()`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            created_at: clock.now(),
        }
    }

    /// When this person was first recorded.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Read access to the identity attributes of a visitor or ranger.
pub trait User {
    /// The underlying profile.
    fn profile(&self) -> &UserProfile;

    /// Display name.
    fn name(&self) -> &str {
        &self.profile().name
    }

    /// Contact email.
    fn email(&self) -> &str {
        &self.profile().email
    }

    /// Contact phone number.
    fn phone(&self) -> &str {
        &self.profile().phone
    }

    /// When this person was first recorded.
    fn created_at(&self) -> DateTime<Utc> {
        self.profile().created_at()
    }
}

/// Either kind of person, for callers that handle both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Person {
    /// A park visitor.
    Visitor(Visitor),
    /// A park employee.
    Ranger(Ranger),
}

impl User for Person {
    fn profile(&self) -> &UserProfile {
        match self {
            Self::Visitor(v) => v.profile(),
            Self::Ranger(r) => r.profile(),
        }
    }
}

impl From<Visitor> for Person {
    fn from(v: Visitor) -> Self {
        Self::Visitor(v)
    }
}

impl From<Ranger> for Person {
    fn from(r: Ranger) -> Self {
        Self::Ranger(r)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use parkwatch_core::FixedClock;
    use parkwatch_types::ParkId;

    use super::*;

    fn clock() -> FixedClock {
        FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn profile_is_stamped_from_clock() {
        let clock = clock();
        let profile = UserProfile::new("Ada", "ada@example.org", "555-0100", &clock);
        assert_eq!(profile.created_at(), clock.now());
        assert_eq!(profile.name, "Ada");
    }

    #[test]
    fn person_exposes_shared_fields_for_both_variants() {
        let clock = clock();
        let people: Vec<Person> = vec![
            Visitor::new("Ada", "ada@example.org", "555-0100", 34, &clock).into(),
            Ranger::new("A. Lee", "lee@parks.gov", "555-0199", ParkId::new(), "R1", &clock)
                .into(),
        ];

        let names: Vec<&str> = people.iter().map(User::name).collect();
        assert_eq!(names, vec!["Ada", "A. Lee"]);
        assert!(people.iter().all(|p| p.created_at() == clock.now()));
        assert!(matches!(people.first(), Some(Person::Visitor(_))));
        assert!(matches!(people.get(1), Some(Person::Ranger(r)) if r.employee_id() == "R1"));
    }
}
