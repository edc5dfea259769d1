//! Entity identifiers and route-parameter parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier of a persisted entity.
///
/// `0` is the "new entity" sentinel; persisted entities always carry a
/// positive id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Id of an entity that has not been created yet.
    pub const NEW: EntityId = EntityId(0);

    /// Wraps a raw integer id.
    ///
    /// # Examples
    ///
    /// ```
    /// use clubadmin_core::EntityId;
    ///
    /// let id = EntityId::new(7);
    /// assert_eq!(id.get(), 7);
    /// assert!(id.is_persisted());
    /// ```
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` for ids the backend can have issued (strictly positive).
    pub const fn is_persisted(self) -> bool {
        self.0 > 0
    }

    /// Resolves the id carried by a route such as `/club/edit/:id`.
    ///
    /// The parameter must be present, must not be the `"0"` sentinel and must
    /// read as a positive integral number. Surrounding whitespace is ignored
    /// and integral decimals such as `"5.0"` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use clubadmin_core::{EntityId, RouteIdError};
    ///
    /// assert_eq!(EntityId::from_route_param(Some("12")), Ok(EntityId::new(12)));
    /// assert_eq!(EntityId::from_route_param(Some("0")), Err(RouteIdError::Sentinel));
    /// assert!(EntityId::from_route_param(Some("abc")).is_err());
    /// ```
    pub fn from_route_param(param: Option<&str>) -> Result<Self, RouteIdError> {
        let raw = match param {
            None => return Err(RouteIdError::Missing),
            Some("") => return Err(RouteIdError::Missing),
            Some("0") => return Err(RouteIdError::Sentinel),
            Some(raw) => raw,
        };

        let trimmed = raw.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(_) => parse_integral(trimmed)
                .ok_or_else(|| RouteIdError::Malformed(raw.to_string()))?,
        };

        if value <= 0 {
            return Err(RouteIdError::NotPositive(value));
        }
        Ok(Self(value))
    }
}

fn parse_integral(text: &str) -> Option<i64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Why a route parameter could not be turned into an [`EntityId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteIdError {
    /// No `id` parameter in the route.
    #[error("missing id parameter")]
    Missing,

    /// The parameter is the `"0"` new-entity sentinel.
    #[error("id parameter is the new-entity sentinel")]
    Sentinel,

    /// The parameter is not numeric.
    #[error("id parameter '{0}' is not a number")]
    Malformed(String),

    /// The parameter is numeric but cannot name a persisted entity.
    #[error("id parameter {0} is not positive")]
    NotPositive(i64),
}

impl RouteIdError {
    /// Returns `true` when the parameter was absent or the sentinel, as opposed
    /// to present but unreadable.
    pub fn is_absent(&self) -> bool {
        matches!(self, RouteIdError::Missing | RouteIdError::Sentinel)
    }
}
