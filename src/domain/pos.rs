//! Point of sale domain model
//!
//! This module defines the `Pos` record together with its category
//! ([`PosType`]) and campus ([`CampusType`]) enumerations.

use super::ids::PosId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a point of sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafe,
    Bakery,
    VendingMachine,
    Cafeteria,
}

impl PosType {
    /// Returns the stored representation (e.g. `VENDING_MACHINE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PosType::Cafe => "CAFE",
            PosType::Bakery => "BAKERY",
            PosType::VendingMachine => "VENDING_MACHINE",
            PosType::Cafeteria => "CAFETERIA",
        }
    }
}

impl fmt::Display for PosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAFE" => Ok(PosType::Cafe),
            "BAKERY" => Ok(PosType::Bakery),
            "VENDING_MACHINE" => Ok(PosType::VendingMachine),
            "CAFETERIA" => Ok(PosType::Cafeteria),
            other => Err(format!("Unknown POS type: {other}")),
        }
    }
}

/// Campus a point of sale belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusType {
    Altstadt,
    Bergheim,
    /// Im Neuenheimer Feld
    Inf,
}

impl CampusType {
    /// Returns the stored representation (e.g. `ALTSTADT`)
    pub fn as_str(&self) -> &'static str {
        match self {
            CampusType::Altstadt => "ALTSTADT",
            CampusType::Bergheim => "BERGHEIM",
            CampusType::Inf => "INF",
        }
    }
}

impl fmt::Display for CampusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALTSTADT" => Ok(CampusType::Altstadt),
            "BERGHEIM" => Ok(CampusType::Bergheim),
            "INF" => Ok(CampusType::Inf),
            other => Err(format!("Unknown campus: {other}")),
        }
    }
}

/// A point of sale
///
/// `id`, `created_at` and `updated_at` are owned by the persistence layer and
/// stay `None` until the record has been saved.
///
/// # Examples
///
/// ```
/// use campus_coffee::domain::{CampusType, Pos, PosType};
///
/// let pos = Pos::builder()
///     .name("Schmelzpunkt")
///     .description("Cafe")
///     .pos_type(PosType::Cafe)
///     .campus(Some(CampusType::Altstadt))
///     .street("Hauptstraße")
///     .house_number("90")
///     .postal_code(69117)
///     .city("Heidelberg")
///     .build()
///     .unwrap();
/// assert!(pos.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    /// Persistent identity, assigned on creation
    pub id: Option<PosId>,

    /// Creation timestamp, assigned on creation
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,

    /// Display name, unique across all POS
    pub name: String,

    /// Human-readable summary
    pub description: String,

    /// Category
    #[serde(rename = "type")]
    pub pos_type: PosType,

    /// Campus, unset when the postal code maps to none
    pub campus: Option<CampusType>,

    pub street: String,

    pub house_number: String,

    pub postal_code: i32,

    pub city: String,
}

impl Pos {
    /// Creates a new builder for constructing a Pos
    pub fn builder() -> PosBuilder {
        PosBuilder::default()
    }
}

/// Builder for constructing Pos instances
#[derive(Debug, Default)]
pub struct PosBuilder {
    id: Option<PosId>,
    name: Option<String>,
    description: Option<String>,
    pos_type: Option<PosType>,
    campus: Option<CampusType>,
    street: Option<String>,
    house_number: Option<String>,
    postal_code: Option<i32>,
    city: Option<String>,
}

impl PosBuilder {
    /// Creates a new PosBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID of an existing POS (for updates)
    pub fn id(mut self, id: PosId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn pos_type(mut self, pos_type: PosType) -> Self {
        self.pos_type = Some(pos_type);
        self
    }

    /// Sets the campus; `None` leaves it unset
    pub fn campus(mut self, campus: Option<CampusType>) -> Self {
        self.campus = campus;
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn house_number(mut self, house_number: impl Into<String>) -> Self {
        self.house_number = Some(house_number.into());
        self
    }

    pub fn postal_code(mut self, postal_code: i32) -> Self {
        self.postal_code = Some(postal_code);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Builds the Pos
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<Pos, String> {
        Ok(Pos {
            id: self.id,
            created_at: None,
            updated_at: None,
            name: self.name.ok_or("name is required")?,
            description: self.description.ok_or("description is required")?,
            pos_type: self.pos_type.ok_or("pos_type is required")?,
            campus: self.campus,
            street: self.street.ok_or("street is required")?,
            house_number: self.house_number.ok_or("house_number is required")?,
            postal_code: self.postal_code.ok_or("postal_code is required")?,
            city: self.city.ok_or("city is required")?,
        })
    }
}
