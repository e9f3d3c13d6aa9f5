//! PostgreSQL row models
//!
//! Maps rows of the `pos` table to and from the domain [`Pos`].

use crate::domain::{CampusCoffeeError, CampusType, Pos, PosId, PosType, Result};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use tokio_postgres::Row;

/// Column list shared by every query that returns whole records
pub const POS_COLUMNS: &str = "id, created_at, updated_at, name, description, pos_type, \
     campus, street, house_number, postal_code, city";

/// A row of the `pos` table
#[derive(Debug, Clone)]
pub struct PostgreSQLPos {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub pos_type: String,
    pub campus: Option<String>,
    pub street: String,
    pub house_number: String,
    pub postal_code: i32,
    pub city: String,
}

impl PostgreSQLPos {
    /// Read a row selected with [`POS_COLUMNS`]
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: column(row, "id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            pos_type: column(row, "pos_type")?,
            campus: column(row, "campus")?,
            street: column(row, "street")?,
            house_number: column(row, "house_number")?,
            postal_code: column(row, "postal_code")?,
            city: column(row, "city")?,
        })
    }

    /// Convert to the domain model
    ///
    /// # Errors
    ///
    /// Returns a database error if a stored enum value is not recognized.
    pub fn into_domain(self) -> Result<Pos> {
        let pos_type = PosType::from_str(&self.pos_type).map_err(CampusCoffeeError::Database)?;
        let campus = self
            .campus
            .as_deref()
            .map(CampusType::from_str)
            .transpose()
            .map_err(CampusCoffeeError::Database)?;

        Ok(Pos {
            id: Some(PosId::new(self.id)),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            name: self.name,
            description: self.description,
            pos_type,
            campus,
            street: self.street,
            house_number: self.house_number,
            postal_code: self.postal_code,
            city: self.city,
        })
    }
}

fn column<'a, T>(row: &'a Row, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name).map_err(|e| {
        CampusCoffeeError::Database(format!("Failed to read column '{name}': {e}"))
    })
}
