//! PostgreSQL adapter implementing the POS storage trait

use crate::adapters::database::traits::PosDataService;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{PostgreSQLPos, POS_COLUMNS};
use crate::domain::{CampusCoffeeError, Pos, PosId, Result};
use async_trait::async_trait;
use tokio_postgres::error::SqlState;
use tokio_postgres::Row;

/// PostgreSQL implementation of [`PosDataService`]
pub struct PostgreSQLAdapter {
    client: PostgreSQLClient,
}

impl PostgreSQLAdapter {
    pub fn new(client: PostgreSQLClient) -> Self {
        Self { client }
    }

    async fn insert(&self, pos: &Pos) -> Result<Option<Row>> {
        let statement = format!(
            "INSERT INTO pos (name, description, pos_type, campus, street, house_number, \
             postal_code, city, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW()) \
             RETURNING {POS_COLUMNS}"
        );
        let pos_type = pos.pos_type.as_str();
        let campus = pos.campus.map(|c| c.as_str());

        let conn = self.client.get_connection().await?;
        conn.query_opt(
            &statement,
            &[
                &pos.name,
                &pos.description,
                &pos_type,
                &campus,
                &pos.street,
                &pos.house_number,
                &pos.postal_code,
                &pos.city,
            ],
        )
        .await
        .map_err(|e| write_error(e, &pos.name))
    }

    async fn update(&self, id: PosId, pos: &Pos) -> Result<Option<Row>> {
        let statement = format!(
            "UPDATE pos SET name = $2, description = $3, pos_type = $4, campus = $5, \
             street = $6, house_number = $7, postal_code = $8, city = $9, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {POS_COLUMNS}"
        );
        let id = id.value();
        let pos_type = pos.pos_type.as_str();
        let campus = pos.campus.map(|c| c.as_str());

        let conn = self.client.get_connection().await?;
        conn.query_opt(
            &statement,
            &[
                &id,
                &pos.name,
                &pos.description,
                &pos_type,
                &campus,
                &pos.street,
                &pos.house_number,
                &pos.postal_code,
                &pos.city,
            ],
        )
        .await
        .map_err(|e| write_error(e, &pos.name))
    }
}

/// Maps a write failure, turning a unique violation into `DuplicateName`
fn write_error(e: tokio_postgres::Error, name: &str) -> CampusCoffeeError {
    if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
        CampusCoffeeError::DuplicateName(name.to_string())
    } else {
        CampusCoffeeError::Database(format!("Failed to write POS '{name}': {e}"))
    }
}

#[async_trait]
impl PosDataService for PostgreSQLAdapter {
    async fn clear(&self) -> Result<()> {
        let removed = self.client.execute("DELETE FROM pos", &[]).await?;
        tracing::debug!(removed, "Cleared PostgreSQL POS table");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Pos>> {
        let query = format!("SELECT {POS_COLUMNS} FROM pos ORDER BY id");
        let rows = self.client.query(&query, &[]).await?;

        rows.iter()
            .map(|row| PostgreSQLPos::from_row(row)?.into_domain())
            .collect()
    }

    async fn get_by_id(&self, id: PosId) -> Result<Pos> {
        let query = format!("SELECT {POS_COLUMNS} FROM pos WHERE id = $1");
        let rows = self.client.query(&query, &[&id.value()]).await?;

        match rows.first() {
            Some(row) => PostgreSQLPos::from_row(row)?.into_domain(),
            None => Err(CampusCoffeeError::PosNotFound(id)),
        }
    }

    async fn upsert(&self, pos: Pos) -> Result<Pos> {
        let row = match pos.id {
            Some(id) => self
                .update(id, &pos)
                .await?
                .ok_or(CampusCoffeeError::PosNotFound(id))?,
            None => self.insert(&pos).await?.ok_or_else(|| {
                CampusCoffeeError::Database("INSERT returned no row".to_string())
            })?,
        };

        let stored = PostgreSQLPos::from_row(&row)?.into_domain()?;
        if let Some(id) = stored.id {
            tracing::debug!(pos_id = %id, name = %stored.name, "Stored POS in PostgreSQL");
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, PostgreSQLConfig};
    use crate::domain::{PosBuilder, PosType};

    fn unreachable_adapter() -> PostgreSQLAdapter {
        let client = PostgreSQLClient::new(PostgreSQLConfig {
            connection_string: secret_string("postgresql://nobody@127.0.0.1:1/none".to_string()),
            max_connections: 2,
            connection_timeout_seconds: 2,
            statement_timeout_seconds: 5,
        })
        .unwrap();
        PostgreSQLAdapter::new(client)
    }

    #[tokio::test]
    async fn test_unreachable_database_is_database_error() {
        let adapter = unreachable_adapter();

        assert!(matches!(
            adapter.get_all().await,
            Err(CampusCoffeeError::Database(_))
        ));
        assert!(matches!(
            adapter.get_by_id(PosId::new(1)).await,
            Err(CampusCoffeeError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_upsert_against_unreachable_database_is_not_a_conflict() {
        let adapter = unreachable_adapter();
        let pos = PosBuilder::new()
            .name("Café Botanik")
            .description("Cafe")
            .pos_type(PosType::Cafe)
            .street("Im Neuenheimer Feld")
            .house_number("304")
            .postal_code(69120)
            .city("Heidelberg")
            .build()
            .unwrap();

        let result = adapter.upsert(pos).await;
        assert!(matches!(result, Err(CampusCoffeeError::Database(_))));
    }
}
