use anyhow::{Context as _, Result};
use sqlx::{Sqlite, SqlitePool, Transaction, sqlite::SqlitePoolOptions};
use tracing::debug;

use crate::sensor::{Controller, Reading, SensorRange};
use crate::store::{ReadingSink, ReferenceStore};

/// Opens the single connection the whole run works on.
pub async fn new_pool(database_url: &str) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
        .with_context(|| format!("failed to open database: {database_url}"))
}

#[derive(Debug, Clone)]
pub struct SqliteReferenceStore {
    pool: SqlitePool,
}

impl SqliteReferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReferenceStore for SqliteReferenceStore {
    async fn load_controllers(&self) -> Result<Vec<Controller>> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT UUID, PLANT_GROUP FROM CONTROLLER")
                .fetch_all(&self.pool)
                .await
                .context("failed to execute controller query")?;

        Ok(rows
            .into_iter()
            .map(|(id, plant_group)| Controller { id, plant_group })
            .collect())
    }

    async fn load_sensor_ranges(&self, plant_group: i64) -> Result<Vec<SensorRange>> {
        let rows: Vec<(String, f64, f64)> = sqlx::query_as(
            r#"
            SELECT SENSOR, CAST(MIN AS REAL), CAST(MAX AS REAL)
            FROM SENSOR_RANGE
            WHERE PLANT_GROUP = ?
            "#,
        )
        .bind(plant_group)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("failed to execute sensor range query for plant group {plant_group}"))?;

        rows.into_iter()
            .map(|(sensor, min, max)| {
                SensorRange::new(sensor, min, max)
                    .with_context(|| format!("invalid sensor range in plant group {plant_group}"))
            })
            .collect()
    }
}

/// Writes readings into `SENSOR_DATA`.
///
/// A transaction is opened by the first `append` after a commit. Dropping the
/// sink with staged readings rolls them back.
pub struct SqliteReadingSink {
    pool: SqlitePool,
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteReadingSink {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, tx: None }
    }
}

impl ReadingSink for SqliteReadingSink {
    async fn append(&mut self, reading: &Reading) -> Result<()> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await.context("failed to begin transaction")?,
        };
        let tx = self.tx.insert(tx);

        sqlx::query(
            "INSERT INTO SENSOR_DATA (CONTROLLER, SENSOR, VALUE, TIMESTAMP) VALUES (?, ?, ?, ?)",
        )
        .bind(reading.controller.as_str())
        .bind(reading.sensor.as_str())
        .bind(reading.value)
        .bind(reading.timestamp_iso8601())
        .execute(&mut **tx)
        .await
        .context("failed to execute insert query")?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let Some(tx) = self.tx.take() else {
            return Ok(());
        };

        tx.commit().await.context("failed to commit transaction")?;
        debug!("committed staged readings");

        Ok(())
    }
}
