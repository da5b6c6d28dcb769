//! PostgreSQL-backed stores. Statements are fixed per operation and logged at
//! debug; `ensure_tables` bootstraps the schema idempotently.
//!
//! `airports.terminal_id` carries no database-level foreign key: the service
//! validates the reference on update only, and create must stay free to save
//! an unresolved reference.

use crate::error::AppError;
use crate::model::{Airport, Terminal};
use crate::store::{AirportStore, TerminalStore};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// Create the terminals and airports tables if absent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS terminals (
            id BIGINT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS airports (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            country TEXT NOT NULL,
            terminal_id BIGINT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgAirportStore {
    pool: PgPool,
}

impl PgAirportStore {
    pub fn new(pool: PgPool) -> Self {
        PgAirportStore { pool }
    }
}

fn airport_from_row(row: &sqlx::postgres::PgRow) -> Result<Airport, AppError> {
    Ok(Airport {
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        country: row.try_get("country")?,
        terminal_id: row.try_get("terminal_id")?,
    })
}

#[async_trait]
impl AirportStore for PgAirportStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, AppError> {
        let sql = "SELECT code, name, city, country, terminal_id FROM airports WHERE code = $1";
        tracing::debug!(sql, code, "query");
        let row = sqlx::query(sql).bind(code).fetch_optional(&self.pool).await?;
        row.as_ref().map(airport_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        let sql = "SELECT code, name, city, country, terminal_id FROM airports ORDER BY code";
        tracing::debug!(sql, "query");
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        rows.iter().map(airport_from_row).collect()
    }

    async fn save(&self, airport: Airport) -> Result<Airport, AppError> {
        let sql = "INSERT INTO airports (code, name, city, country, terminal_id) \
                   VALUES ($1, $2, $3, $4, $5) \
                   ON CONFLICT (code) DO UPDATE SET \
                   name = EXCLUDED.name, city = EXCLUDED.city, \
                   country = EXCLUDED.country, terminal_id = EXCLUDED.terminal_id";
        tracing::debug!(sql, code = %airport.code, "query");
        sqlx::query(sql)
            .bind(&airport.code)
            .bind(&airport.name)
            .bind(&airport.city)
            .bind(&airport.country)
            .bind(airport.terminal_id)
            .execute(&self.pool)
            .await?;
        Ok(airport)
    }

    async fn delete(&self, airport: &Airport) -> Result<(), AppError> {
        let sql = "DELETE FROM airports WHERE code = $1";
        tracing::debug!(sql, code = %airport.code, "query");
        sqlx::query(sql).bind(&airport.code).execute(&self.pool).await?;
        Ok(())
    }
}

pub struct PgTerminalStore {
    pool: PgPool,
}

impl PgTerminalStore {
    pub fn new(pool: PgPool) -> Self {
        PgTerminalStore { pool }
    }
}

#[async_trait]
impl TerminalStore for PgTerminalStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Terminal>, AppError> {
        let sql = "SELECT id, name FROM terminals WHERE id = $1";
        tracing::debug!(sql, id, "query");
        let row = sqlx::query(sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| {
            Ok(Terminal {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
            })
        })
        .transpose()
    }

    async fn save(&self, terminal: Terminal) -> Result<Terminal, AppError> {
        let sql = "INSERT INTO terminals (id, name) VALUES ($1, $2) \
                   ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name";
        tracing::debug!(sql, id = terminal.id, "query");
        sqlx::query(sql)
            .bind(terminal.id)
            .bind(&terminal.name)
            .execute(&self.pool)
            .await?;
        Ok(terminal)
    }
}
