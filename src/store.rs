//! Persistence seams. Each entity type gets its own store trait so the
//! service can be exercised against the in-memory implementations; the
//! PostgreSQL implementations live in `store_pg`.

use crate::error::AppError;
use crate::model::{Airport, Terminal};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Airport persistence. `save` is insert-or-replace keyed by code. Absence is
/// reported as `None`, not as an error: the caller owns the not-found
/// taxonomy.
#[async_trait]
pub trait AirportStore: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, AppError>;
    async fn find_all(&self) -> Result<Vec<Airport>, AppError>;
    async fn save(&self, airport: Airport) -> Result<Airport, AppError>;
    async fn delete(&self, airport: &Airport) -> Result<(), AppError>;
}

/// Terminal persistence. This core only reads terminals to validate airport
/// references; `save` exists for whatever owns terminal lifecycle (and for
/// seeding in tests).
#[async_trait]
pub trait TerminalStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Terminal>, AppError>;
    async fn save(&self, terminal: Terminal) -> Result<Terminal, AppError>;
}

/// In-memory airport store over an ordered map, so `find_all` iteration
/// order is stable across calls.
#[derive(Default)]
pub struct MemoryAirportStore {
    rows: RwLock<BTreeMap<String, Airport>>,
}

impl MemoryAirportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AirportStore for MemoryAirportStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, AppError> {
        Ok(self.rows.read().await.get(code).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn save(&self, airport: Airport) -> Result<Airport, AppError> {
        self.rows
            .write()
            .await
            .insert(airport.code.clone(), airport.clone());
        Ok(airport)
    }

    async fn delete(&self, airport: &Airport) -> Result<(), AppError> {
        self.rows.write().await.remove(&airport.code);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTerminalStore {
    rows: RwLock<BTreeMap<i64, Terminal>>,
}

impl MemoryTerminalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TerminalStore for MemoryTerminalStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Terminal>, AppError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, terminal: Terminal) -> Result<Terminal, AppError> {
        self.rows
            .write()
            .await
            .insert(terminal.id, terminal.clone());
        Ok(terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(code: &str) -> Airport {
        Airport {
            code: code.into(),
            name: format!("{code} International"),
            city: "Testville".into(),
            country: "Testland".into(),
            terminal_id: None,
        }
    }

    #[tokio::test]
    async fn save_is_upsert_on_code() {
        let store = MemoryAirportStore::new();
        store.save(airport("JFK")).await.unwrap();
        let mut renamed = airport("JFK");
        renamed.name = "Idlewild".into();
        store.save(renamed).await.unwrap();

        let found = store.find_by_code("JFK").await.unwrap().unwrap();
        assert_eq!(found.name, "Idlewild");
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = MemoryAirportStore::new();
        let saved = store.save(airport("LHR")).await.unwrap();
        store.delete(&saved).await.unwrap();
        assert!(store.find_by_code("LHR").await.unwrap().is_none());
    }
}
