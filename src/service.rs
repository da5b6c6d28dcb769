//! Airport resource service: store lookups, referential-integrity checks,
//! mapping, and link attachment for every operation.

use crate::error::AppError;
use crate::links::LinkBuilder;
use crate::mapper;
use crate::representation::{AirportRepresentation, Linked};
use crate::store::{AirportStore, TerminalStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AirportService {
    airports: Arc<dyn AirportStore>,
    terminals: Arc<dyn TerminalStore>,
    links: LinkBuilder,
}

impl AirportService {
    pub fn new(
        airports: Arc<dyn AirportStore>,
        terminals: Arc<dyn TerminalStore>,
        links: LinkBuilder,
    ) -> Self {
        AirportService {
            airports,
            terminals,
            links,
        }
    }

    /// All airports with self and collection links, in store-iteration order.
    pub async fn list(&self) -> Result<Vec<Linked<AirportRepresentation>>, AppError> {
        let airports = self.airports.find_all().await?;
        Ok(airports
            .iter()
            .map(|a| self.linked_full(mapper::to_representation(a)))
            .collect())
    }

    /// One airport by code with self and collection links. Pure read.
    pub async fn get(&self, code: &str) -> Result<Linked<AirportRepresentation>, AppError> {
        let airport = self
            .airports
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("airport", code))?;
        Ok(self.linked_full(mapper::to_representation(&airport)))
    }

    /// Save a new airport as-is. `save` is an upsert, so re-posting a code
    /// overwrites. The terminal reference is not resolved here; only update
    /// enforces it.
    pub async fn create(
        &self,
        repr: &AirportRepresentation,
    ) -> Result<Linked<AirportRepresentation>, AppError> {
        if repr.code.is_empty() {
            return Err(AppError::BadRequest("code must not be empty".into()));
        }
        let saved = self.airports.save(mapper::to_entity(repr)).await?;
        tracing::info!(code = %saved.code, "airport created");
        Ok(self.linked_self(mapper::to_representation(&saved)))
    }

    /// Reassign an airport's terminal. Airport existence is checked before
    /// the terminal's, and nothing is written unless both exist. Incoming
    /// fields other than the terminal id are not applied.
    pub async fn update(
        &self,
        code: &str,
        repr: &AirportRepresentation,
    ) -> Result<Linked<AirportRepresentation>, AppError> {
        let mut airport = self
            .airports
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("airport", code))?;
        let terminal_id = repr
            .terminal_id
            .ok_or_else(|| AppError::BadRequest("terminalId is required".into()))?;
        let terminal = self
            .terminals
            .find_by_id(terminal_id)
            .await?
            .ok_or_else(|| AppError::not_found("terminal", terminal_id))?;

        airport.terminal_id = Some(terminal.id);
        let saved = self.airports.save(airport).await?;
        tracing::info!(code = %saved.code, terminal_id, "terminal reassigned");
        Ok(self.linked_self(mapper::to_representation(&saved)))
    }

    /// Remove an airport. Deleting an absent code is an error, not a no-op.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let airport = self
            .airports
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("airport", code))?;
        self.airports.delete(&airport).await?;
        tracing::info!(code, "airport deleted");
        Ok(())
    }

    fn linked_self(&self, repr: AirportRepresentation) -> Linked<AirportRepresentation> {
        let self_href = self.links.airport(&repr.code);
        Linked::new(repr).with_link("self", self_href)
    }

    fn linked_full(&self, repr: AirportRepresentation) -> Linked<AirportRepresentation> {
        self.linked_self(repr)
            .with_link("airports", self.links.airports())
    }
}
