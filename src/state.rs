//! Shared state for airport routes.

use crate::service::AirportService;

#[derive(Clone)]
pub struct AppState {
    pub service: AirportService,
}
