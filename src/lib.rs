//! Airport registry: hypermedia CRUD over airports with terminal references.

pub mod config;
pub mod error;
pub mod handlers;
pub mod links;
pub mod mapper;
pub mod model;
pub mod representation;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod store_pg;

pub use config::Settings;
pub use error::AppError;
pub use links::LinkBuilder;
pub use model::{Airport, Terminal};
pub use representation::{AirportRepresentation, Href, Linked};
pub use routes::{airport_routes, common_routes};
pub use service::AirportService;
pub use state::AppState;
pub use store::{AirportStore, MemoryAirportStore, MemoryTerminalStore, TerminalStore};
pub use store_pg::{ensure_tables, PgAirportStore, PgTerminalStore};
