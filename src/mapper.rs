//! Pure translation between the persisted airport and its wire shape.
//! Structural only: the terminal id is copied verbatim, never resolved.
//! Reference validation belongs to the service.

use crate::model::Airport;
use crate::representation::AirportRepresentation;

pub fn to_representation(airport: &Airport) -> AirportRepresentation {
    AirportRepresentation {
        code: airport.code.clone(),
        name: airport.name.clone(),
        city: airport.city.clone(),
        country: airport.country.clone(),
        terminal_id: airport.terminal_id,
    }
}

pub fn to_entity(repr: &AirportRepresentation) -> Airport {
    Airport {
        code: repr.code.clone(),
        name: repr.name.clone(),
        city: repr.city.clone(),
        country: repr.country.clone(),
        terminal_id: repr.terminal_id,
    }
}
