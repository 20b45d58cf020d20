//! # Ports Layer
//!
//! Hexagonal architecture boundaries. Inbound ports are the API the
//! application layer exposes; outbound ports are the dependencies the
//! domain requires from the outside world.

pub mod inbound;
pub mod outbound;
