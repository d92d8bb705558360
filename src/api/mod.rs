//! API layer: handlers, DTOs, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
