//! Request-scoped services.

pub mod generate;
