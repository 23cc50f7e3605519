//! Repository layer — case-scoped database operations.

mod case;

pub use case::*;
