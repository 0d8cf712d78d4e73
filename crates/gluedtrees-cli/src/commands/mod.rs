//! CLI command implementations.

pub mod oracle;
pub mod pauli;
