//! Input and output adapters.

pub mod csv;
