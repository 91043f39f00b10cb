//! Application layer orchestrating provider selection.
//!
//! `ProcessPaymentUseCase` fetches a payment, asks the decider chain for a
//! provider and delegates processing to the client the factory returns for it.

pub mod selection;
pub mod wiring;
