//! Domain layer: payments, providers, preference rules, the decider chain and
//! the ports the application talks to.

pub mod decider;
pub mod payment;
pub mod ports;
pub mod provider;
pub mod rule;
