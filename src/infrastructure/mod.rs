//! Adapters behind the domain ports: outcome storage and the acquiring bank.

pub mod bank_client;
pub mod in_memory;
pub mod simulated_bank;
