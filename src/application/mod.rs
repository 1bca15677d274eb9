//! Application layer orchestrating a card authorization.
//!
//! This module defines the `PaymentAuthorizer`, which runs the validation
//! pipeline, calls the acquiring bank through its port and records the outcome.

pub mod authorizer;
