//! Domain layer: the payment types, the rules that guard them, and the ports
//! through which the application reaches storage and the acquiring bank.
//!
//! Nothing in here performs I/O.

pub mod currency;
pub mod gateway;
pub mod payment;
pub mod ports;
pub mod validation;
