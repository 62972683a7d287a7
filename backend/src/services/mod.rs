//! Business logic services
//!
//! Services encapsulate business logic and sit between the routes and
//! the shared calculator.

pub mod calculator;

pub use calculator::CalculatorService;
