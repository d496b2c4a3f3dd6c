//! Action Resolution Test Suite
//!
//! Tests organized by functionality:
//! - scenarios: Worked examples for single runs and selections
//! - properties: Invariants that must hold for every run (proptest)
//! - union: Multi-run selection semantics
//! - boundary: Action-name validation and malformed runs
//! - policy: Resolution through a configured permission policy

mod common;

mod boundary;
mod policy;
mod properties;
mod scenarios;
