#![allow(unused)]
//! Shared test utilities for trendseed integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The stubs are deterministic: fixed suggestion sets,
//! fixed trend weeks, and seeded RNGs for synthesized metrics.

pub mod stubs;

pub use stubs::*;
