//! # Footage-Ledger Test Suite
//!
//! Unified test crate exercising the public crate surface.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_flow.rs       # End-to-end account/issuance scenarios
//!     ├── fault_injection.rs   # Corruption and divergence faults
//!     └── persistence.rs       # File-backed store round trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ledger-tests
//!
//! # By category
//! cargo test -p ledger-tests integration::
//! ```

pub mod integration;
