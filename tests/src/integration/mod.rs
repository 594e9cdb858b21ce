//! Cross-module integration suites.

pub mod fault_injection;
pub mod ledger_flow;
