//! # Operation Dispatch
//!
//! Routes named operations onto the ledger service over a closed
//! operation set.
//!
//! Queries and invocations are parsed into tagged enums before anything
//! executes: a mutating operation outside the enumerated set fails with
//! `UnknownOperation`, and the only open-ended surface is the read-only
//! raw key lookup used for diagnostics.

use serde::Serialize;

use crate::domain::entities::IssueRequest;
use crate::domain::errors::LedgerError;
use crate::ports::inbound::{AccountApi, FootageApi};
use crate::ports::outbound::{LedgerStore, RecordCodec};
use crate::service::LedgerService;

/// Read-only operations.
///
/// `Raw` is the diagnostics fallback: a plain key read returning the
/// stored bytes unprocessed (useful for keys outside the record model,
/// e.g. the index key itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerQuery {
    AllFootage,
    FootageById(String),
    AccountById(String),
    Raw(String),
}

impl LedgerQuery {
    /// Map an operation name and arguments onto the closed query set.
    ///
    /// Unrecognized names fall back to the raw lookup and require
    /// exactly one key argument; the fallback can never mutate.
    pub fn parse(operation: &str, args: &[String]) -> Result<Self, LedgerError> {
        match operation {
            "getAllFootage" => {
                expect_args(operation, args, 0)?;
                Ok(LedgerQuery::AllFootage)
            }
            "getFootage" => {
                expect_args(operation, args, 1)?;
                Ok(LedgerQuery::FootageById(args[0].clone()))
            }
            "getAccount" => {
                expect_args(operation, args, 1)?;
                Ok(LedgerQuery::AccountById(args[0].clone()))
            }
            _ => {
                expect_args("raw lookup", args, 1)?;
                Ok(LedgerQuery::Raw(args[0].clone()))
            }
        }
    }
}

/// Mutating operations. Unknown names fail: mutation is never guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerInvocation {
    CreateAccount { username: String, fullname: String },
    IssueFootage(IssueRequest),
}

impl LedgerInvocation {
    /// Map an operation name and arguments onto the closed mutating set.
    pub fn parse(operation: &str, args: &[String]) -> Result<Self, LedgerError> {
        match operation {
            "createAccount" => {
                expect_args(operation, args, 2)?;
                Ok(LedgerInvocation::CreateAccount {
                    username: args[0].clone(),
                    fullname: args[1].clone(),
                })
            }
            "issueFootage" => {
                expect_args(operation, args, 1)?;
                let request: IssueRequest =
                    serde_json::from_str(&args[0]).map_err(|e| LedgerError::MalformedRequest {
                        reason: format!("issueFootage body: {}", e),
                    })?;
                Ok(LedgerInvocation::IssueFootage(request))
            }
            _ => Err(LedgerError::UnknownOperation {
                operation: operation.to_string(),
            }),
        }
    }
}

fn expect_args(operation: &str, args: &[String], count: usize) -> Result<(), LedgerError> {
    if args.len() != count {
        return Err(LedgerError::MalformedRequest {
            reason: format!(
                "{} expects {} argument(s), got {}",
                operation,
                count,
                args.len()
            ),
        });
    }
    Ok(())
}

/// Stateless per-call router wrapping a `LedgerService`.
pub struct LedgerDispatcher<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    service: LedgerService<S, C>,
}

impl<S, C> LedgerDispatcher<S, C>
where
    S: LedgerStore,
    C: RecordCodec,
{
    /// Wrap a ledger service.
    pub fn new(service: LedgerService<S, C>) -> Self {
        Self { service }
    }

    /// The wrapped service.
    pub fn service(&self) -> &LedgerService<S, C> {
        &self.service
    }

    /// Mutable access to the wrapped service (e.g. for `bootstrap`).
    pub fn service_mut(&mut self) -> &mut LedgerService<S, C> {
        &mut self.service
    }

    /// Execute a read operation.
    ///
    /// Results are JSON-encoded, except `Raw`, which returns the stored
    /// bytes unprocessed.
    pub fn query(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        tracing::debug!("[ledger] query {}", operation);
        match LedgerQuery::parse(operation, args)? {
            LedgerQuery::AllFootage => to_json(&self.service.all_footage()?),
            LedgerQuery::FootageById(id) => to_json(&self.service.get_footage(&id)?),
            LedgerQuery::AccountById(id) => to_json(&self.service.get_account(&id)?),
            LedgerQuery::Raw(key) => self.service.read_raw(&key),
        }
    }

    /// Execute a mutating operation.
    pub fn invoke(&mut self, operation: &str, args: &[String]) -> Result<(), LedgerError> {
        tracing::debug!("[ledger] invoke {}", operation);
        match LedgerInvocation::parse(operation, args)? {
            LedgerInvocation::CreateAccount { username, fullname } => {
                self.service.create_account(&username, &fullname)
            }
            LedgerInvocation::IssueFootage(request) => self.service.issue(request),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(value).map_err(|e| LedgerError::Serialization {
        message: e.to_string(),
    })
}
