//! Contract Gateway
//!
//! Maps the todo operations onto the deployed contract. Reads go
//! through `eth_call` on either binding; writes need the signing
//! binding and return a pending transaction the caller must await.

use alloy_primitives::{B256, U256};
use alloy_sol_types::SolCall;

use crate::chain::abi;
use crate::chain::provider;
use crate::chain::session::Signer;
use crate::config;
use crate::error::WalletError;
use crate::models::{Session, Todo};

/// How often to poll for a transaction receipt.
const RECEIPT_POLL_MS: u32 = 4_000;

/// Marker for a read-only binding derived from an established session.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnly;

/// Connections the gateway can read through.
pub trait Connection {}

impl Connection for ReadOnly {}
impl Connection for Signer {}

/// The Todo contract bound to a connection.
pub struct TodoContract<C> {
    conn: C,
}

impl TodoContract<ReadOnly> {
    /// Bind with read-only access. Takes an established session so no
    /// read ever happens against an unverified network.
    pub fn read_only(_session: &Session) -> Self {
        TodoContract { conn: ReadOnly }
    }
}

impl TodoContract<Signer> {
    /// Bind with a write-capable signing handle.
    pub fn signing(signer: Signer) -> Self {
        TodoContract { conn: signer }
    }

    /// Submit a new todo. No optimistic update happens anywhere: the
    /// list is only refreshed from chain after confirmation.
    pub async fn add_todo(&self, title: &str, description: &str) -> Result<PendingTx, WalletError> {
        let data = abi::addTodoCall {
            _title: title.to_owned(),
            _description: description.to_owned(),
        }
        .abi_encode();
        self.send(data).await
    }

    /// Flip the completion flag of the todo at `index`.
    pub async fn update_todo_status(&self, index: usize) -> Result<PendingTx, WalletError> {
        let data = abi::updateTodoStatusCall {
            _todoIndex: U256::from(index),
        }
        .abi_encode();
        self.send(data).await
    }

    /// Remove the todo at `index`.
    pub async fn delete_todo(&self, index: usize) -> Result<PendingTx, WalletError> {
        let data = abi::deleteTodoCall {
            _todoIndex: U256::from(index),
        }
        .abi_encode();
        self.send(data).await
    }

    async fn send(&self, data: Vec<u8>) -> Result<PendingTx, WalletError> {
        let hash =
            provider::send_transaction(self.conn.address(), config::CONTRACT_ADDRESS, &data)
                .await?;
        Ok(PendingTx { hash })
    }
}

impl<C: Connection> TodoContract<C> {
    /// Fetch the full todo list, in contract-defined order. The result
    /// is authoritative; callers replace their local list with it.
    pub async fn show_todos(&self) -> Result<Vec<Todo>, WalletError> {
        let data = abi::showTodosCall {}.abi_encode();
        let raw = provider::call(config::CONTRACT_ADDRESS, &data).await?;
        let items = abi::showTodosCall::abi_decode_returns(&raw)
            .map_err(|err| WalletError::Decode(err.to_string()))?;
        Ok(items.into_iter().map(Todo::from).collect())
    }

    /// Fetch a single todo by its index in the contract's list.
    pub async fn show_todo(&self, index: usize) -> Result<Todo, WalletError> {
        let data = abi::showTodoCall {
            _todoIndex: U256::from(index),
        }
        .abi_encode();
        let raw = provider::call(config::CONTRACT_ADDRESS, &data).await?;
        let item = abi::showTodoCall::abi_decode_returns(&raw)
            .map_err(|err| WalletError::Decode(err.to_string()))?;
        Ok(item.into())
    }
}

/// A submitted but not yet confirmed transaction.
#[derive(Debug, Clone, Copy)]
pub struct PendingTx {
    hash: B256,
}

impl PendingTx {
    pub fn hash(&self) -> B256 {
        self.hash
    }

    /// Wait until the transaction is mined. Polls the receipt with no
    /// timeout; how long this takes is up to the user and the network.
    pub async fn confirmed(self) -> Result<(), WalletError> {
        loop {
            if let Some(receipt) = provider::transaction_receipt(self.hash).await? {
                if receipt.succeeded() {
                    return Ok(());
                }
                return Err(WalletError::TransactionFailed(format!("{}", self.hash)));
            }
            gloo_timers::future::TimeoutFuture::new(RECEIPT_POLL_MS).await;
        }
    }
}
