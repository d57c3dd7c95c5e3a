//! EIP-1193 Provider Bridge
//!
//! Frontend binding to the wallet-injected `window.ethereum` object.
//! Everything the app does on chain goes through `request` here; the
//! wallet decides how to prompt, sign and broadcast.

use alloy_primitives::{hex, Address, B256};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::error::WalletError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "ethereum"], js_name = request, catch)]
    async fn request(args: JsValue) -> Result<JsValue, JsValue>;
}

/// EIP-1193 error code for a user-rejected request.
const USER_REJECTED_CODE: i64 = 4001;

/// Whether a wallet provider is injected into the page.
pub fn injected() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Issue a provider request with the given JSON params array.
async fn raw_request(method: &str, params: serde_json::Value) -> Result<JsValue, WalletError> {
    if !injected() {
        return Err(WalletError::ProviderUnavailable);
    }
    // Build the argument object as JSON text and parse it on the JS
    // side, so nested params come through as plain objects.
    let payload = serde_json::json!({ "method": method, "params": params }).to_string();
    let args = js_sys::JSON::parse(&payload)
        .map_err(|err| WalletError::Rpc(format!("bad request payload: {err:?}")))?;
    request(args).await.map_err(provider_error)
}

fn provider_error(err: JsValue) -> WalletError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    classify(code, message)
}

/// Map an EIP-1193 error (code, message) onto our error kinds.
fn classify(code: Option<i64>, message: String) -> WalletError {
    match code {
        Some(USER_REJECTED_CODE) => WalletError::UserRejected,
        _ => WalletError::Rpc(message),
    }
}

/// `eth_requestAccounts`: prompt the wallet to expose its accounts.
///
/// Suspends until the user approves or rejects in the wallet UI.
pub async fn request_accounts() -> Result<Vec<String>, WalletError> {
    let result = raw_request("eth_requestAccounts", serde_json::json!([])).await?;
    serde_wasm_bindgen::from_value(result).map_err(|err| WalletError::Rpc(err.to_string()))
}

/// `eth_chainId`: the chain the wallet is currently pointed at.
pub async fn chain_id() -> Result<u64, WalletError> {
    let result = raw_request("eth_chainId", serde_json::json!([])).await?;
    if let Some(raw) = result.as_string() {
        return parse_hex_u64(&raw)
            .ok_or_else(|| WalletError::Rpc(format!("unparseable chain id {raw:?}")));
    }
    // Some providers hand back a plain number.
    result
        .as_f64()
        .map(|id| id as u64)
        .ok_or_else(|| WalletError::Rpc("chain id is neither string nor number".into()))
}

/// `eth_call`: read-only contract call, returns the raw return bytes.
pub async fn call(to: Address, data: &[u8]) -> Result<Vec<u8>, WalletError> {
    let params = serde_json::json!([
        { "to": format!("{to}"), "data": hex::encode_prefixed(data) },
        "latest",
    ]);
    let result = raw_request("eth_call", params).await?;
    let raw = result
        .as_string()
        .ok_or_else(|| WalletError::Rpc("eth_call result is not a string".into()))?;
    hex::decode(&raw).map_err(|err| WalletError::Decode(err.to_string()))
}

/// `eth_sendTransaction`: hand a state-changing call to the wallet to
/// sign and broadcast. Returns the transaction hash; inclusion is a
/// separate wait (see [`transaction_receipt`]).
pub async fn send_transaction(
    from: Address,
    to: Address,
    data: &[u8],
) -> Result<B256, WalletError> {
    let params = serde_json::json!([{
        "from": format!("{from}"),
        "to": format!("{to}"),
        "data": hex::encode_prefixed(data),
    }]);
    let result = raw_request("eth_sendTransaction", params).await?;
    let raw = result
        .as_string()
        .ok_or_else(|| WalletError::Rpc("transaction hash is not a string".into()))?;
    raw.parse::<B256>()
        .map_err(|err| WalletError::Rpc(format!("unparseable transaction hash {raw:?}: {err}")))
}

/// The slice of `eth_getTransactionReceipt` we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct TxReceipt {
    pub status: Option<String>,
}

impl TxReceipt {
    /// Post-Byzantium receipts carry `0x1`/`0x0`; anything but an
    /// explicit `0x0` counts as success.
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() != Some("0x0")
    }
}

/// `eth_getTransactionReceipt`: `None` while the transaction is pending.
pub async fn transaction_receipt(hash: B256) -> Result<Option<TxReceipt>, WalletError> {
    let result = raw_request("eth_getTransactionReceipt", serde_json::json!([format!("{hash}")]))
        .await?;
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(result).map_err(|err| WalletError::Rpc(err.to_string()))
}

fn parse_hex_u64(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_code_maps_to_user_rejected() {
        assert_eq!(
            classify(Some(4001), "User rejected the request.".into()),
            WalletError::UserRejected
        );
    }

    #[test]
    fn other_codes_keep_the_provider_message() {
        assert_eq!(
            classify(Some(4901), "disconnected".into()),
            WalletError::Rpc("disconnected".into())
        );
        assert_eq!(
            classify(None, "boom".into()),
            WalletError::Rpc("boom".into())
        );
    }

    #[test]
    fn parses_hex_chain_ids() {
        assert_eq!(parse_hex_u64("0xaa36a7"), Some(11155111));
        assert_eq!(parse_hex_u64("0x1"), Some(1));
        assert_eq!(parse_hex_u64(" 0xAA36A7 "), Some(11155111));
        assert_eq!(parse_hex_u64("0xzz"), None);
    }

    #[test]
    fn receipt_status_decides_success() {
        let ok = TxReceipt { status: Some("0x1".into()) };
        let reverted = TxReceipt { status: Some("0x0".into()) };
        let legacy = TxReceipt { status: None };
        assert!(ok.succeeded());
        assert!(!reverted.succeeded());
        assert!(legacy.succeeded());
    }
}
