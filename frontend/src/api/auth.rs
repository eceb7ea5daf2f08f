//! Credential operations: login, register, logout.
//!
//! The forms show the server's `error` field when the body carries one; a
//! transport failure or an unparsable body collapses to the generic network
//! message instead of leaking an internal error.

use gloo_net::http::Request;
use jjx_shared::{
    AuthResponse, LoginRequest, RegisterRequest, User,
    api::{API_BASE, NETWORK_ERROR},
};
use serde_json::Value;
use web_sys::RequestCredentials;

pub async fn login(req: &LoginRequest) -> Result<User, String> {
    submit(&format!("{API_BASE}/login"), req, "Login failed").await
}

pub async fn register(req: &RegisterRequest) -> Result<User, String> {
    submit(&format!("{API_BASE}/register"), req, "Registration failed").await
}

/// Clear the server-side session. The caller drops the identity on success;
/// a failure is logged and otherwise ignored.
pub async fn logout() -> Result<(), String> {
    let resp = Request::post(&format!("{API_BASE}/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("logout returned {}", resp.status()))
    }
}

async fn submit<B: serde::Serialize>(url: &str, body: &B, fallback: &str) -> Result<User, String> {
    let resp = Request::post(url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|_| NETWORK_ERROR.to_string())?
        .send()
        .await
        .map_err(|_| NETWORK_ERROR.to_string())?;

    let ok = resp.ok();
    let text = resp.text().await.map_err(|_| NETWORK_ERROR.to_string())?;

    if ok {
        serde_json::from_str::<AuthResponse>(&text)
            .map(|auth| auth.user)
            .map_err(|_| NETWORK_ERROR.to_string())
    } else {
        // Body parsed but flagged as an error: show the server's message.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Err(value
                .get("error")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())),
            Err(_) => Err(NETWORK_ERROR.to_string()),
        }
    }
}
