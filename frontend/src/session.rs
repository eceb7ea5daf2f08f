//! Session state management.
//!
//! The shell owns the identity for the lifetime of the tab and hands every
//! screen a read-only view plus a narrow update capability through Context.
//! There is no client-side persistence: a page reload re-runs the probe.

use gloo_net::http::Request;
use jjx_shared::{SessionResponse, User, api::API_BASE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::RequestCredentials;

/// Session context shared by every screen.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current identity (read-only view).
    pub user: ReadSignal<Option<User>>,
    /// Update capability for the identity.
    pub set_user: WriteSignal<Option<User>>,
    /// True until the initial session probe has resolved, exactly once.
    pub probing: ReadSignal<bool>,
    set_probing: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (user, set_user) = signal(Option::<User>::None);
        let (probing, set_probing) = signal(true);
        Self {
            user,
            set_user,
            probing,
            set_probing,
        }
    }

    /// Derived signal for route guards.
    pub fn is_authenticated(&self) -> Signal<bool> {
        let user = self.user;
        Signal::derive(move || user.get().is_some())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the session context provided at the app root.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Issue the one credential-bearing "who am I?" read.
///
/// Success stores the identity; any failure (transport error or non-success
/// status) leaves it `None` and is logged, never surfaced to the user. The
/// probing flag flips to false exactly once, regardless of outcome.
pub fn start_probe(ctx: &SessionContext) {
    let set_user = ctx.set_user;
    let set_probing = ctx.set_probing;

    spawn_local(async move {
        match probe().await {
            Ok(user) => set_user.set(Some(user)),
            Err(err) => {
                web_sys::console::error_1(&format!("Auth check failed: {err}").into());
            }
        }
        set_probing.set(false);
    });
}

async fn probe() -> Result<User, String> {
    let resp = Request::get(&format!("{API_BASE}/user"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        // Any non-success is treated as "logged out"; the status is kept in
        // the log so a server error stays distinguishable in devtools.
        return Err(format!("session probe returned {}", resp.status()));
    }

    resp.json::<SessionResponse>()
        .await
        .map(|body| body.user)
        .map_err(|e| e.to_string())
}
