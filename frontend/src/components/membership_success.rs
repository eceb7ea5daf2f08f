//! Landing page for the hosted checkout success redirect.
//!
//! Checkout appends `session_id` to the return URL; that id is handed to the
//! payment verification endpoint. Entitlement itself is granted by the
//! provider webhook, so verification failing here is reported but never
//! blocks the success screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::api::membership::MembershipApi;

#[component]
pub fn MembershipSuccessPage() -> impl IntoView {
    let query = use_query_map();

    let (loading, set_loading) = signal(true);
    let (verification_status, set_verification_status) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let session_id = query.with_untracked(|q| q.get("session_id"));
        spawn_local(async move {
            if let Some(session_id) = session_id {
                let api = MembershipApi::new();
                match api.verify_payment(&session_id).await {
                    Ok(message) => set_verification_status.set(Some(message)),
                    Err(_) => {
                        set_verification_status.set(Some("Error verifying payment".to_string()))
                    }
                }
            }
            // Hold the processing screen briefly so the webhook can land.
            TimeoutFuture::new(2_000).await;
            set_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="container">
                        <div class="auth-form centered">
                            <h2>"Processing your subscription..."</h2>
                            <p>"Please wait while we confirm your payment."</p>
                            <div class="spinner"></div>
                        </div>
                    </div>
                }
            }
        >
            <div class="container">
                <div class="auth-form centered">
                    <div class="result-icon result-success">"\u{2713}"</div>
                    <h2>"Subscription Successful!"</h2>
                    <p>"Thank you for subscribing! Your membership is now active."</p>
                    <p>"You should receive a confirmation email shortly."</p>
                    <Show when=move || verification_status.get().is_some()>
                        <p class="verification-status">
                            "Status: " {move || verification_status.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <div class="result-links">
                        <A href="/profile" attr:class="btn-link">
                            "View Membership"
                        </A>
                        <A href="/dashboard" attr:class="btn-link btn-link-secondary">
                            "Go to Dashboard"
                        </A>
                    </div>
                </div>
            </div>
        </Show>
    }
}
