//! Jiu-Jitsu Exchange member web client.
//!
//! Context-driven CSR app:
//! - `session`: identity state, provided at the root as a read-only value
//!   plus a narrow update capability
//! - `api`: typed fetch clients for the auth, payment, profile-asset and
//!   (simulated) schedule backends
//! - `components`: one module per screen

use std::sync::Arc;

mod api {
    pub mod auth;
    pub mod membership;
    pub mod profile;
    pub mod schedule;
}
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod membership_cancel;
    pub mod membership_success;
    pub mod navbar;
    pub mod profile;
    pub mod register;
    pub mod schedule;
    pub mod settings;
}
mod session;

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::api::schedule::{SharedScheduleApi, SimulatedSchedule};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::membership_cancel::MembershipCancelPage;
use crate::components::membership_success::MembershipSuccessPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::settings::SettingsPage;
use crate::session::{SessionContext, start_probe};

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);
    provide_context::<SharedScheduleApi>(Arc::new(SimulatedSchedule));

    // One credential-bearing probe per page load, before routing starts.
    start_probe(&session);

    let signed_in = session.is_authenticated();

    view! {
        <Show
            when=move || !session.probing.get()
            fallback=|| {
                view! {
                    <div class="container">
                        <div class="auth-form centered">
                            <h2>"Loading..."</h2>
                        </div>
                    </div>
                }
            }
        >
            <Router>
                <div class="app">
                    <Routes fallback=|| {
                        view! {
                            <div class="container">
                                <div class="auth-form centered">
                                    <h2>"Page not found"</h2>
                                </div>
                            </div>
                        }
                    }>
                        <Route
                            path=path!("/login")
                            view=move || {
                                if signed_in.get() {
                                    view! { <Redirect path="/dashboard" /> }.into_any()
                                } else {
                                    view! { <LoginPage /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/register")
                            view=move || {
                                if signed_in.get() {
                                    view! { <Redirect path="/dashboard" /> }.into_any()
                                } else {
                                    view! { <RegisterPage /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/dashboard")
                            view=move || {
                                if signed_in.get() {
                                    view! { <DashboardPage /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/profile")
                            view=move || {
                                if signed_in.get() {
                                    view! { <ProfilePage /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/settings")
                            view=move || {
                                if signed_in.get() {
                                    view! { <SettingsPage /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/membership/success")
                            view=move || {
                                if signed_in.get() {
                                    view! { <MembershipSuccessPage /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/membership/cancel")
                            view=move || {
                                if signed_in.get() {
                                    view! { <MembershipCancelPage /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                        <Route
                            path=path!("/")
                            view=move || {
                                if signed_in.get() {
                                    view! { <Redirect path="/dashboard" /> }.into_any()
                                } else {
                                    view! { <Redirect path="/login" /> }.into_any()
                                }
                            }
                        />
                    </Routes>
                </div>
            </Router>
        </Show>
    }
}
