//! The dashboard and its entitlement gate.
//!
//! Strictly ordered states: access denied (no identity), loading (status and
//! plans fetched concurrently and joined), paywall (`has_membership ==
//! false`), entitled (schedule view). Nothing is cached across remounts;
//! navigating away and back restarts at loading.

use jjx_shared::{MembershipPlan, MembershipStatus, fmt::format_price, monthly_plans};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::membership::MembershipApi;
use crate::components::navbar::Navbar;
use crate::components::schedule::ScheduleView;
use crate::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let (status, set_status) = signal(Option::<MembershipStatus>::None);
    let (plans, set_plans) = signal(Vec::<MembershipPlan>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (subscribing, set_subscribing) = signal(false);

    let load_membership = move || {
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let api = MembershipApi::new();
            // Both must succeed before leaving the loading state.
            let (status_res, plans_res) =
                futures::join!(api.membership_status(), api.membership_plans());
            match (status_res, plans_res) {
                (Ok(s), Ok(p)) => {
                    set_status.set(Some(s));
                    set_plans.set(p);
                }
                (Err(e), _) | (_, Err(e)) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Initial load, once an identity is present.
    Effect::new(move |_| {
        if session.user.with(|u| u.is_some()) {
            load_membership();
        }
    });

    let on_subscribe = move |plan_id: String| {
        set_subscribing.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let api = MembershipApi::new();
            match api.create_checkout_session(&plan_id).await {
                Ok(checkout_url) => {
                    // Full browser redirect to the hosted checkout page.
                    let _ = window().location().set_href(&checkout_url);
                }
                Err(err) => {
                    set_error_msg.set(Some(err));
                    set_subscribing.set(false);
                }
            }
        });
    };

    let entitled = move || status.with(|s| s.as_ref().is_some_and(|s| s.has_membership));

    view! {
        <Show
            when=move || session.user.with(|u| u.is_some())
            fallback=|| {
                view! {
                    <div class="profile-page">
                        <Navbar />
                        <div class="profile-container">
                            <h1>"Access Denied"</h1>
                            <p>"Please log in to access your dashboard."</p>
                        </div>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <Navbar />
                <div class="profile-container">
                    <Show
                        when=move || !loading.get()
                        fallback=|| {
                            view! {
                                <div class="dashboard-loading">
                                    <p>"Loading your dashboard..."</p>
                                    <div class="spinner"></div>
                                </div>
                            }
                        }
                    >
                        <Show
                            when=move || error_msg.get().is_none()
                            fallback=move || {
                                view! {
                                    <div class="error">
                                        {move || error_msg.get().unwrap_or_default()}
                                        <button class="btn-small" on:click=move |_| load_membership()>
                                            "Retry"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <Show
                                when=entitled
                                fallback=move || {
                                    view! {
                                        <div class="subscription-gate">
                                            <h1>"Sign Up to See Your Dashboard"</h1>
                                            <p>
                                                "Get access to your dashboard, weekly class schedules, and member-only training by becoming a member."
                                            </p>
                                            <div class="plan-list">
                                                <For
                                                    each=move || monthly_plans(&plans.get())
                                                    key=|plan| plan.id.clone()
                                                    children=move |plan| {
                                                        let plan_id = plan.id.clone();
                                                        view! {
                                                            <div class="plan-card">
                                                                <div class="plan-details">
                                                                    <h4>{plan.name.clone()}</h4>
                                                                    <div class="plan-price">
                                                                        {format_price(plan.price, &plan.currency)}
                                                                        <span class="plan-interval">
                                                                            "/" {plan.interval.clone()}
                                                                        </span>
                                                                    </div>
                                                                </div>
                                                                <button
                                                                    class="btn"
                                                                    disabled=move || subscribing.get()
                                                                    on:click=move |_| on_subscribe(plan_id.clone())
                                                                >
                                                                    {move || {
                                                                        if subscribing.get() {
                                                                            "Processing..."
                                                                        } else {
                                                                            "Subscribe"
                                                                        }
                                                                    }}
                                                                </button>
                                                            </div>
                                                        }
                                                    }
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            >
                                <h1 class="profile-title">"My Dashboard"</h1>
                                <ScheduleView />
                            </Show>
                        </Show>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
