//! Profile page: avatar upload/delete and membership management.

use jjx_shared::{
    MembershipPlan, MembershipStatus,
    api::profile_picture_url,
    fmt::{format_billing_date, format_price},
    validate::validate_avatar,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::membership::MembershipApi;
use crate::api::profile;
use crate::components::navbar::Navbar;
use crate::session::use_session;

fn confirmed(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let (status, set_status) = signal(Option::<MembershipStatus>::None);
    let (plans, set_plans) = signal(Vec::<MembershipPlan>::new());
    let (membership_loading, set_membership_loading) = signal(true);
    let (membership_error, set_membership_error) = signal(Option::<String>::None);
    let (processing, set_processing) = signal(false);
    let (picture_loading, set_picture_loading) = signal(false);
    let (picture_error, set_picture_error) = signal(Option::<String>::None);

    let file_input = NodeRef::<leptos::html::Input>::new();

    let load_membership = move || {
        set_membership_loading.set(true);
        set_membership_error.set(None);
        spawn_local(async move {
            let api = MembershipApi::new();
            let (status_res, plans_res) =
                futures::join!(api.membership_status(), api.membership_plans());
            match (status_res, plans_res) {
                (Ok(s), Ok(p)) => {
                    set_status.set(Some(s));
                    set_plans.set(p);
                }
                (Err(e), _) | (_, Err(e)) => set_membership_error.set(Some(e)),
            }
            set_membership_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if session.user.with(|u| u.is_some()) {
            load_membership();
        }
    });

    let on_subscribe = move |plan_id: String| {
        set_processing.set(true);
        set_membership_error.set(None);
        spawn_local(async move {
            let api = MembershipApi::new();
            match api.create_checkout_session(&plan_id).await {
                Ok(checkout_url) => {
                    let _ = window().location().set_href(&checkout_url);
                }
                Err(err) => {
                    set_membership_error.set(Some(err));
                    set_processing.set(false);
                }
            }
        });
    };

    let on_cancel_membership = move |_| {
        if !confirmed(
            "Are you sure you want to cancel your membership? You will lose access at the end of your current billing period.",
        ) {
            return;
        }
        set_processing.set(true);
        set_membership_error.set(None);
        spawn_local(async move {
            let api = MembershipApi::new();
            match api.cancel_membership().await {
                // No server push: re-fetch the status snapshot.
                Ok(_) => load_membership(),
                Err(err) => set_membership_error.set(Some(err)),
            }
            set_processing.set(false);
        });
    };

    let pick_file = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // Size/type gate runs before any network call.
        if let Err(msg) = validate_avatar(file.size() as u64, &file.type_()) {
            set_picture_error.set(Some(msg.to_string()));
            return;
        }

        set_picture_loading.set(true);
        set_picture_error.set(None);
        spawn_local(async move {
            match profile::upload_profile_picture(&file).await {
                Ok(reference) => {
                    session.set_user.update(|user| {
                        if let Some(user) = user {
                            user.profile_picture = Some(reference);
                        }
                    });
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => set_picture_error.set(Some(err)),
            }
            set_picture_loading.set(false);
        });
    };

    let on_delete_picture = move |_| {
        if !confirmed("Are you sure you want to delete your profile picture?") {
            return;
        }
        set_picture_loading.set(true);
        set_picture_error.set(None);
        spawn_local(async move {
            match profile::delete_profile_picture().await {
                Ok(_) => {
                    session.set_user.update(|user| {
                        if let Some(user) = user {
                            user.profile_picture = None;
                        }
                    });
                }
                Err(err) => set_picture_error.set(Some(err)),
            }
            set_picture_loading.set(false);
        });
    };

    let avatar_url = move || {
        session
            .user
            .with(|u| profile_picture_url(u.as_ref().and_then(|u| u.profile_picture.as_deref())))
    };
    let has_picture = move || avatar_url().is_some();
    let username = move || session.user.with(|u| u.as_ref().map(|u| u.username.clone()));
    let email = move || {
        session.user.with(|u| {
            u.as_ref()
                .map(|u| u.email.clone())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Not provided".to_string())
        })
    };

    view! {
        <Show
            when=move || session.user.with(|u| u.is_some())
            fallback=|| {
                view! {
                    <div class="profile-page">
                        <Navbar />
                        <div class="profile-container">
                            <h1>"Access Denied"</h1>
                            <p>"Please log in to view your profile."</p>
                        </div>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <Navbar />
                <div class="profile-container">
                    <h1 class="profile-title">"Profile"</h1>

                    <div class="profile-content">
                        <div class="profile-section">
                            <h2>"User Information"</h2>
                            <div class="profile-info">
                                <div class="profile-picture-section">
                                    <div class="profile-picture" on:click=pick_file>
                                        {move || match avatar_url() {
                                            Some(url) => {
                                                view! { <img src=url alt="Profile" /> }.into_any()
                                            }
                                            None => {
                                                view! { <span class="profile-placeholder">"?"</span> }
                                                    .into_any()
                                            }
                                        }}
                                    </div>

                                    <div class="profile-picture-actions">
                                        <p>"Click to upload a new profile picture"</p>
                                        <button
                                            class="btn-small"
                                            disabled=move || picture_loading.get()
                                            on:click=pick_file
                                        >
                                            {move || {
                                                if picture_loading.get() {
                                                    "Uploading..."
                                                } else {
                                                    "Upload Photo"
                                                }
                                            }}
                                        </button>
                                        <Show when=has_picture>
                                            <button
                                                class="btn-small btn-danger"
                                                disabled=move || picture_loading.get()
                                                on:click=on_delete_picture
                                            >
                                                "Delete"
                                            </button>
                                        </Show>
                                    </div>
                                </div>

                                <Show when=move || picture_error.get().is_some()>
                                    <div class="error">
                                        {move || picture_error.get().unwrap_or_default()}
                                    </div>
                                </Show>

                                <input
                                    type="file"
                                    accept="image/png,image/jpg,image/jpeg,image/gif"
                                    class="hidden-file-input"
                                    node_ref=file_input
                                    on:change=on_file_change
                                />

                                <p><strong>"Username: "</strong> {username}</p>
                                <p><strong>"Email: "</strong> {email}</p>
                            </div>
                        </div>

                        <div class="profile-section">
                            <h2>"Membership"</h2>
                            <div class="profile-membership">
                                <Show
                                    when=move || !membership_loading.get()
                                    fallback=|| {
                                        view! {
                                            <div class="schedule-loading">
                                                <p>"Loading membership information..."</p>
                                                <div class="spinner"></div>
                                            </div>
                                        }
                                    }
                                >
                                    <Show
                                        when=move || membership_error.get().is_none()
                                        fallback=move || {
                                            view! {
                                                <div class="error">
                                                    {move || membership_error.get().unwrap_or_default()}
                                                    <button
                                                        class="btn-small"
                                                        on:click=move |_| load_membership()
                                                    >
                                                        "Retry"
                                                    </button>
                                                </div>
                                            }
                                        }
                                    >
                                        <Show
                                            when=move || {
                                                status.with(|s| {
                                                    s.as_ref().is_some_and(|s| s.has_membership)
                                                })
                                            }
                                            fallback=move || {
                                                view! {
                                                    <div class="membership-inactive">
                                                        <For
                                                            each=move || plans.get()
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
                                                                            disabled=move || processing.get()
                                                                            on:click=move |_| on_subscribe(plan_id.clone())
                                                                        >
                                                                            {move || {
                                                                                if processing.get() {
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
                                                }
                                            }
                                        >
                                            <div class="membership-active">
                                                <h3>"Active Membership"</h3>
                                                <p>
                                                    <strong>"Plan: "</strong>
                                                    {move || {
                                                        status.with(|s| {
                                                            s.as_ref()
                                                                .and_then(|s| s.plan_type.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }}
                                                </p>
                                                <p>
                                                    <strong>"Status: "</strong>
                                                    {move || {
                                                        status.with(|s| {
                                                            s.as_ref()
                                                                .and_then(|s| s.status.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }}
                                                </p>
                                                <Show when=move || {
                                                    status.with(|s| {
                                                        s.as_ref()
                                                            .is_some_and(|s| s.current_period_end.is_some())
                                                    })
                                                }>
                                                    <p>
                                                        <strong>"Next billing: "</strong>
                                                        {move || {
                                                            status.with(|s| {
                                                                s.as_ref()
                                                                    .and_then(|s| s.current_period_end.as_deref())
                                                                    .map(format_billing_date)
                                                                    .unwrap_or_default()
                                                            })
                                                        }}
                                                    </p>
                                                </Show>
                                                <Show when=move || {
                                                    status.with(|s| {
                                                        s.as_ref().is_some_and(|s| {
                                                            s.status.as_deref() == Some("active")
                                                        })
                                                    })
                                                }>
                                                    <button
                                                        class="btn-small btn-danger"
                                                        disabled=move || processing.get()
                                                        on:click=on_cancel_membership
                                                    >
                                                        {move || {
                                                            if processing.get() {
                                                                "Processing..."
                                                            } else {
                                                                "Cancel Membership"
                                                            }
                                                        }}
                                                    </button>
                                                </Show>
                                            </div>
                                        </Show>
                                    </Show>
                                </Show>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
