//! Top navigation bar with the hamburger menu.
//!
//! Signed-in members get the screen shortcuts and logout; guests get a
//! register shortcut and an inline login form so they can sign in without
//! leaving the page.

use jjx_shared::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::auth;
use crate::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);
    let (show_login_form, set_show_login_form) = signal(false);
    let (login_username, set_login_username) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());
    let (login_error, set_login_error) = signal(Option::<String>::None);
    let (login_loading, set_login_loading) = signal(false);

    let go = {
        let navigate = navigate.clone();
        move |path: &'static str| {
            set_menu_open.set(false);
            navigate(path, Default::default());
        }
    };
    let go_home = go.clone();
    let go_register = go.clone();
    // Parking the handlers in local storage gives the nested `Show` children
    // closures Copy handles they can capture freely.
    let go_dashboard = StoredValue::new_local(go.clone());
    let go_profile = StoredValue::new_local(go.clone());
    let go_settings = StoredValue::new_local(go);

    let on_logout = StoredValue::new_local(move |_: leptos::web_sys::MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::logout().await {
                Ok(()) => {
                    session.set_user.set(None);
                    set_menu_open.set(false);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Logout failed: {err}").into());
                }
            }
        });
    });

    let on_login = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_login_loading.set(true);
        set_login_error.set(None);

        let req = LoginRequest {
            username: login_username.get(),
            password: login_password.get(),
        };
        spawn_local(async move {
            match auth::login(&req).await {
                Ok(user) => {
                    session.set_user.set(Some(user));
                    set_show_login_form.set(false);
                    set_menu_open.set(false);
                    set_login_username.set(String::new());
                    set_login_password.set(String::new());
                }
                Err(err) => set_login_error.set(Some(err)),
            }
            set_login_loading.set(false);
        });
    };

    let greeting = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| format!("Hello, {}!", u.username)))
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <h1 class="navbar-title" on:click=move |_| go_home("/")>
                "The Jiu-Jitsu Exchange"
            </h1>
            <div class="hamburger-menu">
                <button
                    class="hamburger-button"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>

                <Show when=move || menu_open.get()>
                    <div class="dropdown-menu">
                        <Show
                            when=move || session.user.with(|u| u.is_some())
                            fallback={
                                let go_register = go_register.clone();
                                move || {
                                    let go_register = go_register.clone();
                                    view! {
                                        <Show
                                            when=move || show_login_form.get()
                                            fallback={
                                                let go_register = go_register.clone();
                                                move || {
                                                    let go_register = go_register.clone();
                                                    view! {
                                                        <button
                                                            class="dropdown-item login-item"
                                                            on:click=move |_| {
                                                                set_show_login_form.set(true);
                                                                set_login_error.set(None);
                                                            }
                                                        >
                                                            "Login"
                                                        </button>
                                                        <button
                                                            class="dropdown-item register-item"
                                                            on:click=move |_| go_register("/register")
                                                        >
                                                            "Register"
                                                        </button>
                                                    }
                                                }
                                            }
                                        >
                                            <div class="login-form-dropdown">
                                                <h3>"Login"</h3>
                                                <Show when=move || login_error.get().is_some()>
                                                    <div class="error-small">
                                                        {move || login_error.get().unwrap_or_default()}
                                                    </div>
                                                </Show>
                                                <form on:submit=on_login>
                                                    <input
                                                        type="text"
                                                        name="username"
                                                        placeholder="Username"
                                                        class="dropdown-input"
                                                        on:input=move |ev| {
                                                            set_login_username.set(event_target_value(&ev))
                                                        }
                                                        prop:value=login_username
                                                        required
                                                    />
                                                    <input
                                                        type="password"
                                                        name="password"
                                                        placeholder="Password"
                                                        class="dropdown-input"
                                                        on:input=move |ev| {
                                                            set_login_password.set(event_target_value(&ev))
                                                        }
                                                        prop:value=login_password
                                                        required
                                                    />
                                                    <button
                                                        type="submit"
                                                        class="dropdown-submit"
                                                        disabled=move || login_loading.get()
                                                    >
                                                        {move || {
                                                            if login_loading.get() {
                                                                "Signing In..."
                                                            } else {
                                                                "Sign In"
                                                            }
                                                        }}
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="dropdown-cancel"
                                                        on:click=move |_| set_show_login_form.set(false)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </form>
                                            </div>
                                        </Show>
                                    }
                                }
                            }
                        >
                            <div class="user-greeting">{greeting}</div>
                            <button
                                class="dropdown-item dashboard-item"
                                on:click=move |_| go_dashboard.with_value(|go| go("/dashboard"))
                            >
                                "My Dashboard"
                            </button>
                            <button
                                class="dropdown-item profile-item"
                                on:click=move |_| go_profile.with_value(|go| go("/profile"))
                            >
                                "My Profile"
                            </button>
                            <button
                                class="dropdown-item settings-item"
                                on:click=move |_| go_settings.with_value(|go| go("/settings"))
                            >
                                "Settings"
                            </button>
                            <button
                                class="dropdown-item logout-item"
                                on:click=move |ev| on_logout.with_value(|f| f(ev))
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
