use jjx_shared::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::auth;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_error_msg.set(None);

        let req = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(&req).await {
                Ok(user) => {
                    session.set_user.set(Some(user));
                    navigate("/dashboard", Default::default());
                }
                Err(err) => set_error_msg.set(Some(err)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="container">
            <form on:submit=on_submit class="auth-form">
                <h2>"Welcome Back"</h2>

                <Show when=move || error_msg.get().is_some()>
                    <div class="error">{move || error_msg.get().unwrap_or_default()}</div>
                </Show>

                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        required
                    />
                </div>

                <button type="submit" class="btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                </button>

                <div class="auth-switch">
                    "Don't have an account? " <A href="/register">"Sign up here"</A>
                </div>
            </form>
        </div>
    }
}
