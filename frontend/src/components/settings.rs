//! Settings page. Placeholder sections for now.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::session::use_session;

fn settings_section(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="settings-section">
            <h2>{title}</h2>
            <div class="settings-group">
                <p>{blurb}</p>
                <p><em>"Coming soon..."</em></p>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.user.with(|u| u.is_some())
            fallback=|| {
                view! {
                    <div class="settings-page">
                        <Navbar />
                        <div class="settings-container">
                            <h1>"Access Denied"</h1>
                            <p>"Please log in to access settings."</p>
                        </div>
                    </div>
                }
            }
        >
            <div class="settings-page">
                <Navbar />
                <div class="settings-container">
                    <h1 class="settings-title">"Settings"</h1>

                    <div class="settings-content">
                        {settings_section(
                            "Account Settings",
                            "Change password, update email, etc.",
                        )}
                        {settings_section(
                            "Notification Preferences",
                            "Manage email notifications, class reminders, etc.",
                        )}
                        {settings_section(
                            "Privacy Settings",
                            "Control your privacy and data sharing preferences.",
                        )}
                        {settings_section(
                            "App Preferences",
                            "Theme, language, and other app settings.",
                        )}
                    </div>
                </div>
            </div>
        </Show>
    }
}
