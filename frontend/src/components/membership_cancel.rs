//! Landing page for the hosted checkout cancel redirect. Static notice only;
//! nothing was charged and no state needs refreshing.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MembershipCancelPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="auth-form centered">
                <div class="result-icon result-warning">"\u{26a0}"</div>
                <h2>"Subscription Cancelled"</h2>
                <p>"Your subscription process was cancelled. No charges were made."</p>
                <p>"You can try again anytime to access our premium features."</p>

                <div class="result-links">
                    <A href="/profile" attr:class="btn-link">
                        "Try Again"
                    </A>
                    <A href="/dashboard" attr:class="btn-link btn-link-secondary">
                        "Go to Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
