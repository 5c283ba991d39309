//! Account registration form.

use leptos::prelude::*;
use shortener::input;
use shortener::lifecycle;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::notice::{self, NoticeState};
use crate::util::storage::BrowserStorage;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match input::register_request(&username.get(), &password.get(), &email.get()) {
            Ok(req) => req,
            Err(e) => {
                notice::error(notices, e.to_string());
                return;
            }
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            match api::register(&req).await {
                Ok(bundle) => {
                    let session = lifecycle::sign_in(&BrowserStorage::Local, &BrowserStorage::Session, &req.username, &bundle);
                    auth.update(|a| a.settle(session));
                    notice::success(notices, "Registration successful!");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    notice::error(notices, "Registration failed. Please try again.");
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Register"</h2>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already registered? "
                <button class="auth-link" type="button" on:click=move |_| auth.update(|a| a.show_register = false)>
                    "Login"
                </button>
            </p>
        </div>
    }
}
