//! Username + password sign-in form.

use leptos::prelude::*;
use shortener::input;
use shortener::lifecycle;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::notice::{self, NoticeState};
use crate::util::storage::BrowserStorage;

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match input::login_request(&username.get(), &password.get()) {
            Ok(req) => req,
            Err(e) => {
                notice::error(notices, e.to_string());
                return;
            }
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            match api::login(&req).await {
                Ok(bundle) => {
                    let session = lifecycle::sign_in(&BrowserStorage::Local, &BrowserStorage::Session, &req.username, &bundle);
                    auth.update(|a| a.settle(session));
                    notice::success(notices, "Login successful!");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    notice::error(notices, "Login failed. Please check your credentials.");
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Login"</h2>
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
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "No account? "
                <button class="auth-link" type="button" on:click=move |_| auth.update(|a| a.show_register = true)>
                    "Register"
                </button>
            </p>
        </div>
    }
}
