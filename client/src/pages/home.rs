//! Home page: auth gate, sign-in forms, and the URL dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it resolves the stored session once;
//! until that settles nothing signed-in is rendered. Signed-out visitors see
//! the login or register form, signed-in users the create form and URL list.
//!
//! DESIGN
//! ======
//! Session writes go through `shortener::lifecycle` so credentials and the
//! profile cache always change together. Every spawned task writes back with
//! `try_*` so a page disposed mid-request is left alone.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use shortener::{CredentialRecord, SessionResolver, lifecycle, redirect};

use crate::components::create_url_form::CreateUrlForm;
use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;
use crate::components::toast_stack::ToastStack;
use crate::components::url_list::UrlList;
use crate::config;
use crate::net::api::{self, BrowserAuthApi};
use crate::state::auth::AuthState;
use crate::state::notice::{self, NoticeState};
use crate::state::urls::UrlsState;
use crate::util::clipboard;
use crate::util::clock::BrowserClock;
use crate::util::storage::BrowserStorage;

/// Which body the home page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HomeView {
    Loading,
    Login,
    Register,
    Dashboard,
}

pub(crate) fn home_view(state: &AuthState) -> HomeView {
    if state.is_loading() {
        HomeView::Loading
    } else if state.username().is_some() {
        HomeView::Dashboard
    } else if state.show_register {
        HomeView::Register
    } else {
        HomeView::Login
    }
}

/// User id header value for list/delete calls, from the stored credentials.
fn stored_user_id() -> Option<String> {
    CredentialRecord::load(&BrowserStorage::Local).and_then(|c| c.user_id)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let urls = expect_context::<RwSignal<UrlsState>>();

    // Resolve the stored session once per mount.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let durable = BrowserStorage::Local;
            let session = BrowserStorage::Session;
            let api = BrowserAuthApi;
            let clock = BrowserClock;
            let resolved = SessionResolver::new(&durable, &session, &api, &clock).resolve().await;
            let _ = auth.try_update(|a| a.settle(resolved));
        });
    });

    let load_urls = move || {
        urls.update(|u| u.loading = true);
        let user_id = stored_user_id();
        leptos::task::spawn_local(async move {
            match api::list_urls(user_id.as_deref()).await {
                Ok(items) => {
                    let _ = urls.try_update(|u| u.replace(items));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "url list fetch failed");
                    let _ = urls.try_update(|u| u.loading = false);
                    notice::error(notices, "Failed to fetch URLs");
                }
            }
        });
    };

    let view_kind = Memo::new(move |_| home_view(&auth.get()));

    Effect::new(move || {
        if view_kind.get() == HomeView::Dashboard {
            load_urls();
        }
    });

    let on_created = Callback::new(move |()| load_urls());

    let on_copy = Callback::new(move |code: String| {
        let link = redirect::short_link(&config::public_origin(), &code);
        leptos::task::spawn_local(async move {
            match clipboard::copy_text(&link).await {
                Ok(()) => {
                    let _ = urls.try_update(|u| u.copied = Some(code.clone()));
                    notice::success(notices, "URL copied to clipboard!");
                    #[cfg(feature = "hydrate")]
                    {
                        gloo_timers::future::TimeoutFuture::new(crate::state::urls::COPIED_MARK_MS).await;
                        let _ = urls.try_update(|u| u.clear_copied(&code));
                    }
                }
                Err(e) => tracing::warn!(error = %e, "clipboard write failed"),
            }
        });
    });

    let on_delete = Callback::new(move |code: String| {
        let user_id = stored_user_id();
        leptos::task::spawn_local(async move {
            match api::delete_url(user_id.as_deref(), &code).await {
                Ok(()) => {
                    let _ = urls.try_update(|u| u.remove(&code));
                    notice::success(notices, "URL deleted successfully!");
                    load_urls();
                }
                Err(e) => {
                    tracing::warn!(error = %e, short_code = %code, "delete failed");
                    notice::error(notices, "Failed to delete URL");
                }
            }
        });
    });

    let on_logout = move |_| {
        let signed_out = lifecycle::sign_out(&BrowserStorage::Local, &BrowserStorage::Session);
        auth.update(|a| a.settle(signed_out));
        urls.set(UrlsState::default());
        notice::success(notices, "Logged out successfully!");
        leptos::task::spawn_local(api::logout());
    };

    view! {
        <main class="home">
            <header class="home__header">
                <h1>"URL Shortener"</h1>
                <Show when=move || view_kind.get() == HomeView::Dashboard>
                    <div class="home__user">
                        <span class="home__username">
                            {move || auth.with(|a| a.username().unwrap_or_default().to_owned())}
                        </span>
                        <button class="home__logout" type="button" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </header>
            {move || match view_kind.get() {
                HomeView::Loading => view! { <p class="home__loading">"Loading..."</p> }.into_any(),
                HomeView::Login => view! { <LoginForm/> }.into_any(),
                HomeView::Register => view! { <RegisterForm/> }.into_any(),
                HomeView::Dashboard => {
                    view! {
                        <div class="dashboard">
                            <CreateUrlForm on_created=on_created/>
                            <UrlList on_copy=on_copy on_delete=on_delete/>
                        </div>
                    }
                        .into_any()
                }
            }}
            <ToastStack/>
        </main>
    }
}
