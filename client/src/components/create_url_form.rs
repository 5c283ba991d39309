//! Long-URL submission form with protocol selector.
//!
//! DESIGN
//! ======
//! The protocol select only applies when the typed URL has no scheme; the
//! normalized value is validated before any request leaves the browser.

use leptos::prelude::*;
use shortener::CredentialRecord;
use shortener::input::{self, PROTOCOLS};
use shortener::redirect;

use crate::config;
use crate::net::api;
use crate::state::notice::{self, NoticeState};
use crate::util::clipboard;
use crate::util::storage::BrowserStorage;

const CREATE_FAILED: &str = "Failed to create short URL. Please try again.";

#[component]
pub fn CreateUrlForm(on_created: Callback<()>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let protocol = RwSignal::new(PROTOCOLS[0].to_owned());
    let url = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match input::create_url_request(&protocol.get(), &url.get()) {
            Ok(req) => req,
            Err(e) => {
                notice::error(notices, e.to_string());
                return;
            }
        };
        let Some(credentials) = CredentialRecord::load(&BrowserStorage::Local) else {
            notice::error(notices, CREATE_FAILED);
            return;
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            match api::create_short_url(&credentials, &req).await {
                Ok(resp) if resp.success => {
                    let link = resp
                        .short_url
                        .as_deref()
                        .map(|code| redirect::short_link(&config::public_origin(), code));
                    let _ = created.try_set(link);
                    let _ = url.try_set(String::new());
                    notice::success(notices, "URL shortened successfully!");
                    on_created.run(());
                }
                Ok(resp) => {
                    let message = resp.message.unwrap_or_else(|| "Failed to create short URL".to_owned());
                    notice::error(notices, message);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "create short url failed");
                    notice::error(notices, CREATE_FAILED);
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_copy_created = move |_| {
        let Some(link) = created.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match clipboard::copy_text(&link).await {
                Ok(()) => notice::success(notices, "URL copied to clipboard!"),
                Err(e) => tracing::warn!(error = %e, "clipboard write failed"),
            }
        });
    };

    view! {
        <section class="create-url">
            <h2>"Shorten a URL"</h2>
            <form class="create-url__form" on:submit=on_submit>
                <select
                    class="create-url__protocol"
                    prop:value=move || protocol.get()
                    on:change=move |ev| protocol.set(event_target_value(&ev))
                >
                    {PROTOCOLS
                        .iter()
                        .map(|p| view! { <option value=*p>{*p}</option> })
                        .collect_view()}
                </select>
                <input
                    class="create-url__input"
                    type="text"
                    placeholder="example.com/very/long/path"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <button class="create-url__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Shortening..." } else { "Shorten" }}
                </button>
            </form>
            <Show when=move || created.get().is_some()>
                <div class="create-url__result">
                    <a href=move || created.get().unwrap_or_default() target="_blank" rel="noopener">
                        {move || created.get().unwrap_or_default()}
                    </a>
                    <button class="create-url__copy" type="button" on:click=on_copy_created>
                        "Copy"
                    </button>
                </div>
            </Show>
        </section>
    }
}
