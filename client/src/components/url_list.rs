//! The signed-in user's short URLs.

use leptos::prelude::*;
use shortener::redirect;

use crate::components::url_card::UrlCard;
use crate::config;
use crate::state::urls::UrlsState;

#[component]
pub fn UrlList(on_copy: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let urls = expect_context::<RwSignal<UrlsState>>();

    view! {
        <section class="url-list">
            <h2>"Your URLs"</h2>
            <Show
                when=move || !urls.get().loading
                fallback=|| view! { <p class="url-list__status">"Loading..."</p> }
            >
                <Show
                    when=move || !urls.get().items.is_empty()
                    fallback=|| view! { <p class="url-list__status">"No URLs yet"</p> }
                >
                    <ul class="url-list__items">
                        <For
                            each=move || urls.get().items
                            key=|m| (m.short_url.clone(), m.click_count)
                            children=move |mapping| {
                                let code = mapping.short_url.clone();
                                let link = redirect::short_link(&config::public_origin(), &code);
                                let copied = Signal::derive(move || urls.get().copied.as_deref() == Some(code.as_str()));
                                view! {
                                    <UrlCard
                                        mapping=mapping
                                        link=link
                                        copied=copied
                                        on_copy=on_copy
                                        on_delete=on_delete
                                    />
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
