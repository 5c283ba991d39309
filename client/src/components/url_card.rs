//! One row of the URL list.

use leptos::prelude::*;
use shortener::types::UrlMapping;

use crate::util::format;

#[component]
pub fn UrlCard(
    mapping: UrlMapping,
    /// Absolute short link shown for this row.
    link: String,
    #[prop(into)] copied: Signal<bool>,
    on_copy: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let code = mapping.short_url.clone();
    let copy_code = code.clone();
    let created = format::display_date(mapping.created_at.as_deref());
    let clicks = format::click_label(mapping.click_count);
    let href = link.clone();
    let title = mapping.original_url.clone();

    view! {
        <li class="url-card" class:url-card--copied=move || copied.get()>
            <div class="url-card__links">
                <a class="url-card__short" href=href target="_blank" rel="noopener">
                    {link}
                </a>
                <span class="url-card__original" title=title>
                    {mapping.original_url}
                </span>
            </div>
            <div class="url-card__meta">
                <span class="url-card__clicks">{clicks}</span>
                <span class="url-card__date">{created}</span>
            </div>
            <div class="url-card__actions">
                <button class="url-card__copy" type="button" on:click=move |_| on_copy.run(copy_code.clone())>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
                <button
                    class="url-card__delete"
                    type="button"
                    title="Delete URL"
                    aria-label="Delete URL"
                    on:click=move |_| on_delete.run(code.clone())
                >
                    "✕"
                </button>
            </div>
        </li>
    }
}
