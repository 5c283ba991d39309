//! Fixed-position stack of transient notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notices.get().notices
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = n.kind.class();
                    let message = n.message;
                    view! {
                        <div class=class>
                            <span class="toast__message">{message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
