//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Notices are plain data in a `RwSignal`; `notify` pushes one and schedules
//! its removal, so components never manage timers themselves.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// How long a notice stays visible.
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier for the toast element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Show `message` and remove it after [`NOTICE_TTL_MS`].
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        NoticeKind::Success => tracing::debug!(%message, "notice"),
        NoticeKind::Error => tracing::warn!(%message, "notice"),
    }
    let Some(id) = notices.try_update(|s| s.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        let _ = notices.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn success(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    notify(notices, NoticeKind::Success, message);
}

pub fn error(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    notify(notices, NoticeKind::Error, message);
}
