use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "URL shortened successfully!");
    let second = state.push(NoticeKind::Error, "Failed to fetch URLs");
    assert!(second > first);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].message, "URL shortened successfully!");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "a");
    let second = state.push(NoticeKind::Success, "b");
    state.dismiss(first);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, second);
    state.dismiss(first);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn kind_classes() {
    assert_eq!(NoticeKind::Success.class(), "toast toast--success");
    assert_eq!(NoticeKind::Error.class(), "toast toast--error");
}
