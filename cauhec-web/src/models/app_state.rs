use shared::AuthState;
use yewdux::{Dispatch, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub auth: AuthState,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppState {
    /// Queues a toast and returns its id.
    pub fn push_toast(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

pub fn notify_error(dispatch: &Dispatch<AppState>, title: &str, message: &str) {
    let (title, message) = (title.to_string(), message.to_string());
    dispatch.reduce_mut(move |state| {
        state.push_toast(ToastKind::Error, &title, &message);
    });
}

pub fn notify_success(dispatch: &Dispatch<AppState>, title: &str, message: &str) {
    let (title, message) = (title.to_string(), message.to_string());
    dispatch.reduce_mut(move |state| {
        state.push_toast(ToastKind::Success, &title, &message);
    });
}
