// ============================================================================
// USE TOAST - Short-lived notifications
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

/// Sender handed to every screen through context
#[derive(Clone, PartialEq)]
pub struct Toaster(pub Callback<ToastMessage>);

impl Toaster {
    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        self.0.emit(ToastMessage { kind, text: text.into() });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Toaster(Callback::from(|msg: ToastMessage| {
            log::warn!("⚠️ Toast without provider: {}", msg.text);
        }))
    }
}

pub struct UseToastHandle {
    pub current: Option<ToastMessage>,
    pub toaster: Toaster,
    pub dismiss: Callback<()>,
}

/// Owns the visible toast; used once at the app root
#[hook]
pub fn use_toast() -> UseToastHandle {
    let current = use_state(|| None::<ToastMessage>);
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let toaster = {
        let current = current.clone();
        let timer = timer.clone();
        Toaster(Callback::from(move |msg: ToastMessage| {
            match msg.kind {
                ToastKind::Error => log::error!("❌ {}", msg.text),
                ToastKind::Success => log::info!("💬 {}", msg.text),
            }
            current.set(Some(msg));
            let current = current.clone();
            // Replacing the timer cancels the previous one
            *timer.borrow_mut() = Some(Timeout::new(CONFIG.ui_config.toast_duration_ms, move || {
                current.set(None);
            }));
        }))
    };

    let dismiss = {
        let current = current.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    UseToastHandle {
        current: (*current).clone(),
        toaster,
        dismiss,
    }
}

/// Toaster from context, or a logging fallback outside the provider
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}
