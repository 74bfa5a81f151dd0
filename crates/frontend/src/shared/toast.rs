//! Transient confirmation messages ("Link copied to clipboard!").

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    generation: RwSignal<u32>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Show `message`; it disappears after [`TOAST_DURATION_MS`] unless replaced.
    pub fn show(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
        self.generation.update(|g| *g = g.wrapping_add(1));
        let shown = self.generation.get_untracked();

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if this.generation.get_untracked() == shown {
                this.message.set(None);
            }
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_toast();

    view! {
        {move || toast.message.get().map(|m| view! { <div class="toast" role="status">{m}</div> })}
    }
}
