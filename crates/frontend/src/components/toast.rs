//! Transient notification overlay
//!
//! Pages report success and failure through `use_toast`; each toast
//! dismisses itself after a fixed interval.

use crate::config::UiConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single on-screen notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast context data
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastContextData {
    toasts: Vec<Toast>,
    next_id: u32,
}

/// Toast context actions
pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

/// Toast context
pub type ToastContext = UseReducerHandle<ToastContextData>;

impl Reducible for ToastContextData {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(kind, message) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    kind,
                    message,
                });
                Rc::new(Self {
                    toasts,
                    next_id: self.next_id.wrapping_add(1),
                })
            }
            ToastAction::Dismiss(id) => Rc::new(Self {
                toasts: self
                    .toasts
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
                next_id: self.next_id,
            }),
        }
    }
}

/// Handle returned by [`use_toast`]
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    ctx: ToastContext,
}

impl ToastHandle {
    /// Show a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.ctx
            .dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    /// Show an error notification
    pub fn error(&self, message: impl Into<String>) {
        self.ctx
            .dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }
}

/// Hook to show notifications
#[hook]
pub fn use_toast() -> ToastHandle {
    let ctx = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider");
    ToastHandle { ctx }
}

/// Toast provider props
#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Toast provider component
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastContextData::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            {props.children.clone()}
            <ToastTray />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastTray)]
fn toast_tray() -> Html {
    let ctx = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            { for ctx.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let ctx = use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider");

    // Self-dismiss; dropping the handle on unmount cancels the timer
    {
        let ctx = ctx.clone();
        let id = props.toast.id;
        use_effect_with(id, move |_| {
            let handle = Timeout::new(UiConfig::TOAST_DISMISS_MS, move || {
                ctx.dispatch(ToastAction::Dismiss(id));
            });
            move || drop(handle)
        });
    }

    let on_dismiss = {
        let id = props.toast.id;
        Callback::from(move |_| ctx.dispatch(ToastAction::Dismiss(id)))
    };

    let accent = match props.toast.kind {
        ToastKind::Success => "border-green-500 text-green-800",
        ToastKind::Error => "border-red-500 text-red-800",
    };

    html! {
        <div
            class={format!("bg-white border-l-4 {accent} rounded shadow-lg px-4 py-3 text-sm flex items-center gap-3 min-w-[240px]")}
            onclick={on_dismiss}
        >
            {&props.toast.message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ToastContextData, action: ToastAction) -> ToastContextData {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn pushed_toasts_accumulate_with_distinct_ids() {
        let state = ToastContextData::default();
        let state = apply(state, ToastAction::Push(ToastKind::Success, "one".into()));
        let state = apply(state, ToastAction::Push(ToastKind::Error, "two".into()));

        assert_eq!(state.toasts.len(), 2);
        assert_ne!(state.toasts[0].id, state.toasts[1].id);
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let state = ToastContextData::default();
        let state = apply(state, ToastAction::Push(ToastKind::Success, "keep".into()));
        let state = apply(state, ToastAction::Push(ToastKind::Success, "drop".into()));
        let drop_id = state.toasts[1].id;

        let state = apply(state, ToastAction::Dismiss(drop_id));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "keep");
    }
}
