//! Всплывающие уведомления (успех/ошибка) с автоматическим скрытием.

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Очередь уведомлений: id выдаются монотонно, повторное скрытие безопасно
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Сервис уведомлений, доступный через контекст
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }

    fn show(&self, kind: ToastKind, message: String) {
        log::debug!("toast {:?}: {}", kind, message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        let duration = self.duration_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            // Пользователь мог закрыть уведомление раньше таймера
            queue.try_update(|q| {
                q.dismiss(id);
            });
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Контейнер уведомлений в углу экрана
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.dismiss(id)>
                            {icon(toast.kind.icon_name())}
                            <span class="toast__message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a");
        let b = queue.push(ToastKind::Error, "b");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_dismiss_twice_is_harmless() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "Заполните обязательные поля");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.items().is_empty());
    }

    #[test]
    fn test_dismiss_keeps_other_toasts() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "first");
        queue.push(ToastKind::Success, "second");
        queue.dismiss(first);
        assert_eq!(queue.items()[0].message, "second");
    }
}
