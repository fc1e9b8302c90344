//! Debounce: значение обновляется только после того, как вход не менялся
//! `delay_ms` миллисекунд.
//!
//! Логика (какое значение и когда применять) вынесена в [`Debouncer`],
//! браузерный таймер живёт только в [`use_debounce`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Ticket of a scheduled update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Отложенное значение с номером.
///
/// Каждый `push` заменяет ожидающее значение и выдаёт новый ticket; `fire`
/// со старым ticket ничего не возвращает. После `cancel` ничего не
/// срабатывает никогда.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<(Ticket, T)>,
    last_ticket: u64,
    cancelled: bool,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            last_ticket: 0,
            cancelled: false,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ставит новое значение в ожидание; `None` после `cancel`
    pub fn push(&mut self, value: T) -> Option<Ticket> {
        if self.cancelled {
            return None;
        }
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.pending = Some((ticket, value));
        Some(ticket)
    }

    /// Срабатывание таймера: значение отдаётся только для последнего ticket
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.cancelled = true;
    }
}

/// Debounced copy of `value`.
///
/// Новое значение отменяет предыдущий таймер; при размонтировании владельца
/// ожидающее обновление отменяется и не записывается.
pub fn use_debounce<T>(value: Signal<T>, delay_ms: u32) -> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let debounced = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new_local(Debouncer::<T>::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |prev: Option<()>| {
        let next = value.get();
        // Первый запуск: начальное значение уже лежит в `debounced`
        if prev.is_none() {
            return;
        }

        let Some(ticket) = debouncer.try_update_value(|d| d.push(next)).flatten() else {
            return;
        };

        let timeout = Timeout::new(delay_ms, move || {
            if let Some(settled) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                let _ = debounced.try_set(settled);
            }
        });

        // Предыдущий Timeout отменяется при drop
        pending.try_update_value(|slot| *slot = Some(timeout));
    });

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
        pending.try_update_value(|slot| slot.take());
    });

    debounced.into()
}
