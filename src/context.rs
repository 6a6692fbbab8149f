//! Comparison Page Context
//!
//! Shared state provided via Leptos Context API to the comparison table rows.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a success message stays visible
const SAVED_STATUS_MS: u32 = 3_000;

/// Monotonic reload counter. Only the response of the newest load may
/// replace the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    /// Start a new load and return its ticket
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// Decide what to do with the result of load `ticket`
    pub fn settle<T, E>(&self, ticket: u64, result: Result<T, E>) -> LoadOutcome<T, E> {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(value) => LoadOutcome::Apply(value),
            Err(err) => LoadOutcome::Fail(err),
        }
    }
}

/// What a finished load does to the table
#[derive(Debug, PartialEq)]
pub enum LoadOutcome<T, E> {
    /// Newest load succeeded: replace the rows
    Apply(T),
    /// Newest load failed: keep the rows, report the error
    Fail(E),
    /// A newer load started meanwhile: ignore
    Stale,
}

/// Start a load whenever `filter` or `reload_trigger` changes.
///
/// Each run takes a fresh ticket from `generation` and hands it to `start`
/// together with the filter value.
pub fn watch_loads<F>(
    filter: ReadSignal<String>,
    reload_trigger: ReadSignal<u32>,
    generation: StoredValue<LoadGeneration>,
    start: F,
) where
    F: Fn(String, u64) + 'static,
{
    Effect::new(move |_| {
        let filter = filter.get();
        let _ = reload_trigger.get();
        if let Some(ticket) = generation.try_update_value(|g| g.begin()) {
            start(filter, ticket);
        }
    });
}

/// Line shown above the table
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Saved(String),
    Failed(String),
}

impl Status {
    pub fn class(&self) -> &'static str {
        match self {
            Status::Idle => "status",
            Status::Saved(_) => "status ok",
            Status::Failed(_) => "status error",
        }
    }

    pub fn text(&self) -> String {
        match self {
            Status::Idle => String::new(),
            Status::Saved(msg) | Status::Failed(msg) => msg.clone(),
        }
    }
}

/// Comparison-page signals provided via context
#[derive(Clone, Copy)]
pub struct CompareContext {
    /// Currently selected filter - read
    pub filter: ReadSignal<String>,
    /// Trigger to reload rows from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Status line - read
    pub status: ReadSignal<Status>,
    /// Status line - write
    set_status: WriteSignal<Status>,
}

impl CompareContext {
    pub fn new(
        filter: ReadSignal<String>,
        set_reload_trigger: WriteSignal<u32>,
        status: (ReadSignal<Status>, WriteSignal<Status>),
    ) -> Self {
        Self {
            filter,
            set_reload_trigger,
            status: status.0,
            set_status: status.1,
        }
    }

    /// Reload rows for the current filter
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn clear_status(&self) {
        self.set_status.set(Status::Idle);
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.set_status.set(Status::Failed(message.into()));
    }

    /// Show a success message, cleared again after a few seconds unless
    /// something else replaced it meanwhile
    pub fn flash_saved(&self, message: impl Into<String>) {
        let status = Status::Saved(message.into());
        self.set_status.set(status.clone());
        let set_status = self.set_status;
        spawn_local(async move {
            TimeoutFuture::new(SAVED_STATUS_MS).await;
            set_status.update(|current| {
                if *current == status {
                    *current = Status::Idle;
                }
            });
        });
    }
}

pub fn use_compare_context() -> CompareContext {
    expect_context::<CompareContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_only_newest_load_is_current() {
        let mut generation = LoadGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_stale_success_is_dropped() {
        let mut generation = LoadGeneration::default();
        let old = generation.begin();
        generation.begin();
        let outcome = generation.settle::<_, String>(old, Ok(vec!["panadol"]));
        assert_eq!(outcome, LoadOutcome::Stale);
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut generation = LoadGeneration::default();
        let old = generation.begin();
        generation.begin();
        let outcome = generation.settle::<Vec<&str>, _>(old, Err("HTTP 500".to_string()));
        assert_eq!(outcome, LoadOutcome::Stale);
    }

    #[test]
    fn test_current_result_is_applied() {
        let mut generation = LoadGeneration::default();
        generation.begin();
        let newest = generation.begin();
        assert_eq!(
            generation.settle::<_, String>(newest, Ok(vec!["crocin"])),
            LoadOutcome::Apply(vec!["crocin"])
        );
        assert_eq!(
            generation.settle::<Vec<&str>, _>(newest, Err("HTTP 500".to_string())),
            LoadOutcome::Fail("HTTP 500".to_string())
        );
    }

    #[tokio::test]
    async fn test_filter_change_starts_exactly_one_load() {
        let _ = Executor::init_tokio();
        tokio::task::LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let (filter, set_filter) = signal("price".to_string());
                let (reload_trigger, set_reload_trigger) = signal(0u32);
                let generation = StoredValue::new(LoadGeneration::default());
                let started = Arc::new(Mutex::new(Vec::<(String, u64)>::new()));

                let log = Arc::clone(&started);
                watch_loads(filter, reload_trigger, generation, move |filter, ticket| {
                    log.lock().unwrap().push((filter, ticket));
                });
                Executor::tick().await;
                assert_eq!(*started.lock().unwrap(), vec![("price".to_string(), 1)]);

                set_filter.set("discount".to_string());
                Executor::tick().await;
                Executor::tick().await;
                assert_eq!(
                    *started.lock().unwrap(),
                    vec![("price".to_string(), 1), ("discount".to_string(), 2)]
                );
                assert!(generation.with_value(|g| g.is_current(2)));

                set_reload_trigger.update(|v| *v += 1);
                Executor::tick().await;
                assert_eq!(started.lock().unwrap().last(), Some(&("discount".to_string(), 3)));
            })
            .await;
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Idle.text(), "");
        assert_eq!(Status::Failed("boom".into()).text(), "boom");
        assert_eq!(Status::Failed("boom".into()).class(), "status error");
    }
}
