// src/hooks/registry.rs
//
// Hook registry implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in registration order
// 2. Deterministic - same registrations + same args → same result
// 3. Observable - every call is logged
// 4. Type-safe - each hook name carries a concrete argument record

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use log::{debug, error, warn};
use uuid::Uuid;

use crate::hooks::types::{HookArgs, HookOutcome};

/// Type-erased hook handler
/// Returns None when the argument record is not the type it was registered for
type HookHandler = Box<dyn Fn(&str, &mut dyn Any) -> Option<HookOutcome> + Send + Sync>;

/// The Hook Registry
///
/// Maps a hook name to the ordered list of handlers subscribed to it.
/// The host calls a hook at a fixed point of request handling and passes
/// one argument record; handlers read it and may add to its header sink.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in registration order
/// - A handler returning `Handled` stops the chain
/// - A panicking handler is logged and skipped
pub struct HookRegistry {
    /// Map from hook name to list of handlers
    handlers: Arc<RwLock<HashMap<String, Vec<HookHandler>>>>,

    /// Call log (for debugging)
    call_log: Arc<RwLock<Vec<HookLogEntry>>>,
}

/// A logged hook call
#[derive(Debug, Clone)]
pub struct HookLogEntry {
    pub invocation_id: Uuid,
    pub hook_name: String,
    pub args_type: String,
    pub occurred_at: String,
    pub handler_count: usize,
    pub handled: bool,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            call_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a handler for a hook name
    ///
    /// Handlers are executed in the order they are registered.
    /// Registering from inside a running handler deadlocks; register at startup.
    ///
    /// Example:
    /// ```ignore
    /// registry.register::<SubmissionView, _>(ARTICLE_VIEW, |_hook, view| {
    ///     view.headers.add("custom", "<meta name=\"x\" content=\"y\"/>");
    ///     HookOutcome::Continue
    /// });
    /// ```
    pub fn register<A, F>(&self, hook_name: &str, handler: F)
    where
        A: HookArgs,
        F: Fn(&str, &mut A) -> HookOutcome + Send + Sync + 'static,
    {
        let wrapped: HookHandler = Box::new(move |hook: &str, args: &mut dyn Any| {
            args.downcast_mut::<A>().map(|typed| handler(hook, typed))
        });

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers
            .entry(hook_name.to_string())
            .or_default()
            .push(wrapped);

        debug!(
            "[HOOK] registered handler for {} ({})",
            hook_name,
            std::any::type_name::<A>()
        );
    }

    /// Call a hook
    ///
    /// This will:
    /// 1. Run every handler for `hook_name` in registration order
    /// 2. Stop early if one returns `HookOutcome::Handled`
    /// 3. Log the call
    ///
    /// Returns true if a handler claimed the hook.
    pub fn call<A>(&self, hook_name: &str, args: &mut A) -> bool
    where
        A: HookArgs,
    {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let hook_handlers = handlers.get(hook_name);
        let handler_count = hook_handlers.map(|h| h.len()).unwrap_or(0);
        let args_type = args.args_type();

        let mut handled = false;

        if let Some(hook_handlers) = hook_handlers {
            for (idx, handler) in hook_handlers.iter().enumerate() {
                let erased: &mut dyn Any = &mut *args;

                // Catch panics to prevent one handler from breaking the page
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(hook_name, &mut *erased)
                }));

                match result {
                    Ok(Some(HookOutcome::Handled)) => {
                        handled = true;
                        break;
                    }
                    Ok(Some(HookOutcome::Continue)) => {}
                    Ok(None) => {
                        warn!(
                            "[HOOK] handler {} for {} expects other arguments than {}",
                            idx, hook_name, args_type
                        );
                    }
                    Err(panic) => {
                        error!(
                            "[HOOK] handler {} for {} panicked: {}",
                            idx,
                            hook_name,
                            panic_message(panic.as_ref())
                        );
                    }
                }
            }
        }
        drop(handlers);

        let entry = HookLogEntry {
            invocation_id: Uuid::new_v4(),
            hook_name: hook_name.to_string(),
            args_type: args_type.to_string(),
            occurred_at: Utc::now().to_rfc3339(),
            handler_count,
            handled,
        };

        debug!(
            "[HOOK] {} (id: {}) | {} handlers | handled={}",
            entry.hook_name, entry.invocation_id, entry.handler_count, entry.handled
        );

        self.call_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);

        handled
    }

    /// Get the call log (for debugging)
    pub fn get_call_log(&self) -> Vec<HookLogEntry> {
        self.call_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the call log
    pub fn clear_call_log(&self) {
        self.call_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of handlers registered for a hook name
    pub fn handler_count(&self, hook_name: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(hook_name)
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Make HookRegistry cloneable (shared reference)
impl Clone for HookRegistry {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            call_log: Arc::clone(&self.call_log),
        }
    }
}
