use std::sync::{Mutex, MutexGuard};

// Env vars are process-global; tests touching them must not run interleaved.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Temporarily override environment variables for the duration of `f`.
///
/// Each `(key, value)` pair sets the variable when `value` is `Some` and
/// removes it when `None`. The previous state is restored when `f` returns
/// or panics, and a process-wide mutex keeps parallel tests from observing
/// each other's overrides.
pub fn with_env<R>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let _serialize: MutexGuard<'_, ()> = match ENV_MUTEX.lock() {
        Ok(guard) => guard,
        // A panic in another env test doesn't invalidate the lock's purpose.
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut restore: Vec<(String, Option<String>)> = Vec::with_capacity(overrides.len());
    for (key, value) in overrides {
        if restore.iter().all(|(k, _)| k != key) {
            restore.push((key.to_string(), std::env::var(key).ok()));
        }
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    struct Restore(Vec<(String, Option<String>)>);
    impl Drop for Restore {
        fn drop(&mut self) {
            for (key, value) in self.0.drain(..) {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
    let _restore = Restore(restore);

    f()
}
