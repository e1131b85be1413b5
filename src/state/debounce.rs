//! Trailing-edge debouncing on tokio timers
//!
//! Every call cancels the pending timer for its key and schedules a new one,
//! so only the last call in a burst runs, with that call's arguments.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Single-slot debouncer wrapping a function of one argument
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new(delay: Duration, callback: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule `callback(args)` after the delay, cancelling the pending call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&mut self, args: A) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(args);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a scheduled call has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Debouncer keeping at most one pending timer per key
pub struct KeyedDebouncer<K, A> {
    delay: Duration,
    callback: Arc<dyn Fn(K, A) + Send + Sync>,
    slots: HashMap<K, Debouncer<A>>,
}

impl<K, A> KeyedDebouncer<K, A>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    pub fn new(delay: Duration, callback: impl Fn(K, A) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            slots: HashMap::new(),
        }
    }

    /// Schedule `callback(key, args)`, replacing any pending call for the
    /// same key
    pub fn call(&mut self, key: K, args: A) {
        let callback = &self.callback;
        let delay = self.delay;
        let slot = self.slots.entry(key.clone()).or_insert_with(|| {
            let callback = Arc::clone(callback);
            Debouncer::new(delay, move |args| callback(key.clone(), args))
        });
        slot.call(args);
    }

    /// Drop the pending call for `key`, if any
    pub fn cancel(&mut self, key: &K) {
        if let Some(slot) = self.slots.get_mut(key) {
            slot.cancel();
        }
    }

    /// Drop every pending call
    pub fn cancel_all(&mut self) {
        self.slots.values_mut().for_each(Debouncer::cancel);
    }

    /// Number of timers that have not fired yet
    pub fn pending_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_pending()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    const DELAY: Duration = Duration::from_millis(300);

    fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static)
    {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |value| sink.lock().unwrap().push(value))
    }

    async fn settle(duration: Duration) {
        tokio::time::sleep(duration).await;
        tokio::task::yield_now().await;
    }

    mod single {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_burst_runs_once_with_last_args() {
            let (calls, record) = recorder::<&'static str>();
            let mut debouncer = Debouncer::new(DELAY, record);

            debouncer.call("a");
            debouncer.call("ab");
            debouncer.call("ab@");

            settle(DELAY + Duration::from_millis(1)).await;
            assert_eq!(*calls.lock().unwrap(), vec!["ab@"]);
            assert!(!debouncer.is_pending());
        }

        #[tokio::test(start_paused = true)]
        async fn test_nothing_runs_before_delay() {
            let (calls, record) = recorder::<u32>();
            let mut debouncer = Debouncer::new(DELAY, record);

            debouncer.call(1);
            settle(DELAY - Duration::from_millis(10)).await;
            assert!(calls.lock().unwrap().is_empty());
            assert!(debouncer.is_pending());

            settle(Duration::from_millis(20)).await;
            assert_eq!(*calls.lock().unwrap(), vec![1]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_each_call_restarts_the_window() {
            let (calls, record) = recorder::<u32>();
            let mut debouncer = Debouncer::new(DELAY, record);

            for i in 0..5 {
                debouncer.call(i);
                settle(Duration::from_millis(200)).await;
            }
            assert!(calls.lock().unwrap().is_empty());

            settle(DELAY).await;
            assert_eq!(*calls.lock().unwrap(), vec![4]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_separate_windows_each_fire() {
            let (calls, record) = recorder::<u32>();
            let mut debouncer = Debouncer::new(DELAY, record);

            debouncer.call(1);
            settle(DELAY * 2).await;
            debouncer.call(2);
            settle(DELAY * 2).await;

            assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_prevents_call() {
            let (calls, record) = recorder::<u32>();
            let mut debouncer = Debouncer::new(DELAY, record);

            debouncer.call(1);
            debouncer.cancel();
            settle(DELAY * 2).await;

            assert!(calls.lock().unwrap().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_drop_aborts_pending_timer() {
            let (calls, record) = recorder::<u32>();
            let mut debouncer = Debouncer::new(DELAY, record);

            debouncer.call(1);
            drop(debouncer);
            settle(DELAY * 2).await;

            assert!(calls.lock().unwrap().is_empty());
        }
    }

    mod keyed {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_keys_debounce_independently() {
            let (calls, record) = recorder::<(char, u32)>();
            let mut debouncer = KeyedDebouncer::new(DELAY, move |k, v| record((k, v)));

            debouncer.call('a', 1);
            debouncer.call('b', 1);
            debouncer.call('a', 2);
            assert_eq!(debouncer.pending_count(), 2);

            settle(DELAY + Duration::from_millis(1)).await;
            let mut fired = calls.lock().unwrap().clone();
            fired.sort();
            assert_eq!(fired, vec![('a', 2), ('b', 1)]);
            assert_eq!(debouncer.pending_count(), 0);
        }

        #[tokio::test(start_paused = true)]
        async fn test_many_calls_keep_one_timer_per_key() {
            let (_calls, record) = recorder::<(u8, u32)>();
            let mut debouncer = KeyedDebouncer::new(DELAY, move |k, v| record((k, v)));

            for i in 0..100 {
                debouncer.call(0u8, i);
            }
            assert_eq!(debouncer.pending_count(), 1);
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_only_affects_one_key() {
            let (calls, record) = recorder::<(char, u32)>();
            let mut debouncer = KeyedDebouncer::new(DELAY, move |k, v| record((k, v)));

            debouncer.call('a', 1);
            debouncer.call('b', 1);
            debouncer.cancel(&'a');
            settle(DELAY * 2).await;

            assert_eq!(*calls.lock().unwrap(), vec![('b', 1)]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_all() {
            let (calls, record) = recorder::<(char, u32)>();
            let mut debouncer = KeyedDebouncer::new(DELAY, move |k, v| record((k, v)));

            debouncer.call('a', 1);
            debouncer.call('b', 1);
            debouncer.cancel_all();
            settle(DELAY * 2).await;

            assert!(calls.lock().unwrap().is_empty());
            assert_eq!(debouncer.pending_count(), 0);
        }
    }
}
