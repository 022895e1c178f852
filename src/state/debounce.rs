//! Trailing-edge debounce over a cancellable timer.

use gloo_timers::callback::Timeout;

/// Something that can run a task after a delay. Dropping the returned handle
/// cancels the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Restarts the quiet period; only the latest task survives it.
    pub fn trigger(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<String>>, Rc<RefCell<Vec<String>>>) {
        (Rc::default(), Rc::default())
    }

    fn keystroke(
        debouncer: &mut Debouncer<ManualClock>,
        input: &Rc<RefCell<String>>,
        renders: &Rc<RefCell<Vec<String>>>,
        value: &str,
    ) {
        *input.borrow_mut() = value.to_string();
        let input = Rc::clone(input);
        let renders = Rc::clone(renders);
        debouncer.trigger(move || renders.borrow_mut().push(input.borrow().clone()));
    }

    #[test]
    fn burst_renders_once_with_final_value() {
        let clock = ManualClock::default();
        let mut debouncer = Debouncer::new(clock.clone(), 200);
        let (input, renders) = recorder();

        keystroke(&mut debouncer, &input, &renders, "s");
        clock.advance(50);
        keystroke(&mut debouncer, &input, &renders, "sl");
        clock.advance(100);
        keystroke(&mut debouncer, &input, &renders, "slo");
        clock.advance(199);
        assert!(renders.borrow().is_empty());
        assert_eq!(clock.pending(), 1);

        clock.advance(1);
        assert_eq!(*renders.borrow(), ["slo"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn pauses_longer_than_delay_render_each_time() {
        let clock = ManualClock::default();
        let mut debouncer = Debouncer::new(clock.clone(), 200);
        let (input, renders) = recorder();

        keystroke(&mut debouncer, &input, &renders, "a");
        clock.advance(250);
        keystroke(&mut debouncer, &input, &renders, "ab");
        clock.advance(250);
        assert_eq!(*renders.borrow(), ["a", "ab"]);
    }

    #[test]
    fn cancel_drops_pending_render() {
        let clock = ManualClock::default();
        let mut debouncer = Debouncer::new(clock.clone(), 200);
        let (input, renders) = recorder();

        keystroke(&mut debouncer, &input, &renders, "x");
        debouncer.cancel();
        clock.advance(500);
        assert!(renders.borrow().is_empty());
    }
}
