//! Pacers - the suspension point between two solver steps
//!
//! Every pause returns `Poll::Pending` at least once, so whatever else the
//! executor is running (input handling, a stop button) gets a turn and can
//! clear the solve flag before the next step.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub trait Pacer {
    type Pause: Future<Output = ()>;

    fn pause(&mut self, delay_ms: u32) -> Self::Pause;
}

/// Yield to the executor once per step, ignoring the delay. For headless
/// runs and tests.
pub struct YieldNow;

impl Pacer for YieldNow {
    type Pause = YieldOnce;

    fn pause(&mut self, _delay_ms: u32) -> Self::Pause {
        YieldOnce { yielded: false }
    }
}

pub struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Wait `delay_ms` of wall-clock time, yielding on every poll until the
/// deadline passes. Native counterpart of `BrowserTimer`.
#[cfg(not(target_arch = "wasm32"))]
pub struct Deadline;

#[cfg(not(target_arch = "wasm32"))]
impl Pacer for Deadline {
    type Pause = DeadlinePause;

    fn pause(&mut self, delay_ms: u32) -> Self::Pause {
        let until = std::time::Instant::now() + std::time::Duration::from_millis(u64::from(delay_ms));
        DeadlinePause { until, yielded: false }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct DeadlinePause {
    until: std::time::Instant,
    yielded: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl Future for DeadlinePause {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded && std::time::Instant::now() >= self.until {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserTimer, TimerPause};

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::Pacer;

    /// `setTimeout`-backed pause; the page's event loop runs during it.
    pub struct BrowserTimer;

    impl Pacer for BrowserTimer {
        type Pause = TimerPause;

        fn pause(&mut self, delay_ms: u32) -> Self::Pause {
            TimerPause::new(delay_ms)
        }
    }

    #[derive(Default)]
    struct TimerState {
        fired: bool,
        waker: Option<Waker>,
    }

    pub struct TimerPause {
        state: Rc<RefCell<TimerState>>,
        handle: Option<i32>,
        // Kept alive until the timer fires or the pause is dropped.
        _callback: Option<Closure<dyn FnMut()>>,
    }

    impl TimerPause {
        fn new(delay_ms: u32) -> Self {
            let state = Rc::new(RefCell::new(TimerState::default()));

            let shared = state.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                let mut s = shared.borrow_mut();
                s.fired = true;
                if let Some(waker) = s.waker.take() {
                    waker.wake();
                }
            });

            let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            let handle = web_sys::window().and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    timeout,
                )
                .ok()
            });

            if handle.is_none() {
                console_warn!("setTimeout unavailable, solver pause resolves immediately");
                state.borrow_mut().fired = true;
            }

            Self {
                state,
                handle,
                _callback: Some(callback),
            }
        }
    }

    impl Future for TimerPause {
        type Output = ();

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            let mut s = self.state.borrow_mut();
            if s.fired {
                Poll::Ready(())
            } else {
                s.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }

    impl Drop for TimerPause {
        fn drop(&mut self) {
            if self.state.borrow().fired {
                return;
            }
            if let (Some(handle), Some(window)) = (self.handle, web_sys::window()) {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}
