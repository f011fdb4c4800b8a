use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::core::{App, AppControl};

use super::{FrameLoop, FrameScheduler};

type FrameCallback = Closure<dyn FnMut()>;
type CallbackSlot = Rc<RefCell<Option<FrameCallback>>>;

/// Runs one frame per `requestAnimationFrame` callback.
///
/// Cooperative and single-threaded: each frame runs to completion, then
/// control goes back to the browser until the next display refresh. The loop
/// lives until the page is torn down or the app returns `Exit`.
#[derive(Debug, Default)]
pub struct AnimationFrameScheduler;

impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self
    }
}

fn request_frame(callback: &FrameCallback) -> Result<i32> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("requestAnimationFrame failed: {err:?}"))
}

/// Empties the slot, breaking the callback's cycle through it.
///
/// The callback is usually the caller, so it is dropped from a microtask
/// once the current frame has returned.
fn release(slot: &CallbackSlot) {
    if let Some(callback) = slot.borrow_mut().take() {
        wasm_bindgen_futures::spawn_local(async move {
            drop(callback);
        });
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn run<A>(self, mut app: A) -> Result<()>
    where
        A: App + 'static,
    {
        // The callback re-registers itself, so it holds a handle to its own
        // slot. That cycle keeps the loop (and the app) alive after `run`
        // returns, until `release` empties the slot.
        let slot: CallbackSlot = Rc::new(RefCell::new(None));
        let next = slot.clone();
        let mut frames = FrameLoop::new();

        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if frames.step(&mut app) == AppControl::Exit {
                log::info!("render loop stopped after {} frames", frames.frames());
                release(&next);
                return;
            }

            let requested = match next.borrow().as_ref() {
                Some(callback) => request_frame(callback).map(|_| ()),
                None => return,
            };
            if let Err(err) = requested {
                log::error!("{err:#}; stopping render loop");
                release(&next);
            }
        }) as Box<dyn FnMut()>));

        let requested = match slot.borrow().as_ref() {
            Some(callback) => request_frame(callback).map(|_| ()),
            None => Err(anyhow!("frame callback missing")),
        };
        if let Err(err) = requested {
            release(&slot);
            return Err(err);
        }

        log::debug!("animation frame loop started");
        Ok(())
    }
}
