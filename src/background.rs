// Browser glue for the particle field: wires a FieldLoop to a canvas,
// requestAnimationFrame and the window's mousemove / resize events.
//
// The loop lives in an Rc<RefCell<..>>; the frame callback and both listeners
// only hold Weak references to it, so tearing down the BackgroundField drops
// the whole thing even if the browser still has a callback queued.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::animation::{FieldLoop, Host};
use crate::config::FieldConfig;
use crate::error::{FieldError, Result};
use crate::field::ParticleField;
use crate::logging::Timer;
use crate::renderer::CanvasRenderer;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::theme::{self, Theme};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type CanvasLoop = FieldLoop<CanvasRenderer, AnimationFrameScheduler, DocumentHost>;

pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| FieldError::Js("frame callback already released".to_owned()))?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.window.cancel_animation_frame(handle.0).is_err() {
            log::warn!("could not cancel animation frame {}", handle.0);
        }
    }
}

// Theme comes from the `dark` class the ThemeController maintains
pub struct DocumentHost {
    window: Window,
}

impl Host for DocumentHost {
    fn theme(&self) -> Theme {
        Theme::from_dark_flag(theme::document_is_dark())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as u32, height as u32)
}

fn run_frame(animation: &Weak<RefCell<CanvasLoop>>, profile: bool) {
    let animation = match animation.upgrade() {
        Some(animation) => animation,
        None => return,
    };
    let _timer = if profile {
        Some(Timer::new("BackgroundField::frame"))
    } else {
        None
    };
    let result = animation.borrow_mut().frame();
    if let Err(err) = result {
        log::warn!("stopping particle field, frame failed: {}", err);
        animation.borrow_mut().stop();
    }
}

struct Mounted {
    window: Window,
    animation: Rc<RefCell<CanvasLoop>>,
    frame_callback: FrameCallback,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
    fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Mounted> {
        let window = web_sys::window().ok_or_else(|| FieldError::Js("no window".to_owned()))?;
        let renderer = CanvasRenderer::new(canvas)?;
        renderer.apply_background_style(config.opacity)?;

        let (width, height) = viewport_size(&window);
        let profile = config.profile_frames;
        let field = ParticleField::new(config, width, height, StdRng::from_entropy());

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = AnimationFrameScheduler {
            window: window.clone(),
            callback: Rc::clone(&frame_callback),
        };
        let host = DocumentHost {
            window: window.clone(),
        };
        let animation = Rc::new(RefCell::new(FieldLoop::new(field, renderer, scheduler, host)));

        let weak = Rc::downgrade(&animation);
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            run_frame(&weak, profile);
        }) as Box<dyn FnMut()>));

        let weak = Rc::downgrade(&animation);
        let on_mouse_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(animation) = weak.upgrade() {
                animation
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let weak = Rc::downgrade(&animation);
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(animation) = weak.upgrade() {
                let (width, height) = viewport_size(&resize_window);
                animation.borrow_mut().resized(width, height);
            }
        }) as Box<dyn FnMut()>);

        Ok(Mounted {
            window,
            animation,
            frame_callback,
            on_mouse_move,
            on_resize,
        })
    }

    fn attach(&self) -> Result<()> {
        self.window.add_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        )?;
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
        self.animation.borrow_mut().start()?;
        Ok(())
    }

    fn teardown(self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(
                "mousemove",
                self.on_mouse_move.as_ref().unchecked_ref(),
            )
            .and(self.window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            ));
        if removed.is_err() {
            log::warn!("could not detach particle field listeners");
        }
        self.animation.borrow_mut().stop();
        self.frame_callback.borrow_mut().take();
    }
}

/// The animated particle background. Mount it on a canvas once; dropping it
/// (or calling `unmount`) detaches its listeners and stops the frame loop.
#[wasm_bindgen]
pub struct BackgroundField {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl BackgroundField {
    /// Takes over `canvas` as a fixed full-viewport layer. A browser without
    /// a 2d context gets an inert field instead of an error.
    pub fn mount(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> std::result::Result<BackgroundField, JsValue> {
        let config = match config_json {
            Some(json) => FieldConfig::from_json(&json)?,
            None => FieldConfig::default(),
        };
        let mounted = match Mounted::new(canvas, config) {
            Ok(mounted) => mounted,
            Err(FieldError::ContextUnavailable) => {
                log::debug!("no 2d context, particle field disabled");
                return Ok(BackgroundField { inner: None });
            }
            Err(err) => return Err(err.into()),
        };
        if let Err(err) = mounted.attach() {
            mounted.teardown();
            return Err(err.into());
        }
        {
            let animation = mounted.animation.borrow();
            let (width, height) = animation.field().size();
            log::info!(
                "particle field mounted: {} particles over {}x{}",
                animation.field().particles().len(),
                width,
                height
            );
        }
        Ok(BackgroundField {
            inner: Some(mounted),
        })
    }

    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.inner
            .as_ref()
            .map_or(0.0, |m| m.animation.borrow().frames() as f64)
    }
}

impl Drop for BackgroundField {
    fn drop(&mut self) {
        self.unmount();
    }
}
