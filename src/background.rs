// Browser host for a ParticleField. Mounting on a canvas grabs its 2d
// context, sizes the backing store to the element's layout size, hooks the
// resize/pointer listeners and starts a requestAnimationFrame loop.
// Unmounting (or dropping the handle) undoes all of it.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::utils::{self, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

type Shared<T> = Rc<RefCell<T>>;
type FrameCallback = Shared<Option<Closure<dyn FnMut()>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Listener, JsValue> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            kind,
            callback,
        })
    }

    fn detach(self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
        if let Err(err) = removed {
            console::error_1(&err);
        }
    }
}

// Everything a live background owns. Dropping it stops the loop and
// releases the listeners, so a failed mount cleans up after itself too.
struct Mounted {
    window: Window,
    field: Shared<ParticleField>,
    frames: Shared<FrameLoop>,
    tick: FrameCallback,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        self.listeners.push(Listener::attach(target, kind, callback)?);
        Ok(())
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        let window = &self.window;
        self.frames.borrow_mut().stop(|handle| {
            if let Err(err) = window.cancel_animation_frame(handle) {
                console::error_1(&err);
            }
        });
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        // the frame closure holds a clone of `tick`, break the cycle
        let tick = self.tick.borrow_mut().take();
        drop(tick);
    }
}

#[wasm_bindgen]
pub struct ParticleBackground {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn mount(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::mount_with_config(canvas, FieldConfig::default())
    }

    pub fn mount_with(
        canvas: HtmlCanvasElement,
        particle_count: u32,
        pointer_links: bool,
    ) -> Result<ParticleBackground, JsValue> {
        let config = FieldConfig {
            particle_count: particle_count as usize,
            pointer_links,
            ..FieldConfig::default()
        };
        ParticleBackground::mount_with_config(canvas, config)
    }

    /// Stops the animation loop and removes every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            drop(mounted);
            utils::debug("particle background: unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .as_ref()
            .map_or(false, |m| m.frames.borrow().is_scheduled())
    }

    pub fn listener_count(&self) -> u32 {
        self.inner.as_ref().map_or(0, |m| m.listeners.len() as u32)
    }

    pub fn particle_count(&self) -> u32 {
        self.inner
            .as_ref()
            .map_or(0, |m| m.field.borrow().particles().len() as u32)
    }
}

impl ParticleBackground {
    /// Mounts with full control over the field. A canvas that can't hand out
    /// a 2d context yields an idle handle rather than an error.
    pub fn mount_with_config(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<ParticleBackground, JsValue> {
        let (window, context) = match (web_sys::window(), context_2d(&canvas)) {
            (Some(window), Some(context)) => (window, context),
            _ => {
                utils::debug("particle background: no 2d context, staying idle");
                return Ok(ParticleBackground { inner: None });
            }
        };

        let mut field = ParticleField::new(config);
        fit_to_layout(&canvas, &mut field);

        let mut mounted = Mounted {
            window: window.clone(),
            field: Rc::new(RefCell::new(field)),
            frames: Rc::new(RefCell::new(FrameLoop::new())),
            tick: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };
        let callback = frame_callback(&mounted, context);
        *mounted.tick.borrow_mut() = Some(callback);

        let on_resize = {
            let canvas = canvas.clone();
            let field = mounted.field.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                fit_to_layout(&canvas, &mut field.borrow_mut());
            }) as Box<dyn FnMut(Event)>)
        };
        mounted.listen(&window, "resize", on_resize)?;

        if config.pointer_links {
            let on_move = {
                let canvas = canvas.clone();
                let field = mounted.field.clone();
                Closure::wrap(Box::new(move |event: Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        let rect = canvas.get_bounding_client_rect();
                        field.borrow_mut().set_pointer(
                            event.client_x() as f64 - rect.left(),
                            event.client_y() as f64 - rect.top(),
                        );
                    }
                }) as Box<dyn FnMut(Event)>)
            };
            mounted.listen(&canvas, "mousemove", on_move)?;

            let on_leave = {
                let field = mounted.field.clone();
                Closure::wrap(Box::new(move |_event: Event| {
                    field.borrow_mut().clear_pointer();
                }) as Box<dyn FnMut(Event)>)
            };
            mounted.listen(&canvas, "mouseleave", on_leave)?;
        }

        request_frame(&mounted.window, &mounted.tick, &mounted.frames)?;
        Ok(ParticleBackground {
            inner: Some(mounted),
        })
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn fit_to_layout(canvas: &HtmlCanvasElement, field: &mut ParticleField) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    if field.resize(width, height) {
        utils::debug(&format!(
            "particle background: seeded {} particles for {}x{}",
            field.particles().len(),
            width,
            height
        ));
    }
}

fn frame_callback(mounted: &Mounted, mut context: CanvasRenderingContext2d) -> Closure<dyn FnMut()> {
    let window = mounted.window.clone();
    let field = mounted.field.clone();
    let frames = mounted.frames.clone();
    let tick = mounted.tick.clone();
    Closure::wrap(Box::new(move || {
        if !frames.borrow_mut().begin_frame() {
            return;
        }
        {
            let mut field = field.borrow_mut();
            let _timer = if field.config().trace {
                Some(Timer::new("ParticleBackground::frame"))
            } else {
                None
            };
            if let Err(err) = field.frame(&mut context) {
                console::error_1(&err);
            }
        }
        if let Err(err) = request_frame(&window, &tick, &frames) {
            console::error_1(&err);
        }
    }) as Box<dyn FnMut()>)
}

fn request_frame(
    window: &Window,
    tick: &FrameCallback,
    frames: &Shared<FrameLoop>,
) -> Result<(), JsValue> {
    let tick = tick.borrow();
    match tick.as_ref() {
        Some(callback) => frames
            .borrow_mut()
            .schedule(|| window.request_animation_frame(callback.as_ref().unchecked_ref())),
        None => Ok(()),
    }
}
