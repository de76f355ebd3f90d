// Browser host for the particle field. Binds a canvas to the window's display
// refresh and resize events, and releases both on stop/drop.

use crate::config::{FieldConfig, Preset};
use crate::error::AnimatorError;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::renderer::CanvasRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

struct Scene {
    canvas: HtmlCanvasElement,
    frame_loop: FrameLoop<CanvasRenderer>,
}

impl Scene {
    // Matches the canvas to the window and returns the new surface size
    fn fit_canvas(&mut self, window: &Window) -> (f64, f64) {
        let (width, height) = viewport_size(window);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (width, height)
    }
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Host {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    frame_callback: Callback,
    resize_callback: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
pub struct ParticleAnimator {
    // None when the page can't host the animation; every method is then a no-op
    host: Option<Host>,
}

#[wasm_bindgen]
impl ParticleAnimator {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, preset: Option<String>) -> ParticleAnimator {
        let preset = match preset.as_deref().map(str::parse::<Preset>) {
            Some(Ok(preset)) => preset,
            Some(Err(err)) => {
                log::warn!("{}, using default", err);
                Preset::default()
            }
            None => Preset::default(),
        };
        match Host::attach(canvas, preset.config()) {
            Ok(host) => ParticleAnimator { host: Some(host) },
            Err(err) => {
                log::debug!("particle background disabled: {}", err);
                ParticleAnimator { host: None }
            }
        }
    }

    pub fn start(&mut self) {
        if let Some(host) = self.host.as_mut() {
            if let Err(err) = host.start() {
                log::warn!("could not start particle background: {}", err);
                host.stop();
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.host
            .as_ref()
            .map_or(false, |host| host.scene.borrow().frame_loop.is_running())
    }

    pub fn particle_count(&self) -> usize {
        self.host
            .as_ref()
            .map_or(0, |host| host.scene.borrow().frame_loop.field().len())
    }
}

impl Drop for ParticleAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Host {
    fn attach(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Host, AnimatorError> {
        let window = web_sys::window().ok_or_else(|| AnimatorError::Js("no global window".to_owned()))?;
        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let renderer = CanvasRenderer::from_canvas(&canvas).ok_or(AnimatorError::ContextUnavailable)?;
        let field = ParticleField::new(width, height, config)?;
        let scene = Scene {
            canvas,
            frame_loop: FrameLoop::new(field, renderer),
        };

        Ok(Host {
            window,
            scene: Rc::new(RefCell::new(scene)),
            frame_callback: Rc::new(RefCell::new(None)),
            resize_callback: None,
        })
    }

    fn start(&mut self) -> Result<(), AnimatorError> {
        if self.scene.borrow().frame_loop.is_running() {
            return Ok(());
        }
        {
            // resizes while stopped were not observed
            let mut scene = self.scene.borrow_mut();
            let (width, height) = scene.fit_canvas(&self.window);
            scene.frame_loop.sync_size(width, height);
            scene.frame_loop.start();
        }

        let resize_callback = {
            let scene = self.scene.clone();
            let window = self.window.clone();
            Closure::wrap(Box::new(move || {
                let mut scene = scene.borrow_mut();
                let (width, height) = scene.fit_canvas(&window);
                scene.frame_loop.resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())?;
        self.resize_callback = Some(resize_callback);

        // The frame callback re-schedules itself through this shared cell.
        // stop() empties the cell, which breaks the cycle.
        let frame_callback = {
            let scene = self.scene.clone();
            let window = self.window.clone();
            let next = self.frame_callback.clone();
            Closure::wrap(Box::new(move || {
                if !scene.borrow_mut().frame_loop.on_frame() {
                    return;
                }
                if let Some(callback) = next.borrow().as_ref() {
                    let request = window.request_animation_frame(callback.as_ref().unchecked_ref());
                    if let Err(err) = scene.borrow_mut().frame_loop.scheduled(request) {
                        log::warn!("requestAnimationFrame failed, stopping: {:?}", err);
                    }
                }
            }) as Box<dyn FnMut()>)
        };
        let request = self
            .window
            .request_animation_frame(frame_callback.as_ref().unchecked_ref::<js_sys::Function>());
        *self.frame_callback.borrow_mut() = Some(frame_callback);
        self.scene.borrow_mut().frame_loop.scheduled(request)?;

        log::debug!(
            "particle background started with {} particles",
            self.scene.borrow().frame_loop.field().len()
        );
        Ok(())
    }

    fn stop(&mut self) {
        let mut scene = self.scene.borrow_mut();
        scene.frame_loop.stop();
        if let Some(handle) = scene.frame_loop.take_pending() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::debug!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        drop(scene);

        if let Some(callback) = self.resize_callback.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::debug!("removeEventListener failed: {:?}", err);
            }
        }
        self.frame_callback.borrow_mut().take();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
