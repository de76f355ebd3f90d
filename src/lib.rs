mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod renderer;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animator::ParticleAnimator;
pub use color::{Color, ColorRange};
pub use config::{FieldConfig, Preset};
pub use error::AnimatorError;
pub use field::{Link, ParticleField};
pub use frame_loop::FrameLoop;
pub use particle::Particle;
pub use renderer::{CanvasRenderer, Renderer};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    #[cfg(target_arch = "wasm32")]
    {
        // a second call (hot reload) finds the logger already set
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

// Logs how long its scope took to the browser console
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
