// Cancellable repeating frame task. The host calls `on_frame` from its display
// refresh callback and only schedules another frame while it returns true.

use crate::field::ParticleField;
use crate::renderer::Renderer;
use rand::rngs::StdRng;
use rand::Rng;

pub struct FrameLoop<D: Renderer, R: Rng = StdRng> {
    field: ParticleField<R>,
    renderer: D,
    running: bool,
    frames: u64,
    // host handle for the frame that is scheduled but has not fired yet
    pending: Option<i32>,
}

impl<D: Renderer, R: Rng> FrameLoop<D, R> {
    pub fn new(field: ParticleField<R>, renderer: D) -> Self {
        FrameLoop {
            field,
            renderer,
            running: false,
            frames: 0,
            pending: None,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // Renders one tick if running. Returns whether another frame should be scheduled.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        #[cfg(feature = "profiling")]
        let _timer = crate::Timer::new("FrameLoop::on_frame");
        self.field.tick(&mut self.renderer);
        self.frames += 1;
        self.running
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    // Regenerates only when the surface no longer matches `width` x `height`.
    pub fn sync_size(&mut self, width: f64, height: f64) -> bool {
        if self.field.width() == width && self.field.height() == height {
            return false;
        }
        self.field.resize(width, height);
        true
    }

    // Records the outcome of asking the host for the next frame. A failed request
    // leaves nothing scheduled, so the loop stops.
    pub fn scheduled<E>(&mut self, request: Result<i32, E>) -> Result<(), E> {
        match request {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.pending = None;
                self.running = false;
                Err(err)
            }
        }
    }

    pub fn take_pending(&mut self) -> Option<i32> {
        self.pending.take()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }
}
