// Mount lifecycle of the particle field, independent of the browser.
//
// FieldLoop ties a ParticleField to a drawing surface, a frame scheduler and
// a host that answers "which theme" and "how far is the page scrolled". The
// browser glue in background.rs only forwards events and frame callbacks.
// Once stopped, every entry point is a no-op, so a late event or an already
// queued frame can never draw onto a torn down surface.

use crate::error::Result;
use crate::field::{FrameStats, ParticleField};
use crate::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
use crate::surface::Surface;
use crate::theme::Theme;

pub trait Host {
    fn theme(&self) -> Theme;
    fn scroll_y(&self) -> f64;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct FieldLoop<S: Surface, F: FrameScheduler, H: Host> {
    field: ParticleField,
    surface: S,
    scheduler: F,
    host: H,
    pending: Option<FrameHandle>,
    state: LoopState,
    frames: u64,
}

impl<S: Surface, F: FrameScheduler, H: Host> FieldLoop<S, F, H> {
    pub fn new(field: ParticleField, mut surface: S, scheduler: F, host: H) -> Self {
        let (width, height) = field.size();
        surface.resize(width as u32, height as u32);
        FieldLoop {
            field,
            surface,
            scheduler,
            host,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    // Draws the first frame right away; it schedules the rest
    pub fn start(&mut self) -> Result<Option<FrameStats>> {
        if self.state != LoopState::Idle {
            return Ok(None);
        }
        self.state = LoopState::Running;
        self.frame()
    }

    pub fn frame(&mut self) -> Result<Option<FrameStats>> {
        if self.state != LoopState::Running {
            return Ok(None);
        }
        self.pending = None;
        let stats = self
            .field
            .tick(&mut self.surface, self.host.theme(), self.host.scroll_y());
        self.frames += 1;
        self.pending = Some(self.scheduler.request_frame()?);
        Ok(Some(stats))
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        if self.state != LoopState::Running {
            return;
        }
        let scroll_y = self.host.scroll_y();
        self.field.set_pointer(client_x, client_y, scroll_y);
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        if self.state != LoopState::Running {
            return;
        }
        self.surface.resize(width, height);
        self.field.resize(width, height);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Stopped {
            log::debug!("particle field stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<S: Surface, H: Host> FieldLoop<S, ManualScheduler, H> {
    // Runs the pending frame, if any, as if the display just refreshed
    pub fn advance(&mut self) -> Result<Option<FrameStats>> {
        if self.scheduler.fire().is_some() {
            self.frame()
        } else {
            Ok(None)
        }
    }
}

// Fixed theme and scroll offset, for headless runs
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticHost {
    pub theme: Theme,
    pub scroll_y: f64,
}

impl Default for StaticHost {
    fn default() -> Self {
        StaticHost {
            theme: Theme::Dark,
            scroll_y: 0.0,
        }
    }
}

impl Host for StaticHost {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestLoop = FieldLoop<RecordingSurface, ManualScheduler, StaticHost>;

    fn test_loop() -> TestLoop {
        let field = ParticleField::new(
            FieldConfig::default(),
            800,
            600,
            StdRng::seed_from_u64(9),
        );
        FieldLoop::new(
            field,
            RecordingSurface::new(),
            ManualScheduler::new(),
            StaticHost::default(),
        )
    }

    #[test]
    fn nothing_draws_before_start() {
        let mut field_loop = test_loop();
        assert_eq!(field_loop.frame().unwrap(), None);
        assert_eq!(field_loop.surface().draw_count(), 0);
        assert!(!field_loop.scheduler().has_pending());
    }

    #[test]
    fn start_draws_and_schedules_next_frame() {
        let mut field_loop = test_loop();
        let stats = field_loop.start().unwrap().unwrap();
        assert_eq!(stats.particles, 70);
        assert!(field_loop.scheduler().has_pending());
        assert_eq!(field_loop.start().unwrap(), None);

        field_loop.advance().unwrap().unwrap();
        assert_eq!(field_loop.frames(), 2);
        assert_eq!(field_loop.scheduler().requested(), 2);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let mut field_loop = test_loop();
        field_loop.start().unwrap();
        field_loop.stop();
        assert_eq!(field_loop.state(), LoopState::Stopped);
        assert!(!field_loop.scheduler().has_pending());
        assert_eq!(field_loop.scheduler().cancelled(), 1);
        assert_eq!(field_loop.advance().unwrap(), None);

        // stopping twice is harmless
        field_loop.stop();
        assert_eq!(field_loop.scheduler().cancelled(), 1);
    }

    #[test]
    fn pointer_uses_scroll_at_event_time() {
        let mut field_loop = test_loop();
        field_loop.start().unwrap();
        field_loop.host_mut().scroll_y = 120.0;
        field_loop.pointer_moved(10.0, 20.0);
        assert_eq!(field_loop.field().pointer(), [10.0, 140.0]);
    }
}
