use std::time::Duration;

use tracing::{debug, trace};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ViewportKind};

impl<R: Renderer> ChartEngine<R> {
    /// Pointer down in overview-local pixels. Returns `true` when a drag
    /// started.
    pub fn pointer_press(&mut self, x: f64, y: f64) -> bool {
        self.model
            .as_mut()
            .is_some_and(|model| model.selector.press(x, y))
    }

    /// Pointer move in overview-local pixels.
    ///
    /// Returns `true` when the selection moved and a redraw is due. The main
    /// bounds retarget only when the index window actually changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let Some(model) = self.model.as_mut() else {
            return false;
        };
        let previous = model.window();
        if !model.selector.move_to(x, y) {
            return false;
        }
        let window = model.window();
        if window != previous {
            trace!(
                from_index = window.from_index,
                to_index = window.to_index,
                "view window"
            );
            self.retarget_main();
        }
        true
    }

    pub fn pointer_release(&mut self) {
        if let Some(model) = self.model.as_mut() {
            model.selector.release();
        }
    }

    /// Applies a new size to one viewport.
    ///
    /// The new config is validated before anything changes. Resizing the
    /// overview rescales the selection edges and cancels any drag.
    pub fn viewport_resized(&mut self, kind: ViewportKind, viewport: Viewport) -> ChartResult<()> {
        let mut next = self.config.clone();
        match kind {
            ViewportKind::Main => next.main_viewport = viewport,
            ViewportKind::Overview => next.overview_viewport = viewport,
        }
        next.validate()?;
        self.config = next;
        debug!(?kind, width = viewport.width, height = viewport.height, "viewport resized");

        if kind == ViewportKind::Overview {
            let window_changed = self
                .model
                .as_mut()
                .is_some_and(|model| model.selector.resize(viewport));
            if window_changed {
                self.retarget_main();
            }
        }
        Ok(())
    }

    /// Advances both autoscale animations to `now`.
    ///
    /// `now` is a monotonic time supplied by the host's frame callback.
    /// Transitions started by events since the previous frame begin at
    /// `now`. Returns `true` while either animation is still running.
    pub fn advance_frame(&mut self, now: Duration) -> bool {
        self.clock = self.clock.max(now);
        let main = self.main_autoscale.tick(self.clock);
        let overview = self.overview_autoscale.tick(self.clock);
        main || overview
    }
}
