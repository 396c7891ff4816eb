//! A sheet plus a fixed-step frame clock.

use toybox_geometry::Point;
use toybox_gestures::PointerEvent;
use toybox_sheet::{BottomSheet, FixedViewport, SheetConfig, SheetError, SheetViewport};

use crate::recorder::EventRecorder;

/// ~60 FPS.
pub const DEFAULT_FRAME: f32 = 1.0 / 60.0;

/// Upper bound for [`SheetHarness::settle`] before it gives up.
pub const MAX_SETTLE_FRAMES: usize = 10_000;

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1080.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1920.0;

/// Drives a [`BottomSheet`] through scripted gestures and frames while
/// recording its notifications.
pub struct SheetHarness<V: SheetViewport = FixedViewport> {
    sheet: BottomSheet<V>,
    recorder: EventRecorder,
    frame: f32,
    frames_run: usize,
}

impl SheetHarness<FixedViewport> {
    /// `config` on a 1080x1920 bottom-left-origin viewport.
    pub fn new(config: SheetConfig) -> Result<Self, SheetError> {
        Self::with_viewport(
            config,
            FixedViewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        )
    }
}

impl<V: SheetViewport> SheetHarness<V> {
    pub fn with_viewport(config: SheetConfig, viewport: V) -> Result<Self, SheetError> {
        let mut sheet = BottomSheet::new(config, viewport)?;
        let recorder = EventRecorder::new();
        recorder.attach(&mut sheet);
        Ok(Self {
            sheet,
            recorder,
            frame: DEFAULT_FRAME,
            frames_run: 0,
        })
    }

    pub fn with_frame(mut self, seconds: f32) -> Self {
        self.frame = seconds;
        self
    }

    pub fn sheet(&self) -> &BottomSheet<V> {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet<V> {
        &mut self.sheet
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run
    }

    /// Y coordinate of detent `index` in sheet space.
    pub fn detent_y(&self, index: usize) -> f32 {
        self.sheet.detents().ratio(index) * self.sheet.viewport().height()
    }

    pub fn advance(&mut self, frames: usize) {
        for _ in 0..frames {
            self.sheet.tick(self.frame);
            self.frames_run += 1;
        }
    }

    /// Ticks until no animation is running and returns how many frames that
    /// took.
    ///
    /// # Panics
    /// If the sheet is still animating after [`MAX_SETTLE_FRAMES`].
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.sheet.is_animating() {
            assert!(
                frames < MAX_SETTLE_FRAMES,
                "sheet still animating after {} frames",
                MAX_SETTLE_FRAMES
            );
            self.advance(1);
            frames += 1;
        }
        log::trace!("SheetHarness: settled after {} frames", frames);
        frames
    }

    /// Press and release at `at` one frame apart.
    pub fn tap(&mut self, at: Point) {
        self.sheet.dispatch(&PointerEvent::down(at));
        self.advance(1);
        self.sheet.dispatch(&PointerEvent::up(at));
    }

    /// Press at `from`, move to `to` in `steps` equal moves with one frame
    /// after each, then release at `to`.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) {
        let steps = steps.max(1);
        self.sheet.dispatch(&PointerEvent::down(from));
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let position = from.lerp_unclamped(to, fraction);
            self.sheet.dispatch(&PointerEvent::moved(position));
            self.advance(1);
        }
        self.sheet.dispatch(&PointerEvent::up(to));
    }
}
