//! Scripted input for the demo.

use toybox_sheet::{BottomSheet, Point, PointerEvent, SheetViewport};

/// Frames allowed for an animation to finish before the script moves on.
const SETTLE_LIMIT: usize = 600;

const TOUCH_X: f32 = 540.0;
const TOUCH_Y: f32 = 600.0;

#[derive(Clone, Copy, Debug)]
pub enum Step {
    Open,
    Close,
    Tap,
    /// A quick four-frame drag; positive distance is upwards.
    Flick { distance: f32 },
    Drag { distance: f32, frames: usize },
    RequestClose,
}

impl Step {
    fn label(&self) -> String {
        match self {
            Step::Open => "open".to_string(),
            Step::Close => "close".to_string(),
            Step::Tap => "tap".to_string(),
            Step::Flick { distance } => format!("flick {:+}", distance),
            Step::Drag { distance, frames } => format!("drag {:+} / {}f", distance, frames),
            Step::RequestClose => "close button".to_string(),
        }
    }
}

pub struct Script {
    frame: f32,
    steps: Vec<Step>,
}

impl Script {
    pub fn new(frame: f32) -> Self {
        Self {
            frame,
            steps: Vec::new(),
        }
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Plays every step, letting the sheet settle in between, and reports the
    /// resulting state through `report`.
    pub fn run<V: SheetViewport>(
        &self,
        sheet: &mut BottomSheet<V>,
        mut report: impl FnMut(&str, &BottomSheet<V>),
    ) {
        for step in &self.steps {
            self.play(*step, sheet);
            let frames = self.settle(sheet);
            log::debug!("{:?} settled in {} frames", step, frames);
            if matches!(step, Step::RequestClose) {
                while sheet.is_dismiss_pending() {
                    sheet.tick(self.frame);
                }
            }
            report(&step.label(), sheet);
        }
    }

    fn play<V: SheetViewport>(&self, step: Step, sheet: &mut BottomSheet<V>) {
        match step {
            Step::Open => sheet.open(),
            Step::Close => sheet.close(),
            Step::RequestClose => sheet.request_close(),
            Step::Tap => {
                let at = Point::new(TOUCH_X, TOUCH_Y);
                sheet.dispatch(&PointerEvent::down(at));
                sheet.tick(self.frame);
                sheet.dispatch(&PointerEvent::up(at));
            }
            Step::Flick { distance } => self.drag(sheet, distance, 4),
            Step::Drag { distance, frames } => self.drag(sheet, distance, frames),
        }
    }

    fn drag<V: SheetViewport>(&self, sheet: &mut BottomSheet<V>, distance: f32, frames: usize) {
        let frames = frames.max(1);
        let from = Point::new(TOUCH_X, TOUCH_Y);
        sheet.dispatch(&PointerEvent::down(from));
        for i in 1..=frames {
            let y = TOUCH_Y + distance * i as f32 / frames as f32;
            sheet.dispatch(&PointerEvent::moved(Point::new(TOUCH_X, y)));
            sheet.tick(self.frame);
        }
        sheet.dispatch(&PointerEvent::up(Point::new(TOUCH_X, TOUCH_Y + distance)));
    }

    fn settle<V: SheetViewport>(&self, sheet: &mut BottomSheet<V>) -> usize {
        let mut frames = 0;
        while sheet.is_animating() && frames < SETTLE_LIMIT {
            sheet.tick(self.frame);
            frames += 1;
        }
        if sheet.is_animating() {
            log::warn!("sheet still animating after {} frames", SETTLE_LIMIT);
        }
        frames
    }
}
