//! The sheet motion controller.
//!
//! All state lives in [`BottomSheet`] and changes only through its methods.
//! Time advances solely through [`BottomSheet::tick`]; pointer handlers record
//! intent and start transitions, and `tick` moves the sheet.

use toybox_animation::{Lerp, Tween, TweenStep};
use toybox_geometry::Point;
use toybox_gestures::{
    classify_release, PointerEvent, PointerEventKind, Release, SwipeDirection, SwipeSampler,
    TouchSession, MIN_ANIMATION_DURATION,
};

use crate::config::SheetConfig;
use crate::detents::DetentSet;
use crate::error::SheetError;
use crate::listeners::{ListenerId, SheetEvent, SheetListeners};
use crate::viewport::{FixedViewport, SheetViewport};

/// The one in-flight transition. Replacing it drops the old one.
struct SheetAnimation {
    tween: Tween<Point>,
    detent: usize,
}

/// Detent-snapping bottom sheet driven by pointer events and frame ticks.
pub struct BottomSheet<V: SheetViewport = FixedViewport> {
    config: SheetConfig,
    detents: DetentSet,
    viewport: V,
    /// Height at construction; used when the viewport later reports nonsense.
    initial_height: f32,
    scale_factor: f32,
    current_detent: usize,
    is_open: bool,
    position: Point,
    touch: Option<TouchSession>,
    /// Survives pointer-up so a following drag end can read it.
    swipe_samples: SwipeSampler,
    last_frame_delta: f32,
    animation: Option<SheetAnimation>,
    /// Seconds left before `Dismissed` fires.
    pending_dismiss: Option<f32>,
    dismissed: bool,
    listeners: SheetListeners,
}

impl BottomSheet<FixedViewport> {
    /// Default configuration on a fixed viewport.
    pub fn with_defaults(width: f32, height: f32) -> Result<Self, SheetError> {
        Self::new(SheetConfig::default(), FixedViewport::new(width, height))
    }
}

impl<V: SheetViewport> BottomSheet<V> {
    /// Validates `config` and places the sheet at rest on the lowest detent.
    pub fn new(config: SheetConfig, viewport: V) -> Result<Self, SheetError> {
        let detents = config.validate()?;
        let height = viewport.height();
        if !height.is_finite() || height <= 0.0 {
            return Err(SheetError::InvalidViewport { height });
        }
        let scale_factor = config
            .reference_height
            .map_or(1.0, |reference| reference / height);
        let position = Point::new(0.0, detents.lowest() * height);

        log::debug!(
            "BottomSheet: detents {:?}, viewport height {}, scale factor {}",
            detents.as_slice(),
            height,
            scale_factor
        );

        Ok(Self {
            config,
            detents,
            viewport,
            initial_height: height,
            scale_factor,
            current_detent: 0,
            is_open: false,
            position,
            touch: None,
            swipe_samples: SwipeSampler::new(),
            last_frame_delta: 0.0,
            animation: None,
            pending_dismiss: None,
            dismissed: false,
            listeners: SheetListeners::default(),
        })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn current_detent(&self) -> usize {
        self.current_detent
    }

    /// Current position as a fraction of the viewport height.
    pub fn current_ratio(&self) -> f32 {
        self.position.y / self.viewport_height()
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Whether the sheet has been asked to open and not yet closed. Tracks
    /// intent, not position.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_touching(&self) -> bool {
        self.touch.is_some()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn is_dismiss_pending(&self) -> bool {
        self.pending_dismiss.is_some()
    }

    /// Detent the in-flight animation is heading to, if any.
    pub fn animation_target(&self) -> Option<Point> {
        self.animation.as_ref().map(|animation| *animation.tween.target())
    }

    /// Index of the detent closest to the current position.
    pub fn nearest_detent(&self) -> usize {
        self.detents.nearest_index(self.current_ratio())
    }

    /// Release velocity implied by the samples of the last drag, in pixels per
    /// second. Positive is upwards.
    pub fn average_swipe_velocity(&self) -> f32 {
        self.swipe_samples.average_velocity(self.last_frame_delta)
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    pub fn on_opened(&mut self, mut callback: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add(Some(SheetEvent::Opened), move |_| callback())
    }

    pub fn on_closed(&mut self, mut callback: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add(Some(SheetEvent::Closed), move |_| callback())
    }

    pub fn on_dismissed(&mut self, mut callback: impl FnMut() + 'static) -> ListenerId {
        self.listeners.add(Some(SheetEvent::Dismissed), move |_| callback())
    }

    /// Receives every notification.
    pub fn add_listener(&mut self, callback: impl FnMut(SheetEvent) + 'static) -> ListenerId {
        self.listeners.add(None, callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Starts a touch session. Any running animation stops; the touch-follow
    /// loop owns the position until release.
    pub fn pointer_down(&mut self, position: Point) {
        if self.dismissed {
            return;
        }
        if self.animation.take().is_some() {
            log::trace!("BottomSheet: press interrupted animation");
        }
        self.swipe_samples.clear();
        self.touch = Some(TouchSession::begin(position, self.position));
    }

    /// Drags the follow target by the pointer's vertical travel in sheet space
    /// and records the travel for velocity estimation.
    pub fn pointer_move(&mut self, position: Point) {
        if self.dismissed {
            return;
        }
        let Some(session) = self.touch.as_mut() else {
            return;
        };
        let previous = session.record_move(position);
        let delta_y = self.viewport.to_sheet_y(position) - self.viewport.to_sheet_y(previous);
        session.follow_target.y += delta_y;
        self.swipe_samples.push(delta_y);
    }

    /// Ends the touch session. A short press without movement is a tap and
    /// advances to the next detent, wrapping around at the top.
    pub fn pointer_up(&mut self, position: Point) {
        if self.dismissed {
            return;
        }
        let Some(session) = self.touch.take() else {
            return;
        };
        if session.is_tap(self.config.max_tap_duration) {
            let next = self.detents.next_cyclic(self.current_detent);
            log::debug!(
                "BottomSheet: tap at {:?}, detent {} -> {}",
                position,
                self.current_detent,
                next
            );
            self.animate_to_index(next as isize);
        }
    }

    /// Resolves a finished drag: a fast release jumps one detent in the swipe
    /// direction (clamped, no wrap), anything slower settles on the nearest
    /// detent.
    pub fn drag_end(&mut self) {
        if self.dismissed {
            return;
        }
        self.touch = None;

        let velocity = self.average_swipe_velocity();
        let current = self.current_detent as isize;
        match classify_release(velocity, self.config.swipe_velocity_threshold) {
            Release::Swipe(SwipeDirection::Up) => {
                log::debug!("BottomSheet: swipe up at {} px/s", velocity);
                self.animate_to_index(current + 1);
            }
            Release::Swipe(SwipeDirection::Down) => {
                log::debug!("BottomSheet: swipe down at {} px/s", velocity);
                self.animate_to_index(current - 1);
            }
            Release::Settle => {
                let nearest = self.nearest_detent();
                log::debug!(
                    "BottomSheet: release at {} px/s settles on detent {}",
                    velocity,
                    nearest
                );
                self.animate_to_index(nearest as isize);
            }
        }
    }

    /// Routes a raw pointer event.
    ///
    /// Moves that stay within `drag_slop` of the press origin are swallowed so
    /// finger jitter does not turn a tap into a drag. Release and cancel end a
    /// drag with [`drag_end`](Self::drag_end).
    pub fn dispatch(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.position),
            PointerEventKind::Move => {
                let Some(session) = self.touch.as_ref() else {
                    return;
                };
                if session.dragged() || session.exceeded_slop(event.position, self.config.drag_slop)
                {
                    self.pointer_move(event.position);
                }
            }
            PointerEventKind::Up => {
                let dragged = self.touch.as_ref().is_some_and(TouchSession::dragged);
                self.pointer_up(event.position);
                if dragged {
                    self.drag_end();
                }
            }
            PointerEventKind::Cancel => {
                let dragged = self.touch.as_ref().is_some_and(TouchSession::dragged);
                self.touch = None;
                if dragged {
                    self.drag_end();
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Programmatic control
    // ---------------------------------------------------------------------

    /// Animates to the configured open detent. No-op while already open.
    pub fn open(&mut self) {
        if self.dismissed || self.is_open {
            return;
        }
        self.is_open = true;
        log::debug!("BottomSheet: open");
        self.animate_to_index(self.config.open_detent as isize);
    }

    /// Animates to the lowest detent. No-op while already closed.
    pub fn close(&mut self) {
        if self.dismissed || !self.is_open {
            return;
        }
        self.is_open = false;
        log::debug!("BottomSheet: close");
        self.animate_to_index(0);
    }

    /// User-initiated close: heads for the lowest detent whatever the open
    /// flag says, and fires [`SheetEvent::Dismissed`] once `dismiss_delay`
    /// seconds of ticks have passed.
    ///
    /// The delay does not wait for the animation. Repeated requests keep the
    /// first deadline.
    pub fn request_close(&mut self) {
        if self.dismissed {
            return;
        }
        log::debug!(
            "BottomSheet: close requested, dismissing in {}s",
            self.config.dismiss_delay
        );
        self.animate_to_index(0);
        if self.pending_dismiss.is_none() {
            self.pending_dismiss = Some(self.config.dismiss_delay);
        }
    }

    /// Animates to `index`, clamped into range.
    pub fn animate_to_detent(&mut self, index: usize) {
        if self.dismissed {
            return;
        }
        self.animate_to_index(index.min(isize::MAX as usize) as isize);
    }

    // ---------------------------------------------------------------------
    // Frame loop
    // ---------------------------------------------------------------------

    /// Advances one frame by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.dismissed {
            return;
        }
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("BottomSheet: ignoring frame delta {}", dt);
            0.0
        };
        self.last_frame_delta = dt;

        if let Some(session) = self.touch.as_mut() {
            session.accumulate(dt);
            if self.animation.is_none() {
                let factor = (dt * self.config.follow_sharpness).clamp(0.0, 1.0);
                self.position.y = Lerp::lerp(&self.position.y, &session.follow_target.y, factor);
            }
        }

        if let Some(animation) = self.animation.as_mut() {
            match animation.tween.advance(dt) {
                TweenStep::Running(position) => self.position = position,
                TweenStep::Finished(position) => {
                    self.position = position;
                    let detent = animation.detent;
                    self.animation = None;
                    self.finish_transition(detent);
                }
            }
        }

        if let Some(remaining) = self.pending_dismiss.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.pending_dismiss = None;
                self.dismiss();
            }
        }
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn viewport_height(&self) -> f32 {
        let height = self.viewport.height();
        if height.is_finite() && height > 0.0 {
            height
        } else {
            log::warn!(
                "BottomSheet: viewport height {} unusable, keeping {}",
                height,
                self.initial_height
            );
            self.initial_height
        }
    }

    fn detent_position(&self, index: usize) -> Point {
        self.position.with_y(self.detents.ratio(index) * self.viewport_height())
    }

    fn animate_to_index(&mut self, index: isize) {
        let index = self.detents.clamp_index(index);
        self.current_detent = index;

        let target = self.detent_position(index);
        let distance = self.position.distance(target);
        let duration = distance * self.scale_factor / self.config.animation_speed;

        if duration < MIN_ANIMATION_DURATION {
            log::trace!("BottomSheet: snapping to detent {}", index);
            self.animation = None;
            self.position = target;
            return;
        }

        log::trace!(
            "BottomSheet: animating to detent {} over {:.3}s",
            index,
            duration
        );
        self.animation = Some(SheetAnimation {
            tween: Tween::new(
                self.position,
                target,
                duration,
                self.config.bounce_curve.clone(),
            ),
            detent: index,
        });
    }

    fn finish_transition(&mut self, detent: usize) {
        if self.detents.is_highest(detent) {
            log::debug!("BottomSheet: opened");
            self.listeners.emit(SheetEvent::Opened);
        } else if self.detents.is_lowest(detent) {
            log::debug!("BottomSheet: closed");
            self.listeners.emit(SheetEvent::Closed);
        }
    }

    fn dismiss(&mut self) {
        log::debug!("BottomSheet: dismissed");
        self.dismissed = true;
        self.animation = None;
        self.touch = None;
        self.listeners.emit(SheetEvent::Dismissed);
    }
}
