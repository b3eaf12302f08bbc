//! The divider and milestone controller.
//!
//! [`Controller`] owns the [`InteractionState`] and is the only writer to
//! it. Input arrives through [`Controller::dispatch`]; time-based work
//! (debounced scroll/resize recomputation, coalesced drag moves, animation
//! steps) runs from [`Controller::tick`], which the host calls once per
//! display refresh.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::animation::Animation;
use crate::clock::Clock;
use crate::config::Config;
use crate::crossfade::Crossfade;
use crate::input::{InputEvent, Key, Propagation};
use crate::navigation::{current_from_scroll, offset_index};
use crate::schedule::{Debouncer, FrameSlot};
use crate::snap::snap_target;
use crate::surface::{Anchor, InputSource, Surface};

/// Interaction state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionState {
    pub is_dragging: bool,
    pub current_milestone: usize,
    /// Divider position in percent, always within `[0, 100]`.
    pub divider_position: f64,
    pub is_animating: bool,
}

/// Startup validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// A required visual anchor is missing from the surface.
    #[error("Required element #{0} not found")]
    MissingAnchor(Anchor),

    /// The surface has no milestones to navigate.
    #[error("No milestone elements found")]
    NoMilestones,
}

/// Timeline controller bound to one host surface.
pub struct Controller<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    config: Config,
    crossfade: Crossfade,
    state: InteractionState,
    /// Divider position when the current drag began.
    drag_baseline: f64,
    /// Pointer or touch x where the current drag began.
    drag_start_x: f64,
    animation: Option<Animation>,
    drag_frame: FrameSlot<f64>,
    scroll_debounce: Debouncer,
    resize_debounce: Debouncer,
    listeners: Vec<InputSource>,
    destroyed: bool,
}

impl<S: Surface, C: Clock> Controller<S, C> {
    /// Validate the surface, register input listeners and apply the
    /// initial visual state.
    ///
    /// Nothing is registered when validation fails.
    pub fn new(surface: S, clock: C, config: Config) -> Result<Self, ControllerError> {
        validate(&surface).inspect_err(|e| warn!("failed to initialize timeline controller: {e}"))?;

        let position = config.initial_position();
        let mut controller = Self {
            scroll_debounce: Debouncer::new(config.scroll_debounce()),
            resize_debounce: Debouncer::new(config.resize_debounce()),
            surface,
            clock,
            config,
            crossfade: Crossfade::default(),
            state: InteractionState {
                is_dragging: false,
                current_milestone: 0,
                divider_position: position,
                is_animating: false,
            },
            drag_baseline: position,
            drag_start_x: 0.0,
            animation: None,
            drag_frame: FrameSlot::new(),
            listeners: Vec::with_capacity(InputSource::ALL.len()),
            destroyed: false,
        };

        for source in InputSource::ALL {
            controller.surface.listen(source);
            controller.listeners.push(source);
        }

        controller.update_position(position);
        controller.surface.scroll_to(0.0);
        controller.refresh_milestones();

        info!(
            milestones = controller.surface.milestone_count(),
            position, "timeline controller initialized"
        );
        Ok(controller)
    }

    /// Read-only copy of the interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that update geometry (scroll offset,
    /// size) before dispatching the matching event.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The running divider animation, if any.
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Divider position recorded when the current or last drag began.
    pub fn drag_baseline(&self) -> f64 {
        self.drag_baseline
    }

    /// Pointer x recorded when the current or last drag began.
    pub fn drag_start_x(&self) -> f64 {
        self.drag_start_x
    }

    /// Sources currently registered on the surface.
    pub fn listeners(&self) -> &[InputSource] {
        &self.listeners
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // ------------------------------------------------------------------
    // Input dispatch
    // ------------------------------------------------------------------

    /// Route one inbound event.
    ///
    /// Events from sources the controller is not listening to pass
    /// through untouched.
    pub fn dispatch(&mut self, event: InputEvent) -> Propagation {
        match event.source() {
            Some(source) if !self.listeners.contains(&source) => return Propagation::PassThrough,
            None if self.destroyed => return Propagation::PassThrough,
            _ => {}
        }

        match event {
            InputEvent::PointerDown { x } => {
                self.start_drag(x);
                Propagation::Handled
            }
            InputEvent::PointerMove { x } => {
                self.queue_drag_move(x);
                Propagation::PassThrough
            }
            InputEvent::TouchStart { x } => {
                self.start_drag(x);
                Propagation::Handled
            }
            InputEvent::TouchMove { x } => {
                if self.queue_drag_move(x) {
                    Propagation::Handled
                } else {
                    Propagation::PassThrough
                }
            }
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                self.end_drag();
                Propagation::PassThrough
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Scroll => {
                self.scroll_debounce.trigger(self.clock.now());
                Propagation::PassThrough
            }
            InputEvent::Resize => {
                self.resize_debounce.trigger(self.clock.now());
                Propagation::PassThrough
            }
            InputEvent::NavDot(index) => {
                self.navigate_to(index);
                Propagation::PassThrough
            }
            InputEvent::ContextMenu => Propagation::Handled,
            InputEvent::Ready => {
                self.handle_resize();
                Propagation::PassThrough
            }
        }
    }

    /// Keyboard navigation.
    pub fn handle_key(&mut self, key: Key) -> Propagation {
        match key {
            Key::ArrowUp => self.navigate_by(-1),
            Key::ArrowDown | Key::Space => self.navigate_by(1),
            Key::ArrowLeft => self.adjust_divider_position(-self.config.keyboard_step),
            Key::ArrowRight => self.adjust_divider_position(self.config.keyboard_step),
            Key::Home => self.navigate_to(0),
            Key::End => {
                let last = self.surface.milestone_count().saturating_sub(1);
                self.navigate_to(last);
            }
            Key::Other => return Propagation::PassThrough,
        }
        Propagation::Handled
    }

    /// Run work that is due: debounced recomputation, the latest queued
    /// drag move, and one animation step.
    pub fn tick(&mut self) {
        if self.destroyed {
            return;
        }
        let now = self.clock.now();

        if self.scroll_debounce.poll(now) {
            self.update_current_milestone();
        }
        if self.resize_debounce.poll(now) {
            self.handle_resize();
        }

        if let Some(x) = self.drag_frame.take() {
            if self.state.is_dragging {
                self.update_drag_position(x);
            }
        }

        if let Some(animation) = self.animation {
            let step = animation.sample(now);
            self.update_position(step.position);
            if step.finished {
                debug!(target = animation.target(), "divider animation finished");
                self.animation = None;
                self.state.is_animating = false;
            }
        }
    }

    // ------------------------------------------------------------------
    // Divider position engine
    // ------------------------------------------------------------------

    /// Store `percentage` and refresh every divider-derived visual.
    ///
    /// Callers are responsible for clamping.
    pub fn update_position(&mut self, percentage: f64) {
        self.state.divider_position = percentage;
        self.surface.set_divider_position(percentage);
        self.crossfade.apply(percentage, &mut self.surface);
        self.crossfade.apply_labels(percentage, &mut self.surface);
    }

    /// Begin a drag at pointer `x`, cancelling any scripted animation.
    pub fn start_drag(&mut self, x: f64) {
        self.state.is_dragging = true;
        self.drag_baseline = self.state.divider_position;
        self.drag_start_x = x;
        self.surface.set_dragging(true);

        self.drag_frame.cancel();
        self.cancel_animation();
    }

    /// Map pointer `x` into the container and move the divider there.
    pub fn update_drag_position(&mut self, x: f64) {
        let container = self.surface.container();
        let percentage = if container.width > 0.0 {
            ((x - container.left) / container.width * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        if percentage.is_nan() {
            return;
        }
        self.update_position(percentage);
    }

    /// Finish a drag and settle the divider. No-op when not dragging.
    ///
    /// A move still queued for the next frame is applied first so the
    /// release settles from the last pointer position.
    pub fn end_drag(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        if let Some(x) = self.drag_frame.take() {
            self.update_drag_position(x);
        }
        self.state.is_dragging = false;
        self.surface.set_dragging(false);
        self.apply_snap();
    }

    /// Animate to the nearest canonical position when close to one.
    pub fn apply_snap(&mut self) {
        let position = self.state.divider_position;
        if let Some(target) = snap_target(position, self.config.snap_threshold) {
            if (target - position).abs() > f64::EPSILON {
                debug!(from = position, to = target, "snapping divider");
                self.animate_to(target);
            }
        }
    }

    /// Start an eased move to `target`. Ignored while another animation
    /// is running.
    ///
    /// An active drag does not block this. Each tick applies the queued
    /// drag move first, then the animation step.
    pub fn animate_to(&mut self, target: f64) {
        if self.state.is_animating {
            return;
        }
        self.state.is_animating = true;
        self.animation = Some(Animation::new(
            self.state.divider_position,
            target,
            self.clock.now(),
            self.config.animation_duration(),
        ));
    }

    /// Move the divider by `delta` percent through the animation path.
    pub fn adjust_divider_position(&mut self, delta: f64) {
        let target = (self.state.divider_position + delta).clamp(0.0, 100.0);
        self.animate_to(target);
    }

    fn queue_drag_move(&mut self, x: f64) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        self.drag_frame.request(x);
        true
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            debug!("divider animation cancelled");
        }
        self.state.is_animating = false;
    }

    /// Re-derive layer visuals from the stored position.
    fn refresh_layers(&mut self) {
        self.crossfade
            .apply(self.state.divider_position, &mut self.surface);
    }

    // ------------------------------------------------------------------
    // Milestone navigator
    // ------------------------------------------------------------------

    /// Scroll to milestone `index` and mark it current right away.
    /// Out-of-range indices are ignored.
    pub fn navigate_to(&mut self, index: usize) {
        let milestones = self.surface.milestones();
        let Some(target) = milestones.get(index) else {
            return;
        };

        self.surface.scroll_to(target.top);
        self.state.current_milestone = index;
        self.refresh_milestones();
        debug!(index, top = target.top, "navigated to milestone");
    }

    /// Navigate relative to the current milestone. Ignored when the
    /// result falls outside the milestone range.
    pub fn navigate_by(&mut self, delta: isize) {
        let count = self.surface.milestone_count();
        if let Some(index) = offset_index(self.state.current_milestone, delta, count) {
            self.navigate_to(index);
        }
    }

    /// Milestone most recently passed by the viewport center.
    pub fn derive_current_from_scroll(&self) -> usize {
        current_from_scroll(&self.surface.milestones(), self.surface.viewport())
    }

    /// Apply [`Self::derive_current_from_scroll`] when it changed.
    pub fn update_current_milestone(&mut self) {
        let derived = self.derive_current_from_scroll();
        if derived != self.state.current_milestone {
            self.state.current_milestone = derived;
            self.refresh_milestones();
        }
    }

    fn refresh_milestones(&mut self) {
        let current = self.state.current_milestone;
        for index in 0..self.surface.milestone_count() {
            self.surface.set_milestone_active(index, index == current);
        }
        for index in 0..self.surface.nav_dot_count() {
            self.surface.set_nav_dot_active(index, index == current);
        }
    }

    fn handle_resize(&mut self) {
        self.refresh_layers();
        self.update_current_milestone();
    }

    // ------------------------------------------------------------------
    // Public control API
    // ------------------------------------------------------------------

    /// Animate the divider to `percentage`, clamped to `[0, 100]`.
    pub fn set_divider_position(&mut self, percentage: f64) {
        self.animate_to(percentage.clamp(0.0, 100.0));
    }

    pub fn go_to_milestone(&mut self, index: usize) {
        self.navigate_to(index);
    }

    /// Cancel pending frame and debounce work and unregister every
    /// listener. Further input passes through and ticks do nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.drag_frame.cancel();
        self.scroll_debounce.cancel();
        self.resize_debounce.cancel();
        self.cancel_animation();

        if self.state.is_dragging {
            self.state.is_dragging = false;
            self.surface.set_dragging(false);
        }

        for source in self.listeners.drain(..) {
            self.surface.unlisten(source);
        }
        self.destroyed = true;
        info!("timeline controller destroyed");
    }
}

fn validate<S: Surface>(surface: &S) -> Result<(), ControllerError> {
    if let Some(missing) = Anchor::REQUIRED
        .into_iter()
        .find(|anchor| !surface.has_anchor(*anchor))
    {
        return Err(ControllerError::MissingAnchor(missing));
    }
    if surface.milestone_count() == 0 {
        return Err(ControllerError::NoMilestones);
    }
    Ok(())
}
