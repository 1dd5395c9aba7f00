// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface: touch, motion and frame callbacks in; view updates out.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size};
use tumble_gesture::{GestureEvent, GestureTable, TouchId};
use tumble_model::{Manipulation, ModelTable, POSITION, SharedAcceleration};
use tumble_motion::{MotionAdapter, MotionSample};
use tumble_physics::{ConfigError, FrameScheduler, Geometry, Integrator, StepReport, Tick};

use crate::config::SurfaceConfig;
use crate::input::{EventControl, TouchBatch, TouchPhase};
use crate::routing::{self, Outcome};
use crate::view::{Marker, View};

/// What one call to [`Surface::activate`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    /// Containers wired by this call.
    pub wired: usize,
    /// Containers skipped because they were already wired or do not exist.
    pub skipped: usize,
    /// Pre-existing bricks initialized and bound by this call.
    pub bricks: usize,
    /// Whether this call started the animation loop.
    pub started: bool,
}

/// A touch-driven drawing surface over a [`View`].
///
/// ```
/// use kurbo::{Point, Size};
/// use tumble_gesture::TouchId;
/// use tumble_surface::{HeadlessView, Surface, SurfaceConfig, TouchBatch, TouchPhase, View};
///
/// let mut view = HeadlessView::new();
/// let area = view.create_root(Point::ZERO, Size::new(400.0, 400.0));
/// let mut surface = Surface::new(view, SurfaceConfig::default()).unwrap();
/// surface.activate([area]);
///
/// let finger = TouchId(1);
/// surface.handle_touch(&TouchBatch::single(TouchPhase::Start, finger, area, Point::new(100.0, 100.0)));
/// surface.handle_touch(&TouchBatch::single(TouchPhase::Move, finger, area, Point::new(140.0, 130.0)));
/// surface.handle_touch(&TouchBatch::single(TouchPhase::End, finger, area, Point::new(140.0, 130.0)));
///
/// let brick = surface.bricks().next().unwrap();
/// assert_eq!(surface.view().size(brick), Some(Size::new(40.0, 30.0)));
/// ```
#[derive(Debug)]
pub struct Surface<V: View> {
    view: V,
    config: SurfaceConfig,
    models: ModelTable<V::Element>,
    gestures: GestureTable<V::Element>,
    acceleration: SharedAcceleration,
    motion: MotionAdapter,
    integrator: Integrator,
    scheduler: FrameScheduler,
    wired: HashSet<V::Element>,
    bound: HashSet<V::Element>,
    // Binding order; integration walks bricks in this order.
    bricks: Vec<V::Element>,
}

impl<V: View> Surface<V> {
    /// Creates an inactive surface over `view`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the physics configuration is unusable.
    pub fn new(view: V, config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let acceleration = SharedAcceleration::new();
        Ok(Self {
            view,
            config,
            models: ModelTable::new(),
            gestures: GestureTable::new(),
            motion: MotionAdapter::new(acceleration.clone()),
            acceleration,
            integrator: Integrator::new(config.physics).with_fault_policy(config.fault_policy),
            scheduler: FrameScheduler::new(config.physics.frame_duration_ms()),
            wired: HashSet::new(),
            bound: HashSet::new(),
            bricks: Vec::new(),
        })
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably. Geometry changes are picked up on the next frame.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The configuration the surface was built with.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Per-element model data.
    pub fn models(&self) -> &ModelTable<V::Element> {
        &self.models
    }

    /// Per-element model data, mutably.
    ///
    /// Writes to a brick under a finger are overwritten by the gesture.
    pub fn models_mut(&mut self) -> &mut ModelTable<V::Element> {
        &mut self.models
    }

    /// Gestures in progress.
    pub fn gestures(&self) -> &GestureTable<V::Element> {
        &self.gestures
    }

    /// The acceleration shared by every brick.
    pub fn acceleration(&self) -> &SharedAcceleration {
        &self.acceleration
    }

    /// The device-motion adapter.
    pub fn motion(&self) -> &MotionAdapter {
        &self.motion
    }

    /// The brick's manipulation state; unknown elements read as free.
    pub fn manipulation(&self, brick: V::Element) -> Manipulation {
        self.models.manipulation(&brick)
    }

    /// Returns `true` if the brick is finalized and accepts move gestures.
    pub fn is_bound(&self, brick: V::Element) -> bool {
        self.bound.contains(&brick)
    }

    /// Returns `true` if the container has been activated.
    pub fn is_wired(&self, container: V::Element) -> bool {
        self.wired.contains(&container)
    }

    /// Finalized bricks, in binding order.
    pub fn bricks(&self) -> impl Iterator<Item = V::Element> + '_ {
        self.bricks.iter().copied()
    }

    /// Turns `containers` into drawing areas and starts the surface.
    ///
    /// For each container not yet wired: mark it as a drawing area, give every
    /// pre-existing brick anywhere inside it a model (position from its current offset, zero
    /// velocity, the shared acceleration) and bind it for moves. Then attach
    /// device motion and start the animation loop if it is stopped.
    ///
    /// Calling this again, with the same or other containers, never wires a
    /// container twice, binds a brick twice, or schedules a second loop.
    pub fn activate(&mut self, containers: impl IntoIterator<Item = V::Element>) -> Activation {
        let mut activation = Activation::default();
        for container in containers {
            if !self.view.contains(container) {
                log::warn!("cannot activate {container:?}: not in the view");
                activation.skipped += 1;
                continue;
            }
            if !self.wired.insert(container) {
                log::debug!("{container:?} is already a drawing area");
                activation.skipped += 1;
                continue;
            }
            self.view.add_class(container, Marker::DrawingArea);
            activation.wired += 1;

            for element in self.view.descendants(container) {
                if !self.view.has_class(element, Marker::Brick) || self.bound.contains(&element) {
                    continue;
                }
                let Some(offset) = self.view.offset(element) else {
                    log::warn!("pre-existing brick {element:?} has no offset");
                    continue;
                };
                self.models.init_free_brick(element, offset, &self.acceleration);
                self.bind(element);
                activation.bricks += 1;
            }
        }
        self.motion.attach(self.config.motion);
        activation.started = self.scheduler.start();
        log::debug!("activate: {activation:?}");
        activation
    }

    /// Restarts the animation loop. Returns `false` if it was running.
    pub fn start(&mut self) -> bool {
        self.scheduler.start()
    }

    /// Stops the animation loop. Returns `false` if it was stopped.
    pub fn stop(&mut self) -> bool {
        self.scheduler.stop()
    }

    /// Returns `true` while the animation loop is running.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Writes a device-motion sample into the shared acceleration.
    ///
    /// Returns `false` if the sample was dropped.
    pub fn on_motion(&mut self, sample: MotionSample) -> bool {
        self.motion.on_sample(sample)
    }

    /// Handles one animation-frame callback.
    ///
    /// When the frame gate lets the callback through, every free brick is
    /// advanced one step and its view offset updated. The host should request
    /// another callback if [`Tick::rearm`] is `true`.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Tick {
        let tick = self.scheduler.tick(timestamp_ms);
        if tick.is_step() {
            let report = self.step();
            log::trace!(
                "frame at {timestamp_ms}ms: {} integrated, {} held, {} faulted",
                report.integrated,
                report.manipulated,
                report.faulted
            );
        }
        tick
    }

    /// Runs one integration step now, ignoring the frame gate.
    ///
    /// Bricks the view no longer contains are forgotten first.
    pub fn step(&mut self) -> StepReport<V::Element> {
        let gone: Vec<_> = self
            .bricks
            .iter()
            .copied()
            .filter(|b| !self.view.contains(*b))
            .collect();
        for brick in gone {
            log::debug!("{brick:?} left the view; forgetting it");
            self.forget(brick);
        }
        let geometry = ViewGeometry(&self.view);
        let report = self
            .integrator
            .step(&mut self.models, &geometry, self.bricks.iter().copied());
        for &(brick, origin) in &report.moved {
            self.view.set_offset(brick, origin);
        }
        report
    }

    /// Forgets an element the view removed: its model, gestures and binding.
    ///
    /// Returns `false` if the surface knew nothing about it.
    pub fn forget(&mut self, element: V::Element) -> bool {
        let model = self.models.remove(&element).is_some();
        let gestures = self.gestures.forget(&element) > 0;
        let bound = self.bound.remove(&element);
        if bound {
            self.bricks.retain(|b| *b != element);
        }
        let wired = self.wired.remove(&element);
        model || gestures || bound || wired
    }

    /// Dispatches one touch batch.
    ///
    /// Touches are handled one at a time, in batch order; a malformed touch is
    /// skipped without affecting the others.
    ///
    /// A finished draw clears the brick's [`Marker::Highlight`] in the same
    /// touch-end that finalizes it, so a freshly drawn brick is never left
    /// highlighted waiting for a touch-end of its own.
    pub fn handle_touch(&mut self, batch: &TouchBatch<V::Element>) -> EventControl {
        let mut control = EventControl::empty();
        for point in &batch.touches {
            let Some((target, page)) = point.resolved() else {
                log::debug!("skipping malformed touch {point:?}");
                continue;
            };
            match batch.phase {
                TouchPhase::Start => {
                    if self.touch_start(point.touch, target, page) {
                        control |= EventControl::STOP_PROPAGATION;
                    }
                }
                TouchPhase::Move => {
                    if let Some(event) = self.gestures.track(&target, point.touch, page) {
                        self.apply(event);
                    }
                }
                TouchPhase::End | TouchPhase::Cancel => {
                    if let Some(event) = self.gestures.end(&target, point.touch) {
                        self.apply(event);
                    }
                }
            }
        }
        if batch.phase == TouchPhase::Move {
            control |= EventControl::PREVENT_DEFAULT;
        }
        control
    }

    /// Bubbles a touch-start from `target`; returns `true` if a brick consumed it.
    fn touch_start(&mut self, touch: TouchId, target: V::Element, page: Point) -> bool {
        let path = routing::bubble_path(&self.view, target);
        routing::run(&path, self, |node, surface| {
            if surface.bound.contains(&node) {
                surface.start_move(node, touch, page);
                Outcome::StopAndConsume
            } else if node == target && surface.wired.contains(&node) {
                surface.start_draw(node, touch, page);
                Outcome::Continue
            } else {
                log::trace!("{node:?} ignores touch-start on {target:?}");
                Outcome::Continue
            }
        })
    }

    fn start_draw(&mut self, area: V::Element, touch: TouchId, anchor: Point) {
        if let Some(slot) = self.gestures.slot(&area) {
            log::debug!(
                "{area:?} is busy with {:?}; ignoring draw from {touch:?}",
                slot.touch()
            );
            return;
        }
        let Some(brick) = self.view.create_brick(area) else {
            log::warn!("{area:?} could not create a brick");
            return;
        };
        self.view.add_class(brick, Marker::Brick);
        match self.gestures.begin_draw(area, touch, anchor, brick) {
            Ok(event) => self.apply(event),
            Err(err) => log::warn!("draw on {area:?} rejected: {err}"),
        }
    }

    fn start_move(&mut self, brick: V::Element, touch: TouchId, finger: Point) {
        let Some(origin) = self.view.offset(brick) else {
            log::warn!("bound brick {brick:?} has no offset");
            return;
        };
        match self.gestures.begin_move(brick, touch, finger, origin) {
            Ok(event) => self.apply(event),
            Err(err) => log::debug!("move on {brick:?} ignored: {err}"),
        }
    }

    fn apply(&mut self, event: GestureEvent<V::Element>) {
        match event {
            GestureEvent::DrawStarted { brick, rect } => {
                self.view.add_class(brick, Marker::Highlight);
                self.models.set_manipulation(brick, Manipulation::Drawing);
                self.place(brick, rect);
            }
            GestureEvent::DrawResized { brick, rect } => self.place(brick, rect),
            GestureEvent::DrawFinished { brick, rect } => {
                self.place(brick, rect);
                self.models.init_free_brick(brick, rect.origin(), &self.acceleration);
                self.bind(brick);
                self.view.remove_class(brick, Marker::Highlight);
            }
            GestureEvent::MoveStarted { brick, origin } => {
                self.models.entry(brick).set(POSITION, origin);
                self.models.set_manipulation(brick, Manipulation::Moving);
                self.view.add_class(brick, Marker::Highlight);
            }
            GestureEvent::Moved { brick, origin } => {
                self.models.entry(brick).set(POSITION, origin);
                self.view.set_offset(brick, origin);
            }
            GestureEvent::MoveFinished { brick } => {
                self.models.set_manipulation(brick, Manipulation::Free);
                self.view.remove_class(brick, Marker::Highlight);
            }
        }
    }

    fn place(&mut self, brick: V::Element, rect: Rect) {
        let origin = rect.origin();
        self.models.entry(brick).set(POSITION, origin);
        self.view.set_offset(brick, origin);
        self.view.set_size(brick, rect.size());
    }

    fn bind(&mut self, brick: V::Element) {
        if self.bound.insert(brick) {
            self.bricks.push(brick);
        }
    }
}

/// Live geometry read from the view every step.
struct ViewGeometry<'a, V>(&'a V);

impl<V: View> Geometry<V::Element> for ViewGeometry<'_, V> {
    fn size_of(&self, brick: &V::Element) -> Option<Size> {
        self.0.size(*brick)
    }

    fn container_bounds(&self, brick: &V::Element) -> Option<Rect> {
        self.0.bounds(self.0.container_of(*brick)?)
    }
}
