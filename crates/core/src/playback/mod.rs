//! Step playback controller.
//!
//! A two-state machine (paused / playing) over a precomputed step list. The
//! position runs from `0` ("before the first step") to `steps.len()` ("fully
//! played"). Auto-advance is delegated to an injected [`Scheduler`]; the host
//! feeds each firing back through [`PlaybackController::on_timer`].

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    search::{LinearSearch, StepGenerator},
    step::{Step, Value},
    timeline::{ManualClock, Scheduler, TimerId},
    view::{PlaybackView, ViewSource},
};

/// Auto-advance period used when none is configured.
pub const DEFAULT_SPEED_MS: u64 = 800;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    #[default]
    Paused,
    Playing,
}

/// Plain-data copy of the controller's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub position: usize,
    pub is_playing: bool,
    pub speed_ms: u64,
}

type Observer = Box<dyn FnMut(&PlaybackView)>;

pub struct PlaybackController<S: Scheduler = ManualClock> {
    scheduler: S,
    generator: Box<dyn StepGenerator>,
    array: Vec<Value>,
    target: Option<Value>,
    steps: Vec<Step>,
    position: usize,
    phase: PlaybackPhase,
    speed_ms: u64,
    timer: Option<TimerId>,
    generation: u64,
    observers: Vec<Observer>,
}

impl<S: Scheduler> PlaybackController<S> {
    /// Creates an empty controller that generates traces with linear search.
    pub fn new(scheduler: S) -> Self {
        Self::with_generator(scheduler, LinearSearch)
    }

    pub fn with_generator(scheduler: S, generator: impl StepGenerator + 'static) -> Self {
        Self {
            scheduler,
            generator: Box::new(generator),
            array: Vec::new(),
            target: None,
            steps: Vec::new(),
            position: 0,
            phase: PlaybackPhase::Paused,
            speed_ms: DEFAULT_SPEED_MS,
            timer: None,
            generation: 0,
            observers: Vec::new(),
        }
    }

    /// Builder-style variant of [`Self::set_speed`].
    pub fn with_speed(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms.max(1);
        self
    }

    /// Installs an externally generated trace and rewinds to the start.
    ///
    /// The array backing the previous trace is dropped; element statuses are
    /// then sized from the highest index the trace visits.
    pub fn initialize(&mut self, steps: Vec<Step>) {
        self.stop_timer();
        self.array.clear();
        self.target = None;
        self.replace_steps(steps);
    }

    /// Regenerates the trace for new data and rewinds to the start.
    ///
    /// The timer is cancelled before the new trace is installed so no tick
    /// can land on the replaced step list.
    pub fn set_data(&mut self, array: Vec<Value>, target: Option<Value>) {
        self.stop_timer();
        let steps = self.generator.generate(&array, target);
        self.array = array;
        self.target = target;
        self.replace_steps(steps);
    }

    /// Moves one step forward. Saturates at the end of the trace.
    pub fn advance(&mut self) {
        if self.step_forward() {
            self.notify();
        }
    }

    /// Moves one step back. Saturates at the start of the trace.
    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.notify();
        }
    }

    /// Jumps to `position`, clamped to the trace.
    pub fn seek(&mut self, position: usize) {
        let position = position.min(self.steps.len());
        if position == self.position {
            return;
        }
        self.position = position;
        if self.is_at_end() {
            self.stop_timer();
        }
        self.notify();
    }

    /// Stops playback and rewinds to the start.
    pub fn reset(&mut self) {
        let was_playing = self.stop_timer();
        if was_playing || self.position != 0 {
            self.position = 0;
            self.notify();
        }
    }

    /// Starts auto-advance. Does nothing once the trace has been fully played.
    pub fn play(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.stop_timer();
        self.start_timer();
        tracing::debug!(
            position = self.position,
            speed_ms = self.speed_ms,
            "playback started"
        );
        self.notify();
    }

    pub fn pause(&mut self) {
        if self.stop_timer() {
            tracing::debug!(position = self.position, "playback paused");
            self.notify();
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Changes the auto-advance period. A running timer is replaced by one
    /// with the new period.
    pub fn set_speed(&mut self, speed_ms: u64) {
        let speed_ms = speed_ms.max(1);
        if speed_ms == self.speed_ms {
            return;
        }
        self.speed_ms = speed_ms;
        if self.stop_timer() {
            self.start_timer();
        }
        tracing::debug!(speed_ms, "playback speed changed");
        self.notify();
    }

    /// Handles one firing of a timer previously scheduled by this controller.
    ///
    /// Firings of cancelled timers are ignored. Returns whether the tick was
    /// applied.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            tracing::debug!(%id, "ignoring stale timer tick");
            return false;
        }

        self.step_forward();
        tracing::trace!(position = self.position, "playback tick");
        self.notify();
        true
    }

    /// Cancels any live timer. The controller remains usable afterwards.
    pub fn dispose(&mut self) {
        self.stop_timer();
    }

    /// Registers a callback that receives a fresh view after every change.
    pub fn subscribe(&mut self, observer: impl FnMut(&PlaybackView) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn view(&self) -> PlaybackView {
        PlaybackView::derive(ViewSource {
            steps: &self.steps,
            position: self.position,
            element_count: self.element_count(),
            is_playing: self.is_playing(),
            speed_ms: self.speed_ms,
            target: self.target,
        })
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            position: self.position,
            is_playing: self.is_playing(),
            speed_ms: self.speed_ms,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn target(&self) -> Option<Value> {
        self.target
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.position.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.steps.len()
    }

    /// Number of times the step list has been replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle of the live auto-advance timer, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn element_count(&self) -> usize {
        let visited = self.steps.iter().map(|s| s.index + 1).max().unwrap_or(0);
        self.array.len().max(visited)
    }

    fn replace_steps(&mut self, steps: Vec<Step>) {
        self.steps = steps;
        self.position = 0;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            total_steps = self.steps.len(),
            "step list replaced"
        );
        self.notify();
    }

    /// Advances without notifying. Stops playback when the end is reached.
    fn step_forward(&mut self) -> bool {
        if self.position >= self.steps.len() {
            return false;
        }
        self.position += 1;
        if self.is_at_end() && self.stop_timer() {
            tracing::debug!(position = self.position, "playback reached the end");
        }
        true
    }

    fn start_timer(&mut self) {
        let id = self
            .scheduler
            .schedule_repeating(Duration::from_millis(self.speed_ms));
        self.timer = Some(id);
        self.phase = PlaybackPhase::Playing;
    }

    /// Cancels the live timer and pauses. Returns whether playback was running.
    fn stop_timer(&mut self) -> bool {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
        std::mem::replace(&mut self.phase, PlaybackPhase::Paused) == PlaybackPhase::Playing
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer(&view);
        }
    }
}

impl PlaybackController<ManualClock> {
    /// Lets `by` pass on the owned [`ManualClock`], delivering every firing
    /// that falls due in order. Returns the number of ticks applied.
    pub fn advance_clock(&mut self, by: Duration) -> usize {
        let until = self.scheduler.now() + by;
        let mut applied = 0;
        while let Some(id) = self.scheduler.fire_next(until) {
            if self.on_timer(id) {
                applied += 1;
            }
        }
        self.scheduler.settle(until);
        applied
    }

    /// Time until the next firing, if a timer is live.
    pub fn time_to_next_tick(&self) -> Option<Duration> {
        self.scheduler
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.scheduler.now()))
    }
}

impl Default for PlaybackController<ManualClock> {
    fn default() -> Self {
        Self::new(ManualClock::new())
    }
}

impl<S: Scheduler> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

impl<S: Scheduler + fmt::Debug> fmt::Debug for PlaybackController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("scheduler", &self.scheduler)
            .field("array", &self.array)
            .field("target", &self.target)
            .field("steps", &self.steps.len())
            .field("position", &self.position)
            .field("phase", &self.phase)
            .field("speed_ms", &self.speed_ms)
            .field("timer", &self.timer)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
