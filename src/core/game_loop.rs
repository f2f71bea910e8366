//! Shared game loop for every game.
//!
//! Each game supplies a [`Rules`] implementation: a state type plus the pure
//! functions `advance`, `collides` and `score`, and an input handler. The
//! [`GameLoop`] owns the session, the tick scheduler and the deferred-task
//! queue, so no game duplicates timer plumbing.
//!
//! Phase machine:
//! ```text
//! Idle --Primary--> Running --Pause--> Paused --Pause/Primary--> Running
//!                      |
//!                 terminal condition
//!                      v
//!                  GameOver --Primary--> Running (fresh session)
//! ```

use crate::core::constants::REALTIME_FRAME_MS;
use crate::core::input::Input;
use crate::core::tasks::{TaskId, TaskQueue};
use crate::core::tick::{Cadence, TickScheduler};
use crate::games::GameKind;
use crate::utils::persistence::ScoreStore;
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Scheduling handle passed to input handlers.
///
/// Everything scheduled through it is stamped with the current session
/// generation and is cancelled when the session resets or stops.
pub struct Deferrals<'a, T> {
    queue: &'a mut TaskQueue<T>,
    now: Instant,
    generation: u64,
}

impl<'a, T> Deferrals<'a, T> {
    pub fn defer(&mut self, delay: Duration, action: T) -> TaskId {
        self.queue.schedule(self.now, delay, self.generation, action)
    }

    pub fn cancel_all(&mut self) -> usize {
        self.queue.cancel_all()
    }
}

/// Per-game simulation rules driven by [`GameLoop`].
pub trait Rules {
    type State;
    /// Plain data handed to the render layer once per tick.
    type Snapshot;
    /// Action type of deferred callbacks ("thinking delays").
    type Deferred;

    const KIND: GameKind;

    fn cadence(&self) -> Cadence;

    fn new_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Called when a session enters Running for the first time.
    fn on_start(&self, _state: &mut Self::State, _tasks: &mut Deferrals<'_, Self::Deferred>) {}

    /// Apply one input event. Only called while the session is Running.
    fn handle_input(
        &self,
        state: &mut Self::State,
        input: Input,
        tasks: &mut Deferrals<'_, Self::Deferred>,
    );

    /// Advance the simulation by one tick.
    fn advance<R: Rng>(&self, state: &mut Self::State, rng: &mut R);

    /// Terminal-condition predicate, evaluated after every tick, input and
    /// deferred callback.
    fn collides(&self, state: &Self::State) -> bool;

    fn score(&self, state: &Self::State) -> u32;

    fn snapshot(&self, state: &Self::State) -> Self::Snapshot;

    /// Desired fixed tick interval, when it changes during play.
    fn tick_interval(&self, _state: &Self::State) -> Option<Duration> {
        None
    }

    /// Apply a deferred action that is still current.
    fn on_deferred<R: Rng>(&self, _state: &mut Self::State, _action: Self::Deferred, _rng: &mut R) {
    }
}

/// One playthrough from start to terminal state.
#[derive(Debug, Clone)]
pub struct Session<S> {
    pub phase: Phase,
    pub state: S,
    pub score: u32,
    /// Best score ever recorded for this game, including this session.
    pub high_score: u32,
    /// Set when this session's final score beat the previous high score.
    pub new_high_score: bool,
    pub ticks: u64,
    /// Bumped on every reset; deferred tasks from older generations are stale.
    pub generation: u64,
}

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<T> {
    pub game: &'static str,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub ticks: u64,
    pub state: T,
}

pub struct GameLoop<G: Rules, S: ScoreStore, R: Rng> {
    rules: G,
    session: Session<G::State>,
    scheduler: TickScheduler,
    tasks: TaskQueue<G::Deferred>,
    store: S,
    rng: R,
    /// Unconsumed time for per-frame cadences.
    accumulated: Duration,
}

impl<G: Rules, S: ScoreStore, R: Rng> GameLoop<G, S, R> {
    /// Create an idle session. The high score is read from the store here,
    /// once; afterwards the in-memory value is authoritative.
    pub fn new(rules: G, store: S, mut rng: R) -> Self {
        let high_score = store.load(G::KIND.key());
        let state = rules.new_state(&mut rng);
        let scheduler = TickScheduler::new(rules.cadence());
        Self {
            rules,
            session: Session {
                phase: Phase::Idle,
                state,
                score: 0,
                high_score,
                new_high_score: false,
                ticks: 0,
                generation: 0,
            },
            scheduler,
            tasks: TaskQueue::new(),
            store,
            rng,
            accumulated: Duration::ZERO,
        }
    }

    pub fn rules(&self) -> &G {
        &self.rules
    }

    pub fn session(&self) -> &Session<G::State> {
        &self.session
    }

    pub fn state(&self) -> &G::State {
        &self.session.state
    }

    /// Mutable access to the game state, for front-ends and test setups.
    pub fn state_mut(&mut self) -> &mut G::State {
        &mut self.session.state
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Start from Idle, replay from GameOver, or resume from Paused.
    pub fn start(&mut self, now: Instant) {
        match self.session.phase {
            Phase::Running => {}
            Phase::Paused => self.resume(now),
            Phase::Idle | Phase::GameOver => {
                if self.session.phase == Phase::GameOver {
                    self.reset_session();
                }
                self.session.phase = Phase::Running;
                self.scheduler.start(now);
                let mut deferrals = Deferrals {
                    queue: &mut self.tasks,
                    now,
                    generation: self.session.generation,
                };
                self.rules.on_start(&mut self.session.state, &mut deferrals);
                debug!(
                    "{}: session {} started",
                    G::KIND.key(),
                    self.session.generation
                );
            }
        }
    }

    pub fn pause(&mut self) {
        if self.session.phase == Phase::Running {
            self.session.phase = Phase::Paused;
            self.scheduler.stop();
            self.accumulated = Duration::ZERO;
            debug!("{}: paused", G::KIND.key());
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.session.phase == Phase::Paused {
            self.session.phase = Phase::Running;
            self.scheduler.start(now);
            debug!("{}: resumed", G::KIND.key());
        }
    }

    /// Tear the session down: cancel the pending tick and every deferred
    /// task, and return to Idle with a fresh state. Idempotent: stopping an
    /// idle session with nothing pending leaves it untouched.
    pub fn stop(&mut self) {
        if self.session.phase == Phase::Idle && self.tasks.is_empty() {
            return;
        }
        self.reset_session();
        self.session.phase = Phase::Idle;
    }

    /// Route one input event. Returns true if it was consumed.
    ///
    /// Outside Running only the start/replay and pause controls are honoured;
    /// everything else is dropped, never queued.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> bool {
        match (self.session.phase, input) {
            (Phase::Idle | Phase::GameOver, Input::Primary) => {
                self.start(now);
                true
            }
            (Phase::Paused, Input::Pause | Input::Primary) => {
                self.resume(now);
                true
            }
            (Phase::Running, Input::Pause) => {
                self.pause();
                true
            }
            (Phase::Running, input) => {
                let mut deferrals = Deferrals {
                    queue: &mut self.tasks,
                    now,
                    generation: self.session.generation,
                };
                self.rules
                    .handle_input(&mut self.session.state, input, &mut deferrals);
                self.settle();
                true
            }
            _ => false,
        }
    }

    /// Drive the loop from the wall clock: fire due deferred tasks, then the
    /// due tick, if any. Returns true if the state changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.session.phase != Phase::Running {
            return false;
        }
        let mut changed = self.run_due_tasks(now);
        if self.session.phase == Phase::Running {
            if let Some(dt) = self.scheduler.poll(now) {
                changed |= self.tick(dt);
            }
        }
        changed
    }

    /// One scheduler tick carrying `dt`.
    ///
    /// Fixed cadences advance exactly one step. Per-frame cadences bank `dt`
    /// and advance in fixed physics steps, so the simulation is independent
    /// of the display rate.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.session.phase != Phase::Running {
            return false;
        }
        match self.scheduler.cadence() {
            Cadence::Fixed(_) => {
                self.step();
                true
            }
            Cadence::PerFrame => {
                let frame = Duration::from_millis(REALTIME_FRAME_MS);
                self.accumulated += dt;
                let mut stepped = false;
                while self.accumulated >= frame && self.session.phase == Phase::Running {
                    self.accumulated -= frame;
                    self.step();
                    stepped = true;
                }
                stepped
            }
            Cadence::EventDriven => false,
        }
    }

    /// How long the front-end may wait before calling [`update`](Self::update).
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if self.session.phase != Phase::Running {
            return None;
        }
        let tick = self.scheduler.time_until_next(now);
        let task = self
            .tasks
            .next_due()
            .map(|due| due.saturating_duration_since(now));
        match (tick, task) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot<G::Snapshot> {
        FrameSnapshot {
            game: G::KIND.key(),
            phase: self.session.phase,
            score: self.session.score,
            high_score: self.session.high_score,
            new_high_score: self.session.new_high_score,
            ticks: self.session.ticks,
            state: self.rules.snapshot(&self.session.state),
        }
    }

    fn step(&mut self) {
        self.rules.advance(&mut self.session.state, &mut self.rng);
        self.session.ticks += 1;
        self.settle();
        if self.session.phase == Phase::Running {
            if let Some(interval) = self.rules.tick_interval(&self.session.state) {
                self.scheduler.set_interval(interval);
            }
        }
    }

    fn run_due_tasks(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for task in self.tasks.take_due(now) {
            if self.session.phase != Phase::Running {
                break;
            }
            if task.generation != self.session.generation {
                debug!("{}: dropping stale task {:?}", G::KIND.key(), task.id);
                continue;
            }
            self.rules
                .on_deferred(&mut self.session.state, task.action, &mut self.rng);
            self.settle();
            changed = true;
        }
        changed
    }

    /// Pull the score forward and end the session on a terminal condition.
    fn settle(&mut self) {
        let score = self.rules.score(&self.session.state);
        if score > self.session.score {
            self.session.score = score;
        }
        if self.rules.collides(&self.session.state) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.session.phase = Phase::GameOver;
        self.scheduler.stop();
        self.tasks.cancel_all();
        self.accumulated = Duration::ZERO;

        let key = G::KIND.key();
        if self.session.score > self.session.high_score {
            self.session.high_score = self.session.score;
            self.session.new_high_score = true;
            info!("{key}: new high score {}", self.session.score);
            if let Err(e) = self.store.save(key, self.session.score) {
                warn!("{key}: could not persist high score: {e}");
            }
        }
        debug!(
            "{key}: game over after {} ticks, score {}",
            self.session.ticks, self.session.score
        );
    }

    fn reset_session(&mut self) {
        let dropped = self.tasks.cancel_all();
        if dropped > 0 {
            debug!("{}: cancelled {dropped} deferred tasks", G::KIND.key());
        }
        self.scheduler = TickScheduler::new(self.rules.cadence());
        self.accumulated = Duration::ZERO;
        self.session.generation += 1;
        self.session.state = self.rules.new_state(&mut self.rng);
        self.session.score = 0;
        self.session.new_high_score = false;
        self.session.ticks = 0;
    }
}
