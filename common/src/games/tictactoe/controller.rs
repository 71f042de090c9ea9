use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::games::{GameBroadcaster, MoveRng, ScheduledTask, Scheduler, SessionRng, TokioScheduler};
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{GameSnapshot, GameState};
use super::settings::GameSettings;
use super::types::{IllegalMove, Mode, Player};

struct ControllerState {
    game: GameState,
    rng: Box<dyn MoveRng>,
    pending_opponent: Option<Box<dyn ScheduledTask>>,
    /// Bumped on every reset so a deferred move that already woke up can tell it is stale.
    generation: u64,
}

impl ControllerState {
    fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot(self.pending_opponent.is_some())
    }
}

/// Sole owner of the game state. Clones share the same game.
#[derive(Clone)]
pub struct GameController {
    state: Arc<Mutex<ControllerState>>,
    scheduler: Arc<dyn Scheduler>,
    broadcaster: Arc<dyn GameBroadcaster>,
    opponent_delay: Duration,
}

impl GameController {
    /// The scheduler must run tasks later, never inline inside `schedule`.
    pub fn new(
        settings: &GameSettings,
        scheduler: Arc<dyn Scheduler>,
        broadcaster: Arc<dyn GameBroadcaster>,
        rng: Box<dyn MoveRng>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControllerState {
                game: GameState::new(settings.mode),
                rng,
                pending_opponent: None,
                generation: 0,
            })),
            scheduler,
            broadcaster,
            opponent_delay: settings.opponent_delay(),
        }
    }

    /// Builds a controller on the current tokio runtime with a seeded or fresh rng.
    pub fn with_tokio(settings: &GameSettings, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!("Opponent rng seed: {}", rng.seed());
        Self::new(
            settings,
            Arc::new(TokioScheduler::current()),
            broadcaster,
            Box::new(rng),
        )
    }

    pub fn get_state(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// Applies a move on behalf of a human player.
    pub fn request_move(&self, index: usize, player: Player) -> Result<GameSnapshot, IllegalMove> {
        let mut state = self.lock();
        if state.game.mode().is_opponent(player) {
            log!("Rejected move at {} by {}: controlled by the opponent", index, player);
            return Err(IllegalMove::NotYourTurn(player));
        }
        self.apply_move(&mut state, index, player)
    }

    pub fn reset(&self) -> GameSnapshot {
        let mut state = self.lock();
        self.cancel_pending_opponent(&mut state);
        state.game.reset();
        log!("Game reset ({})", state.game.mode());
        self.after_mutation(&mut state)
    }

    pub fn switch_mode(&self, mode: Mode) -> GameSnapshot {
        let mut state = self.lock();
        self.cancel_pending_opponent(&mut state);
        state.game.switch_mode(mode);
        log!("Switched to {}", mode);
        self.after_mutation(&mut state)
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_move(
        &self,
        state: &mut ControllerState,
        index: usize,
        player: Player,
    ) -> Result<GameSnapshot, IllegalMove> {
        match state.game.place_mark(player, index) {
            Ok(outcome) => {
                log!("{} marked cell {}", player, index);
                if !outcome.is_in_progress() {
                    log!("Game over: {:?}", outcome);
                }
                Ok(self.after_mutation(state))
            }
            Err(e) => {
                log!("Rejected move at {} by {}: {}", index, player, e);
                Err(e)
            }
        }
    }

    fn after_mutation(&self, state: &mut ControllerState) -> GameSnapshot {
        self.schedule_opponent_if_needed(state);
        let snapshot = state.snapshot();
        self.broadcaster.broadcast_state(snapshot);
        snapshot
    }

    fn schedule_opponent_if_needed(&self, state: &mut ControllerState) {
        if state.pending_opponent.is_some() || !state.game.is_opponent_turn() {
            return;
        }

        let generation = state.generation;
        let controller = self.clone();
        let task = self.scheduler.schedule(
            self.opponent_delay,
            Box::new(move || controller.play_opponent_turn(generation)),
        );
        state.pending_opponent = Some(task);
        log!("Opponent move scheduled in {} ms", self.opponent_delay.as_millis());
    }

    fn cancel_pending_opponent(&self, state: &mut ControllerState) {
        state.generation = state.generation.wrapping_add(1);
        if let Some(task) = state.pending_opponent.take() {
            task.cancel();
            log!("Pending opponent move cancelled");
        }
    }

    fn play_opponent_turn(&self, generation: u64) {
        let mut guard = self.lock();
        let state = &mut *guard;

        if state.generation != generation {
            log!("Discarding stale opponent move from generation {}", generation);
            return;
        }
        state.pending_opponent = None;

        if !state.game.is_opponent_turn() {
            return;
        }

        let input = BotInput::from_game_state(&state.game);
        let Some(index) = calculate_move(&input, state.rng.as_mut()) else {
            return;
        };

        if let Err(e) = self.apply_move(state, index, input.bot_player) {
            log!("Opponent move at {} rejected: {}", index, e);
        }
    }
}
