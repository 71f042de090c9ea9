mod broadcaster;
mod scheduler;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::{ChannelBroadcaster, GameBroadcaster};
pub use scheduler::{ScheduledTask, Scheduler, Task, TokioScheduler};
pub use session_rng::{MoveRng, SessionRng};
