use tokio::sync::mpsc;

use crate::log;
use super::tictactoe::GameSnapshot;

/// Receives a snapshot after every successful state change.
///
/// Called while the controller holds its state lock, so implementations
/// must not call back into the controller.
pub trait GameBroadcaster: Send + Sync + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot);
}

#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<GameSnapshot>,
}

impl ChannelBroadcaster {
    pub fn new(sender: mpsc::UnboundedSender<GameSnapshot>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameSnapshot>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl GameBroadcaster for ChannelBroadcaster {
    fn broadcast_state(&self, snapshot: GameSnapshot) {
        if self.sender.send(snapshot).is_err() {
            log!("State receiver dropped, snapshot discarded");
        }
    }
}
