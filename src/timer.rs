use super::*;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Where the decision clock stands for the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Not our turn, or no hand in progress.
    Idle,
    /// Our turn; this many seconds left on the advisory clock.
    Running(u64),
    /// Clock ran out. Holds at zero; no action is submitted locally.
    Expired,
}

impl Countdown {
    /// Seconds remaining, when the clock is visible at all.
    pub fn remaining(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Running(n) => Some(*n),
            Self::Expired => Some(0),
        }
    }
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Advisory decision countdown for the local player.
///
/// Pure state machine: feed it snapshot changes through [`observe`] and
/// seconds through [`tick`]. It starts fresh at [`DECISION_SECS`] every time
/// the turn newly becomes ours, never resumes a stale partial count, and
/// never acts on expiry; turn-timeout enforcement belongs to the authority.
///
/// [`observe`]: TurnTimer::observe
/// [`tick`]: TurnTimer::tick
#[derive(Debug)]
pub struct TurnTimer {
    local: UserId,
    turn: Option<UserId>,
    state: Countdown,
}

impl TurnTimer {
    pub fn new(local: UserId) -> Self {
        Self {
            local,
            turn: None,
            state: Countdown::Idle,
        }
    }
    pub fn state(&self) -> Countdown {
        self.state
    }
    /// Applies a snapshot change. Returns true when the countdown freshly
    /// (re)starts, so drivers can hold off one full second before the first
    /// decrement. A replacement that leaves the turn with us does not reset.
    pub fn observe(&mut self, snapshot: Option<&TableSnapshot>) -> bool {
        let turn = snapshot
            .filter(|s| s.hand_in_progress)
            .and_then(|s| s.current_player);
        let mine = turn == Some(self.local);
        let was_mine = self.turn == Some(self.local);
        self.turn = turn;
        if mine && !was_mine {
            self.state = Countdown::Running(DECISION_SECS);
            true
        } else if !mine {
            self.state = Countdown::Idle;
            false
        } else {
            false
        }
    }
    /// One second elapses. Running counts strictly down to zero, then holds.
    pub fn tick(&mut self) {
        self.state = match self.state {
            Countdown::Running(n) if n <= 1 => Countdown::Expired,
            Countdown::Running(n) => Countdown::Running(n - 1),
            other => other,
        };
    }
}

/// Spawns the 1 Hz driver coupling a [`TurnTimer`] to the store.
///
/// Publishes every state change through a watch channel; the task ends when
/// all receivers are dropped. Store changes are observed eagerly via the
/// reader's change signal; a wakeup missed mid-tick is caught up at the next
/// whole second, which is within the clock's advisory tolerance.
pub fn countdown(reader: StoreReader, local: UserId) -> watch::Receiver<Countdown> {
    let (tx, rx) = watch::channel(Countdown::Idle);
    tokio::spawn(async move {
        let mut timer = TurnTimer::new(local);
        let mut ticks = tokio::time::interval(Duration::from_secs(1));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticks.tick().await; // the first tick completes immediately
        loop {
            tokio::select! {
                _ = reader.changed() => {
                    if timer.observe(reader.get().as_ref()) {
                        ticks.reset();
                    }
                }
                _ = ticks.tick() => {
                    if !timer.observe(reader.get().as_ref()) {
                        timer.tick();
                    }
                }
            }
            if tx.send(timer.state()).is_err() {
                log::debug!("[timer] all receivers dropped");
                break;
            }
        }
    });
    rx
}
