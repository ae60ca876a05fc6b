use replay_core::{update, AppState, Effect, Epoch, Msg};
use replay_logging::{replay_debug, replay_info, replay_warn};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::{DelayPicker, PageSurface};

/// How a page instance ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Navigated { url: String },
    Unloaded,
    /// No intents left to deliver and no playback in flight.
    Idle,
}

/// Sends user intents into a running page.
#[derive(Debug, Clone)]
pub struct PageHandle {
    intent_tx: mpsc::UnboundedSender<Msg>,
}

impl PageHandle {
    pub fn send(&self, msg: Msg) {
        let _ = self.intent_tx.send(msg);
    }
}

/// One page instance: owns the state, the pending timers and the surface.
///
/// Timers are tasks in a [`JoinSet`] that resolve to the epoch they were
/// scheduled under. The set is dropped when the page navigates or unloads, and
/// any wake-up that still slips through is rejected by the core's epoch check.
pub struct PageRuntime<D, S> {
    state: AppState,
    delays: D,
    surface: S,
    timers: JoinSet<Epoch>,
    intent_tx: Option<mpsc::UnboundedSender<Msg>>,
    intent_rx: mpsc::UnboundedReceiver<Msg>,
}

impl<D: DelayPicker, S: PageSurface> PageRuntime<D, S> {
    pub fn new(state: AppState, delays: D, surface: S) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        Self {
            state,
            delays,
            surface,
            timers: JoinSet::new(),
            intent_tx: Some(intent_tx),
            intent_rx,
        }
    }

    /// Handle for delivering intents. Must be taken before [`PageRuntime::run`].
    pub fn handle(&self) -> Option<PageHandle> {
        self.intent_tx.as_ref().map(|intent_tx| PageHandle {
            intent_tx: intent_tx.clone(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Drives the page until it navigates, unloads, or runs out of work.
    pub async fn run(&mut self) -> PageOutcome {
        // Only outside handles keep the intent channel open from here on.
        self.intent_tx = None;
        let mut intents_open = true;

        loop {
            let msg = tokio::select! {
                Some(joined) = self.timers.join_next() => match joined {
                    Ok(epoch) => Msg::TimerFired { epoch },
                    Err(err) => {
                        if !err.is_cancelled() {
                            replay_warn!("Timer task failed: {}", err);
                        }
                        continue;
                    }
                },
                intent = self.intent_rx.recv(), if intents_open => match intent {
                    Some(msg) => msg,
                    None => {
                        intents_open = false;
                        continue;
                    }
                },
                else => break PageOutcome::Idle,
            };

            if let Some(outcome) = self.dispatch(msg) {
                break outcome;
            }
        }
    }

    /// Applies one message and executes its effects. Returns the outcome once the page is gone.
    ///
    /// Must be called from within a tokio runtime, since wake-ups are spawned as tasks.
    pub fn dispatch(&mut self, msg: Msg) -> Option<PageOutcome> {
        if let Msg::TimerFired { epoch } = &msg {
            if self.state.is_unloaded() || *epoch != self.state.epoch() {
                replay_debug!(
                    "Dropping stale wake-up epoch={} live={}",
                    epoch,
                    self.state.epoch()
                );
            }
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        replay_logging::set_playback_epoch(self.state.epoch().value());

        for effect in effects {
            match effect {
                Effect::ScheduleWake { epoch, delay } => {
                    let duration = self.delays.pick(delay);
                    replay_debug!("ScheduleWake delay_ms={}", duration.as_millis());
                    self.timers.spawn(async move {
                        tokio::time::sleep(duration).await;
                        epoch
                    });
                }
                Effect::Render(frame) => self.surface.render(&frame),
                Effect::ShowShareLink { url } => {
                    replay_info!("Share link generated url_len={}", url.len());
                    self.surface.show_share_link(&url);
                }
                Effect::FocusQuery => self.surface.focus_query(),
                Effect::Navigate { url } => {
                    replay_info!("Navigate url={}", url);
                    self.surface.navigate(&url);
                    self.teardown();
                    return Some(PageOutcome::Navigated { url });
                }
            }
        }

        if self.state.is_unloaded() {
            self.teardown();
            return Some(PageOutcome::Unloaded);
        }
        None
    }

    fn teardown(&mut self) {
        if !self.state.is_unloaded() {
            let state = std::mem::take(&mut self.state);
            self.state = update(state, Msg::PageUnloaded).0;
            replay_logging::set_playback_epoch(self.state.epoch().value());
        }
        if !self.timers.is_empty() {
            replay_debug!("Dropping {} pending timers", self.timers.len());
        }
        // Dropping the set aborts every task still sleeping.
        drop(std::mem::take(&mut self.timers));
        self.intent_rx.close();
    }
}
