use std::fmt;

use url::Url;

use crate::view_model::PageViewModel;
use crate::{
    EngineRegistry, PacingConfig, SearchPayload, ShareLinkBuilder, PROGRESS_MESSAGES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Typing,
    Searching,
    Success,
    Redirecting,
}

/// Generation counter; a wake-up is only honoured if it carries the live epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The wake-up the sequencer is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wake {
    Keystroke,
    TypingSettle,
    ProgressMessage,
    SuccessHold,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    phase: Phase,
    typed_prefix_len: usize,
    message_index: usize,
    is_running: bool,
    payload: Option<SearchPayload>,
    pending: Option<Wake>,
}

impl PlaybackState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn typed_prefix_len(&self) -> usize {
        self.typed_prefix_len
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn payload(&self) -> Option<&SearchPayload> {
        self.payload.as_ref()
    }

    /// What the query input shows right now.
    pub fn typed_text(&self) -> &str {
        self.payload
            .as_ref()
            .map_or("", |payload| payload.query_prefix(self.typed_prefix_len))
    }

    pub fn current_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Searching => PROGRESS_MESSAGES.get(self.message_index).copied(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub query: String,
    pub custom_destination: String,
    pub selected_engine: String,
    pub share_link: Option<String>,
}

impl FormState {
    fn new(registry: &EngineRegistry) -> Self {
        Self {
            query: String::new(),
            custom_destination: String::new(),
            selected_engine: registry.default_engine().id.to_string(),
            share_link: None,
        }
    }
}

/// Everything a page instance needs that is fixed at startup.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub page_url: Url,
    pub registry: EngineRegistry,
    pub pacing: PacingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    registry: EngineRegistry,
    share_builder: ShareLinkBuilder,
    pacing: PacingConfig,
    form: FormState,
    playback: PlaybackState,
    epoch: Epoch,
    unloaded: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PageSettings) -> Self {
        Self {
            share_builder: ShareLinkBuilder::new(&settings.page_url, settings.registry),
            form: FormState::new(&settings.registry),
            registry: settings.registry,
            pacing: settings.pacing,
            playback: PlaybackState::default(),
            epoch: Epoch::default(),
            unloaded: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> PageViewModel {
        let query_buffer = if self.playback.is_running {
            self.playback.typed_text().to_string()
        } else {
            self.form.query.clone()
        };
        PageViewModel {
            phase: self.playback.phase,
            query_buffer,
            custom_destination: self.form.custom_destination.clone(),
            selected_engine: self.form.selected_engine.clone(),
            share_link: self.form.share_link.clone(),
            cursor_active: self.playback.pending == Some(Wake::Keystroke),
            progress_message: self.playback.current_message(),
            success_visible: matches!(self.playback.phase, Phase::Success | Phase::Redirecting),
            dirty: self.dirty,
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn share_builder(&self) -> &ShareLinkBuilder {
        &self.share_builder
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_unloaded(&self) -> bool {
        self.unloaded
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Enters Typing for `payload` under a fresh epoch.
    pub(crate) fn begin_playback(&mut self, payload: SearchPayload) -> Epoch {
        if let Some(engine_id) = payload.engine_id().filter(|id| self.registry.contains(id)) {
            self.form.selected_engine = engine_id.to_string();
        }
        self.epoch = self.epoch.next();
        self.playback = PlaybackState {
            phase: Phase::Typing,
            typed_prefix_len: 0,
            message_index: 0,
            is_running: true,
            payload: Some(payload),
            pending: Some(Wake::Keystroke),
        };
        self.dirty = true;
        self.epoch
    }

    pub(crate) fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Tears the page down. The epoch moves on so every outstanding wake-up is stale.
    pub(crate) fn unload(&mut self) {
        self.unloaded = true;
        self.epoch = self.epoch.next();
        self.playback.pending = None;
    }
}

impl PlaybackState {
    pub(crate) fn take_pending(&mut self) -> Option<Wake> {
        self.pending.take()
    }

    pub(crate) fn wait_for(&mut self, wake: Wake) {
        self.pending = Some(wake);
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn advance_typing(&mut self) {
        self.typed_prefix_len += 1;
    }

    pub(crate) fn set_message_index(&mut self, index: usize) {
        self.message_index = index;
    }
}

impl Default for AppState {
    fn default() -> Self {
        let registry = EngineRegistry::builtin();
        Self {
            share_builder: ShareLinkBuilder::default(),
            form: FormState::new(&registry),
            registry,
            pacing: PacingConfig::default(),
            playback: PlaybackState::default(),
            epoch: Epoch::default(),
            unloaded: false,
            dirty: false,
        }
    }
}
