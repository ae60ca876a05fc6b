//! Replay core: link codec, engine registry and the pure playback state machine.
mod codec;
mod effect;
mod msg;
mod pacing;
mod payload;
mod registry;
mod resolver;
mod share;
mod state;
mod update;
mod view_model;

pub use codec::{decode, encode, LinkParams, PARAM_CUSTOM, PARAM_ENGINE, PARAM_QUERY};
pub use effect::{Effect, Frame};
pub use msg::Msg;
pub use pacing::{DelayRange, PacingConfig, PROGRESS_MESSAGES};
pub use payload::SearchPayload;
pub use registry::{
    build_search_url, EngineDescriptor, EngineRegistry, UnknownEngine, DEFAULT_ENGINE_ID,
};
pub use resolver::resolve_redirect;
pub use share::{ShareLinkBuilder, ShareRejected, DEFAULT_PAGE_URL};
pub use state::{AppState, Epoch, FormState, PageSettings, Phase, PlaybackState};
pub use update::update;
pub use view_model::PageViewModel;
