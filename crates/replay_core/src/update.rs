use crate::state::Wake;
use crate::{
    resolve_redirect, AppState, Effect, Epoch, Frame, Msg, Phase, SearchPayload,
    PROGRESS_MESSAGES,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_unloaded() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::LinkOpened(payload) => start_playback(&mut state, payload),
        Msg::TimerFired { epoch } => advance_playback(&mut state, epoch),
        Msg::PageUnloaded => {
            state.unload();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
        // The form is frozen while a playback owns the page.
        _ if state.playback().is_running() => Vec::new(),
        Msg::QueryEdited(text) => {
            let form = state.form_mut();
            form.query = text;
            form.share_link = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::CustomDestinationEdited(text) => {
            let form = state.form_mut();
            form.custom_destination = text;
            form.share_link = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::EngineSelected(engine_id) => {
            if state.registry().contains(&engine_id) {
                let form = state.form_mut();
                form.selected_engine = engine_id;
                form.share_link = None;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            let form = state.form();
            match SearchPayload::from_form(
                &form.query,
                &form.selected_engine,
                &form.custom_destination,
            ) {
                Ok(payload) => vec![Effect::Navigate {
                    url: resolve_redirect(state.registry(), &payload, &form.selected_engine),
                }],
                Err(_) => vec![Effect::FocusQuery],
            }
        }
        Msg::ShareClicked => {
            let form = state.form();
            let built = state.share_builder().build(
                &form.query,
                &form.selected_engine,
                &form.custom_destination,
            );
            match built {
                Ok(url) => {
                    state.form_mut().share_link = Some(url.clone());
                    state.mark_dirty();
                    vec![Effect::ShowShareLink { url }]
                }
                Err(_) => vec![Effect::FocusQuery],
            }
        }
    };

    (state, effects)
}

fn start_playback(state: &mut AppState, payload: SearchPayload) -> Vec<Effect> {
    if state.playback().is_running() {
        return Vec::new();
    }
    let epoch = state.begin_playback(payload);
    vec![
        Effect::Render(Frame::Typed {
            text: String::new(),
        }),
        Effect::ScheduleWake {
            epoch,
            delay: state.pacing().keystroke,
        },
    ]
}

fn advance_playback(state: &mut AppState, epoch: Epoch) -> Vec<Effect> {
    if !state.playback().is_running() || epoch != state.epoch() {
        return Vec::new();
    }
    let Some(wake) = state.playback_mut().take_pending() else {
        return Vec::new();
    };
    let pacing = *state.pacing();
    state.mark_dirty();

    match wake {
        Wake::Keystroke => {
            let playback = state.playback_mut();
            let query_len = playback.payload().map_or(0, SearchPayload::query_len);
            if playback.typed_prefix_len() < query_len {
                playback.advance_typing();
                playback.wait_for(Wake::Keystroke);
                vec![
                    Effect::Render(Frame::Typed {
                        text: playback.typed_text().to_string(),
                    }),
                    Effect::ScheduleWake {
                        epoch,
                        delay: pacing.keystroke,
                    },
                ]
            } else {
                playback.wait_for(Wake::TypingSettle);
                vec![Effect::ScheduleWake {
                    epoch,
                    delay: pacing.typing_settle,
                }]
            }
        }
        Wake::TypingSettle => {
            let playback = state.playback_mut();
            playback.set_phase(Phase::Searching);
            playback.set_message_index(0);
            playback.wait_for(Wake::ProgressMessage);
            vec![
                progress_frame(0),
                Effect::ScheduleWake {
                    epoch,
                    delay: pacing.progress_message,
                },
            ]
        }
        Wake::ProgressMessage => {
            let playback = state.playback_mut();
            let next = playback.message_index() + 1;
            if next < PROGRESS_MESSAGES.len() {
                playback.set_message_index(next);
                playback.wait_for(Wake::ProgressMessage);
                vec![
                    progress_frame(next),
                    Effect::ScheduleWake {
                        epoch,
                        delay: pacing.progress_message,
                    },
                ]
            } else {
                playback.set_phase(Phase::Success);
                playback.wait_for(Wake::SuccessHold);
                vec![
                    Effect::Render(Frame::Success),
                    Effect::ScheduleWake {
                        epoch,
                        delay: pacing.success_hold,
                    },
                ]
            }
        }
        Wake::SuccessHold => {
            state.playback_mut().set_phase(Phase::Redirecting);
            match state.playback().payload() {
                Some(payload) => vec![Effect::Navigate {
                    url: resolve_redirect(
                        state.registry(),
                        payload,
                        &state.form().selected_engine,
                    ),
                }],
                None => Vec::new(),
            }
        }
    }
}

fn progress_frame(index: usize) -> Effect {
    Effect::Render(Frame::Progress {
        index,
        message: PROGRESS_MESSAGES[index],
    })
}
