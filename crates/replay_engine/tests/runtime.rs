use std::time::Duration;

use pretty_assertions::assert_eq;
use replay_core::{AppState, Frame, Msg, Phase, SearchPayload, PROGRESS_MESSAGES};
use replay_engine::{InstantDelay, LowerBoundDelay, PageOutcome, PageRuntime, PageSurface};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Frame(Frame),
    Share(String),
    Focus,
    Navigate(String),
}

#[derive(Default)]
struct RecordingSurface {
    events: Vec<Event>,
}

impl PageSurface for RecordingSurface {
    fn render(&mut self, frame: &Frame) {
        self.events.push(Event::Frame(frame.clone()));
    }

    fn show_share_link(&mut self, url: &str) {
        self.events.push(Event::Share(url.to_string()));
    }

    fn focus_query(&mut self) {
        self.events.push(Event::Focus);
    }

    fn navigate(&mut self, url: &str) {
        self.events.push(Event::Navigate(url.to_string()));
    }
}

fn payload(query: &str) -> SearchPayload {
    SearchPayload::new(query).expect("non-empty query")
}

#[tokio::test(start_paused = true)]
async fn replay_link_plays_through_to_redirect() {
    let mut runtime = PageRuntime::new(AppState::new(), InstantDelay, RecordingSurface::default());
    let handle = runtime.handle().expect("handle before run");
    handle.send(Msg::LinkOpened(payload("cats").with_engine("bing")));
    drop(handle);

    let outcome = runtime.run().await;
    assert_eq!(
        outcome,
        PageOutcome::Navigated {
            url: "https://www.bing.com/search?q=cats".to_string()
        }
    );

    let events = &runtime.surface().events;
    let typed: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Frame(Frame::Typed { text }) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(typed, vec!["", "c", "ca", "cat", "cats"]);
    assert_eq!(events.len(), 5 + PROGRESS_MESSAGES.len() + 2);
    assert_eq!(events[events.len() - 2], Event::Frame(Frame::Success));
    assert!(runtime.state().is_unloaded());
    assert_eq!(runtime.state().playback().phase(), Phase::Redirecting);
    assert_eq!(runtime.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn lower_bound_pacing_takes_expected_virtual_time() {
    let mut runtime =
        PageRuntime::new(AppState::new(), LowerBoundDelay, RecordingSurface::default());
    let handle = runtime.handle().unwrap();
    handle.send(Msg::LinkOpened(payload("ab")));
    drop(handle);

    let started = Instant::now();
    runtime.run().await;
    let elapsed = started.elapsed();

    // 3 keystrokes, settle, 5 messages, success hold.
    let expected = Duration::from_millis(3 * 100 + 500 + 5 * 800 + 1500);
    assert!(elapsed >= expected, "{elapsed:?} < {expected:?}");
    assert!(elapsed < expected + Duration::from_millis(50), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn second_link_during_playback_is_ignored() {
    let mut runtime = PageRuntime::new(AppState::new(), InstantDelay, RecordingSurface::default());
    let handle = runtime.handle().unwrap();
    handle.send(Msg::LinkOpened(payload("cats")));
    handle.send(Msg::LinkOpened(payload("dogs").with_engine("bing")));
    drop(handle);

    let outcome = runtime.run().await;
    assert_eq!(
        outcome,
        PageOutcome::Navigated {
            url: "https://www.google.com/search?q=cats".to_string()
        }
    );
    let navigations = runtime
        .surface()
        .events
        .iter()
        .filter(|e| matches!(e, Event::Navigate(_)))
        .count();
    assert_eq!(navigations, 1);
}

#[tokio::test(start_paused = true)]
async fn unload_mid_playback_cancels_timers() {
    let mut runtime =
        PageRuntime::new(AppState::new(), LowerBoundDelay, RecordingSurface::default());
    assert_eq!(runtime.dispatch(Msg::LinkOpened(payload("cats"))), None);
    assert_eq!(runtime.pending_timers(), 1);

    assert_eq!(runtime.dispatch(Msg::PageUnloaded), Some(PageOutcome::Unloaded));
    assert_eq!(runtime.pending_timers(), 0);

    tokio::time::sleep(Duration::from_secs(60)).await;
    let frames = runtime.surface().events.len();
    assert_eq!(frames, 1);
    assert!(!runtime
        .surface()
        .events
        .iter()
        .any(|e| matches!(e, Event::Navigate(_))));
}

#[tokio::test(start_paused = true)]
async fn share_and_empty_submit_reach_surface() {
    let mut runtime = PageRuntime::new(AppState::new(), InstantDelay, RecordingSurface::default());
    let handle = runtime.handle().unwrap();
    handle.send(Msg::SubmitClicked);
    handle.send(Msg::QueryEdited("cats".to_string()));
    handle.send(Msg::EngineSelected("bing".to_string()));
    handle.send(Msg::ShareClicked);
    drop(handle);

    assert_eq!(runtime.run().await, PageOutcome::Idle);
    assert_eq!(
        runtime.surface().events,
        vec![
            Event::Focus,
            Event::Share("https://search-for-you.local/?q=cats&engine=bing".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn idle_page_without_intents_finishes() {
    let mut runtime = PageRuntime::new(AppState::new(), InstantDelay, RecordingSurface::default());
    assert_eq!(runtime.run().await, PageOutcome::Idle);
    assert!(runtime.surface().events.is_empty());
}

#[tokio::test(start_paused = true)]
async fn instant_pacing_config_keeps_frame_order() {
    let config = replay_engine::PageConfig {
        pacing: replay_core::PacingConfig::instant(),
        ..replay_engine::PageConfig::default()
    };
    let state = config.initial_state().unwrap();
    let mut runtime = PageRuntime::new(state, LowerBoundDelay, RecordingSurface::default());
    let handle = runtime.handle().unwrap();
    handle.send(Msg::LinkOpened(payload("hi")));
    drop(handle);

    let started = Instant::now();
    let outcome = runtime.run().await;
    assert!(started.elapsed() < Duration::from_millis(5));
    assert!(matches!(outcome, PageOutcome::Navigated { .. }));

    let frames: Vec<_> = runtime
        .surface()
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Frame(frame) => Some(frame.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(frames.len(), 3 + PROGRESS_MESSAGES.len() + 1);
    assert_eq!(frames.last(), Some(&Frame::Success));
}

#[tokio::test(start_paused = true)]
async fn stale_wake_up_is_dropped_by_dispatch() {
    let mut runtime =
        PageRuntime::new(AppState::new(), LowerBoundDelay, RecordingSurface::default());
    runtime.dispatch(Msg::LinkOpened(payload("cats")));
    let live = runtime.state().epoch();
    let before = runtime.state().clone();

    let stale = replay_core::Epoch::new(live.value() + 3);
    assert_eq!(runtime.dispatch(Msg::TimerFired { epoch: stale }), None);
    assert_eq!(runtime.state(), &before);
    assert_eq!(runtime.surface().events.len(), 1);
    assert_eq!(runtime.pending_timers(), 1);
}
