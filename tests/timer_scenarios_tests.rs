//! End-to-end timer scenarios driven through the public API.
//!
//! Covers the whole user flow without a terminal:
//! - full work phase ending in a break, with one notification
//! - pause rendering in the compact layout
//! - reconfiguration through the popup
//! - ticks delivered while idle
//! - state invariants over long runs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tdash::scheduler::TickScheduler;
use tdash::sound::{MockSoundPlayer, NotificationSounds, SoundNotifier, SoundPlayer, SoundSource};
use tdash::timer::{
    project_compact, ConfigButton, ConfigPopup, PopupOutcome, RecordingNotifier, TimerEngine,
    TimerEvent,
};
use tdash::types::{RunState, TimerConfig, TimerPhase};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_engine(config: TimerConfig) -> (TimerEngine, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let engine = TimerEngine::new(config, notifier.clone());
    (engine, notifier)
}

fn short_config(work: u32, brk: u32) -> TimerConfig {
    TimerConfig::default()
        .with_work_duration(work)
        .with_break_duration(brk)
}

fn tick_n(engine: &mut TimerEngine, n: u32) -> Vec<TimerEvent> {
    (0..n).map(|_| engine.tick()).collect()
}

fn apply_through_popup(engine: &mut TimerEngine, buttons: &[ConfigButton]) -> TimerEvent {
    let mut popup = ConfigPopup::open(engine.state());
    for button in buttons {
        assert_eq!(popup.press(*button), PopupOutcome::Open);
    }
    match popup.press(ConfigButton::Apply) {
        PopupOutcome::Applied(applied) => engine.apply_config(applied),
        other => panic!("expected Applied, got {:?}", other),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_full_work_phase_flips_to_break_once() {
    let (mut engine, notifier) = create_engine(TimerConfig::default());
    engine.activate();

    let events = tick_n(&mut engine, 1500);

    let flips: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, TimerEvent::PhaseCompleted { .. }))
        .collect();
    assert_eq!(
        flips,
        vec![&TimerEvent::PhaseCompleted {
            ended: TimerPhase::Work,
            next: TimerPhase::Break
        }]
    );

    let state = engine.state();
    assert_eq!(state.phase(), TimerPhase::Break);
    assert_eq!(state.target_duration(), 300);
    assert_eq!(state.elapsed(), 0);
    assert!(state.is_running());
    assert_eq!(notifier.calls(), vec![TimerPhase::Work]);
}

#[test]
fn test_paused_compact_render() {
    let (mut engine, _) = create_engine(TimerConfig::default());
    engine.activate();
    tick_n(&mut engine, 65);
    assert_eq!(engine.activate(), TimerEvent::Paused);

    assert_eq!(project_compact(engine.state()), "WORK 23:55 ⏸");
}

#[test]
fn test_reconfigure_with_break_clamped_to_floor() {
    let (mut engine, _) = create_engine(TimerConfig::default());
    engine.activate();
    tick_n(&mut engine, 10);

    let event = apply_through_popup(
        &mut engine,
        &[
            ConfigButton::WorkUp,
            ConfigButton::BreakDown,
            ConfigButton::BreakDown,
            ConfigButton::BreakDown,
            ConfigButton::BreakDown,
            ConfigButton::BreakDown,
            ConfigButton::BreakDown,
        ],
    );

    assert_eq!(
        event,
        TimerEvent::Reset {
            work_duration: 1800,
            break_duration: 60
        }
    );
    let state = engine.state();
    assert_eq!(state.run_state(), RunState::Idle);
    assert_eq!(state.target_duration(), 1800);
    assert_eq!(state.break_duration(), 60);
}

#[test]
fn test_tick_while_idle_changes_nothing() {
    let (mut engine, notifier) = create_engine(TimerConfig::default());
    let before = engine.state().clone();

    assert_eq!(engine.tick(), TimerEvent::Ignored);

    assert_eq!(engine.state(), &before);
    assert!(notifier.calls().is_empty());
    assert_eq!(project_compact(engine.state()), "WORK 25:00 ⏸");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_elapsed_stays_below_target() {
    let (mut engine, _) = create_engine(short_config(7, 3));
    engine.activate();

    for _ in 0..100 {
        engine.tick();
        let state = engine.state();
        assert!(state.elapsed() < state.target_duration());
    }
}

#[test]
fn test_phases_alternate() {
    let (mut engine, notifier) = create_engine(short_config(4, 2));
    engine.activate();

    let mut observed = vec![engine.state().phase()];
    for _ in 0..30 {
        engine.tick();
        let phase = engine.state().phase();
        if observed.last() != Some(&phase) {
            observed.push(phase);
        }
    }

    // 30 seconds over a 6-second cycle: five full cycles.
    assert_eq!(observed.len(), 11);
    for pair in observed.windows(2) {
        assert_eq!(pair[1], pair[0].next());
    }
    assert_eq!(notifier.count(TimerPhase::Work), 5);
    assert_eq!(notifier.count(TimerPhase::Break), 5);
}

#[test]
fn test_pause_resume_keeps_elapsed() {
    let (mut engine, _) = create_engine(TimerConfig::default());
    engine.activate();
    tick_n(&mut engine, 42);

    for _ in 0..10 {
        assert_eq!(engine.toggle(), TimerEvent::Paused);
        assert_eq!(engine.tick(), TimerEvent::Ignored);
        assert_eq!(engine.toggle(), TimerEvent::Resumed);
    }

    assert_eq!(engine.state().elapsed(), 42);
    assert_eq!(engine.run_state(), RunState::Running);
}

#[test]
fn test_reset_during_break_returns_to_fresh_work() {
    let (mut engine, _) = create_engine(short_config(60, 1000));
    engine.activate();
    tick_n(&mut engine, 60 + 713);
    assert_eq!(engine.state().phase(), TimerPhase::Break);
    assert_eq!(engine.state().elapsed(), 713);

    apply_through_popup(&mut engine, &[ConfigButton::WorkUp]);

    let state = engine.state();
    assert_eq!(state.phase(), TimerPhase::Work);
    assert_eq!(state.elapsed(), 0);
    assert_eq!(state.target_duration(), 360);
    assert_eq!(state.work_duration(), 360);
    assert!(!state.is_started());
}

#[test]
fn test_reset_while_idle_matches_reset_while_running() {
    let (mut idle, _) = create_engine(TimerConfig::default());
    let (mut running, _) = create_engine(TimerConfig::default());
    running.activate();
    tick_n(&mut running, 99);

    apply_through_popup(&mut idle, &[ConfigButton::BreakUp]);
    apply_through_popup(&mut running, &[ConfigButton::BreakUp]);

    assert_eq!(idle.state(), running.state());
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_drives_engine_only_while_running() {
    let (mut engine, _) = create_engine(short_config(3, 2));
    let mut ticks = TickScheduler::default();

    engine.activate();
    ticks.sync(engine.state().is_running());
    for _ in 0..2 {
        ticks.next_tick().await;
        engine.tick();
        ticks.sync(engine.state().is_running());
    }
    assert_eq!(engine.state().elapsed(), 2);

    engine.toggle();
    ticks.sync(engine.state().is_running());
    let waited = tokio::time::timeout(Duration::from_secs(10), ticks.next_tick()).await;

    assert!(waited.is_err(), "paused timer must not receive ticks");
    assert_eq!(engine.state().elapsed(), 2);
}

// ============================================================================
// Notification sounds
// ============================================================================

fn wait_for_plays(player: &MockSoundPlayer, expected: usize) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if player.play_count() >= expected {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn test_failing_sound_does_not_stop_timer() {
    let player = Arc::new(MockSoundPlayer::new());
    player.set_should_fail(true);
    let sounds = NotificationSounds::from_paths(
        Some(PathBuf::from("/sounds/break.mp3")),
        Some(PathBuf::from("/sounds/work.mp3")),
    );
    let notifier = Arc::new(SoundNotifier::new(
        player.clone() as Arc<dyn SoundPlayer>,
        sounds,
    ));
    let mut engine = TimerEngine::new(short_config(2, 2), notifier);
    engine.activate();

    tick_n(&mut engine, 2);

    assert_eq!(engine.state().phase(), TimerPhase::Break);
    assert!(engine.state().is_running());
    assert!(wait_for_plays(&player, 1));
    assert_eq!(
        player.get_play_calls(),
        vec![SoundSource::file("/sounds/break.mp3")]
    );

    tick_n(&mut engine, 2);
    assert!(wait_for_plays(&player, 2));
    assert_eq!(
        player.get_play_calls()[1],
        SoundSource::file("/sounds/work.mp3")
    );
}
