mod common;

use std::time::Duration;

use catch_the_circle::config::Settings;
use catch_the_circle::consts::*;
use catch_the_circle::entities::GameState;
use catch_the_circle::geometry::Rect;
use catch_the_circle::input::InputSnapshot;
use catch_the_circle::screen::*;

use common::{make_state, seeded_rng, ScriptedRng};

const NONE: InputSnapshot = InputSnapshot {
    left: false,
    right: false,
    pause_toggle: false,
    confirm: false,
    restart: false,
    quit: false,
};

fn with(f: impl FnOnce(&mut InputSnapshot)) -> InputSnapshot {
    let mut input = NONE;
    f(&mut input);
    input
}

fn next(result: Tick) -> (GameState, Screen) {
    match result {
        Tick::Next(state, screen) => (state, screen),
        Tick::Exit => panic!("unexpected exit"),
    }
}

fn all_screens() -> [Screen; 4] {
    [
        Screen::Start,
        Screen::Playing,
        Screen::Paused,
        Screen::GameOver { score: 3, missed: 3 },
    ]
}

// ── Quit ──────────────────────────────────────────────────────────────────────

#[test]
fn quit_exits_from_every_screen() {
    let quit = with(|i| i.quit = true);
    for screen in all_screens() {
        let result = tick(&make_state(), &screen, &quit, &mut seeded_rng());
        assert_eq!(result, Tick::Exit, "quit ignored on {:?}", screen);
    }
}

#[test]
fn quit_wins_over_other_input() {
    let input = with(|i| {
        i.quit = true;
        i.confirm = true;
        i.restart = true;
        i.pause_toggle = true;
    });
    let result = tick(&make_state(), &Screen::Start, &input, &mut seeded_rng());
    assert_eq!(result, Tick::Exit);
}

// ── Start ─────────────────────────────────────────────────────────────────────

#[test]
fn start_waits_for_confirm() {
    let s = make_state();
    let (s2, screen) = next(tick(&s, &Screen::Start, &NONE, &mut seeded_rng()));
    assert_eq!(screen, Screen::Start);
    assert_eq!(s2, s);

    // Other one-shot keys do nothing here
    let other = with(|i| {
        i.restart = true;
        i.pause_toggle = true;
    });
    let (_, screen) = next(tick(&s, &Screen::Start, &other, &mut seeded_rng()));
    assert_eq!(screen, Screen::Start);
}

#[test]
fn confirm_starts_a_fresh_session() {
    let mut s = make_state();
    s.score = 12;
    s.lives = -1;
    let confirm = with(|i| i.confirm = true);
    let (s2, screen) = next(tick(&s, &Screen::Start, &confirm, &mut seeded_rng()));
    assert_eq!(screen, Screen::Playing);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.lives, MAX_LIVES);
    assert_eq!(s2.circle.rect.y, -CIRCLE_SIZE);
}

// ── Playing / Paused ──────────────────────────────────────────────────────────

#[test]
fn playing_runs_the_update_engine() {
    let s = make_state();
    let left = with(|i| i.left = true);
    let (s2, screen) = next(tick(&s, &Screen::Playing, &left, &mut seeded_rng()));
    assert_eq!(screen, Screen::Playing);
    assert_eq!(s2.circle.rect.y, s.circle.rect.y + s.circle.speed);
    assert_eq!(s2.player.x, s.player.x - RECT_SPEED);
}

#[test]
fn pause_freezes_the_frame() {
    let s = make_state();
    let toggle = with(|i| i.pause_toggle = true);
    let (paused, screen) = next(tick(&s, &Screen::Playing, &toggle, &mut seeded_rng()));
    assert_eq!(screen, Screen::Paused);
    assert!(paused.paused);
    assert_eq!(paused.circle, s.circle);
    assert_eq!(paused.player, s.player);
}

#[test]
fn paused_ignores_everything_but_toggle_and_quit() {
    let mut s = make_state();
    s.paused = true;
    s.slow_timer = 30;
    let busy = with(|i| {
        i.left = true;
        i.confirm = true;
        i.restart = true;
    });
    let mut state = s.clone();
    for _ in 0..10 {
        let (next_state, screen) = next(tick(&state, &Screen::Paused, &busy, &mut seeded_rng()));
        assert_eq!(screen, Screen::Paused);
        state = next_state;
    }
    assert_eq!(state, s);
}

#[test]
fn resume_plays_the_same_frame() {
    let mut s = make_state();
    s.paused = true;
    let toggle = with(|i| i.pause_toggle = true);
    let (s2, screen) = next(tick(&s, &Screen::Paused, &toggle, &mut seeded_rng()));
    assert_eq!(screen, Screen::Playing);
    assert!(!s2.paused);
    assert_eq!(s2.circle.rect.y, s.circle.rect.y + s.circle.speed);
}

#[test]
fn losing_last_life_goes_to_game_over() {
    let mut s = make_state();
    s.lives = 1;
    s.score = 9;
    s.missed = 2;
    s.circle.rect = Rect::new(0, HEIGHT - 2, CIRCLE_SIZE, CIRCLE_SIZE);
    let (s2, screen) = next(tick(&s, &Screen::Playing, &NONE, &mut ScriptedRng::new(&[])));
    assert_eq!(s2.lives, 0);
    assert_eq!(screen, Screen::GameOver { score: 9, missed: 3 });
}

// ── GameOver ──────────────────────────────────────────────────────────────────

#[test]
fn game_over_waits_for_restart() {
    let s = make_state();
    let over = Screen::GameOver { score: 4, missed: 3 };
    let confirm = with(|i| i.confirm = true);
    let (s2, screen) = next(tick(&s, &over, &confirm, &mut seeded_rng()));
    assert_eq!(screen, over);
    assert_eq!(s2, s);
}

#[test]
fn restart_begins_a_fresh_session() {
    let mut s = make_state();
    s.lives = 0;
    s.score = 4;
    s.missed = 3;
    s.level = 1;
    let over = Screen::GameOver { score: 4, missed: 3 };
    let restart = with(|i| i.restart = true);
    let (s2, screen) = next(tick(&s, &over, &restart, &mut seeded_rng()));
    assert_eq!(screen, Screen::Playing);
    assert_eq!(s2.lives, MAX_LIVES);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.missed, 0);
    assert_eq!(s2.level, 0);
    assert!(s2.powerups.is_empty());
}

// ── Frame pacing ──────────────────────────────────────────────────────────────

#[test]
fn play_screens_run_faster_than_menus() {
    let settings = Settings::default();
    assert_eq!(Screen::Playing.frame_rate(&settings), PLAY_FPS);
    assert_eq!(Screen::Paused.frame_rate(&settings), PLAY_FPS);
    assert_eq!(Screen::Start.frame_rate(&settings), MENU_FPS);
    assert_eq!(
        Screen::GameOver { score: 0, missed: 3 }.frame_rate(&settings),
        MENU_FPS
    );
}

#[test]
fn frame_duration_follows_settings() {
    let settings = Settings {
        play_fps: 50,
        menu_fps: 10,
        ..Settings::default()
    };
    assert_eq!(Screen::Playing.frame_duration(&settings), Duration::from_millis(20));
    assert_eq!(Screen::Start.frame_duration(&settings), Duration::from_millis(100));
}
