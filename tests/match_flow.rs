use egui::{Pos2, Vec2};

use classic_pong::pong::app_game_drawer::{AppGameDrawer, KEYBOARD_REPLAY_PROMPT};
use classic_pong::pong::mechanics::{GameInput, MatchPhase, Player, ReplayChoice, Score};
use classic_pong::pong::rules::{Rules, Variant, BALL_BASE_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};

use common::{run_until, seeded_game};

mod common;

fn single_point_match() -> Rules {
    Rules {
        max_score: Some(1),
        ..Variant::Scoreboard.rules()
    }
}

#[test]
fn ball_thrown_right_wins_the_single_point_match_for_player_1() {
    for seed in 0..20 {
        let mut game = seeded_game(single_point_match(), seed);
        assert!(game.ball.direction.x > 0.0);

        run_until(&mut game, |g| g.is_over()).unwrap_or_else(|| panic!("seed {seed}: match did not end"));

        assert_eq!(game.score, Score { left: 1, right: 0 });
        assert_eq!(game.phase, MatchPhase::Over { winner: Player::Left });

        let labels: Vec<String> = AppGameDrawer::new(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), &game)
            .labels()
            .into_iter()
            .map(|l| l.text)
            .collect();
        assert!(labels.contains(&"Player 1 Wins!".to_string()), "{labels:?}");
        assert!(labels.contains(&KEYBOARD_REPLAY_PROMPT.to_string()), "{labels:?}");
    }
}

#[test]
fn scoring_frame_reaches_the_right_edge() {
    let mut game = seeded_game(single_point_match(), 4);
    let mut last_move = None;
    for _ in 0..common::MAX_FRAMES {
        let x_before = game.ball.shape.min.x;
        let step_x = game.ball.direction.x * game.ball.speed;
        game.time_step(GameInput::none());
        if game.is_over() {
            last_move = Some((x_before, step_x));
            break;
        }
    }
    let (x_before, step_x) = last_move.expect("match did not end");
    assert!(x_before + step_x >= SCREEN_WIDTH - 20.0);
}

#[test]
fn replay_resets_both_scores_and_throws_again() {
    let mut game = seeded_game(single_point_match(), 2);
    run_until(&mut game, |g| g.is_over()).expect("match did not end");

    game.time_step(GameInput { replay: ReplayChoice::PlayAgain, ..GameInput::none() });

    assert_eq!(game.phase, MatchPhase::Playing);
    assert_eq!(game.score, Score::default());
    assert!((game.ball.direction.length() - 1.0).abs() < 1e-5);
}

#[test]
fn quit_choice_leaves_the_finished_match_alone() {
    let mut game = seeded_game(single_point_match(), 2);
    run_until(&mut game, |g| g.is_over()).expect("match did not end");

    game.time_step(GameInput { replay: ReplayChoice::Quit, ..GameInput::none() });

    assert!(game.is_over());
    assert_eq!(game.score, Score { left: 1, right: 0 });
}

#[test]
fn turns_alternate_throw_sides() {
    let rules = Rules {
        max_score: Some(1_000),
        ..Variant::Scoreboard.rules()
    };
    let mut game = seeded_game(rules, 8);
    let mut thrown_right = true;
    let mut points = 0;
    let mut score = game.score;
    while points < 30 {
        game.time_step(GameInput::none());
        if game.score != score {
            score = game.score;
            points += 1;
            thrown_right = !thrown_right;
            if thrown_right {
                assert!(game.ball.direction.x > 0.0);
            } else {
                assert!(game.ball.direction.x <= 0.0);
            }
        }
    }
}

#[test]
fn left_paddle_returns_the_ball_faster() {
    let mut game = seeded_game(Variant::Championship.rules(), 1);
    let paddle = game.paddles.as_ref().unwrap().left.shape;
    game.ball.shape = game.ball.shape.moved_to(Pos2::new(paddle.max.x - 1.0, paddle.min.y + 10.0));
    game.ball.direction = Vec2::new(-0.8, 0.6);
    game.ball.speed = BALL_BASE_SPEED;

    game.time_step(GameInput::none());

    assert!((game.ball.direction.x - 0.8).abs() < 1e-6);
    assert!((game.ball.direction.y - 0.7).abs() < 1e-6);
    assert_eq!(game.ball.speed, 6.0);

    // still inside the paddle, but moving away
    game.time_step(GameInput::none());
    assert!(game.ball.direction.x > 0.0);
    assert_eq!(game.ball.speed, 6.0);
}

#[test]
fn point_resets_ball_speed() {
    let mut game = seeded_game(Variant::Championship.rules(), 1);
    game.ball.speed = 11.0;
    game.ball.shape = game.ball.shape.moved_to(Pos2::new(2.0, 10.0));
    game.ball.direction = Vec2::new(-1.0, 0.0);

    game.time_step(GameInput::none());

    assert_eq!(game.score, Score { left: 0, right: 1 });
    assert_eq!(game.ball.speed, BALL_BASE_SPEED);
}
