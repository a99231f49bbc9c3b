use egui::epaint::RectShape;
use egui::{Color32, Pos2, Rect, Rounding, Shape, Vec2};

use super::algebra_2d::AaBB;
use super::mechanics::{Assert, MatchPhase, Paddle, PongMechanics};
use super::rules::{ReplayPrompt, SCREEN_HEIGHT, SCREEN_WIDTH};

const SEPARATOR_MARK_LEN_X: f32 = 4.0;
const SEPARATOR_MARK_LEN_Y: f32 = 16.0;
const SEPARATOR_MARK_STEP_Y: f32 = 32.0;

const SCORE_POS_Y: f32 = 40.0;
const SCORE_FONT_SIZE: f32 = 32.0;
const WIN_MESSAGE_FONT_SIZE: f32 = 48.0;
const PROMPT_FONT_SIZE: f32 = 20.0;

pub const KEYBOARD_REPLAY_PROMPT: &str = "Play again? [Y/N]";
pub const CONSOLE_REPLAY_PROMPT: &str = "Answer in the console to keep playing";

/// A line of white text, centered on `pos`
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub pos: Pos2,
    pub text: String,
    pub font_size: f32,
}

/// Turns one game state into everything that goes on the screen for a frame
pub struct AppGameDrawer<'a> {
    canvas_size: Vec2,
    game_state: &'a PongMechanics,
}

impl<'a> AppGameDrawer<'a> {
    pub fn new(
        canvas_size: Vec2,
        game_state: &'a PongMechanics,
    ) -> Self {
        Self { canvas_size, game_state }
    }

    /// pos / SCREEN_LEN = result / canvas_size
    /// => result = pos * canvas_size / SCREEN_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / SCREEN_WIDTH,
            pos.y * self.canvas_size.y / SCREEN_HEIGHT,
        )
    }

    fn scale_y(
        &self,
        len_y: f32,
    ) -> f32 {
        len_y * self.canvas_size.y / SCREEN_HEIGHT
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut result = Vec::with_capacity(20);
        result.push(self.background());
        if self.game_state.rules.max_score.is_some() {
            result.extend(self.separator());
        }
        if let Some(paddles) = &self.game_state.paddles {
            result.push(self.draw_paddle(&paddles.left));
            result.push(self.draw_paddle(&paddles.right));
        }
        if self.game_state.phase == MatchPhase::Playing {
            result.push(self.white_rect(&self.game_state.ball.shape));
        }
        result
    }

    pub fn labels(&self) -> Vec<TextLabel> {
        let mut result = vec![];
        if self.game_state.rules.max_score.is_some() {
            let score = self.game_state.score;
            result.push(self.label(Pos2::new(SCREEN_WIDTH / 4.0, SCORE_POS_Y), score.left.to_string(), SCORE_FONT_SIZE));
            result.push(self.label(Pos2::new(SCREEN_WIDTH * 3.0 / 4.0, SCORE_POS_Y), score.right.to_string(), SCORE_FONT_SIZE));
        }
        if let Some(winner) = self.game_state.winner() {
            result.push(self.label(
                Pos2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - 40.0),
                format!("{winner} Wins!"),
                WIN_MESSAGE_FONT_SIZE,
            ));
            let prompt = match self.game_state.rules.replay {
                ReplayPrompt::Keyboard => KEYBOARD_REPLAY_PROMPT,
                ReplayPrompt::Console => CONSOLE_REPLAY_PROMPT,
            };
            result.push(self.label(
                Pos2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 30.0),
                prompt.to_string(),
                PROMPT_FONT_SIZE,
            ));
        }
        result
    }

    fn label(&self, pos: Pos2, text: String, font_size: f32) -> TextLabel {
        TextLabel {
            pos: self.scale(pos),
            text,
            font_size: self.scale_y(font_size),
        }
    }

    fn background(&self) -> Shape {
        RectShape::filled(
            Rect::from_min_size(Pos2::ZERO, self.canvas_size),
            Rounding::none(),
            Color32::BLACK,
        )
        .into()
    }

    /// dashed line down the middle
    fn separator(&self) -> Vec<Shape> {
        let left_x = (SCREEN_WIDTH - SEPARATOR_MARK_LEN_X) / 2.0;
        let mark_count = (SCREEN_HEIGHT / SEPARATOR_MARK_STEP_Y) as usize;
        (0..mark_count)
            .map(|i| {
                let upper_y = i as f32 * SEPARATOR_MARK_STEP_Y + (SEPARATOR_MARK_STEP_Y - SEPARATOR_MARK_LEN_Y) / 2.0;
                AaBB::from_min_size(
                    Pos2::new(left_x, upper_y),
                    Vec2::new(SEPARATOR_MARK_LEN_X, SEPARATOR_MARK_LEN_Y),
                )
            })
            .map(|mark| self.white_rect(&mark))
            .collect()
    }

    fn draw_paddle(
        &self,
        paddle: &Paddle,
    ) -> Shape {
        paddle.assert();
        self.white_rect(&paddle.shape)
    }

    fn white_rect(&self, aabb: &AaBB) -> Shape {
        RectShape::filled(
            Rect::from_two_pos(self.scale(aabb.min), self.scale(aabb.max)),
            Rounding::none(),
            Color32::WHITE,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::*;
    use crate::pong::mechanics::{MatchPhase, Player};
    use crate::pong::rules::Variant;
    use crate::pong::throw::Thrower;

    const CANVAS: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    fn game(variant: Variant) -> PongMechanics {
        PongMechanics::with_thrower(variant.rules(), Thrower::seeded(9))
    }

    #[rstest]
    // background + ball
    #[case(Variant::BouncingBall, 2)]
    // background + 15 separator marks + ball
    #[case(Variant::Scoreboard, 17)]
    // background + 15 separator marks + 2 paddles + ball
    #[case(Variant::Championship, 19)]
    fn shapes_per_variant(#[case] variant: Variant, #[case] expected: usize) {
        let game_state = game(variant);
        assert_eq!(AppGameDrawer::new(CANVAS, &game_state).shapes().len(), expected);
    }

    #[test]
    fn scores_are_shown_on_both_halves() {
        let mut game_state = game(Variant::Scoreboard);
        game_state.score.left = 3;
        game_state.score.right = 1;
        let labels = AppGameDrawer::new(CANVAS, &game_state).labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "3");
        assert!(labels[0].pos.x < SCREEN_WIDTH / 2.0);
        assert_eq!(labels[1].text, "1");
        assert!(labels[1].pos.x > SCREEN_WIDTH / 2.0);
    }

    #[test]
    fn bouncing_ball_has_no_text() {
        let game_state = game(Variant::BouncingBall);
        assert!(AppGameDrawer::new(CANVAS, &game_state).labels().is_empty());
    }

    #[rstest]
    #[case(Variant::Scoreboard, Player::Left, "Player 1 Wins!", KEYBOARD_REPLAY_PROMPT)]
    #[case(Variant::Paddles, Player::Right, "Player 2 Wins!", KEYBOARD_REPLAY_PROMPT)]
    #[case(Variant::ConsoleReplay, Player::Left, "Player 1 Wins!", CONSOLE_REPLAY_PROMPT)]
    fn win_message_and_prompt(
        #[case] variant: Variant,
        #[case] winner: Player,
        #[case] message: &str,
        #[case] prompt: &str,
    ) {
        let mut game_state = game(variant);
        game_state.phase = MatchPhase::Over { winner };
        let drawer = AppGameDrawer::new(CANVAS, &game_state);
        let texts: Vec<String> = drawer.labels().into_iter().map(|l| l.text).collect();
        assert!(texts.contains(&message.to_string()), "{texts:?}");
        assert!(texts.contains(&prompt.to_string()), "{texts:?}");
    }

    #[test]
    fn finished_match_hides_the_ball() {
        let mut game_state = game(Variant::Scoreboard);
        let playing = AppGameDrawer::new(CANVAS, &game_state).shapes().len();
        game_state.phase = MatchPhase::Over { winner: Player::Left };
        assert_eq!(AppGameDrawer::new(CANVAS, &game_state).shapes().len(), playing - 1);
    }

    #[test]
    fn labels_scale_with_the_canvas() {
        let game_state = game(Variant::Scoreboard);
        let labels = AppGameDrawer::new(CANVAS * 2.0, &game_state).labels();
        assert_eq!(labels[0].pos, Pos2::new(SCREEN_WIDTH / 2.0, SCORE_POS_Y * 2.0));
        assert_eq!(labels[0].font_size, SCORE_FONT_SIZE * 2.0);
    }
}
