use std::fmt::{Display, Formatter};

use egui::{Pos2, Vec2};

use crate::pong::algebra_2d::AaBB;
use crate::pong::rules::*;
use crate::pong::throw::{Side, Thrower};

#[derive(Clone, Debug)]
pub struct PongMechanics {
    pub rules: Rules,
    pub ball: Ball,
    /// only present in paddle variants
    pub paddles: Option<Paddles>,
    pub score: Score,
    pub phase: MatchPhase,
    thrower: Thrower,
}

impl PongMechanics {
    pub fn new(rules: Rules) -> Self {
        Self::with_thrower(rules, Thrower::new())
    }

    pub fn with_thrower(rules: Rules, thrower: Thrower) -> Self {
        let mut mechanics = Self {
            rules,
            ball: PongMechanics::initial_ball(),
            paddles: rules.paddles.then(PongMechanics::initial_paddles),
            score: Score::default(),
            phase: MatchPhase::Playing,
            thrower,
        };
        mechanics.start_match();
        mechanics
    }

    fn initial_ball() -> Ball {
        Ball {
            shape: AaBB::from_min_size(
                Pos2::new(BALL_CENTER_X, BALL_CENTER_Y),
                Vec2::new(BALL_SIZE, BALL_SIZE),
            ),
            direction: Vec2::ZERO,
            speed: BALL_BASE_SPEED,
        }
    }

    fn initial_paddles() -> Paddles {
        let upper_y = (SCREEN_HEIGHT - PADDLE_LEN_Y) / 2.0;
        let size = Vec2::new(PADDLE_LEN_X, PADDLE_LEN_Y);
        Paddles {
            left: Paddle {
                shape: AaBB::from_min_size(Pos2::new(PADDLE_WALL_DISTANCE, upper_y), size),
            },
            right: Paddle {
                shape: AaBB::from_min_size(
                    Pos2::new(SCREEN_WIDTH - PADDLE_WALL_DISTANCE - PADDLE_LEN_X, upper_y),
                    size,
                ),
            },
        }
    }

    /// Both scores back to zero and the first turn thrown
    pub fn start_match(&mut self) {
        self.score = Score::default();
        self.phase = MatchPhase::Playing;
        log::info!("match started");
        self.new_turn();
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::Over { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    /// physically move one frame forward
    pub fn time_step(&mut self, input: GameInput) {
        if self.is_over() {
            if input.replay == ReplayChoice::PlayAgain {
                self.start_match();
            }
            return;
        }

        if let Some(paddles) = &mut self.paddles {
            paddles.left.proceed(input.left);
            paddles.right.proceed(input.right);
        }

        self.ball.proceed();

        if let Some(scorer) = self.ball.scoring_player() {
            self.point_for(scorer);
            return;
        }
        self.check_wall_bounce();
        self.check_paddle_hit();
    }

    fn point_for(&mut self, scorer: Player) {
        let Some(max_score) = self.rules.max_score else {
            log::debug!("ball left the field; no score keeping");
            self.new_turn();
            return;
        };

        self.score.increment(scorer);
        log::info!("point for {}, score: {}", scorer, self.score);

        if self.score.of(scorer) >= max_score {
            log::info!("{} wins the match {}", scorer, self.score);
            self.phase = MatchPhase::Over { winner: scorer };
            self.reset_positions();
            self.ball.direction = Vec2::ZERO;
        } else {
            self.new_turn();
        }
    }

    fn new_turn(&mut self) {
        self.reset_positions();
        self.ball.speed = BALL_BASE_SPEED;
        self.ball.direction = self.thrower.throw_from(self.ball.shape.min);
    }

    fn reset_positions(&mut self) {
        self.ball.shape = self.ball.shape.moved_to(Pos2::new(BALL_CENTER_X, BALL_CENTER_Y));
        if self.paddles.is_some() {
            self.paddles = Some(PongMechanics::initial_paddles());
        }
    }

    /// Reflects on the ceiling or floor.
    /// The horizontal part gets a push in its current travel direction on every bounce;
    /// over a long rally that adds up without limit.
    fn check_wall_bounce(&mut self) {
        let ball = &mut self.ball;
        if ball.shape.min.y <= 0.0 || ball.shape.max.y >= SCREEN_HEIGHT {
            ball.direction.y *= -1.0;
            match Side::of_direction(ball.direction) {
                Side::Right => ball.direction.x += DIRECTION_NUDGE,
                Side::Left => ball.direction.x -= DIRECTION_NUDGE,
                Side::Center => ball.direction.x = self.thrower.random_nudge_x(),
            }
        }
    }

    /// A paddle only reflects a ball travelling towards it, so a ball still inside the paddle after
    /// the bounce is left alone.
    fn check_paddle_hit(&mut self) {
        let Some(paddles) = &self.paddles else {
            return;
        };
        let hit = match Side::of_direction(self.ball.direction) {
            Side::Left => self.ball.shape.overlaps(&paddles.left.shape),
            Side::Right => self.ball.shape.overlaps(&paddles.right.shape),
            Side::Center => false,
        };
        if hit {
            self.ball.bounce_off_paddle(self.rules.speed_escalation);
            log::debug!("paddle hit; direction: {:?}, speed: {}", self.ball.direction, self.ball.speed);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    Over { winner: Player },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl Player {
    pub fn number(&self) -> u8 {
        match self {
            Player::Left => 1,
            Player::Right => 2,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Left => self.left,
            Player::Right => self.right,
        }
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::Left => self.left += 1,
            Player::Right => self.right += 1,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.left, self.right)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    pub left: PaddleControl,
    pub right: PaddleControl,
    pub replay: ReplayChoice,
    pub exit: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            left: PaddleControl::None,
            right: PaddleControl::None,
            replay: ReplayChoice::Undecided,
            exit: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaddleControl {
    None,
    Up,
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplayChoice {
    Undecided,
    PlayAgain,
    Quit,
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub shape: AaBB,
    /// unit length right after a throw, drifts with every bounce
    pub direction: Vec2,
    /// pixels per frame
    pub speed: f32,
}

impl Ball {
    fn proceed(&mut self) {
        self.shape = self.shape.translate(self.direction * self.speed);
    }

    /// The player who scores because the ball reached the opposite edge
    fn scoring_player(&self) -> Option<Player> {
        if self.shape.max.x >= SCREEN_WIDTH {
            Some(Player::Left)
        } else if self.shape.min.x <= 0.0 {
            Some(Player::Right)
        } else {
            None
        }
    }

    fn bounce_off_paddle(&mut self, speed_escalation: bool) {
        self.direction.x = -self.direction.x;
        if self.direction.y > 0.0 {
            self.direction.y += DIRECTION_NUDGE;
        } else if self.direction.y < 0.0 {
            self.direction.y -= DIRECTION_NUDGE;
        }
        if speed_escalation {
            self.speed += BALL_SPEED_INCREMENT;
        }
    }
}

#[derive(Clone, Debug)]
pub struct Paddles {
    pub left: Paddle,
    pub right: Paddle,
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub shape: AaBB,
}

impl Paddle {
    /// move one frame according to the held key; stops at the screen border
    pub fn proceed(&mut self, control: PaddleControl) {
        let dy = match control {
            PaddleControl::None => return,
            PaddleControl::Up => -PADDLE_SPEED,
            PaddleControl::Down => PADDLE_SPEED,
        };
        let upper_y = (self.shape.min.y + dy).clamp(0.0, SCREEN_HEIGHT - self.shape.size().y);
        self.shape = self.shape.moved_to(Pos2::new(self.shape.min.x, upper_y));
    }
}

pub trait Assert {
    fn assert(&self);
}

impl Assert for Paddle {
    fn assert(&self) {
        assert!(self.shape.min.x >= 0.0);
        assert!(self.shape.max.x <= SCREEN_WIDTH);
        assert!(self.shape.min.y >= 0.0);
        assert!(self.shape.max.y <= SCREEN_HEIGHT);
    }
}
