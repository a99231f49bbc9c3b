use std::time::Duration;

/// TOP / LEFT corner is 0/0
pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

pub const BALL_SIZE: f32 = 20.0;
/// ball top-left corner after a reset
pub const BALL_CENTER_X: f32 = (SCREEN_WIDTH - BALL_SIZE) / 2.0;
pub const BALL_CENTER_Y: f32 = (SCREEN_HEIGHT - BALL_SIZE) / 2.0;

/// pixels per frame along a unit direction
pub const BALL_BASE_SPEED: f32 = 5.0;
pub const BALL_SPEED_INCREMENT: f32 = 1.0;

/// added to the direction component on each wall or paddle bounce
pub const DIRECTION_NUDGE: f32 = 0.1;

pub const PADDLE_LEN_X: f32 = 10.0;
pub const PADDLE_LEN_Y: f32 = 80.0;
pub const PADDLE_WALL_DISTANCE: f32 = 20.0;
/// pixels per frame while a key is held
pub const PADDLE_SPEED: f32 = 6.0;

pub const MAX_SCORE: u32 = 5;

/// ~60 frames per second; elapsed time is not measured
pub const FRAME_DELAY: Duration = Duration::from_millis(1000 / 60);

pub const WINDOW_TITLE: &str = "PONG";

/// How the player decides about another match once somebody has won
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPrompt {
    Keyboard,
    Console,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub paddles: bool,
    pub speed_escalation: bool,
    /// `None` = no score keeping; the ball is just re-thrown when it leaves the field
    pub max_score: Option<u32>,
    pub replay: ReplayPrompt,
}

/// The game flavours, from a plain bouncing ball up to the full paddle game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    BouncingBall,
    Scoreboard,
    ConsoleReplay,
    Paddles,
    Championship,
}

impl Variant {
    pub fn rules(&self) -> Rules {
        match self {
            Variant::BouncingBall => Rules {
                paddles: false,
                speed_escalation: false,
                max_score: None,
                replay: ReplayPrompt::Keyboard,
            },
            Variant::Scoreboard => Rules {
                paddles: false,
                speed_escalation: false,
                max_score: Some(MAX_SCORE),
                replay: ReplayPrompt::Keyboard,
            },
            Variant::ConsoleReplay => Rules {
                paddles: false,
                speed_escalation: false,
                max_score: Some(MAX_SCORE),
                replay: ReplayPrompt::Console,
            },
            Variant::Paddles => Rules {
                paddles: true,
                speed_escalation: false,
                max_score: Some(MAX_SCORE),
                replay: ReplayPrompt::Keyboard,
            },
            Variant::Championship => Rules {
                paddles: true,
                speed_escalation: true,
                max_score: Some(MAX_SCORE),
                replay: ReplayPrompt::Keyboard,
            },
        }
    }
}
