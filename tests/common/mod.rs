use classic_pong::pong::mechanics::{GameInput, PongMechanics};
use classic_pong::pong::rules::Rules;
use classic_pong::pong::throw::Thrower;

pub const MAX_FRAMES: usize = 10_000;

#[ctor::ctor]
fn init() {
    use log::LevelFilter;
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .init()
}

pub fn seeded_game(rules: Rules, seed: u64) -> PongMechanics {
    PongMechanics::with_thrower(rules, Thrower::seeded(seed))
}

/// Steps without any key held until `done` holds; None if it never does
#[allow(unused)]
pub fn run_until(game: &mut PongMechanics, done: impl Fn(&PongMechanics) -> bool) -> Option<usize> {
    for frame in 1..=MAX_FRAMES {
        game.time_step(GameInput::none());
        if done(game) {
            return Some(frame);
        }
    }
    None
}
