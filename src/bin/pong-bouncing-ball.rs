use std::process::ExitCode;

use classic_pong::app::launch;
use classic_pong::pong::rules::Variant;
use classic_pong::util::init_logging;

/// Only the ball, re-thrown from the center whenever it leaves the field
fn main() -> ExitCode {
    init_logging();
    launch(Variant::BouncingBall)
}
