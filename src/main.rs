use std::process::ExitCode;

use classic_pong::app::launch;
use classic_pong::pong::rules::Variant;
use classic_pong::util::init_logging;

/// Two paddles, the ball speeds up with every paddle hit
fn main() -> ExitCode {
    init_logging();
    launch(Variant::Championship)
}
