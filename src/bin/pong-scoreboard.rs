use std::process::ExitCode;

use classic_pong::app::launch;
use classic_pong::pong::rules::Variant;
use classic_pong::util::init_logging;

/// Score keeping up to the winning score, replay decided on the keyboard
fn main() -> ExitCode {
    init_logging();
    launch(Variant::Scoreboard)
}
