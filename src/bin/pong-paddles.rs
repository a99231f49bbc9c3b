use std::process::ExitCode;

use classic_pong::app::launch;
use classic_pong::pong::rules::Variant;
use classic_pong::util::init_logging;

/// Two paddles at constant ball speed
fn main() -> ExitCode {
    init_logging();
    launch(Variant::Paddles)
}
