use std::process::ExitCode;

use classic_pong::app::launch;
use classic_pong::pong::rules::Variant;
use classic_pong::util::init_logging;

/// Like the scoreboard game, but the replay question is asked on the console
fn main() -> ExitCode {
    init_logging();
    launch(Variant::ConsoleReplay)
}
