use std::io::{BufRead, Write};

pub const KEEP_PLAYING_QUESTION: &str = "Do you wish to keep playing? [y/n]";

/// Asks on the console whether another match should be played.
/// Only an answer starting with `y` means yes; everything else, EOF included, means no.
pub fn ask_keep_playing<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<bool> {
    writeln!(output, "{KEEP_PLAYING_QUESTION}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_start().starts_with('y'))
}

/// [ask_keep_playing] on stdin/stdout; I/O failures count as "no"
pub fn ask_keep_playing_on_stdio() -> bool {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match ask_keep_playing(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(keep_playing) => keep_playing,
        Err(e) => {
            log::warn!("console prompt failed: {e}");
            false
        }
    }
}
