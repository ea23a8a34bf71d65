use std::io::{self, BufRead, Write};

use log::debug;

/// Attempt cap when no default is set and the user keeps hitting enter.
const MAX_ATTEMPTS: usize = 3;

/// Ask the user to confirm `action`, reading the reply from stdin.
///
/// `default` is what an empty reply means: with `Some(..)` a single read is
/// performed and a bare enter accepts the default; with `None` the prompt
/// reappears until a non-empty reply arrives, capped at three attempts.
/// `skip` answers with the default immediately without prompting, for batch
/// mode.
///
/// Returns `None` when no decision was reached: the input stream was
/// interrupted or closed, or the attempts ran out without a usable reply.
/// Callers must treat both the same way.
pub fn confirm(action: &str, default: Option<bool>, skip: bool) -> Option<bool> {
    confirm_with(io::stdin().lock(), io::stdout(), action, default, skip)
}

/// Same as [`confirm`], but against caller-supplied streams.
///
/// ```
/// use std::io::Cursor;
///
/// let mut shown = Vec::new();
/// let answer = affirm::confirm_with(Cursor::new("y\n"), &mut shown, "Delete it", None, false);
/// assert_eq!(answer, Some(true));
/// assert_eq!(shown, b"Delete it? (y/n) ");
/// ```
pub fn confirm_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    action: &str,
    default: Option<bool>,
    skip: bool,
) -> Option<bool> {
    if skip {
        debug!("Skipping prompt for {:?}.", action);
        return default;
    }

    let (yes, no) = match default {
        None => ("y", "n"),
        Some(true) => ("Y", "n"),
        Some(false) => ("y", "N"),
    };
    let prompt = format!("{action}? ({yes}/{no}) ");

    let choice = if default.is_none() {
        // Keep asking while the user answers with a bare enter.
        let mut choice = String::new();
        for _ in 0..MAX_ATTEMPTS {
            choice = read_reply(&mut input, &mut output, &prompt)?;
            if !choice.is_empty() {
                break;
            }
        }
        choice
    } else {
        read_reply(&mut input, &mut output, &prompt)?
    };

    // Matching is exact: "YES" or "No" fall through like any other
    // unrecognized reply.
    match choice.as_str() {
        "yes" | "y" | "Y" => Some(true),
        "no" | "n" | "N" => Some(false),
        _ => {
            debug!("Reply {:?} not recognized, using default {:?}.", choice, default);
            default
        }
    }
}

/// Write the prompt, then read one reply line with its line ending removed.
///
/// Returns `None` when the stream is interrupted or closed before a line
/// arrives; callers treat that as "no answer".
fn read_reply<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Option<String> {
    write!(output, "{prompt}").ok()?;
    // flush so the prompt shows up before the read blocks
    output.flush().ok()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            Some(line)
        }
    }
}
