//! Yes/no confirmation prompts for command-line tools.
//!
//! [`confirm`] asks a question on stdout, reads one reply line from stdin
//! and maps it to a boolean, falling back to a caller-supplied default. The
//! default is a tri-state `Option<bool>`: when it is `None` the prompt keeps
//! reappearing (up to three attempts) instead of falling back.
//!
//! ```no_run
//! if affirm::confirm("Delete 12 stale branches", Some(false), false) == Some(true) {
//!     // destructive work goes here
//! }
//! ```

pub mod prompt;

pub use prompt::{confirm, confirm_with};
