// Public exports.
pub use helper::{ReplCandidate, ReplHelper};
pub use session::{render, respond, run_file, Repl, ReplOptions};

// Public mods.
pub mod helper;
pub mod session;
