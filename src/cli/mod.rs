//! # CLI Module
//!
//! Command implementations for spotcli. Each command drives a [`SpotClient`]
//! call, shows a spinner while the request is in flight and renders the
//! result as a table or a coloured status line.
//!
//! ## Commands
//!
//! - [`list_spots`] - Table of all spots, sorted by name
//! - [`show_spot`] - Every field of one spot
//! - [`login`] - Log in with username and password
//! - [`sign_up`] - Create an account
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotcli spots                               # List spots
//! spotcli spot uwhQUedJxo                     # Show one spot
//! spotcli login --username alice --password s # Log in, then list spots
//! spotcli signup --username bob --password s  # Sign up, then list spots
//! ```
//!
//! Failures end the process through the `error!` macro with a readable
//! message; the client itself never exits.
//!
//! [`SpotClient`]: crate::parse::SpotClient

mod auth;
mod spots;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::login;
pub use auth::sign_up;
pub use spots::list_spots;
pub use spots::show_spot;

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
