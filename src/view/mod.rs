//! Surfaces the client talks to the user through.
//!
//! The form and results panel only depend on these traits, so the terminal
//! front end and the tests plug in their own implementations.

pub mod terminal;

pub use terminal::{render_header, render_panel, TerminalAlerts, TerminalBrowser};

/// User-visible notifications
pub trait Alerts {
    /// Non-blocking message, e.g. a validation or request failure
    fn alert(&mut self, message: &str);

    /// Message the user has to acknowledge before anything else happens
    fn warn_blocking(&mut self, message: &str);
}

/// Opens links outside the application
pub trait Browser {
    fn open_new_context(&mut self, url: &str);
}
