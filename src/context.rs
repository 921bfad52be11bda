//! Launch configuration shared with the component tree.
//!
//! The command line is parsed once in `main`; components read the result
//! through [`get_launch_options`] or, below `App`, through
//! [`use_launch_options`].

use dioxus::prelude::*;
use signform_core::Mode;

/// Options fixed for the lifetime of the window
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchOptions {
    /// Form shown when the window opens
    pub mode: Mode,
    /// Window width in logical pixels
    pub width: f64,
    /// Window height in logical pixels
    pub height: f64,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Login,
            width: 480.0,
            height: 820.0,
        }
    }
}

/// Get the launch options parsed from the command line.
pub fn get_launch_options() -> LaunchOptions {
    crate::get_launch_options()
}

/// Hook to access the launch options provided by `App`.
pub fn use_launch_options() -> LaunchOptions {
    use_context::<LaunchOptions>()
}
