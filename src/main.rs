#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use signform_core::Mode;
use tracing_subscriber::EnvFilter;

use crate::context::LaunchOptions;

/// Global launch options, set from command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (set from command line or default)
pub fn get_launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// SignForm - login and registration form
#[derive(Parser, Debug)]
#[command(name = "signform-desktop")]
#[command(about = "SignForm - Toggleable login / sign-up form")]
struct Args {
    /// Form shown on start (login or sign-up)
    #[arg(short, long, default_value_t = Mode::Login)]
    mode: Mode,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let options = LaunchOptions {
        mode: args.mode,
        width: args.width,
        height: args.height,
    };
    let _ = LAUNCH_OPTIONS.set(options.clone());

    tracing::info!(
        "Starting SignForm in {} mode ({}x{})",
        options.mode,
        options.width,
        options.height
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SignForm")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                options.width,
                options.height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
