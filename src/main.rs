//! `portal` - renders the KL Student Portal page in the terminal.
//!
//! Run with: cargo run --bin portal -- [--toggle N] [--interactive] [--output MODE]

use anyhow::{Context as _, Result};
use clap::Parser;
use console::{Key, Term};
use portal_theme::{OutputMode, Portal};
use tracing_subscriber::EnvFilter;

/// Render the student portal page with a light/dark theme toggle.
#[derive(Debug, Parser)]
#[command(name = "portal", version, about)]
struct Cli {
    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,

    /// Activate the toggle control this many times before rendering
    #[arg(long, default_value_t = 0)]
    toggle: usize,

    /// Redraw after each key press: t/space/enter toggle, q/esc quit
    #[arg(short, long)]
    interactive: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "portal_theme=debug",
        _ => "portal_theme=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let portal = Portal::mount(cli.output).context("failed to mount the portal")?;
    for _ in 0..cli.toggle {
        portal.activate_toggle()?;
    }

    if cli.interactive {
        run_interactive(&portal)
    } else {
        print!("{}", portal.output()?);
        Ok(())
    }
}

fn run_interactive(portal: &Portal) -> Result<()> {
    let term = Term::stdout();
    loop {
        term.clear_screen()?;
        term.write_str(&portal.output()?)?;
        term.write_line(&format!(
            "[t] {}   [q] quit   body class: {}",
            portal.toggle_label(),
            portal.body_class()
        ))?;

        match term.read_key()? {
            Key::Char('t') | Key::Char(' ') | Key::Enter => {
                portal.activate_toggle()?;
            }
            Key::Char('q') | Key::Escape => break,
            _ => {}
        }
    }
    term.clear_screen()?;
    Ok(())
}
