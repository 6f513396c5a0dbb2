//! Theme, dashboard layout and session commands

use chrono::Utc;
use clap::Subcommand;

use crate::error::CashlyResult;
use crate::stores::{ClientStores, ThemeMode, WidgetKind};

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Choose a theme
    Set {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
    /// Switch between light and dark
    Toggle,
}

/// Dashboard layout subcommands
#[derive(Subcommand)]
pub enum LayoutCommands {
    /// List widgets in order
    Show,
    /// Move a widget to a position (0-based)
    Move {
        #[arg(value_enum)]
        widget: WidgetKind,
        position: usize,
    },
    /// Hide a widget
    Hide {
        #[arg(value_enum)]
        widget: WidgetKind,
    },
    /// Show a hidden widget
    Unhide {
        #[arg(value_enum)]
        widget: WidgetKind,
    },
    /// Restore the default layout
    Reset,
}

/// Session subcommands
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show who is signed in
    Status,
    /// Forget stored tokens
    SignOut,
}

/// Handle a theme command
pub fn handle_theme_command(stores: &mut ClientStores, cmd: ThemeCommands) -> CashlyResult<()> {
    match cmd {
        ThemeCommands::Show => {}
        ThemeCommands::Set { mode } => stores.theme.update(|t| t.set(mode))?,
        ThemeCommands::Toggle => {
            stores.theme.update(|t| t.toggle())?;
        }
    }
    println!("Theme: {}", stores.theme.get().mode);
    Ok(())
}

/// Handle a layout command
pub fn handle_layout_command(stores: &mut ClientStores, cmd: LayoutCommands) -> CashlyResult<()> {
    match cmd {
        LayoutCommands::Show => {}
        LayoutCommands::Move { widget, position } => stores
            .layout
            .try_update(|l| l.move_widget(widget, position))?,
        LayoutCommands::Hide { widget } => stores
            .layout
            .try_update(|l| l.set_visible(widget, false))?,
        LayoutCommands::Unhide { widget } => stores
            .layout
            .try_update(|l| l.set_visible(widget, true))?,
        LayoutCommands::Reset => stores.layout.reset()?,
    }

    println!("{:>3}  {:22} {}", "#", "Widget", "Visible");
    println!("{}", "-".repeat(36));
    for (i, slot) in stores.layout.get().widgets.iter().enumerate() {
        println!(
            "{:>3}  {:22} {}",
            i,
            slot.kind.title(),
            if slot.visible { "yes" } else { "no" }
        );
    }
    Ok(())
}

/// Handle a session command
pub fn handle_session_command(stores: &mut ClientStores, cmd: SessionCommands) -> CashlyResult<()> {
    match cmd {
        SessionCommands::Status => {
            let session = stores.session.get();
            let now = Utc::now();
            match &session.user_email {
                Some(email) if session.is_authenticated(now) => {
                    println!("Signed in as {}", email);
                }
                Some(email) if session.needs_refresh(now) => {
                    println!("Session for {} expired; refresh required", email);
                }
                _ => println!("Not signed in"),
            }
            if let Some(expiry) = session.expires_at {
                println!("Token expires: {}", expiry.to_rfc3339());
            }
        }
        SessionCommands::SignOut => {
            stores.session.update(|s| s.sign_out())?;
            println!("Signed out");
        }
    }
    Ok(())
}
