//! A terminal UI for tracking who owes whom among a group of friends.
//!
//! Run the binary, press Enter on the welcome screen, then pick a friend to
//! split a bill with or add new friends to the list.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{AppState, Focus},
};
use crate::core::{controller::View, ids::UuidGenerator, registry::FriendRegistry};
use crate::ui::{
    forms::{AddFriendForm, SplitBillForm},
    friends_list::FriendsListWidget,
    landing::LandingWidget,
    layout::AppLayout,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Split bills with friends")]
struct Cli {
    /// Start with an empty friends list instead of the sample friends.
    #[arg(long)]
    empty: bool,

    /// Default image URL for newly added friends.
    #[arg(long = "avatar-url", value_name = "URL")]
    avatar_url: Option<String>,

    /// Print every friend's balance to stdout on exit.
    #[arg(long = "print-balances")]
    print_balances: bool,

    /// Save the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

type Term = Terminal<CrosstermBackend<Stdout>>;

// ───────────────────────────────────────── rendering ─────────

fn draw(frame: &mut Frame, state: &AppState) {
    let controller = &state.controller;

    let View::Main {
        add_friend_open,
        split_for,
    } = controller.view()
    else {
        frame.render_widget(LandingWidget, frame.area());
        let hint = state.config.landing_hint();
        let status_area = AppLayout::from_area(frame.area(), false).status_area;
        frame.render_widget(
            Paragraph::new(hint).style(Theme::status_bar_style()),
            status_area,
        );
        return;
    };

    let layout = AppLayout::from_area(frame.area(), add_friend_open);

    let list_block = Block::default()
        .title(" Friends ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(state.focus == Focus::FriendsList));
    let list = FriendsListWidget::new(controller.registry().as_slice())
        .selected(controller.selected())
        .cursor(state.cursor)
        .focused(state.focus == Focus::FriendsList)
        .block(list_block);
    frame.render_widget(list, layout.list_area);

    if let Some(area) = layout.add_form_area {
        let focused = match state.focus {
            Focus::AddFriend(field) => Some(field),
            _ => None,
        };
        frame.render_widget(
            AddFriendForm {
                draft: &state.add_draft,
                focused,
            },
            area,
        );
    }

    let toggle_label = if add_friend_open { " close " } else { " Add friend " };
    frame.render_widget(
        Paragraph::new(toggle_label).style(Theme::button_style()),
        layout.toggle_area,
    );

    if let Some(friend) = split_for.and_then(|id| controller.registry().get(&id)) {
        let focused = match state.focus {
            Focus::SplitBill(field) => Some(field),
            _ => None,
        };
        frame.render_widget(
            SplitBillForm {
                friend_name: &friend.name,
                draft: &state.split_draft,
                focused,
            },
            layout.split_area,
        );
    }

    let hint = state.config.list_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

// ───────────────────────────────────────── main ─────────────

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // The UI owns stdout; logs go to stderr.
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

/// Layer command-line flags over the loaded config and build the starting
/// friends list.
fn startup(
    cli: &Cli,
    mut user_config: config::AppConfig,
) -> (config::AppConfig, FriendRegistry) {
    if let Some(url) = &cli.avatar_url {
        user_config.default_avatar_url.clone_from(url);
    }
    let registry = if cli.empty {
        FriendRegistry::new()
    } else {
        FriendRegistry::seeded()
    };
    (user_config, registry)
}

async fn run(terminal: &mut Term, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        match events.recv().await {
            Some(AppEvent::Key(key)) => handler::handle_key(state, key),
            Some(AppEvent::Resize | AppEvent::Tick) => {}
            None => break,
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let (user_config, registry) = startup(&cli, config::AppConfig::load());
    if cli.write_config {
        user_config.save()?;
        return Ok(());
    }

    let mut state = AppState::new(registry, Box::new(UuidGenerator), user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let outcome = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome?;

    if cli.print_balances {
        for friend in state.controller.registry().iter() {
            println!("{}\t{}", friend.name, friend.status_line());
        }
    }

    Ok(())
}
