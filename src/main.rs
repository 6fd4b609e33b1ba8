use healthhub::adapters::{FileStore, SessionPlayer, StackHistory};
use healthhub::app::{App, AppEvent};
use healthhub::cli::{parse_args, run_cli_command, RunOptions};
use healthhub::config::{HubConfig, VIEW_ENV};
use healthhub::domain::meditation::default_tracks;
use healthhub::domain::ViewId;
use healthhub::input::{map_key, KeybindingConfig};
use healthhub::logging::init_logging;
use healthhub::runtime::EffectRunner;
use healthhub::storage::PreferenceStore;
use healthhub::terminal::{setup_panic_hook, TerminalManager};
use healthhub::ui;

use chrono::Local;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

type HubRunner = EffectRunner<FileStore, StackHistory, SessionPlayer>;

/// CLI flags override the environment.
fn build_config(options: &RunOptions) -> HubConfig {
    let mut config = HubConfig::from_env();
    if let Some(dir) = &options.data_dir {
        config = config.with_data_dir(dir.clone());
    }
    config
}

/// Initial view: the CLI fragment if valid, then `HEALTHHUB_VIEW`, then home.
fn initial_view(options: &RunOptions, config: &HubConfig) -> ViewId {
    if let Some(name) = &options.view {
        match ViewId::from_fragment(name) {
            Some(view) => return view,
            None => tracing::warn!(view = %name, "unknown view requested, ignoring"),
        }
    }
    config.initial_view.unwrap_or(ViewId::Home)
}

fn main() -> Result<()> {
    let options = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let config = build_config(&options);
    init_logging(&config)?;
    if let Ok(name) = std::env::var(VIEW_ENV) {
        if config.initial_view.is_none() {
            tracing::warn!(view = %name, "ignoring unknown {}", VIEW_ENV);
        }
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let initial = initial_view(&options, &config);
    let store = FileStore::new(config.data_dir.clone());
    let prefs = PreferenceStore::new(store.clone()).load();
    let tracks = default_tracks(&config.audio_dir());

    let mut app = App::new(
        &config,
        prefs,
        initial,
        tracks.clone(),
        Local::now().date_naive(),
    );
    tracing::info!(view = %initial, tip = app.daily_tip, "starting healthhub");

    let mut runner = EffectRunner::new(
        store,
        StackHistory::starting_at(initial),
        SessionPlayer::new(tracks),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(
        manager.terminal(),
        &mut app,
        &mut runner,
        config.tick_ms,
    ));
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "healthhub exited with error");
    } else {
        tracing::info!("healthhub exited");
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut HubRunner,
    tick_ms: u64,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let bindings = KeybindingConfig::new();
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(tick_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            let now = now_ms();
            terminal.draw(|f| ui::render(f, app, now))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                runner.apply(app, AppEvent::Tick, now_ms());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(event) = map_key(&key, &bindings) {
                            tracing::debug!(?event, "key");
                            runner.apply(app, event, now_ms());
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_view_wins_over_config() {
        let config = HubConfig::default().with_initial_view(ViewId::Fitness);
        let options = RunOptions {
            view: Some("#contact".to_string()),
            data_dir: None,
        };
        assert_eq!(initial_view(&options, &config), ViewId::Contact);
    }

    #[test]
    fn test_unknown_cli_view_falls_back() {
        let options = RunOptions {
            view: Some("#settings".to_string()),
            data_dir: None,
        };
        assert_eq!(initial_view(&options, &HubConfig::default()), ViewId::Home);

        let config = HubConfig::default().with_initial_view(ViewId::Mental);
        assert_eq!(initial_view(&options, &config), ViewId::Mental);
    }

    #[test]
    fn test_cli_data_dir_overrides() {
        let options = RunOptions {
            view: None,
            data_dir: Some(PathBuf::from("/tmp/hub-data")),
        };
        assert_eq!(build_config(&options).data_dir, PathBuf::from("/tmp/hub-data"));
    }
}
