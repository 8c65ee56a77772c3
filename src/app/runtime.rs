//! Runtime: terminal lifecycle, the catalog load task, the input thread,
//! and the main draw/select loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;
use tokio::sync::mpsc;

use crate::state::{AppState, Product};
use crate::theme::PriceGapMode;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Share of the observed price range used as the minimum bound gap when
/// `price_gap_mode = percent`.
const PRICE_GAP_PERCENT: u64 = 10;

/// What: Spawn the blocking input thread feeding terminal events into the
/// async loop.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned at all.
/// - `event_tx`: Channel into the main loop.
/// - `cancelled`: Exit flag checked between polls.
///
/// Output: none.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            // Poll with a timeout so the cancellation flag is observed
            // promptly instead of blocking in read() forever.
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// What: Run the catalog browser end-to-end: set up the terminal, load the
/// catalog in the background, drive the draw/event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command line (catalog path and view override).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal errors.
///
/// Details:
/// - The first frames render a loading notice; once the load task reports,
///   either the filters are initialized from the catalog or the permanent
///   data-unavailable state is shown. A failed load never exits the app.
/// - `BLOSSI_TEST_HEADLESS=1` skips the terminal and the input thread so
///   integration tests can drive the runtime directly.
pub async fn run(args: &crate::args::Args) -> Result<()> {
    let headless = std::env::var("BLOSSI_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let settings = crate::theme::settings();
    let mut app = AppState::default();
    app.view_mode = args.view.unwrap_or(settings.default_view);
    let gap_percent = match settings.price_gap_mode {
        PriceGapMode::Percent => Some(PRICE_GAP_PERCENT),
        PriceGapMode::Fixed => None,
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (catalog_tx, mut catalog_rx) =
        mpsc::unbounded_channel::<std::result::Result<Vec<Product>, String>>();
    let cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, event_tx, cancelled.clone());

    let catalog_path = args.catalog.clone();
    tokio::spawn(async move {
        let res = crate::catalog::load(&catalog_path)
            .await
            .map_err(|e| e.to_string());
        let _ = catalog_tx.send(res);
    });

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }
        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app) {
                    break;
                }
            }
            Some(loaded) = catalog_rx.recv() => {
                app.loading = false;
                match loaded {
                    Ok(products) => {
                        app.catalog = products;
                        crate::logic::init_from_catalog(
                            &mut app,
                            gap_percent,
                            settings.price_gap_fixed,
                        );
                        tracing::info!(products = app.catalog.len(), "catalog ready");
                    }
                    Err(msg) => {
                        tracing::error!(error = %msg, "catalog load failed");
                        app.load_error = Some(msg);
                    }
                }
            }
            else => break,
        }
    }

    cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
