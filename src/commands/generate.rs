//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::generator::Generator;
use crate::{Folio, CONFIG_FILE};

/// Quiet period before a batch of changes triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// How often the watch loop checks its stop flag
const POLL: Duration = Duration::from_millis(200);

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(folio)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate until interrupted
pub async fn watch(folio: &Folio) -> Result<()> {
    let folio = folio.clone();
    tokio::task::spawn_blocking(move || watch_sources(&folio, &AtomicBool::new(false), || {}))
        .await?
}

/// Blocking watch loop over every source of the site.
///
/// Changes are debounced, then the site is regenerated and `on_rebuild`
/// runs after each successful generation. Returns once `stop` is set.
pub fn watch_sources(folio: &Folio, stop: &AtomicBool, on_rebuild: impl FnMut()) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    for dir in [&folio.content_dir, &folio.static_dir, &folio.i18n_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = folio.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    rebuild_on_change(folio, &rx, stop, on_rebuild);

    Ok(())
}

/// Regenerate for every debounced batch that touches a relevant file
fn rebuild_on_change(
    folio: &Folio,
    rx: &Receiver<DebounceEventResult>,
    stop: &AtomicBool,
    mut on_rebuild: impl FnMut(),
) {
    while !stop.load(Ordering::Relaxed) {
        match rx.recv_timeout(POLL) {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if changed.is_empty() {
                    continue;
                }

                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match reload_and_run(folio) {
                    Ok(()) => on_rebuild(),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Ok(Err(e)) => tracing::error!("Watch error: {:?}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Editor and VCS noise never triggers a rebuild
pub(crate) fn is_relevant(path: &Path) -> bool {
    let path = path.to_string_lossy();
    !path.contains(".git")
        && !path.contains(".DS_Store")
        && !path.ends_with('~')
        && !path.ends_with(".swp")
}

/// Re-read the configuration before generating so config edits apply
pub fn reload_and_run(folio: &Folio) -> Result<()> {
    let folio = Folio::new(&folio.base_dir)?;
    run(&folio)
}
