use std::path::{Path, PathBuf};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, info, warn};

/// Watches the config file and sends a notification on every write.
///
/// The watch task lives exactly as long as this handle; dropping it stops
/// the filesystem watcher.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use powerai_config::ConfigWatcher;
///
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/powerai/powerai.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed — reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
    task: JoinHandle<()>,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let task = tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path, task }, rx)
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        debug!("Stopping config watcher for '{}'", self.path.display());
        self.task.abort();
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    // A missing config file is normal (defaults are in use); nothing to watch.
    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        warn!("Not watching '{}': {e}", path.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                use notify::EventKind::*;
                if matches!(e.kind, Modify(_) | Create(_)) && tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
