use anyhow::Result;
use downsort_core::engine::Organizer;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

/// Watches the organizer's root and files every eligible path as soon as an
/// event arrives. Per-file errors go to stderr and never stop the loop.
// TODO: debounce partial downloads (.part/.crdownload renames fire twice).
pub async fn watch_root(mut organizer: Organizer) -> Result<()> {
    let root = organizer.root().to_path_buf();

    let (tx, rx) = channel();
    let mut watcher: RecommendedWatcher = Watcher::new(
        tx,
        notify::Config::default().with_poll_interval(Duration::from_secs(2)),
    )?;
    watcher.watch(&root, RecursiveMode::Recursive)?;

    println!("Watching {:?}...", root);
    loop {
        match rx.recv() {
            Ok(event) => {
                if let Ok(ev) = event {
                    for path in ev.paths {
                        if !organizer.is_eligible(&path) {
                            continue;
                        }
                        match organizer.organize_one(&path).await {
                            Ok(record) => {
                                println!("{} -> {}", record.original_name, record.new_path)
                            }
                            Err(e) => {
                                eprintln!("organize error for {}: {}", display_name(&path), e)
                            }
                        }
                    }
                }
            }
            Err(e) => eprintln!("watch error: {:?}", e),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("?")
        .to_string()
}
