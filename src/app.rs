//! Application entry points: GUI, headless watcher, and one-shot join

use crate::clipboard::{ClipboardBackend, SystemClipboard};
use crate::controller::Controller;
use crate::gui::{AppFlags, LineJoinerApp};
use crate::utils::config::AppSettings;
use crate::utils::error::LineJoinerError;
use crate::watcher::{self, WatcherCommand, WatcherEvent, WatcherHandle};
use anyhow::Result;
use iced::Application;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::info;

/// Run the Line Joiner window
pub fn run_gui(settings: AppSettings) -> Result<()> {
    let runtime = Arc::new(Runtime::new()?);

    let (watcher, _task) = {
        let _guard = runtime.enter();
        watcher::spawn(&settings, Box::new(SystemClipboard::new()))
    };

    LineJoinerApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(700.0, 650.0),
            resizable: false,
            ..Default::default()
        },
        ..iced::Settings::with_flags(AppFlags {
            settings,
            watcher,
            runtime,
        })
    })?;

    Ok(())
}

/// Run the watcher without a window until Ctrl-C
pub async fn run_headless(settings: AppSettings) -> Result<()> {
    let (handle, task) = watcher::spawn(&settings, Box::new(SystemClipboard::new()));
    info!("Watching clipboard in {}, press Ctrl-C to stop", settings.start_mode);

    watch_until(handle, task, tokio::signal::ctrl_c()).await
}

/// Log watcher events until `shutdown` resolves, then stop the watcher.
///
/// `shutdown` is polled as one future for the whole run, so a signal that
/// arrives while an event is being handled is not lost.
pub async fn watch_until<F>(
    mut handle: WatcherHandle,
    task: JoinHandle<()>,
    shutdown: F,
) -> Result<()>
where
    F: Future,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            event = handle.recv() => match event {
                Some(WatcherEvent::StatusChanged(status)) => info!("{}", status),
                Some(WatcherEvent::AutoProcessed(processed)) => info!(
                    "Joined {} lines into {} chars",
                    processed.input.lines().count(),
                    processed.output.chars().count()
                ),
                Some(other) => info!("{:?}", other),
                None => break,
            },
            _ = &mut shutdown => {
                handle.send_async(WatcherCommand::Shutdown).await?;
                break;
            }
        }
    }

    // Closing our ends unblocks a watcher stuck on a full event channel
    drop(handle);
    task.await?;
    Ok(())
}

/// Join the current clipboard text once and return the result
pub fn run_once(
    settings: &AppSettings,
    clipboard: &mut dyn ClipboardBackend,
) -> Result<String, LineJoinerError> {
    let mut controller = Controller::new(settings.start_mode);
    let processed = controller.process_now(clipboard, &mut |_| {})?;
    Ok(processed.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardContents, MemoryClipboard};
    use crate::controller::Mode;
    use std::time::Duration;
    use tokio::sync::oneshot;
    use tokio::time::timeout;

    fn fast_settings(start_mode: Mode) -> AppSettings {
        AppSettings {
            poll_interval_ms: 5,
            idle_backoff_ms: 5,
            start_mode,
            event_buffer: 64,
        }
    }

    #[test]
    fn test_run_once_joins_clipboard() {
        let mut clipboard = MemoryClipboard::with_text("first\n\n second \n");
        let joined = run_once(&AppSettings::default(), &mut clipboard).unwrap();

        assert_eq!(joined, "first second");
        assert_eq!(clipboard.text().as_deref(), Some("first second"));
    }

    #[test]
    fn test_run_once_reports_non_text() {
        let mut clipboard = MemoryClipboard::with_contents(ClipboardContents::NonText);
        let result = run_once(&AppSettings::default(), &mut clipboard);

        assert!(matches!(result, Err(LineJoinerError::Clipboard(_))));
        assert_eq!(clipboard.write_count(), 0);
    }

    #[tokio::test]
    async fn test_watch_until_stops_on_shutdown_signal() {
        let clipboard = MemoryClipboard::with_text("a\nb");
        let (handle, task) =
            watcher::spawn(&fast_settings(Mode::Automatic), Box::new(clipboard.clone()));
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let run = tokio::spawn(watch_until(handle, task, stop_rx));
        tokio::time::sleep(Duration::from_millis(50)).await;
        stop_tx.send(()).unwrap();

        timeout(Duration::from_secs(2), run)
            .await
            .expect("watch_until did not stop")
            .unwrap()
            .unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("a b"));
    }

    #[tokio::test]
    async fn test_watch_until_sees_signal_sent_during_event_traffic() {
        let clipboard = MemoryClipboard::with_text("start\ntext");
        let (handle, task) =
            watcher::spawn(&fast_settings(Mode::Automatic), Box::new(clipboard.clone()));
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        // Keep the watcher producing events while the signal fires
        let feeder = {
            let clipboard = clipboard.clone();
            tokio::spawn(async move {
                for i in 0..20 {
                    clipboard.set_text(format!("line {}\nnext", i));
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            })
        };
        stop_tx.send(()).unwrap();

        timeout(Duration::from_secs(2), watch_until(handle, task, stop_rx))
            .await
            .expect("shutdown signal was missed")
            .unwrap();
        feeder.await.unwrap();
    }
}
