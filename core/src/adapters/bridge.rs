//! Channel-backed scanner adapter bridge.
//!
//! Hardware scanner drivers are typically callback-oriented host plugins.
//! [`ScannerBridge`] lets such a driver satisfy the [`ScannerControl`] port:
//! commands are forwarded over an mpsc channel to a driver task, and
//! enumeration results come back on a oneshot reply channel instead of a
//! nested callback.

use tokio::sync::{mpsc, oneshot};

use crate::domain::ActiveScanner;
use crate::error::{Error, Result};
use crate::ports::ScannerControl;

/// A command forwarded to the scanner driver task.
#[derive(Debug)]
pub enum ScannerCommand {
    /// Enable or disable scanning on the hardware.
    SetEnabled(bool),
    /// Enumerate attached scanners; the driver sends the list on the reply
    /// channel.
    EnumerateScanners(oneshot::Sender<Vec<ActiveScanner>>),
}

/// [`ScannerControl`] implementation that forwards commands to a driver task.
///
/// The driver side consumes [`ScannerCommand`]s from the paired receiver.
/// If the driver drops the receiver, subsequent commands fail with
/// [`Error::Scanner`].
#[derive(Clone)]
pub struct ScannerBridge {
    commands: mpsc::Sender<ScannerCommand>,
}

impl ScannerBridge {
    /// Create a bridge and the command receiver for the driver side.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ScannerCommand>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { commands: tx }, rx)
    }

    async fn send(&self, command: ScannerCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| Error::Scanner("scanner driver is not running".to_string()))
    }
}

impl ScannerControl for ScannerBridge {
    async fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.send(ScannerCommand::SetEnabled(enabled)).await
    }

    async fn active_scanners(&self) -> Result<Vec<ActiveScanner>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(ScannerCommand::EnumerateScanners(reply_tx))
            .await?;

        reply_rx
            .await
            .map_err(|_| Error::Scanner("scanner driver dropped the enumeration reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Driver task answering enumerations with a fixed list.
    fn spawn_fake_driver(
        mut rx: mpsc::Receiver<ScannerCommand>,
        scanners: Vec<ActiveScanner>,
    ) -> tokio::task::JoinHandle<Vec<bool>> {
        tokio::spawn(async move {
            let mut toggles = Vec::new();
            while let Some(command) = rx.recv().await {
                match command {
                    ScannerCommand::SetEnabled(enabled) => toggles.push(enabled),
                    ScannerCommand::EnumerateScanners(reply) => {
                        let _ = reply.send(scanners.clone());
                    }
                }
            }
            toggles
        })
    }

    #[tokio::test]
    async fn test_enumeration_round_trip() {
        let (bridge, rx) = ScannerBridge::new(4);
        let driver = spawn_fake_driver(
            rx,
            vec![
                ActiveScanner::new(1, "Front Desk"),
                ActiveScanner::new(2, "Warehouse"),
            ],
        );

        let scanners = bridge.active_scanners().await.unwrap();
        assert_eq!(scanners.len(), 2);
        assert_eq!(scanners[0].name, "Front Desk");

        drop(bridge);
        driver.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_enabled_reaches_driver() {
        let (bridge, rx) = ScannerBridge::new(4);
        let driver = spawn_fake_driver(rx, vec![]);

        bridge.set_enabled(true).await.unwrap();
        bridge.set_enabled(false).await.unwrap();

        drop(bridge);
        assert_eq!(driver.await.unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_commands_fail_when_driver_is_gone() {
        let (bridge, rx) = ScannerBridge::new(4);
        drop(rx);

        let result = bridge.set_enabled(true).await;
        assert!(matches!(result, Err(Error::Scanner(_))));

        let result = bridge.active_scanners().await;
        assert!(matches!(result, Err(Error::Scanner(_))));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_a_scanner_error() {
        let (bridge, mut rx) = ScannerBridge::new(4);
        tokio::spawn(async move {
            // Consume the command but drop the reply channel.
            let _ = rx.recv().await;
        });

        let result = bridge.active_scanners().await;
        assert!(matches!(result, Err(Error::Scanner(_))));
    }
}
