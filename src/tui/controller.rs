use tokio::sync::mpsc::UnboundedSender;
use tokio::task;
use tracing::warn;

use crate::app::AppMessage;
use crate::config::AppConfig;
use crate::roster;

#[derive(Clone)]
pub struct AppController {
    config: AppConfig,
    message_tx: UnboundedSender<AppMessage>,
}

impl AppController {
    pub fn new(config: AppConfig, message_tx: UnboundedSender<AppMessage>) -> Self {
        Self { config, message_tx }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Reads the roster off the UI thread and reports back over the message channel.
    pub fn load_roster(&self) {
        let path = self.config.roster_path().map(|p| p.to_path_buf());
        let tx = self.message_tx.clone();

        task::spawn(async move {
            let outcome = task::spawn_blocking(move || roster::load(path.as_deref())).await;

            match outcome {
                Ok(Ok(artists)) => {
                    let _ = tx.send(AppMessage::RosterLoaded(artists));
                }
                Ok(Err(err)) => {
                    warn!(%err, "roster load failed");
                    let _ = tx.send(AppMessage::RosterFailed(format!(
                        "Roster unavailable: {err}"
                    )));
                }
                Err(join_err) => {
                    let _ = tx.send(AppMessage::RosterFailed(format!(
                        "Roster loader panicked: {join_err}"
                    )));
                }
            }
        });
    }
}
