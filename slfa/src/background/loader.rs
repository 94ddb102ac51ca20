use crate::events::DataEvent;
use slfa_data::Roster;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{mpsc, RwLock};

/// Background I/O for the application: reading the roster and writing
/// text downloads. Results are reported over `data_tx`.
#[derive(Clone)]
pub struct Loader {
    roster_path: Option<PathBuf>,
    export_dir: PathBuf,
    cached_roster: Arc<RwLock<Option<Arc<Roster>>>>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl Loader {
    pub fn new(
        roster_path: Option<PathBuf>,
        export_dir: PathBuf,
        data_tx: mpsc::UnboundedSender<DataEvent>,
    ) -> Self {
        Self {
            roster_path,
            export_dir,
            cached_roster: Arc::new(RwLock::new(None)),
            data_tx,
        }
    }

    /// Load the roster, reusing the last one read unless `force_refresh`
    pub async fn load_roster(&self, force_refresh: bool) {
        tracing::info!("Loading roster (force_refresh={})", force_refresh);

        if !force_refresh {
            if let Some(roster) = self.cached_roster.read().await.clone() {
                tracing::debug!("Using cached roster with {} players", roster.len());
                let _ = self.data_tx.send(DataEvent::RosterLoaded { roster });
                return;
            }
        }

        match self.read_roster().await {
            Ok(roster) => {
                let roster = Arc::new(roster);
                tracing::info!("Loaded roster with {} players", roster.len());
                *self.cached_roster.write().await = Some(roster.clone());
                let _ = self.data_tx.send(DataEvent::RosterLoaded { roster });
            }
            Err(e) => {
                tracing::error!("Failed to load roster: {}", e);
                let _ = self.data_tx.send(DataEvent::LoadError { error: e });
            }
        }
    }

    async fn read_roster(&self) -> Result<Roster, String> {
        let Some(path) = &self.roster_path else {
            return Ok(Roster::builtin());
        };

        tracing::debug!("Reading roster from {}", path.display());
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        Roster::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Write `contents` to `file_name` inside the export directory
    pub async fn export_text(&self, file_name: String, contents: String) {
        match write_export(&self.export_dir, &file_name, &contents).await {
            Ok(path) => {
                tracing::info!("Saved {}", path.display());
                let _ = self.data_tx.send(DataEvent::ExportFinished { path });
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", file_name, e);
                let _ = self.data_tx.send(DataEvent::ExportFailed {
                    file_name,
                    error: e.to_string(),
                });
            }
        }
    }
}

async fn write_export(dir: &Path, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    fs::write(&path, contents).await?;
    Ok(path)
}
