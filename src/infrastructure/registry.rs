use crate::domain::payment::SPAYD_MIME_TYPE;
use crate::domain::ports::CapabilityProber;
use crate::domain::receiver::{AppId, ReceiverSet};
use crate::error::ProbeError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One installed application and the MIME types it accepts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstalledApp {
    pub id: AppId,
    #[serde(default)]
    pub handles: Vec<String>,
}

impl InstalledApp {
    fn handles_descriptor(&self) -> bool {
        self.handles.iter().any(|mime| mime == SPAYD_MIME_TYPE)
    }

    fn handles_image(&self) -> bool {
        self.handles.iter().any(|mime| mime.starts_with("image/"))
    }
}

/// Probes a JSON registry of installed apps.
///
/// The registry plays the role of the platform package manager:
///
/// ```json
/// [
///   { "id": "cz.fio.sb2", "handles": ["image/*"] },
///   { "id": "cz.kb.ndb", "handles": ["application/x-shortpaymentdescriptor"] }
/// ]
/// ```
///
/// The file is read on every probe so that apps installed or removed in
/// between are picked up.
#[derive(Debug, Clone)]
pub struct ManifestProber {
    path: PathBuf,
}

impl ManifestProber {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn installed(&self) -> Result<Vec<InstalledApp>, ProbeError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn query(&self, accepts: fn(&InstalledApp) -> bool) -> Result<ReceiverSet, ProbeError> {
        Ok(self
            .installed()
            .await?
            .into_iter()
            .filter(|app| accepts(app))
            .map(|app| app.id)
            .collect())
    }
}

#[async_trait]
impl CapabilityProber for ManifestProber {
    async fn probe_descriptor_capable(&self) -> Result<ReceiverSet, ProbeError> {
        self.query(InstalledApp::handles_descriptor).await
    }

    async fn probe_image_capable(&self) -> Result<ReceiverSet, ProbeError> {
        self.query(InstalledApp::handles_image).await
    }
}
