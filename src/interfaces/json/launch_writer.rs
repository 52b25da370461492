use crate::domain::launch::{FallbackAction, Payload, PinnedEntry};
use crate::domain::ports::Launcher;
use crate::domain::receiver::AppId;
use crate::error::LaunchError;
use async_trait::async_trait;
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Navigation context for [`JsonLauncher`]: the title shown above a chooser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooserTitle(pub String);

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum LaunchRequest<'a> {
    Launch {
        app: &'a AppId,
        payload: &'a Payload,
    },
    Chooser {
        title: &'a str,
        pinned: &'a [PinnedEntry],
        fallback: &'a FallbackAction,
    },
}

/// Writes launch requests as JSON lines for a platform shim to execute.
///
/// One line per request, e.g.
/// `{"launch":{"app":"cz.kb.ndb","payload":{"descriptor":"SPD*1.0*..."}}}`.
pub struct JsonLauncher<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLauncher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, request: &LaunchRequest<'_>) -> Result<(), LaunchError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *writer, request).map_err(std::io::Error::from)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> Launcher for JsonLauncher<W> {
    type Navigation = ChooserTitle;

    async fn launch_single(
        &self,
        _nav: &ChooserTitle,
        app: &AppId,
        payload: Payload,
    ) -> Result<(), LaunchError> {
        info!(%app, kind = ?payload.kind(), "Launching bank app");
        self.write(&LaunchRequest::Launch {
            app,
            payload: &payload,
        })
    }

    async fn present_chooser(
        &self,
        nav: &ChooserTitle,
        pinned: Vec<PinnedEntry>,
        fallback: FallbackAction,
    ) -> Result<(), LaunchError> {
        info!(pinned = pinned.len(), "Presenting bank app chooser");
        self.write(&LaunchRequest::Chooser {
            title: &nav.0,
            pinned: &pinned,
            fallback: &fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::PayloadKind;
    use crate::domain::payment::{ArtifactLocation, PaymentDescriptor};
    use serde_json::{Value, json};

    fn lines(launcher: JsonLauncher<Vec<u8>>) -> Vec<Value> {
        String::from_utf8(launcher.into_inner())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_single_launch_line() {
        let launcher = JsonLauncher::new(Vec::new());

        launcher
            .launch_single(
                &ChooserTitle::default(),
                &AppId::from("cz.kb.ndb"),
                Payload::Descriptor(PaymentDescriptor::from("SPD*1.0*AM:200.00")),
            )
            .await
            .unwrap();

        assert_eq!(
            lines(launcher),
            vec![json!({
                "launch": {"app": "cz.kb.ndb", "payload": {"descriptor": "SPD*1.0*AM:200.00"}}
            })]
        );
    }

    #[tokio::test]
    async fn test_chooser_line_keeps_pinned_order() {
        let launcher = JsonLauncher::new(Vec::new());

        launcher
            .present_chooser(
                &ChooserTitle("Pay via bank app".to_string()),
                vec![
                    PinnedEntry::new(AppId::from("cz.fio.sb2"), PayloadKind::Image),
                    PinnedEntry::new(AppId::from("cz.kb.ndb"), PayloadKind::Descriptor),
                ],
                FallbackAction::ShareImage(ArtifactLocation::new("file:///tmp/qr.png")),
            )
            .await
            .unwrap();

        assert_eq!(
            lines(launcher),
            vec![json!({
                "chooser": {
                    "title": "Pay via bank app",
                    "pinned": [
                        {"app": "cz.fio.sb2", "kind": "image"},
                        {"app": "cz.kb.ndb", "kind": "descriptor"}
                    ],
                    "fallback": {"share_image": "file:///tmp/qr.png"}
                }
            })]
        );
    }
}
