use crate::domain::launch::{FallbackAction, Payload, PinnedEntry};
use crate::domain::payment::{ArtifactLocation, PaymentDescriptor};
use crate::domain::ports::{ArtifactGenerator, CapabilityProber, Launcher};
use crate::domain::receiver::{AppId, ReceiverSet};
use crate::error::{ArtifactGenerationError, LaunchError, ProbeError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A prober answering from fixed receiver sets.
///
/// Useful when the caller already knows the installed apps, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProber {
    descriptor: ReceiverSet,
    image: ReceiverSet,
    descriptor_fails: bool,
    image_fails: bool,
}

impl StaticProber {
    pub fn new<D, I>(descriptor: D, image: I) -> Self
    where
        D: IntoIterator,
        D::Item: Into<AppId>,
        I: IntoIterator,
        I::Item: Into<AppId>,
    {
        Self {
            descriptor: descriptor.into_iter().collect(),
            image: image.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A prober whose every query fails, as when the package manager is unreachable.
    pub fn failing() -> Self {
        Self::default()
            .with_failing_descriptor_probe()
            .with_failing_image_probe()
    }

    pub fn with_failing_descriptor_probe(mut self) -> Self {
        self.descriptor_fails = true;
        self
    }

    pub fn with_failing_image_probe(mut self) -> Self {
        self.image_fails = true;
        self
    }

    fn answer(set: &ReceiverSet, fails: bool, action: &str) -> Result<ReceiverSet, ProbeError> {
        if fails {
            return Err(ProbeError::Io(std::io::Error::other(format!(
                "{action} query failed"
            ))));
        }
        Ok(set.clone())
    }
}

#[async_trait]
impl CapabilityProber for StaticProber {
    async fn probe_descriptor_capable(&self) -> Result<ReceiverSet, ProbeError> {
        Self::answer(&self.descriptor, self.descriptor_fails, "descriptor")
    }

    async fn probe_image_capable(&self) -> Result<ReceiverSet, ProbeError> {
        Self::answer(&self.image, self.image_fails, "image")
    }
}

/// An artifact generator that records what it was asked to render.
///
/// Clones share the record, so a test can keep one handle and hand the
/// other to the engine.
#[derive(Debug, Clone)]
pub struct InMemoryArtifactGenerator {
    location: ArtifactLocation,
    rendered: Arc<Mutex<Vec<PaymentDescriptor>>>,
    failing: bool,
}

impl Default for InMemoryArtifactGenerator {
    fn default() -> Self {
        Self::with_location(ArtifactLocation::new("memory://qr/transfer-payment-qr.png"))
    }
}

impl InMemoryArtifactGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(location: ArtifactLocation) -> Self {
        Self {
            location,
            rendered: Arc::default(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn location(&self) -> ArtifactLocation {
        self.location.clone()
    }

    /// Descriptors rendered so far, in call order.
    pub fn rendered(&self) -> Vec<PaymentDescriptor> {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ArtifactGenerator for InMemoryArtifactGenerator {
    async fn render_qr(
        &self,
        descriptor: &PaymentDescriptor,
    ) -> Result<ArtifactLocation, ArtifactGenerationError> {
        if self.failing {
            return Err(ArtifactGenerationError::Io(std::io::Error::other(
                "no space left on device",
            )));
        }
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(descriptor.clone());
        Ok(self.location.clone())
    }
}

/// A launch request as seen by [`RecordingLauncher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRecord {
    Single {
        app: AppId,
        payload: Payload,
    },
    Chooser {
        pinned: Vec<PinnedEntry>,
        fallback: FallbackAction,
    },
}

/// A launcher that records requests instead of navigating anywhere.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    records: Arc<Mutex<Vec<LaunchRecord>>>,
    attempts: Arc<AtomicUsize>,
    refusal: Option<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher that refuses every request with `reason`.
    pub fn refusing(reason: impl Into<String>) -> Self {
        Self {
            refusal: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Requests that were accepted.
    pub fn records(&self) -> Vec<LaunchRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made, accepted or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn record(&self, record: LaunchRecord) -> Result<(), LaunchError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.refusal {
            return Err(LaunchError::Refused(reason.clone()));
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(())
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    type Navigation = ();

    async fn launch_single(
        &self,
        _nav: &(),
        app: &AppId,
        payload: Payload,
    ) -> Result<(), LaunchError> {
        self.record(LaunchRecord::Single {
            app: app.clone(),
            payload,
        })
    }

    async fn present_chooser(
        &self,
        _nav: &(),
        pinned: Vec<PinnedEntry>,
        fallback: FallbackAction,
    ) -> Result<(), LaunchError> {
        self.record(LaunchRecord::Chooser { pinned, fallback })
    }
}
