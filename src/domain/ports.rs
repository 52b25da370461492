use super::launch::{FallbackAction, Payload, PinnedEntry};
use super::payment::{ArtifactLocation, PaymentDescriptor};
use super::receiver::{AppId, ReceiverSet};
use crate::error::{ArtifactGenerationError, LaunchError, ProbeError};
use async_trait::async_trait;

/// Queries the platform for apps able to handle the payment actions.
///
/// Implementations return distinct ids; an action nobody handles yields an
/// empty set, not an error.
#[async_trait]
pub trait CapabilityProber: Send + Sync {
    async fn probe_descriptor_capable(&self) -> Result<ReceiverSet, ProbeError>;
    async fn probe_image_capable(&self) -> Result<ReceiverSet, ProbeError>;
}

#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    async fn render_qr(
        &self,
        descriptor: &PaymentDescriptor,
    ) -> Result<ArtifactLocation, ArtifactGenerationError>;
}

/// The navigation surface that opens apps or shows a chooser.
///
/// `Navigation` is whatever handle the platform needs to navigate (an
/// activity, a window, a chooser title); callers pass it on every call.
#[async_trait]
pub trait Launcher: Send + Sync {
    type Navigation: Send + Sync;

    async fn launch_single(
        &self,
        nav: &Self::Navigation,
        app: &AppId,
        payload: Payload,
    ) -> Result<(), LaunchError>;

    async fn present_chooser(
        &self,
        nav: &Self::Navigation,
        pinned: Vec<PinnedEntry>,
        fallback: FallbackAction,
    ) -> Result<(), LaunchError>;
}

pub type ProberBox = Box<dyn CapabilityProber>;
pub type ArtifactGeneratorBox = Box<dyn ArtifactGenerator>;
