use super::payment::{ArtifactLocation, PaymentDescriptor};
use super::receiver::AppId;
use serde::Serialize;

/// What a launched app receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    /// The SPAYD string, for apps registered for the descriptor MIME type.
    Descriptor(PaymentDescriptor),
    /// The QR-code image, for bank apps that read a shared image.
    Image(ArtifactLocation),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Descriptor(_) => PayloadKind::Descriptor,
            Self::Image(_) => PayloadKind::Image,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Descriptor,
    Image,
}

/// A chooser entry shown ahead of any other handler of the generic action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinnedEntry {
    pub app: AppId,
    pub kind: PayloadKind,
}

impl PinnedEntry {
    pub fn new(app: AppId, kind: PayloadKind) -> Self {
        Self { app, kind }
    }
}

/// The untargeted action a chooser resolves against, besides its pinned entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackAction {
    ViewDescriptor(PaymentDescriptor),
    ShareImage(ArtifactLocation),
}
