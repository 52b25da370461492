use miette::Diagnostic;
use thiserror::Error;

/// Failure while querying which installed apps can handle an action.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed app registry: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Failure while encoding or persisting the QR-code image.
#[derive(Error, Debug)]
pub enum ArtifactGenerationError {
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while handing a dispatch over to the navigation surface.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Launch refused: {0}")]
    Refused(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum DispatchError {
    #[error("No installed bank app can receive the payment")]
    #[diagnostic(
        code(pvba::unsupported),
        help("check `pvba supported` before offering pay via bank app")
    )]
    Unsupported,
    #[error("Could not open bank app")]
    #[diagnostic(code(pvba::launch_failed))]
    LaunchFailed(#[source] LaunchError),
    #[error("Could not create QR code file")]
    #[diagnostic(code(pvba::artifact_failed))]
    ArtifactFailed(#[source] ArtifactGenerationError),
    #[error("Could not query installed apps")]
    #[diagnostic(code(pvba::probe_failed))]
    ProbeFailed(#[source] ProbeError),
}

impl From<LaunchError> for DispatchError {
    fn from(err: LaunchError) -> Self {
        Self::LaunchFailed(err)
    }
}

impl From<ArtifactGenerationError> for DispatchError {
    fn from(err: ArtifactGenerationError) -> Self {
        Self::ArtifactFailed(err)
    }
}

impl From<ProbeError> for DispatchError {
    fn from(err: ProbeError) -> Self {
        Self::ProbeFailed(err)
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
