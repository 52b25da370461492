use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME type apps register to receive a Short Payment Descriptor.
pub const SPAYD_MIME_TYPE: &str = "application/x-shortpaymentdescriptor";

/// A payment in SPAYD format (`SPD*1.0*ACC:...*AM:...`).
///
/// The string is handed to the receiving app as-is; it is never parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentDescriptor(String);

impl PaymentDescriptor {
    pub fn new(spayd: impl Into<String>) -> Self {
        Self(spayd.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PaymentDescriptor {
    fn from(spayd: &str) -> Self {
        Self::new(spayd)
    }
}

/// Where the rendered QR-code image of a payment can be retrieved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactLocation(String);

impl ArtifactLocation {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
