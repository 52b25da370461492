use crate::domain::payment::{ArtifactLocation, PaymentDescriptor};
use crate::domain::ports::ArtifactGenerator;
use crate::error::ArtifactGenerationError;
use async_trait::async_trait;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Sub-directory of the cache directory holding the QR image.
pub const QR_DIR: &str = "qr";
/// File name of the QR image; each payment overwrites the previous one.
pub const QR_FILE: &str = "transfer-payment-qr.png";
/// Default edge length of one QR module, in pixels.
pub const DEFAULT_MODULE_SIZE: u32 = 30;

/// Renders the payment descriptor as a PNG QR code in a cache directory.
#[derive(Debug, Clone)]
pub struct QrArtifactGenerator {
    cache_dir: PathBuf,
    module_size: u32,
}

impl QrArtifactGenerator {
    pub fn new<P: AsRef<Path>>(cache_dir: P, module_size: u32) -> Self {
        Self {
            cache_dir: cache_dir.as_ref().to_path_buf(),
            module_size,
        }
    }

    /// Path the QR image is written to.
    pub fn artifact_path(&self) -> PathBuf {
        self.cache_dir.join(QR_DIR).join(QR_FILE)
    }

    /// Writes the QR image and returns its absolute path.
    fn write_png(&self, spayd: &str) -> Result<PathBuf, ArtifactGenerationError> {
        let code = QrCode::new(spayd.as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let path = std::path::absolute(self.artifact_path())?;
        let dir = self.cache_dir.join(QR_DIR);
        std::fs::create_dir_all(&dir)?;

        // Readers of the previous image never see a half-written file.
        let mut file = tempfile::NamedTempFile::new_in(&dir)?;
        image.write_to(&mut file, ImageFormat::Png)?;
        file.persist(&path).map_err(std::io::Error::from)?;

        Ok(path)
    }
}

/// `file://` URI of an absolute path, percent-encoded.
fn file_uri(path: &Path) -> Result<ArtifactLocation, ArtifactGenerationError> {
    let url = Url::from_file_path(path).map_err(|()| {
        std::io::Error::other(format!("not an absolute path: {}", path.display()))
    })?;
    Ok(ArtifactLocation::new(url))
}

impl Default for QrArtifactGenerator {
    fn default() -> Self {
        Self::new(std::env::temp_dir(), DEFAULT_MODULE_SIZE)
    }
}

#[async_trait]
impl ArtifactGenerator for QrArtifactGenerator {
    async fn render_qr(
        &self,
        descriptor: &PaymentDescriptor,
    ) -> Result<ArtifactLocation, ArtifactGenerationError> {
        let generator = self.clone();
        let spayd = descriptor.as_str().to_owned();

        let path = tokio::task::spawn_blocking(move || generator.write_png(&spayd))
            .await
            .map_err(std::io::Error::other)??;

        debug!(path = %path.display(), "Wrote payment QR code");
        file_uri(&path)
    }
}
