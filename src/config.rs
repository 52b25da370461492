use crate::application::engine::PayViaBankApp;
use crate::domain::ports::{ArtifactGeneratorBox, ProberBox};
use crate::domain::receiver::AllowList;
use crate::infrastructure::qr::{DEFAULT_MODULE_SIZE, QrArtifactGenerator};
use crate::infrastructure::registry::ManifestProber;
use crate::interfaces::json::launch_writer::JsonLauncher;
use std::io::Write;
use std::path::PathBuf;

/// Everything needed to wire the engine to the filesystem-backed adapters.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// JSON registry of installed apps.
    pub registry: PathBuf,
    /// Directory the QR image is written under.
    pub cache_dir: PathBuf,
    /// Pixel size of one QR module.
    pub module_size: u32,
    pub allow_list: AllowList,
}

impl ResolverConfig {
    pub fn new(registry: impl Into<PathBuf>) -> Self {
        Self {
            registry: registry.into(),
            cache_dir: std::env::temp_dir(),
            module_size: DEFAULT_MODULE_SIZE,
            allow_list: AllowList::default(),
        }
    }

    pub fn build<W: Write + Send>(&self, output: W) -> PayViaBankApp<JsonLauncher<W>> {
        let prober: ProberBox = Box::new(ManifestProber::new(&self.registry));
        let artifact_generator: ArtifactGeneratorBox =
            Box::new(QrArtifactGenerator::new(&self.cache_dir, self.module_size));

        PayViaBankApp::new(
            prober,
            artifact_generator,
            JsonLauncher::new(output),
            self.allow_list.clone(),
        )
    }
}
