use super::dispatch::dispatch_plan;
use super::resolver::resolve;
use super::strategy::{decide, direct_target, is_available};
use crate::domain::payment::PaymentDescriptor;
use crate::domain::plan::DispatchPlan;
use crate::domain::ports::{ArtifactGeneratorBox, Launcher, ProberBox};
use crate::domain::receiver::{AllowList, AppId, Receivers};
use crate::error::{DispatchError, Result};
use tracing::{debug, info, warn};

/// The main entry point for paying directly via a bank app.
///
/// `PayViaBankApp` resolves which installed apps can take a SPAYD payment,
/// decides how to hand it over and asks the launcher to do so. Every call
/// probes afresh; nothing is cached between calls.
pub struct PayViaBankApp<L: Launcher> {
    prober: ProberBox,
    artifact_generator: ArtifactGeneratorBox,
    launcher: L,
    allow_list: AllowList,
}

impl<L: Launcher> PayViaBankApp<L> {
    /// Creates a new `PayViaBankApp` instance.
    ///
    /// # Arguments
    ///
    /// * `prober` - Finds apps handling the descriptor and image actions.
    /// * `artifact_generator` - Renders the QR image when a plan needs one.
    /// * `launcher` - Opens apps or shows the chooser.
    /// * `allow_list` - Apps allowed to act as image receivers.
    pub fn new(
        prober: ProberBox,
        artifact_generator: ArtifactGeneratorBox,
        launcher: L,
        allow_list: AllowList,
    ) -> Self {
        Self {
            prober,
            artifact_generator,
            launcher,
            allow_list,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub async fn receivers(&self) -> Result<Receivers> {
        Ok(resolve(&*self.prober, &self.allow_list).await?)
    }

    /// Whether the feature should be offered at all.
    pub async fn is_supported(&self) -> Result<bool> {
        let receivers = self.receivers().await?;
        Ok(is_available(&receivers.descriptor, &receivers.image))
    }

    /// The bank app a payment would open directly, if there is exactly one.
    ///
    /// Returns `None` whenever paying would show a chooser instead.
    pub async fn supported_bank_app(&self) -> Result<Option<AppId>> {
        let receivers = self.receivers().await?;
        Ok(direct_target(&receivers.descriptor, &receivers.image))
    }

    /// Opens a bank app with the payment or shows a chooser with several apps.
    ///
    /// The QR image is rendered only when the chosen plan offers the payment
    /// to an image receiver. Nothing is retried; the first failure is returned.
    pub async fn pay_via_bank_app(
        &self,
        descriptor: &PaymentDescriptor,
        nav: &L::Navigation,
    ) -> Result<DispatchPlan> {
        let receivers = self.receivers().await?;

        let Some(plan) = decide(&receivers.descriptor, &receivers.image) else {
            warn!("No bank app can receive the payment");
            return Err(DispatchError::Unsupported);
        };
        debug!(?plan, "Chose dispatch plan");

        let plan = plan
            .try_with_artifact(|| self.artifact_generator.render_qr(descriptor))
            .await?;

        dispatch_plan(&self.launcher, nav, &plan, descriptor).await?;
        info!(artifact = ?plan.artifact(), "Handed payment over to bank app");

        Ok(plan)
    }
}
