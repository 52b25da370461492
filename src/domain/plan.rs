use super::payment::ArtifactLocation;
use super::receiver::{AppId, ReceiverSet};

/// Marks the artifact slot of a plan whose QR image has not been rendered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingArtifact;

/// How a payment is handed over to the installed bank apps.
///
/// `A` is the artifact slot: [`PendingArtifact`] right after the decision,
/// [`ArtifactLocation`] once the QR image exists. Only variants that offer
/// the payment to an image receiver carry the slot at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchPlan<A = ArtifactLocation> {
    /// Open the single descriptor receiver directly.
    LaunchDescriptor(AppId),
    /// Open the single image receiver directly with the QR image.
    LaunchImage { app: AppId, artifact: A },
    /// Chooser with the descriptor receivers pinned; no QR preview.
    ChooseAmongDescriptor { prioritized: ReceiverSet },
    /// Chooser with the image receivers pinned, sharing the QR image.
    ChooseAmongImage { prioritized: ReceiverSet, artifact: A },
    /// Chooser listing image receivers first, then descriptor receivers.
    ChooseAmongAll {
        image_first: ReceiverSet,
        descriptor_appended: ReceiverSet,
        artifact: A,
    },
}

impl<A> DispatchPlan<A> {
    /// Whether carrying out this plan needs the QR image.
    pub fn requires_artifact(&self) -> bool {
        !matches!(
            self,
            Self::LaunchDescriptor(_) | Self::ChooseAmongDescriptor { .. }
        )
    }

    pub fn artifact(&self) -> Option<&A> {
        match self {
            Self::LaunchDescriptor(_) | Self::ChooseAmongDescriptor { .. } => None,
            Self::LaunchImage { artifact, .. }
            | Self::ChooseAmongImage { artifact, .. }
            | Self::ChooseAmongAll { artifact, .. } => Some(artifact),
        }
    }
}

impl DispatchPlan<PendingArtifact> {
    /// Fills the artifact slot, calling `render` only if the plan has one.
    pub async fn try_with_artifact<F, Fut, E>(self, render: F) -> Result<DispatchPlan, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ArtifactLocation, E>>,
    {
        Ok(match self {
            Self::LaunchDescriptor(app) => DispatchPlan::LaunchDescriptor(app),
            Self::ChooseAmongDescriptor { prioritized } => {
                DispatchPlan::ChooseAmongDescriptor { prioritized }
            }
            Self::LaunchImage { app, .. } => DispatchPlan::LaunchImage {
                app,
                artifact: render().await?,
            },
            Self::ChooseAmongImage { prioritized, .. } => DispatchPlan::ChooseAmongImage {
                prioritized,
                artifact: render().await?,
            },
            Self::ChooseAmongAll {
                image_first,
                descriptor_appended,
                ..
            } => DispatchPlan::ChooseAmongAll {
                image_first,
                descriptor_appended,
                artifact: render().await?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn uri() -> ArtifactLocation {
        ArtifactLocation::new("file:///tmp/qr/transfer-payment-qr.png")
    }

    #[tokio::test]
    async fn test_descriptor_plans_never_render() {
        let calls = Cell::new(0);
        let counter = &calls;
        let plans: [DispatchPlan<PendingArtifact>; 2] = [
            DispatchPlan::LaunchDescriptor(AppId::from("bank.x")),
            DispatchPlan::ChooseAmongDescriptor {
                prioritized: ["bank.a", "bank.b"].into_iter().collect(),
            },
        ];

        for plan in plans {
            assert!(!plan.requires_artifact());
            let filled = plan
                .try_with_artifact(|| async move {
                    counter.set(counter.get() + 1);
                    Ok::<_, ()>(uri())
                })
                .await
                .unwrap();
            assert_eq!(filled.artifact(), None);
        }
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_image_plans_render_once() {
        let calls = Cell::new(0);
        let counter = &calls;
        let plan: DispatchPlan<PendingArtifact> = DispatchPlan::ChooseAmongAll {
            image_first: ["bank.c"].into_iter().collect(),
            descriptor_appended: ["bank.a"].into_iter().collect(),
            artifact: PendingArtifact,
        };
        assert!(plan.requires_artifact());

        let filled = plan
            .try_with_artifact(|| async move {
                counter.set(counter.get() + 1);
                Ok::<_, ()>(uri())
            })
            .await
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(filled.artifact(), Some(&uri()));
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let plan: DispatchPlan<PendingArtifact> = DispatchPlan::LaunchImage {
            app: AppId::from("bank.y"),
            artifact: PendingArtifact,
        };
        let result = plan.try_with_artifact(|| async { Err("disk full") }).await;
        assert_eq!(result, Err("disk full"));
    }
}
