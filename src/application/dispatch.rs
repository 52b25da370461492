use crate::domain::launch::{FallbackAction, Payload, PayloadKind, PinnedEntry};
use crate::domain::payment::PaymentDescriptor;
use crate::domain::plan::DispatchPlan;
use crate::domain::ports::Launcher;
use crate::domain::receiver::ReceiverSet;
use crate::error::LaunchError;

fn pinned(receivers: &ReceiverSet, kind: PayloadKind) -> impl Iterator<Item = PinnedEntry> + '_ {
    receivers
        .iter()
        .map(move |app| PinnedEntry::new(app.clone(), kind))
}

/// Carries out `plan` on the launcher, with a single launcher call.
pub async fn dispatch_plan<L: Launcher + ?Sized>(
    launcher: &L,
    nav: &L::Navigation,
    plan: &DispatchPlan,
    descriptor: &PaymentDescriptor,
) -> Result<(), LaunchError> {
    match plan {
        DispatchPlan::LaunchDescriptor(app) => {
            launcher
                .launch_single(nav, app, Payload::Descriptor(descriptor.clone()))
                .await
        }
        DispatchPlan::LaunchImage { app, artifact } => {
            launcher
                .launch_single(nav, app, Payload::Image(artifact.clone()))
                .await
        }
        DispatchPlan::ChooseAmongDescriptor { prioritized } => {
            launcher
                .present_chooser(
                    nav,
                    pinned(prioritized, PayloadKind::Descriptor).collect(),
                    FallbackAction::ViewDescriptor(descriptor.clone()),
                )
                .await
        }
        DispatchPlan::ChooseAmongImage {
            prioritized,
            artifact,
        } => {
            launcher
                .present_chooser(
                    nav,
                    pinned(prioritized, PayloadKind::Image).collect(),
                    FallbackAction::ShareImage(artifact.clone()),
                )
                .await
        }
        DispatchPlan::ChooseAmongAll {
            image_first,
            descriptor_appended,
            artifact,
        } => {
            let entries = pinned(image_first, PayloadKind::Image)
                .chain(pinned(descriptor_appended, PayloadKind::Descriptor))
                .collect();
            launcher
                .present_chooser(nav, entries, FallbackAction::ShareImage(artifact.clone()))
                .await
        }
    }
}
