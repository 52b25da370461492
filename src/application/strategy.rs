//! Decides how a payment reaches the installed bank apps.
//!
//! The decision is a pure function of the two receiver sets. It never
//! renders the QR image itself; image-bearing plans come back with a
//! [`PendingArtifact`] slot that the caller fills only when it executes them.

use crate::domain::plan::{DispatchPlan, PendingArtifact};
use crate::domain::receiver::{AppId, ReceiverSet};

/// Whether any app can take the payment, directly or from a QR image.
pub fn is_available(descriptor: &ReceiverSet, image: &ReceiverSet) -> bool {
    !descriptor.is_empty() || !image.is_empty()
}

/// Picks the dispatch plan for the given receivers, or `None` when
/// [`is_available`] is false.
///
/// Rules, first match wins:
/// 1. one descriptor receiver, no image receivers: launch it directly
/// 2. one image receiver, no descriptor receivers: launch it with the QR image
/// 3. descriptor receivers only: chooser, descriptor apps pinned, no QR image
/// 4. image receivers only: chooser, image apps pinned, with the QR image
/// 5. anything else: chooser listing image apps first, then descriptor apps
///
/// Rule 5 does not deduplicate across roles, so an app present in both sets
/// is listed twice.
pub fn decide(
    descriptor: &ReceiverSet,
    image: &ReceiverSet,
) -> Option<DispatchPlan<PendingArtifact>> {
    if !is_available(descriptor, image) {
        return None;
    }

    let plan = if let (Some(app), true) = (descriptor.single(), image.is_empty()) {
        DispatchPlan::LaunchDescriptor(app.clone())
    } else if let (Some(app), true) = (image.single(), descriptor.is_empty()) {
        DispatchPlan::LaunchImage {
            app: app.clone(),
            artifact: PendingArtifact,
        }
    } else if image.is_empty() {
        DispatchPlan::ChooseAmongDescriptor {
            prioritized: descriptor.clone(),
        }
    } else if descriptor.is_empty() {
        DispatchPlan::ChooseAmongImage {
            prioritized: image.clone(),
            artifact: PendingArtifact,
        }
    } else {
        DispatchPlan::ChooseAmongAll {
            image_first: image.clone(),
            descriptor_appended: descriptor.clone(),
            artifact: PendingArtifact,
        }
    };

    Some(plan)
}

/// The app [`decide`] would launch directly, or `None` when paying would
/// show a chooser or nothing can take the payment.
pub fn direct_target(descriptor: &ReceiverSet, image: &ReceiverSet) -> Option<AppId> {
    match decide(descriptor, image)? {
        DispatchPlan::LaunchDescriptor(app) | DispatchPlan::LaunchImage { app, .. } => Some(app),
        _ => None,
    }
}
