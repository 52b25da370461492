use crate::domain::ports::CapabilityProber;
use crate::domain::receiver::{AllowList, Receivers};
use crate::error::ProbeError;
use tracing::debug;

/// Probes the platform and tags the results by role.
///
/// Image receivers are restricted to `allow_list`. Probe failures are
/// returned unchanged.
pub async fn resolve(
    prober: &dyn CapabilityProber,
    allow_list: &AllowList,
) -> Result<Receivers, ProbeError> {
    let descriptor = prober.probe_descriptor_capable().await?;
    let image = prober.probe_image_capable().await?.allowed_by(allow_list);

    debug!(
        descriptor_receivers = descriptor.len(),
        image_receivers = image.len(),
        "Resolved bank app receivers"
    );

    Ok(Receivers { descriptor, image })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receiver::{AppId, ReceiverSet};
    use crate::infrastructure::in_memory::StaticProber;

    #[tokio::test]
    async fn test_descriptor_receivers_are_not_filtered() {
        let prober = StaticProber::new(["com.unknown.bank", "cz.fio.sb2"], Vec::<&str>::new());

        let receivers = resolve(&prober, &AllowList::default()).await.unwrap();

        assert_eq!(
            receivers.descriptor,
            ["com.unknown.bank", "cz.fio.sb2"].into_iter().collect::<ReceiverSet>()
        );
        assert!(receivers.image.is_empty());
    }

    #[tokio::test]
    async fn test_image_receivers_are_filtered_by_allow_list() {
        let prober = StaticProber::new(
            Vec::<&str>::new(),
            ["com.google.android.apps.photos", "cz.csob.smart", "org.telegram.messenger"],
        );

        let receivers = resolve(&prober, &AllowList::default()).await.unwrap();

        assert_eq!(receivers.image.single(), Some(&AppId::from("cz.csob.smart")));
        assert!(!receivers.image.contains(&AppId::from("org.telegram.messenger")));
    }

    #[tokio::test]
    async fn test_custom_allow_list() {
        let prober = StaticProber::new(Vec::<&str>::new(), ["bank.y", "cz.csob.smart"]);
        let allow_list: AllowList = ["bank.y"].into_iter().collect();

        let receivers = resolve(&prober, &allow_list).await.unwrap();

        assert_eq!(receivers.image, ["bank.y"].into_iter().collect::<ReceiverSet>());
    }

    #[tokio::test]
    async fn test_probe_failure_propagates() {
        let prober = StaticProber::failing();

        let result = resolve(&prober, &AllowList::default()).await;

        assert!(matches!(result, Err(ProbeError::Io(_))));
    }

    #[tokio::test]
    async fn test_image_probe_failure_after_descriptor_success() {
        let prober =
            StaticProber::new(["cz.kb.ndb"], ["cz.fio.sb2"]).with_failing_image_probe();

        let result = resolve(&prober, &AllowList::default()).await;

        let Err(ProbeError::Io(err)) = result else {
            panic!("expected the image probe error");
        };
        assert_eq!(err.to_string(), "image query failed");
    }

    #[tokio::test]
    async fn test_descriptor_probe_failure() {
        let prober =
            StaticProber::new(["cz.kb.ndb"], ["cz.fio.sb2"]).with_failing_descriptor_probe();

        let result = resolve(&prober, &AllowList::default()).await;

        let Err(ProbeError::Io(err)) = result else {
            panic!("expected the descriptor probe error");
        };
        assert_eq!(err.to_string(), "descriptor query failed");
    }
}
