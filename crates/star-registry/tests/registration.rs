//! End-to-end registration scenarios against the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use star_registry::{
    Blockchain, Ed25519Verifier, Keypair, ManualTimeSource, Payload, RegistryConfig,
    RegistryError, SignatureVerifier,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Accepts every proof and counts how often it was asked.
#[derive(Default)]
struct CountingVerifier {
    calls: AtomicUsize,
}

impl SignatureVerifier for CountingVerifier {
    fn verify(&self, _message: &str, _address: &str, _signature: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }
}

async fn counting_chain(
    now: i64,
) -> (
    Blockchain<Arc<CountingVerifier>, Arc<ManualTimeSource>>,
    Arc<CountingVerifier>,
    Arc<ManualTimeSource>,
) {
    init_tracing();
    let verifier = Arc::new(CountingVerifier::default());
    let clock = Arc::new(ManualTimeSource::new(now));
    let chain = Blockchain::new(RegistryConfig::default(), verifier.clone(), clock.clone())
        .await
        .unwrap();
    (chain, verifier, clock)
}

#[tokio::test]
async fn test_expiry_window_scenarios() {
    for (now, accepted) in [(1000, true), (1300, true), (1301, false)] {
        let (chain, _, clock) = counting_chain(1000).await;
        clock.set(now);

        let result = chain
            .submit_star("addr", "addr:1000:starRegistry", "sig", json!("Polaris"))
            .await;

        if accepted {
            assert!(result.is_ok(), "rejected at {now}");
        } else {
            assert!(
                matches!(result, Err(RegistryError::MessageExpired { .. })),
                "accepted at {now}"
            );
        }
    }
}

#[tokio::test]
async fn test_failed_checks_never_reach_verifier_or_chain() {
    let (chain, verifier, _) = counting_chain(1000).await;

    let result = chain
        .submit_star("addr", "addr:1000:wrongTag", "sig", json!("Polaris"))
        .await;
    assert!(matches!(result, Err(RegistryError::InvalidIdentity(_))));

    let result = chain
        .submit_star("addr", "addr:600:starRegistry", "sig", json!("Polaris"))
        .await;
    assert!(matches!(result, Err(RegistryError::MessageExpired { .. })));

    assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    assert_eq!(chain.height().await, 0);
}

#[tokio::test]
async fn test_custom_window() {
    init_tracing();
    let clock = Arc::new(ManualTimeSource::new(1000));
    let config = RegistryConfig {
        message_window_secs: 10,
        ..RegistryConfig::default()
    };
    let chain = Blockchain::new(config, Arc::new(CountingVerifier::default()), clock.clone())
        .await
        .unwrap();

    clock.set(1011);
    let result = chain
        .submit_star("addr", "addr:1000:starRegistry", "sig", json!("Polaris"))
        .await;
    assert_eq!(
        result,
        Err(RegistryError::MessageExpired {
            elapsed: 11,
            window: 10
        })
    );
}

#[tokio::test]
async fn test_registered_payload_roundtrip() {
    init_tracing();
    let clock = Arc::new(ManualTimeSource::new(1_647_104_846));
    let chain = Blockchain::new(RegistryConfig::default(), Ed25519Verifier, clock)
        .await
        .unwrap();

    let wallet = Keypair::from_seed(&[0x21; 32]);
    let address = wallet.address();
    let star = json!({
        "dec": "68° 52' 56.9",
        "ra": "16h 29m 1.0s",
        "story": "Found it on a cold night",
        "tags": ["binary", "visible"],
        "distance_ly": 25.04
    });

    let message = chain.request_ownership_message(&address);
    let signature = wallet.sign_message(&message);
    let block = chain
        .submit_star(&address, &message, &signature, star.clone())
        .await
        .unwrap();

    assert_eq!(
        block.decoded_payload().unwrap(),
        Payload::StarRegistration {
            owner: address.clone(),
            star: star.clone()
        }
    );
    assert_eq!(chain.stars_by_address(&address).await.unwrap(), vec![star]);
    assert!(chain.validate_chain().await.is_empty());
}

#[tokio::test]
async fn test_default_chain_starts_valid() {
    init_tracing();
    let chain = Blockchain::with_defaults().await.unwrap();
    assert_eq!(chain.height().await, 0);
    assert!(chain.validate_chain().await.is_empty());
    assert_eq!(
        chain.block_by_height(0).await.unwrap().decoded_payload(),
        Err(star_registry::core::CoreError::GenesisAccess)
    );
}
