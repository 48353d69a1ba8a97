//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{json, Value};

use star_registry_core::{Keypair, Payload, Star};

/// Generate a wallet seed.
pub fn wallet_seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate a wallet address.
pub fn address() -> impl Strategy<Value = String> {
    wallet_seed().prop_map(|seed| Keypair::from_seed(&seed).address())
}

/// Generate a JSON leaf value. No floats, so equality is exact.
fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[ -~]{0,24}".prop_map(Value::String),
    ]
}

/// Generate a star description shaped like what wallets submit.
pub fn star() -> impl Strategy<Value = Star> {
    (
        "[0-9]{1,2}h [0-9]{1,2}m [0-9.]{1,4}s",
        "-?[0-9]{1,2}° [0-9]{1,2}' [0-9.]{1,4}",
        "[ -~]{0,64}",
        prop::collection::btree_map("[a-z]{1,8}", leaf(), 0..4),
    )
        .prop_map(|(ra, dec, story, extra)| {
            let mut star = json!({ "ra": ra, "dec": dec, "story": story });
            if let Value::Object(map) = &mut star {
                for (key, value) in extra {
                    map.entry(key).or_insert(value);
                }
            }
            star
        })
}

/// Generate a registration payload.
pub fn payload() -> impl Strategy<Value = Payload> {
    (address(), star()).prop_map(|(owner, star)| Payload::star_registration(owner, star))
}
