// tests/key_tests.rs
use envelope_keyring::consts::{IV_LEN, KEY_LEN};
use envelope_keyring::key_ops::derive_iv;
use envelope_keyring::{create_key, derive_bytes, key_representations, CoreError, Key};

const FORTY_TWOS_B64: &str = "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=";

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = Key::generate();
    let key2 = Key::generate();
    assert_eq!(key1.material().len(), KEY_LEN);
    assert_ne!(key1.material(), key2.material());
    assert_ne!(key1.id(), key2.id());
}

#[test]
fn test_generated_id_is_uuid_v4() {
    let key = Key::generate();
    let parsed = uuid::Uuid::parse_str(key.id()).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn test_key_representations_are_correct_and_consistent() {
    let key = Key::from_base64("fixed", FORTY_TWOS_B64).unwrap();
    assert_eq!(key.material(), [0x42; 32].as_slice());

    let repr = key_representations(&key);
    assert_eq!(
        repr.hex,
        "4242424242424242424242424242424242424242424242424242424242424242"
    );
    assert_eq!(repr.base64, FORTY_TWOS_B64);
    assert_eq!(
        repr.base64url_no_pad,
        "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI"
    );
    assert_eq!(key.value(), FORTY_TWOS_B64);
}

#[test]
fn test_json_round_trip_preserves_id_and_material() {
    let key = Key::with_id("billing-2025").unwrap();
    let json = key.to_json();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["id"], "billing-2025");
    assert_eq!(value["value"], key.value());

    let restored = Key::from_json(&json).unwrap();
    assert_eq!(restored.id(), key.id());
    assert_eq!(restored.material(), key.material());
}

#[test]
fn test_from_json_missing_field_is_malformed() {
    let err = Key::from_json(r#"{"id": "no-value"}"#).unwrap_err();
    assert!(matches!(err, CoreError::MalformedKey(_)));

    let err = Key::from_json(&format!(r#"{{"value": "{FORTY_TWOS_B64}"}}"#)).unwrap_err();
    assert!(matches!(err, CoreError::MalformedKey(_)));
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(matches!(
        Key::from_json("not json at all"),
        Err(CoreError::MalformedKey(_))
    ));
    assert!(matches!(
        Key::from_json(r#"{"id": 7, "value": "AAAA"}"#),
        Err(CoreError::MalformedKey(_))
    ));
}

#[test]
fn test_from_base64_rejects_wrong_length_and_bad_encoding() {
    // 16 bytes
    let short = Key::from_base64("short", "AAAAAAAAAAAAAAAAAAAAAA==").unwrap_err();
    match short {
        CoreError::MalformedKey(msg) => assert!(msg.contains("32 bytes"), "got: {msg}"),
        other => panic!("expected MalformedKey, got: {other:?}"),
    }

    let bad = Key::from_base64("bad", "!!not-base64!!").unwrap_err();
    assert!(matches!(bad, CoreError::MalformedKey(_)));
}

#[test]
fn test_empty_id_is_rejected() {
    assert!(matches!(Key::with_id(""), Err(CoreError::MalformedKey(_))));
    assert!(matches!(
        Key::from_base64("", FORTY_TWOS_B64),
        Err(CoreError::MalformedKey(_))
    ));
}

#[test]
fn test_create_key_defaults_and_explicit_parts() {
    let generated = create_key(None, None).unwrap();
    assert!(uuid::Uuid::parse_str(generated.id()).is_ok());
    assert_eq!(generated.material().len(), KEY_LEN);

    let named = create_key(Some("named"), None).unwrap();
    assert_eq!(named.id(), "named");

    let explicit = create_key(Some("explicit"), Some(FORTY_TWOS_B64)).unwrap();
    assert_eq!(explicit.material(), [0x42; 32].as_slice());
}

#[test]
fn test_debug_output_redacts_material() {
    let key = Key::from_base64("visible-id", FORTY_TWOS_B64).unwrap();
    let debug = format!("{key:?}");
    assert!(debug.contains("visible-id"));
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains(FORTY_TWOS_B64));
    assert!(!debug.contains("66, 66"));
}

#[test]
fn test_derive_bytes_lengths_and_freshness() {
    let a = derive_bytes(KEY_LEN, None);
    let b = derive_bytes(KEY_LEN, None);
    assert_eq!(a.expose_secret().len(), KEY_LEN);
    assert_ne!(a.expose_secret(), b.expose_secret());

    // Same secret, fresh salt: still different output
    let secret = [7u8; 32];
    let c = derive_bytes(IV_LEN, Some(secret.as_slice()));
    let d = derive_bytes(IV_LEN, Some(secret.as_slice()));
    assert_eq!(c.expose_secret().len(), IV_LEN);
    assert_ne!(c.expose_secret(), d.expose_secret());
}

#[test]
fn test_derive_iv_is_never_the_key_material() {
    let key = Key::generate();
    let iv = derive_iv(key.material(), 1);
    assert_eq!(iv.len(), IV_LEN);
    assert_ne!(&iv[..], &key.material()[..IV_LEN]);
}
