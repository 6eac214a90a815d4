//! End to end token issuance against fixture keys

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{TimeZone, Utc};
use jaas_jwt::*;
use proptest::prelude::*;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::Verifier;

const RSA_2048: &str = include_str!("fixtures/rsa2048.pem");
const KNOWN_TOKEN: &str = include_str!("fixtures/known_token.txt");

fn key() -> PrivateKey {
    PrivateKey::from_pem(RSA_2048).expect("fixture key loads")
}

fn verify(token: &JwtToken, key: &PrivateKey) -> bool {
    let (header, payload, signature) = token.segments().expect("three segments");
    let signature = URL_SAFE_NO_PAD.decode(signature).expect("signature is base64url");
    let signature = Signature::try_from(signature.as_slice()).expect("signature decodes");
    VerifyingKey::<Sha256>::new(key.as_rsa().to_public_key())
        .verify(format!("{header}.{payload}").as_bytes(), &signature)
        .is_ok()
}

#[test]
fn matches_independently_signed_token() {
    let token = TokenBuilder::new()
        .with_api_key("k1")
        .with_app_id("app1")
        .with_room_name("room1")
        .with_exp_time(1_700_007_200)
        .with_nbf_time(1_699_999_990)
        .with_user_id("user-1")
        .with_user_name("Alice")
        .with_moderator(true)
        .with_live_streaming_enabled(true)
        .sign_with(&key())
        .expect("token signs");

    assert_eq!(token.as_str(), KNOWN_TOKEN.trim());
}

#[test]
fn full_token_layout() {
    let key = key();
    let token = TokenBuilder::defaults()
        .with_api_key("k1")
        .with_app_id("app1")
        .with_user_name("Alice")
        .with_user_email("alice@example.com")
        .with_user_avatar("https://example.com/alice.png")
        .with_outbound_enabled(true)
        .with_transcription_enabled(false)
        .sign_with(&key)
        .expect("token signs");

    assert!(verify(&token, &key));

    let header = token.decode_header().expect("header decodes");
    assert_eq!(header, serde_json::json!({"alg": "RS256", "typ": "JWT", "kid": "k1"}));

    let payload = token.decode_payload().expect("payload decodes");
    assert_eq!(payload["iss"], "chat");
    assert_eq!(payload["aud"], "jitsi");
    assert_eq!(payload["sub"], "app1");
    assert_eq!(payload["room"], "*");
    assert!(payload["exp"].is_i64());
    assert!(payload["nbf"].is_i64());

    let user = &payload["context"]["user"];
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["avatar"], "https://example.com/alice.png");
    assert_eq!(user["moderator"], "true");

    let features = &payload["context"]["features"];
    assert_eq!(features["livestreaming"], "true");
    assert_eq!(features["recording"], "true");
    assert_eq!(features["outbound-call"], "true");
    assert_eq!(features["transcription"], "false");

    let claims: Claims = serde_json::from_value(payload).expect("payload is a claim set");
    assert_eq!(claims.context.features.outbound_call, Some(true));
}

#[test]
fn defaults_only_payload() {
    let token = TokenBuilder::new()
        .with_defaults()
        .sign_with(&key())
        .expect("token signs");
    let payload = token.decode_payload().expect("payload decodes");

    let exp = payload["exp"].as_i64().expect("exp is an integer");
    let nbf = payload["nbf"].as_i64().expect("nbf is an integer");
    assert_eq!(exp - nbf, EXP_TIME_DELAY_SEC + NBF_TIME_DELAY_SEC);
    assert_eq!(exp - nbf, 7210);
    assert_eq!(payload["room"], "*");
    assert_eq!(payload["context"]["user"]["moderator"], "true");
    assert_eq!(payload["context"]["features"]["livestreaming"], "true");
    assert_eq!(payload["context"]["features"]["recording"], "true");

    let id = payload["context"]["user"]["id"].as_str().expect("id is a string");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[test]
fn explicit_room_after_defaults() {
    let token = TokenBuilder::new()
        .with_defaults()
        .with_room_name("myroom")
        .sign_with(&key())
        .expect("token signs");
    assert_eq!(token.decode_payload().expect("payload decodes")["room"], "myroom");
}

#[test]
fn defaults_after_explicit_room() {
    let token = TokenBuilder::new()
        .with_room_name("myroom")
        .with_defaults()
        .sign_with(&key())
        .expect("token signs");
    assert_eq!(token.decode_payload().expect("payload decodes")["room"], "*");
}

#[test]
fn end_to_end_chain() {
    let key = key();

    let token = TokenBuilder::new()
        .with_api_key("k1")
        .with_app_id("app1")
        .with_room_name("room1")
        .with_user_name("Alice")
        .with_defaults()
        .sign_with(&key)
        .expect("token signs");
    let payload = token.decode_payload().expect("payload decodes");
    assert_eq!(token.decode_header().expect("header decodes")["kid"], "k1");
    assert_eq!(payload["sub"], "app1");
    assert_eq!(payload["context"]["user"]["name"], "Alice");
    assert_eq!(payload["room"], "*");

    let token = TokenBuilder::defaults()
        .with_api_key("k1")
        .with_app_id("app1")
        .with_room_name("room1")
        .with_user_name("Alice")
        .sign_with(&key)
        .expect("token signs");
    let payload = token.decode_payload().expect("payload decodes");
    assert_eq!(token.decode_header().expect("header decodes")["kid"], "k1");
    assert_eq!(payload["sub"], "app1");
    assert_eq!(payload["room"], "room1");
    assert_eq!(payload["context"]["user"]["name"], "Alice");
}

#[test]
fn same_claims_sign_identically() {
    let key = key();
    let now = Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid timestamp");
    let builder = TokenBuilder::new()
        .with_defaults_at(now)
        .with_api_key("k1")
        .with_app_id("app1");

    let first = builder.clone().sign_with(&key).expect("token signs");
    let second = builder.clone().sign_with(&key).expect("token signs");

    assert_eq!(
        first.decode_payload().expect("payload decodes"),
        second.decode_payload().expect("payload decodes")
    );
    assert_eq!(first, second);
}

#[test]
fn request_issues_token() {
    let request = TokenRequest::from_json(
        r#"{"api_key":"k1","app_id":"app1","room":"room1","name":"Alice","outbound":true}"#,
    )
    .expect("request parses");
    let key = key();
    let token = request.issue(&key).expect("token signs");

    assert!(verify(&token, &key));
    let payload = token.decode_payload().expect("payload decodes");
    assert_eq!(payload["room"], "room1");
    assert_eq!(payload["context"]["features"]["outbound-call"], "true");
    assert_eq!(payload["context"]["features"]["recording"], "true");
}

proptest! {
    #[test]
    fn user_strings_are_carried_verbatim(
        name in ".*",
        email in "[a-z0-9.]{1,16}@[a-z]{1,8}\\.[a-z]{2,4}",
        room in "[^*]{0,24}",
    ) {
        let builder = TokenBuilder::new()
            .with_user_name(name.clone())
            .with_user_email(email.clone())
            .with_room_name(room.clone());
        let payload = serde_json::to_value(builder.claims()).expect("claims serialize");

        prop_assert_eq!(payload["context"]["user"]["name"].as_str(), Some(name.as_str()));
        prop_assert_eq!(payload["context"]["user"]["email"].as_str(), Some(email.as_str()));
        prop_assert_eq!(payload["room"].as_str(), Some(room.as_str()));
    }

    #[test]
    fn flags_are_always_strings(
        moderator in any::<bool>(),
        livestreaming in any::<bool>(),
        recording in any::<bool>(),
        outbound in any::<bool>(),
        transcription in any::<bool>(),
    ) {
        let builder = TokenBuilder::defaults()
            .with_moderator(moderator)
            .with_live_streaming_enabled(livestreaming)
            .with_recording_enabled(recording)
            .with_outbound_enabled(outbound)
            .with_transcription_enabled(transcription);
        let payload = serde_json::to_value(builder.claims()).expect("claims serialize");
        let features = &payload["context"]["features"];

        let flag = |value: bool| serde_json::json!(value.to_string());

        prop_assert_eq!(&payload["context"]["user"]["moderator"], &flag(moderator));
        prop_assert_eq!(&features["livestreaming"], &flag(livestreaming));
        prop_assert_eq!(&features["recording"], &flag(recording));
        prop_assert_eq!(&features["outbound-call"], &flag(outbound));
        prop_assert_eq!(&features["transcription"], &flag(transcription));
    }
}
