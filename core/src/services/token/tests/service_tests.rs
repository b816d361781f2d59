//! Unit tests for the token issuer/validator

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::default()).expect("Failed to create token service")
}

/// Service signing with a different key, for signature failure tests.
fn create_foreign_service() -> TokenService {
    let config = TokenServiceConfig {
        // base64 of "other-secret-for-testing"
        secret_base64: "b3RoZXItc2VjcmV0LWZvci10ZXN0aW5n".to_string(),
        ..TokenServiceConfig::default()
    };
    TokenService::new(config).expect("Failed to create token service")
}

/// Encodes claims whose expiry is already in the past.
fn issue_expired(service: &TokenService, kind: TokenKind, principal: &str, sid: &str) -> String {
    let mut claims = Claims::new(kind, principal, sid, 60_000);
    claims.exp = Utc::now().timestamp() - 120;
    service.encode_jwt(&claims).expect("Failed to encode claims")
}

#[test]
fn issue_round_trip_preserves_claims() {
    let service = create_test_service();

    let token = service.issue(TokenKind::Access, "u1", "s1").unwrap();
    let claims = service.parse(&token).unwrap();

    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.sid, "s1");
    assert_eq!(claims.kind, TokenKind::Access);
    assert!(claims.exp > claims.iat);
}

#[test]
fn issued_pair_shares_sid_with_distinct_jti() {
    let service = create_test_service();

    let (access, refresh) = service.issue_pair("u1", "s1").unwrap();
    let at_claims = service.parse(&access).unwrap();
    let rt_claims = service.parse(&refresh).unwrap();

    assert_eq!(at_claims.sid, "s1");
    assert_eq!(rt_claims.sid, "s1");
    assert_ne!(at_claims.jti, rt_claims.jti);
    assert_eq!(at_claims.kind, TokenKind::Access);
    assert_eq!(rt_claims.kind, TokenKind::Refresh);
}

#[test]
fn accessors_expose_individual_claims() {
    let service = create_test_service();

    let token = service.issue(TokenKind::Refresh, "u42", "s42").unwrap();

    assert_eq!(service.subject(&token).unwrap(), "u42");
    assert_eq!(service.sid(&token).unwrap(), "s42");
    assert!(!service.jti(&token).unwrap().is_empty());
}

#[test]
fn payload_carries_expected_claim_names() {
    let service = create_test_service();

    let token = service.issue(TokenKind::Access, "u1", "s1").unwrap();
    let payload = token.split('.').nth(1).unwrap();
    let raw = URL_SAFE_NO_PAD.decode(payload).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    assert_eq!(json["sub"], "u1");
    assert_eq!(json["sid"], "s1");
    assert_eq!(json["kind"], "access");
    assert!(json["jti"].is_string());
    assert!(json["exp"].is_i64());
}

#[test]
fn expired_token_is_invalid_but_expiry_millis_returns_sentinel() {
    let service = create_test_service();

    let token = issue_expired(&service, TokenKind::Access, "u1", "s1");

    assert!(!service.is_valid(&token));
    assert!(matches!(
        service.parse(&token),
        Err(DomainError::Token(TokenError::Expired))
    ));
    // The sentinel replaces the failure so callers can keep doing TTL math.
    assert_eq!(service.expiry_millis(&token).unwrap(), 1);
}

#[test]
fn expiry_millis_of_live_token_matches_exp_claim() {
    let service = create_test_service();

    let token = service.issue(TokenKind::Refresh, "u1", "s1").unwrap();
    let claims = service.parse(&token).unwrap();

    assert_eq!(service.expiry_millis(&token).unwrap(), claims.exp * 1000);
    assert!(service.remaining_millis(&token).unwrap() > 0);
}

#[test]
fn foreign_signature_is_rejected() {
    let service = create_test_service();
    let foreign = create_foreign_service();

    let token = foreign.issue(TokenKind::Access, "u1", "s1").unwrap();

    assert!(!service.is_valid(&token));
    assert!(matches!(
        service.parse(&token),
        Err(DomainError::Token(TokenError::BadSignature))
    ));
    // expiry_millis substitutes a sentinel only for expiry, never for
    // signature failures.
    assert!(matches!(
        service.expiry_millis(&token),
        Err(DomainError::Token(TokenError::BadSignature))
    ));
}

#[test]
fn garbage_token_is_malformed() {
    let service = create_test_service();

    assert!(!service.is_valid("not-a-token"));
    assert!(matches!(
        service.parse("not-a-token"),
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[test]
fn undecodable_signing_key_is_a_configuration_fault() {
    let config = TokenServiceConfig {
        secret_base64: "!!! definitely not base64 !!!".to_string(),
        ..TokenServiceConfig::default()
    };

    assert!(matches!(
        TokenService::new(config),
        Err(DomainError::Configuration { .. })
    ));
}
