// ============================================================================
// JWT - Reads the `exp` claim from a bearer token (no signature check)
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Returns the token's expiry in seconds since the Unix epoch.
///
/// The signature is never verified here; the backend does that on every
/// request. Any malformed token yields `AppError::InvalidToken`.
pub fn decode_expiry(token: &str) -> Result<i64, AppError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(AppError::InvalidToken("expected three dot-separated segments".into())),
    };

    // Some issuers pad the segment even though JWT forbids it
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::InvalidToken(format!("payload is not base64url: {}", e)))?;

    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::InvalidToken(format!("missing or invalid exp claim: {}", e)))?;

    Ok(claims.exp)
}

/// True once `now` has reached the expiry instant
pub fn is_expired(expires_at: i64, now: i64) -> bool {
    now >= expires_at
}

#[cfg(test)]
pub(crate) fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":"u1","exp":{}}}"#, exp));
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_exp_claim() {
        assert_eq!(decode_expiry(&make_token(1_700_000_000)).unwrap(), 1_700_000_000);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(decode_expiry("not-a-jwt"), Err(AppError::InvalidToken(_))));
        assert!(matches!(decode_expiry("a..c"), Err(AppError::InvalidToken(_))));
        assert!(matches!(decode_expiry("a.%%%.c"), Err(AppError::InvalidToken(_))));

        let no_exp = format!("h.{}.s", URL_SAFE_NO_PAD.encode(br#"{"id":"u1"}"#));
        assert!(matches!(decode_expiry(&no_exp), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn tolerates_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"exp":42}"#);
        assert_eq!(decode_expiry(&format!("h.{}.s", payload)).unwrap(), 42);
    }

    #[test]
    fn expiry_boundary() {
        assert!(!is_expired(100, 99));
        assert!(is_expired(100, 100));
    }
}
