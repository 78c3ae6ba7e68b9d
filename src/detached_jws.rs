use base64::Engine;

use crate::{Error, Result};

/// Header of a JWS with a detached, unencoded payload (RFC 7797), as used in the "jws" field of a
/// linked data proof.  The signing input is `base64url(json(header)) || '.' || payload`.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct DetachedJWSHeader {
    pub alg: String,
    pub b64: bool,
    pub crit: Vec<String>,
}

impl DetachedJWSHeader {
    pub fn for_signature_type(signature_type: &str) -> Self {
        Self {
            alg: jws_alg_for_signature_type(signature_type).to_string(),
            b64: false,
            crit: vec!["b64".to_string()],
        }
    }
    pub fn encoded(&self) -> Result<String> {
        let header_json = serde_json::to_vec(self).map_err(|e| {
            Error::SigningFailed(format!("failed to serialize JWS header: {}", e).into())
        })?;
        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(header_json))
    }
}

/// The compact serialization `<base64url(header)>..<base64url(signature)>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetachedJWS {
    raw_header_base64: String,
    signature_byte_v: Vec<u8>,
}

impl DetachedJWS {
    pub fn new(raw_header_base64: String, signature_byte_v: Vec<u8>) -> Self {
        Self {
            raw_header_base64,
            signature_byte_v,
        }
    }
    pub fn signature_bytes(&self) -> &[u8] {
        self.signature_byte_v.as_slice()
    }
    pub fn into_signature_bytes(self) -> Vec<u8> {
        self.signature_byte_v
    }
    /// The part of the signing input that precedes the payload.
    pub fn signing_input_prefix(&self) -> String {
        format!("{}.", self.raw_header_base64)
    }
    pub fn header(&self) -> Result<DetachedJWSHeader> {
        let header_json = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(self.raw_header_base64.as_str())
            .map_err(|_| Error::MalformedDocument("JWS header is not valid base64".into()))?;
        serde_json::from_slice(&header_json).map_err(|e| {
            Error::MalformedDocument(format!("JWS header failed to decode into JSON: {}", e).into())
        })
    }
}

impl std::fmt::Display for DetachedJWS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.raw_header_base64,
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&self.signature_byte_v)
        )
    }
}

impl std::str::FromStr for DetachedJWS {
    type Err = Error;
    fn from_str(jws_str: &str) -> Result<Self> {
        let mut jws_part_i = jws_str.split('.');
        let raw_header_base64 = jws_part_i
            .next()
            .ok_or(Error::MalformedDocument("JWS missing header".into()))?;
        let payload = jws_part_i
            .next()
            .ok_or(Error::MalformedDocument("JWS missing payload".into()))?;
        let signature_base64 = jws_part_i
            .next()
            .ok_or(Error::MalformedDocument("JWS missing signature".into()))?;
        if jws_part_i.next().is_some() {
            return Err(Error::MalformedDocument("JWS has too many parts".into()));
        }
        if !payload.is_empty() {
            return Err(Error::MalformedDocument(
                "JWS in a linked data proof must have a detached payload".into(),
            ));
        }
        let signature_byte_v = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_base64)
            .map_err(|_| Error::MalformedDocument("JWS signature is not valid base64".into()))?;
        Ok(Self {
            raw_header_base64: raw_header_base64.to_string(),
            signature_byte_v,
        })
    }
}

fn jws_alg_for_signature_type(signature_type: &str) -> &'static str {
    match signature_type {
        "EcdsaSecp256k1Signature2019" => "ES256K",
        "EcdsaSecp256r1Signature2019" => "ES256",
        // Ed25519Signature2018, Ed25519Signature2020, JsonWebSignature2020 over Ed25519 keys.
        _ => "EdDSA",
    }
}
