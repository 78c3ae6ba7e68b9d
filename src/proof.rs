use base64::Engine;

use crate::{DetachedJWS, Error, Result, SignatureRepresentation};

/// A linked data proof, as found in the "proof" field of a verifiable credential or presentation.
/// Exactly one of proof_value_o and jws_o is set on a well-formed proof.  Decoding is lenient so
/// that proofs of other suites (e.g. with a "signatureValue" field or a non-RFC3339 "created") can
/// be carried along; signature_representation and created enforce the well-formed shape.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Proof {
    pub r#type: String,
    /// Kept as it appears on the wire, since verification digests the raw value.
    #[serde(rename = "created", default, skip_serializing_if = "Option::is_none")]
    pub created_o: Option<String>,
    #[serde(rename = "verificationMethod", default, skip_serializing_if = "Option::is_none")]
    pub verification_method_o: Option<String>,
    #[serde(rename = "proofValue", default, skip_serializing_if = "Option::is_none")]
    pub proof_value_o: Option<String>,
    #[serde(rename = "jws", default, skip_serializing_if = "Option::is_none")]
    pub jws_o: Option<String>,
}

impl Proof {
    /// Parses "created" as an RFC3339 timestamp.
    pub fn created(&self) -> Result<Option<time::OffsetDateTime>> {
        self.created_o
            .as_deref()
            .map(|created| {
                time::OffsetDateTime::parse(created, &time::format_description::well_known::Rfc3339)
                    .map_err(|e| {
                        Error::MalformedDocument(
                            format!("proof created {:?} is not RFC3339: {}", created, e).into(),
                        )
                    })
            })
            .transpose()
    }
    /// Determines the representation from which of "proofValue" and "jws" is present.
    pub fn signature_representation(&self) -> Result<SignatureRepresentation> {
        match (self.proof_value_o.is_some(), self.jws_o.is_some()) {
            (true, false) => Ok(SignatureRepresentation::ProofValue),
            (false, true) => Ok(SignatureRepresentation::DetachedSignature),
            (true, true) => Err(Error::MalformedDocument(
                "proof must not have both proofValue and jws".into(),
            )),
            (false, false) => Err(Error::MalformedDocument(
                "proof must have one of proofValue or jws".into(),
            )),
        }
    }
    /// Decoded signature bytes, from whichever of "proofValue" and "jws" is present.
    pub fn signature_bytes(&self) -> Result<Vec<u8>> {
        match self.signature_representation()? {
            SignatureRepresentation::ProofValue => {
                decode_proof_value(self.proof_value_o.as_deref().unwrap_or_default())
            }
            SignatureRepresentation::DetachedSignature => {
                use std::str::FromStr;
                let jws = DetachedJWS::from_str(self.jws_o.as_deref().unwrap_or_default())?;
                Ok(jws.into_signature_bytes())
            }
        }
    }
}

/// Decodes the value of a "proof" field, which may be a single proof object or an array of them.
/// A missing (null) field yields no proofs.  Proofs are not checked for a signature field here, so
/// proofs of foreign suites decode too.
pub fn decode_proofs(proof_value: &serde_json::Value) -> Result<Vec<Proof>> {
    Ok(match proof_value {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<Proof>>(proof_value.clone())?,
        serde_json::Value::Object(_) => vec![serde_json::from_value::<Proof>(proof_value.clone())?],
        _ => {
            return Err(Error::MalformedDocument(
                "proof must be an object or an array of objects".into(),
            ))
        }
    })
}

pub(crate) fn encode_proof_value(signature_bytes: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature_bytes)
}

pub(crate) fn decode_proof_value(proof_value: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(proof_value)
        .map_err(|_| Error::MalformedDocument("proofValue is not valid base64url".into()))
}
