use std::collections::HashSet;

use crate::{Error, PublicKey, Result, Service};

/// In-memory data model for a DID document: its identifier, public keys, services and timestamps.
///
/// To deserialize from a string `s: &str` to DIDDocument, use `serde_json::from_str::<DIDDocument>(s)`.
///
/// Note that if you want a serialization that is stable for hashing or signing, you MUST use
/// serialize_canonically, since serde_json::to_string does not produce canonical JSON.  JCS (JSON
/// Canonicalization Scheme) is used for canonicalization.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct DIDDocument {
    #[serde(rename = "@context", default, skip_serializing_if = "Vec::is_empty")]
    pub context_v: Vec<String>,
    pub id: String,
    #[serde(rename = "publicKey", default, skip_serializing_if = "Vec::is_empty")]
    pub public_key_v: Vec<PublicKey>,
    #[serde(rename = "service", default, skip_serializing_if = "Vec::is_empty")]
    pub service_v: Vec<Service>,
    #[serde(rename = "created", default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_o: Option<time::OffsetDateTime>,
    #[serde(rename = "updated", default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_o: Option<time::OffsetDateTime>,
}

impl DIDDocument {
    pub const CONTEXT: &'static str = "https://w3id.org/did/v1";

    pub fn new(id: impl Into<String>, public_key_v: Vec<PublicKey>, service_v: Vec<Service>) -> Self {
        Self {
            context_v: vec![Self::CONTEXT.to_string()],
            id: id.into(),
            public_key_v,
            service_v,
            created_o: None,
            updated_o: None,
        }
    }
    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn created_o(&self) -> Option<time::OffsetDateTime> {
        self.created_o
    }
    pub fn updated_o(&self) -> Option<time::OffsetDateTime> {
        self.updated_o
    }
    /// Returns the first service (in document order) whose type is `service_type`.
    pub fn first_service_of_type(&self, service_type: &str) -> Option<&Service> {
        self.service_v
            .iter()
            .find(|service| service.r#type == service_type)
    }
    /// Resolves a key reference against this document's public keys.  The reference matches a key
    /// if it equals the key's id, or if both name the same fragment and neither names a DID other
    /// than this document's.  References without a '#' never match (they are literal key material).
    pub fn public_key_for_reference(&self, key_reference: &str) -> Option<&PublicKey> {
        if let Some(public_key) = self.public_key_v.iter().find(|pk| pk.id == key_reference) {
            return Some(public_key);
        }
        let (owner, fragment) = key_reference.split_once('#')?;
        if !owner.is_empty() && owner != self.id {
            return None;
        }
        self.public_key_v
            .iter()
            .find(|pk| match pk.id.split_once('#') {
                Some((pk_owner, pk_fragment)) => {
                    (pk_owner.is_empty() || pk_owner == self.id) && pk_fragment == fragment
                }
                None => false,
            })
    }
    /// Checks the structural invariants: the id is non-empty, and public key ids and service ids
    /// are each unique within the document.
    pub fn verify(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::Malformed("DID document id must be non-empty".into()));
        }
        let mut public_key_id_s = HashSet::new();
        for public_key in &self.public_key_v {
            if !public_key_id_s.insert(public_key.id.as_str()) {
                return Err(Error::Malformed(
                    format!("duplicate public key id {:?}", public_key.id).into(),
                ));
            }
        }
        let mut service_id_s = HashSet::new();
        for service in &self.service_v {
            if !service_id_s.insert(service.id.as_str()) {
                return Err(Error::Malformed(
                    format!("duplicate service id {:?}", service.id).into(),
                ));
            }
        }
        Ok(())
    }
    /// This method is what you should use if you want to canonically serialize this DID document.
    pub fn serialize_canonically(&self) -> Result<String> {
        let did_document_jcs_bytes = serde_json_canonicalizer::to_vec(self).map_err(|e| {
            Error::Malformed(
                format!("failed to serialize DID document to canonical JSON: {}", e).into(),
            )
        })?;
        String::from_utf8(did_document_jcs_bytes)
            .map_err(|_| Error::Malformed("canonical JSON was not valid UTF-8".into()))
    }
}
