use did_trust_core::{DIDDocument, PublicKey, Service};

use crate::ED25519_VERIFICATION_KEY_2018;

/// Creates a DID document for `did` with a single Ed25519 key `did#keys-1` and a single
/// "did-communication" service whose only recipient key is that key.
pub fn mock_did_document(did: &str, public_key: &ed25519_dalek::VerifyingKey) -> DIDDocument {
    let public_key_id = format!("{}#keys-1", did);
    let now = time::OffsetDateTime::now_utc();
    let mut did_document = DIDDocument::new(
        did,
        vec![PublicKey::new(
            public_key_id.clone(),
            ED25519_VERIFICATION_KEY_2018,
            did,
            public_key.to_bytes().to_vec(),
        )],
        vec![Service {
            id: format!("{}#endpoint-1", did),
            r#type: "did-communication".to_string(),
            service_endpoint: "http://localhost:58416".to_string(),
            priority: 0,
            recipient_key_v: vec![public_key_id],
            routing_key_v: Vec::new(),
        }],
    );
    did_document.created_o = Some(now);
    did_document.updated_o = Some(now);
    did_document
}

/// Like mock_did_document but with a freshly generated key.
pub fn generate_mock_did_document(did: &str) -> DIDDocument {
    let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
    mock_did_document(did, &signing_key.verifying_key())
}
