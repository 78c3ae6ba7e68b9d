mod ed25519_signature_2018;
mod mock_did_document;
mod mock_vdr_registry;
mod registry_public_key_fetcher;

pub use crate::{
    ed25519_signature_2018::{
        Ed25519Signature2018Signer, Ed25519Signature2018Verifier, ED25519_SIGNATURE_2018,
        ED25519_VERIFICATION_KEY_2018,
    },
    mock_did_document::{generate_mock_did_document, mock_did_document},
    mock_vdr_registry::MockVDRRegistry,
    registry_public_key_fetcher::RegistryPublicKeyFetcher,
};
