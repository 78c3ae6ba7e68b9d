mod compaction;
mod destination;
mod detached_jws;
mod did_document;
mod did_key_reference;
mod error;
mod key_resolver_adapter;
mod linked_data_proof;
#[cfg(feature = "clap")]
mod linked_data_proof_args;
mod linked_data_proof_context;
mod proof;
mod public_key;
mod public_key_fetcher;
mod recipient_keys;
mod service;
mod signature_representation;
mod signature_suite;
mod vdr_registry;

#[cfg(feature = "clap")]
pub use crate::linked_data_proof_args::LinkedDataProofArgs;
pub use crate::{
    compaction::compacted,
    destination::{create_destination, get_destination, Destination},
    detached_jws::{DetachedJWS, DetachedJWSHeader},
    did_document::DIDDocument,
    did_key_reference::DIDKeyReference,
    error::Error,
    key_resolver_adapter::KeyResolverAdapter,
    linked_data_proof::{
        add_linked_data_proof, check_linked_data_proof, sign_linked_data_document,
    },
    linked_data_proof_context::LinkedDataProofContext,
    proof::{decode_proofs, Proof},
    public_key::PublicKey,
    public_key_fetcher::PublicKeyFetcher,
    recipient_keys::lookup_recipient_keys,
    service::Service,
    signature_representation::SignatureRepresentation,
    signature_suite::{SignatureSuite, SignerSuite, VerifierSuite},
    vdr_registry::VDRRegistry,
};

pub type Result<T> = std::result::Result<T, Error>;
