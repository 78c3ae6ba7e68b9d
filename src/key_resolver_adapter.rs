use std::str::FromStr;

use crate::{DIDKeyReference, Error, PublicKey, PublicKeyFetcher, Result};

/// Turns a `verificationMethod` value (of the form `owner#keyId`) into a public key by splitting
/// it and handing the parts to a caller-supplied PublicKeyFetcher.
pub struct KeyResolverAdapter<'f> {
    public_key_fetcher: &'f dyn PublicKeyFetcher,
}

impl<'f> KeyResolverAdapter<'f> {
    pub fn new(public_key_fetcher: &'f dyn PublicKeyFetcher) -> Self {
        Self { public_key_fetcher }
    }
    /// Fails with Error::MalformedIdentifier if `key_id` isn't exactly `owner#fragment`, and with
    /// Error::KeyResolutionFailed if the fetcher fails.
    pub fn resolve(&self, key_id: &str) -> Result<PublicKey> {
        let did_key_reference = DIDKeyReference::from_str(key_id)?;
        self.resolve_reference(&did_key_reference)
    }
    pub fn resolve_reference(&self, did_key_reference: &DIDKeyReference) -> Result<PublicKey> {
        tracing::trace!("fetching public key {}", did_key_reference);
        self.public_key_fetcher
            .fetch(
                did_key_reference.owner(),
                did_key_reference.relative_fragment().as_str(),
            )
            .map_err(|e| {
                Error::KeyResolutionFailed(
                    format!("failed to fetch public key {}: {:#}", did_key_reference, e).into(),
                )
            })
    }
}
