use crate::DIDDocument;

/// Resolves a DID to its DID document.  Implementations may block on network or storage I/O.
/// Errors are opaque to this crate; they're wrapped with context and passed on to the caller.
pub trait VDRRegistry {
    fn resolve(&self, did: &str) -> anyhow::Result<DIDDocument>;
}

impl<R: VDRRegistry + ?Sized> VDRRegistry for &R {
    fn resolve(&self, did: &str) -> anyhow::Result<DIDDocument> {
        (**self).resolve(did)
    }
}

impl<R: VDRRegistry + ?Sized> VDRRegistry for Box<R> {
    fn resolve(&self, did: &str) -> anyhow::Result<DIDDocument> {
        (**self).resolve(did)
    }
}
