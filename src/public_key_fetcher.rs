use crate::PublicKey;

/// Supplies the public key named by an owner (typically a DID) and a relative key fragment of the
/// form `#keyId`.  Usually backed by the owner's resolved DID document, but any key store will do.
pub trait PublicKeyFetcher {
    fn fetch(&self, owner: &str, key_fragment: &str) -> anyhow::Result<PublicKey>;
}

impl<F> PublicKeyFetcher for F
where
    F: Fn(&str, &str) -> anyhow::Result<PublicKey>,
{
    fn fetch(&self, owner: &str, key_fragment: &str) -> anyhow::Result<PublicKey> {
        self(owner, key_fragment)
    }
}
