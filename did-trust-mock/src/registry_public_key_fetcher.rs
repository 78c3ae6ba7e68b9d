use did_trust_core::{PublicKey, PublicKeyFetcher, VDRRegistry};

/// A PublicKeyFetcher which resolves the owner's DID document using a VDRRegistry and then looks
/// the key fragment up among its public keys.
pub struct RegistryPublicKeyFetcher<'r> {
    registry: &'r dyn VDRRegistry,
}

impl<'r> RegistryPublicKeyFetcher<'r> {
    pub fn new(registry: &'r dyn VDRRegistry) -> Self {
        Self { registry }
    }
}

impl PublicKeyFetcher for RegistryPublicKeyFetcher<'_> {
    fn fetch(&self, owner: &str, key_fragment: &str) -> anyhow::Result<PublicKey> {
        let did_document = self.registry.resolve(owner)?;
        did_document
            .public_key_for_reference(key_fragment)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "public key {:?} not found in DID document {}",
                    key_fragment,
                    owner
                )
            })
    }
}
