use did_trust_core::{PublicKey, SignatureSuite, SignerSuite, VerifierSuite};

pub const ED25519_SIGNATURE_2018: &str = "Ed25519Signature2018";
pub const ED25519_VERIFICATION_KEY_2018: &str = "Ed25519VerificationKey2018";

/// Ed25519Signature2018 signer suite for tests and demos.  Canonicalization is JCS (RFC 8785)
/// rather than RDF dataset normalization, and the digest is SHA-256.  Not interoperable with other
/// Ed25519Signature2018 implementations.
pub struct Ed25519Signature2018Signer {
    signing_key: ed25519_dalek::SigningKey,
    compact: bool,
}

impl Ed25519Signature2018Signer {
    pub fn new(signing_key: ed25519_dalek::SigningKey) -> Self {
        Self {
            signing_key,
            compact: false,
        }
    }
    pub fn generate() -> Self {
        Self::new(ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng))
    }
    pub fn with_compaction(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
    pub fn verifying_key(&self) -> ed25519_dalek::VerifyingKey {
        self.signing_key.verifying_key()
    }
    /// Public key entry for this signer's key, suitable for a DID document.
    pub fn public_key(&self, id: impl Into<String>, controller: impl Into<String>) -> PublicKey {
        PublicKey::new(
            id,
            ED25519_VERIFICATION_KEY_2018,
            controller,
            self.verifying_key().to_bytes().to_vec(),
        )
    }
}

/// Verifier counterpart of Ed25519Signature2018Signer.  Must be constructed with the same
/// compaction setting as the signer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Signature2018Verifier {
    compact: bool,
}

impl Ed25519Signature2018Verifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_compaction(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

fn canonicalize_using_jcs(
    document: &serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json_canonicalizer::to_vec(document)?)
}

fn sha256_digest(canonical_bytes: &[u8]) -> Vec<u8> {
    use sha2::Digest;
    sha2::Sha256::digest(canonical_bytes).to_vec()
}

impl SignatureSuite for Ed25519Signature2018Signer {
    fn canonicalize(
        &self,
        document: &serde_json::Map<String, serde_json::Value>,
    ) -> anyhow::Result<Vec<u8>> {
        canonicalize_using_jcs(document)
    }
    fn digest(&self, canonical_bytes: &[u8]) -> Vec<u8> {
        sha256_digest(canonical_bytes)
    }
    fn accepts(&self, signature_type: &str) -> bool {
        signature_type == ED25519_SIGNATURE_2018
    }
    fn compact_before_canonicalize(&self) -> bool {
        self.compact
    }
}

impl SignerSuite for Ed25519Signature2018Signer {
    fn sign(&self, data: &[u8]) -> anyhow::Result<Vec<u8>> {
        use ed25519_dalek::Signer;
        Ok(self.signing_key.sign(data).to_bytes().to_vec())
    }
}

impl SignatureSuite for Ed25519Signature2018Verifier {
    fn canonicalize(
        &self,
        document: &serde_json::Map<String, serde_json::Value>,
    ) -> anyhow::Result<Vec<u8>> {
        canonicalize_using_jcs(document)
    }
    fn digest(&self, canonical_bytes: &[u8]) -> Vec<u8> {
        sha256_digest(canonical_bytes)
    }
    fn accepts(&self, signature_type: &str) -> bool {
        signature_type == ED25519_SIGNATURE_2018
    }
    fn compact_before_canonicalize(&self) -> bool {
        self.compact
    }
}

impl VerifierSuite for Ed25519Signature2018Verifier {
    fn verify(&self, public_key: &PublicKey, data: &[u8], signature: &[u8]) -> anyhow::Result<()> {
        if public_key.r#type != ED25519_VERIFICATION_KEY_2018 {
            anyhow::bail!(
                "expected a {} public key but got {:?}",
                ED25519_VERIFICATION_KEY_2018,
                public_key.r#type
            );
        }
        let public_key_bytes: &[u8; ed25519_dalek::PUBLIC_KEY_LENGTH] = public_key
            .value
            .as_slice()
            .try_into()
            .map_err(|_| anyhow::anyhow!("Ed25519 public key must be 32 bytes"))?;
        let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(public_key_bytes)?;
        let signature = ed25519_dalek::Signature::from_slice(signature)?;
        verifying_key.verify_strict(data, &signature)?;
        Ok(())
    }
}
