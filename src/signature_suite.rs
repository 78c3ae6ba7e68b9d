use crate::PublicKey;

/// Capabilities shared by signer and verifier suites.  A suite implements one signature type
/// (or a family of them, see `accepts`).
///
/// `canonicalize` MUST be a pure function of the map's content: two maps with equal content must
/// produce identical bytes regardless of member order, or signatures won't verify.
pub trait SignatureSuite {
    /// Produce the canonical byte form of a JSON-LD object.
    fn canonicalize(
        &self,
        document: &serde_json::Map<String, serde_json::Value>,
    ) -> anyhow::Result<Vec<u8>>;
    /// Digest of the canonical bytes.
    fn digest(&self, canonical_bytes: &[u8]) -> Vec<u8>;
    /// Indicates whether proofs of the given type are produced/checked by this suite.
    fn accepts(&self, signature_type: &str) -> bool;
    /// If true, the document and proof options are compacted before being canonicalized.
    fn compact_before_canonicalize(&self) -> bool;
}

pub trait SignerSuite: SignatureSuite {
    fn sign(&self, data: &[u8]) -> anyhow::Result<Vec<u8>>;
}

pub trait VerifierSuite: SignatureSuite {
    /// Returns Ok(()) iff `signature` is a valid signature over `data` by `public_key`.
    fn verify(&self, public_key: &PublicKey, data: &[u8], signature: &[u8]) -> anyhow::Result<()>;
}
