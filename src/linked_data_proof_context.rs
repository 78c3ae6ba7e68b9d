use crate::{SignatureRepresentation, SignerSuite};

/// Options for producing one linked data proof.
pub struct LinkedDataProofContext<'s> {
    /// E.g. "Ed25519Signature2018".  Becomes the "type" field of the proof.
    pub signature_type: String,
    pub suite: &'s dyn SignerSuite,
    pub signature_representation: SignatureRepresentation,
    pub created_o: Option<time::OffsetDateTime>,
    /// Typically `did#keyId`.  Verifiers need this to find the public key.
    pub verification_method_o: Option<String>,
}

impl<'s> LinkedDataProofContext<'s> {
    pub fn new(
        signature_type: impl Into<String>,
        suite: &'s dyn SignerSuite,
        signature_representation: SignatureRepresentation,
    ) -> Self {
        Self {
            signature_type: signature_type.into(),
            suite,
            signature_representation,
            created_o: None,
            verification_method_o: None,
        }
    }
    pub fn with_created(mut self, created: time::OffsetDateTime) -> Self {
        self.created_o = Some(created);
        self
    }
    pub fn with_verification_method(mut self, verification_method: impl Into<String>) -> Self {
        self.verification_method_o = Some(verification_method.into());
        self
    }
}

impl std::fmt::Debug for LinkedDataProofContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedDataProofContext")
            .field("signature_type", &self.signature_type)
            .field("signature_representation", &self.signature_representation)
            .field("created_o", &self.created_o)
            .field("verification_method_o", &self.verification_method_o)
            .finish_non_exhaustive()
    }
}
