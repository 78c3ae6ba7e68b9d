use crate::{LinkedDataProofContext, SignatureRepresentation, SignerSuite};

/// Command-line/environment configuration for producing linked data proofs.  Combine with a
/// SignerSuite via into_context.
#[derive(clap::Args, Clone, Debug)]
pub struct LinkedDataProofArgs {
    /// Specify the proof type, e.g. "Ed25519Signature2018".
    #[arg(
        env = "DID_TRUST_SIGNATURE_TYPE",
        long,
        value_name = "TYPE",
        default_value = "Ed25519Signature2018"
    )]
    pub signature_type: String,
    /// Specify which proof field carries the signature.
    #[arg(
        env = "DID_TRUST_SIGNATURE_REPRESENTATION",
        long,
        value_enum,
        default_value = "proof-value"
    )]
    pub signature_representation: SignatureRepresentation,
    /// Specify the key used to sign, in the form `did#keyId`.
    #[arg(env = "DID_TRUST_VERIFICATION_METHOD", long, value_name = "DID_URL")]
    pub verification_method: Option<String>,
    /// Specify the RFC3339 creation time of the proof, e.g. "2024-01-01T00:00:00Z".
    #[arg(
        env = "DID_TRUST_CREATED",
        long,
        value_name = "TIMESTAMP",
        value_parser = parse_rfc3339
    )]
    pub created: Option<time::OffsetDateTime>,
}

impl LinkedDataProofArgs {
    pub fn into_context<'s>(self, suite: &'s dyn SignerSuite) -> LinkedDataProofContext<'s> {
        LinkedDataProofContext {
            signature_type: self.signature_type,
            suite,
            signature_representation: self.signature_representation,
            created_o: self.created,
            verification_method_o: self.verification_method,
        }
    }
}

fn parse_rfc3339(s: &str) -> anyhow::Result<time::OffsetDateTime> {
    Ok(time::OffsetDateTime::parse(
        s,
        &time::format_description::well_known::Rfc3339,
    )?)
}
