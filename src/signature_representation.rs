/// Selects which proof field carries the signature.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    serde_with::DeserializeFromStr,
    Eq,
    Hash,
    PartialEq,
    serde_with::SerializeDisplay,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SignatureRepresentation {
    /// The signature goes in "proofValue", base64url-no-pad encoded.
    #[default]
    ProofValue,
    /// The signature goes in "jws" as a JWS with a detached, unencoded payload.
    #[cfg_attr(feature = "clap", value(name = "jws"))]
    DetachedSignature,
}

impl SignatureRepresentation {
    /// Name of the proof field that holds the signature for this representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureRepresentation::ProofValue => "proofValue",
            SignatureRepresentation::DetachedSignature => "jws",
        }
    }
}

impl std::fmt::Display for SignatureRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SignatureRepresentation {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proofValue" => Ok(SignatureRepresentation::ProofValue),
            "jws" => Ok(SignatureRepresentation::DetachedSignature),
            _ => Err("Unrecognized SignatureRepresentation"),
        }
    }
}
