use crate::Error;

/// A compound `owner#fragment` key identifier, e.g. `did:example:123#keys-1`, as used in the
/// `verificationMethod` field of a proof.  Parsing is strict: there must be exactly one '#', and
/// both the owner and the fragment must be non-empty.
#[derive(
    Clone,
    Debug,
    serde_with::DeserializeFromStr,
    Eq,
    Hash,
    PartialEq,
    serde_with::SerializeDisplay,
)]
pub struct DIDKeyReference {
    owner: String,
    fragment: String,
}

impl DIDKeyReference {
    pub fn new(owner: impl Into<String>, fragment: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let fragment = fragment.into();
        if owner.is_empty() || owner.contains('#') {
            return Err(Error::MalformedIdentifier(
                format!("invalid owner {:?}", owner).into(),
            ));
        }
        if fragment.is_empty() || fragment.contains('#') {
            return Err(Error::MalformedIdentifier(
                format!("invalid fragment {:?}", fragment).into(),
            ));
        }
        Ok(Self { owner, fragment })
    }
    /// The part before the '#', typically a DID.
    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }
    /// The part after the '#', not including the '#'.
    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }
    /// The relative form `#fragment`, which is what key fetchers are given.
    pub fn relative_fragment(&self) -> String {
        format!("#{}", self.fragment)
    }
}

impl std::fmt::Display for DIDKeyReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.owner, self.fragment)
    }
}

impl std::str::FromStr for DIDKeyReference {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut part_i = s.split('#');
        let (Some(owner), Some(fragment), None) = (part_i.next(), part_i.next(), part_i.next())
        else {
            return Err(Error::MalformedIdentifier(
                format!("expected exactly one '#' in {:?}", s).into(),
            ));
        };
        if owner.is_empty() || fragment.is_empty() {
            return Err(Error::MalformedIdentifier(
                format!("empty owner or fragment in {:?}", s).into(),
            ));
        }
        Ok(Self {
            owner: owner.to_string(),
            fragment: fragment.to_string(),
        })
    }
}
