/// A public key entry of a DID document.  The key material is held as raw bytes; its format is
/// determined by the suite named in `type`.  On the wire the bytes are carried base58-encoded in
/// the `publicKeyBase58` field.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct PublicKey {
    /// Either an absolute DID URL (e.g. `did:example:123#keys-1`) or a relative `#fragment`.
    pub id: String,
    /// Names the cryptographic suite this key is compatible with, e.g. "Ed25519VerificationKey2018".
    pub r#type: String,
    /// The DID of the document that owns this key.
    pub controller: String,
    #[serde(rename = "publicKeyBase58", with = "base58_bytes")]
    pub value: Vec<u8>,
}

impl PublicKey {
    pub fn new(
        id: impl Into<String>,
        r#type: impl Into<String>,
        controller: impl Into<String>,
        value: Vec<u8>,
    ) -> Self {
        Self {
            id: id.into(),
            r#type: r#type.into(),
            controller: controller.into(),
            value,
        }
    }
    /// The key value in the base58 form used for DIDComm recipient and routing keys.
    pub fn value_base58(&self) -> String {
        bs58::encode(&self.value).into_string()
    }
}

mod base58_bytes {
    pub fn serialize<S: serde::Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&bs58::encode(bytes).into_string())
    }
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        bs58::decode(s.as_str())
            .into_vec()
            .map_err(|e| serde::de::Error::custom(format!("invalid publicKeyBase58: {}", e)))
    }
}
