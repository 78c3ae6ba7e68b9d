/// A service entry of a DID document.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Service {
    pub id: String,
    /// E.g. "did-communication".
    pub r#type: String,
    #[serde(rename = "serviceEndpoint", default)]
    pub service_endpoint: String,
    /// Lower is preferred.  Advisory only; nothing in this crate orders services by priority.
    #[serde(default)]
    pub priority: u32,
    /// Each element is either literal key material or a reference (containing '#') to one of the
    /// document's public keys.
    #[serde(rename = "recipientKeys", default, skip_serializing_if = "Vec::is_empty")]
    pub recipient_key_v: Vec<String>,
    /// Same form as recipient_key_v.
    #[serde(rename = "routingKeys", default, skip_serializing_if = "Vec::is_empty")]
    pub routing_key_v: Vec<String>,
}
