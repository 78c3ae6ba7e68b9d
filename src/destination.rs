use crate::{DIDDocument, Error, Result, Service, VDRRegistry};

/// The messaging coordinates of a DID subject, derived from the first "did-communication" service
/// of its DID document.  Keys are in the order the service lists them.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct Destination {
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: String,
    #[serde(rename = "recipientKeys")]
    pub recipient_key_v: Vec<String>,
    #[serde(rename = "routingKeys")]
    pub routing_key_v: Vec<String>,
}

impl Destination {
    pub const DID_COMMUNICATION_SERVICE_TYPE: &'static str = "did-communication";

    /// Resolves `did` using `registry` and then derives the Destination from the resolved document.
    pub fn get(did: &str, registry: &dyn VDRRegistry) -> Result<Self> {
        let did_document = registry.resolve(did).map_err(|e| {
            Error::RegistryResolutionFailed(
                format!("failed to resolve DID {:?}: {:#}", did, e).into(),
            )
        })?;
        Self::create(&did_document)
    }
    /// Derives the Destination from the first "did-communication" service in `did_document`.
    pub fn create(did_document: &DIDDocument) -> Result<Self> {
        if did_document.service_v.is_empty() {
            return Err(Error::MissingService);
        }
        let service = did_document
            .first_service_of_type(Self::DID_COMMUNICATION_SERVICE_TYPE)
            .ok_or_else(|| {
                Error::ServiceTypeNotFound(
                    format!(
                        "no {:?} service in DID document {}",
                        Self::DID_COMMUNICATION_SERVICE_TYPE,
                        did_document.id
                    )
                    .into(),
                )
            })?;
        tracing::debug!(
            "using service {:?} of DID document {}",
            service.id,
            did_document.id
        );
        if service.service_endpoint.is_empty() {
            return Err(Error::MissingEndpoint(
                format!("service {:?} has an empty serviceEndpoint", service.id).into(),
            ));
        }

        let recipient_key_v = resolve_key_references(did_document, service, &service.recipient_key_v);
        if recipient_key_v.is_empty() {
            return Err(Error::NoRecipientKeys(
                format!("service {:?} has no resolvable recipient keys", service.id).into(),
            ));
        }
        let routing_key_v = resolve_key_references(did_document, service, &service.routing_key_v);

        Ok(Self {
            service_endpoint: service.service_endpoint.clone(),
            recipient_key_v,
            routing_key_v,
        })
    }
}

/// Shorthand for Destination::get.
pub fn get_destination(did: &str, registry: &dyn VDRRegistry) -> Result<Destination> {
    Destination::get(did, registry)
}

/// Shorthand for Destination::create.
pub fn create_destination(did_document: &DIDDocument) -> Result<Destination> {
    Destination::create(did_document)
}

// References containing '#' are looked up in the document and dropped if absent; anything else
// is already key material and is passed through as-is.
fn resolve_key_references(
    did_document: &DIDDocument,
    service: &Service,
    key_reference_v: &[String],
) -> Vec<String> {
    key_reference_v
        .iter()
        .filter_map(|key_reference| {
            if !key_reference.contains('#') {
                return Some(key_reference.clone());
            }
            match did_document.public_key_for_reference(key_reference) {
                Some(public_key) => Some(public_key.value_base58()),
                None => {
                    tracing::warn!(
                        "service {:?} references key {:?} which is not in DID document {}; skipping it",
                        service.id,
                        key_reference,
                        did_document.id
                    );
                    None
                }
            }
        })
        .collect()
}
