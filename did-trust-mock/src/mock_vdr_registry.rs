use std::collections::HashMap;

use did_trust_core::{DIDDocument, VDRRegistry};

/// Mock (i.e. ephemeral, intra-process) implementation of VDRRegistry.  Holds DID documents indexed
/// by DID.  If resolve_error_o is set, every resolution fails with that message, which is useful for
/// exercising error propagation.
#[derive(Clone, Debug, Default)]
pub struct MockVDRRegistry {
    did_document_m: HashMap<String, DIDDocument>,
    resolve_error_o: Option<String>,
}

impl MockVDRRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    /// Registry holding just `did_document`.
    pub fn with_document(did_document: DIDDocument) -> Self {
        let mut mock_vdr_registry = Self::new();
        mock_vdr_registry.insert(did_document);
        mock_vdr_registry
    }
    /// Registry whose every resolution fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            did_document_m: HashMap::new(),
            resolve_error_o: Some(message.into()),
        }
    }
    /// Adds or replaces the DID document for its id.
    pub fn insert(&mut self, did_document: DIDDocument) {
        self.did_document_m
            .insert(did_document.id.clone(), did_document);
    }
}

impl VDRRegistry for MockVDRRegistry {
    fn resolve(&self, did: &str) -> anyhow::Result<DIDDocument> {
        if let Some(resolve_error) = self.resolve_error_o.as_ref() {
            anyhow::bail!("{}", resolve_error);
        }
        tracing::trace!("MockVDRRegistry resolving {:?}", did);
        self.did_document_m
            .get(did)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("DID {:?} not found", did))
    }
}
