use crate::DIDDocument;

/// Looks up the recipient keys of the first service of type `service_type`, keeping only those
/// references which resolve to a public key of type `key_type`.  Unresolvable references and keys
/// of another type are dropped.  Returns None if there is no such service or if nothing is left
/// after filtering; this is the expected outcome when probing for a key type a document doesn't
/// use, so it's not an error.
pub fn lookup_recipient_keys<'d>(
    did_document: &'d DIDDocument,
    service_type: &str,
    key_type: &str,
) -> Option<Vec<&'d [u8]>> {
    let service = did_document.first_service_of_type(service_type)?;
    let recipient_key_v = service
        .recipient_key_v
        .iter()
        .filter_map(|key_reference| {
            let public_key = did_document
                .public_key_for_reference(key_reference)
                .filter(|public_key| public_key.r#type == key_type);
            if public_key.is_none() {
                tracing::trace!(
                    "recipient key reference {:?} does not resolve to a {:?} key in {}",
                    key_reference,
                    key_type,
                    did_document.id
                );
            }
            public_key.map(|public_key| public_key.value.as_slice())
        })
        .collect::<Vec<_>>();
    if recipient_key_v.is_empty() {
        None
    } else {
        Some(recipient_key_v)
    }
}
