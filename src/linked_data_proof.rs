use std::str::FromStr;

use crate::{
    compacted, decode_proofs, proof::decode_proof_value, proof::encode_proof_value, DetachedJWS,
    DetachedJWSHeader, Error, KeyResolverAdapter, LinkedDataProofContext, Proof, PublicKeyFetcher,
    Result, SignatureRepresentation, SignatureSuite, VerifierSuite,
};

type JSONObject = serde_json::Map<String, serde_json::Value>;

const CONTEXT_FIELD: &str = "@context";
const PROOF_FIELD: &str = "proof";

/// Signs the JSON-LD document `jsonld_bytes` as specified by `context` and returns the proofs of
/// the resulting document: the proofs already present, in order, followed by the new one.
pub fn add_linked_data_proof(
    context: &LinkedDataProofContext<'_>,
    jsonld_bytes: &[u8],
) -> Result<Vec<Proof>> {
    let signed_jsonld_bytes = sign_linked_data_document(context, jsonld_bytes)?;
    let signed_document = parse_json_object(&signed_jsonld_bytes)?;
    decode_proofs(
        signed_document
            .get(PROOF_FIELD)
            .unwrap_or(&serde_json::Value::Null),
    )
}

/// Signs the JSON-LD document `jsonld_bytes` as specified by `context` and returns the serialized
/// document with the new proof appended to its "proof" field.  Existing proofs are kept as-is.  A
/// document with a single proof carries it as an object, otherwise as an array.
pub fn sign_linked_data_document(
    context: &LinkedDataProofContext<'_>,
    jsonld_bytes: &[u8],
) -> Result<Vec<u8>> {
    let mut document = parse_json_object(jsonld_bytes)?;
    let mut proof_object_v = take_proof_objects(&mut document)?;
    let mut proof_object = proof_options(context)?;

    let suite = context.suite;
    let signing_input_prefix_o = match context.signature_representation {
        SignatureRepresentation::ProofValue => None,
        SignatureRepresentation::DetachedSignature => Some(
            DetachedJWSHeader::for_signature_type(context.signature_type.as_str()).encoded()?,
        ),
    };
    let mut signing_input = signing_input_prefix_o
        .as_ref()
        .map(|raw_header_base64| format!("{}.", raw_header_base64).into_bytes())
        .unwrap_or_default();
    signing_input.extend(
        create_verify_data(suite, &document, &proof_object).map_err(|e| {
            Error::SigningFailed(format!("failed to create verify data: {:#}", e).into())
        })?,
    );
    let signature_byte_v = suite.sign(&signing_input).map_err(|e| {
        Error::SigningFailed(
            format!(
                "{:?} suite failed to sign: {:#}",
                context.signature_type, e
            )
            .into(),
        )
    })?;

    let signature_value = match signing_input_prefix_o {
        None => encode_proof_value(&signature_byte_v),
        Some(raw_header_base64) => DetachedJWS::new(raw_header_base64, signature_byte_v).to_string(),
    };
    proof_object.insert(
        context.signature_representation.as_str().to_string(),
        serde_json::Value::String(signature_value),
    );
    proof_object_v.push(proof_object);
    tracing::debug!(
        "added {:?} proof; document now has {} proof(s)",
        context.signature_type,
        proof_object_v.len()
    );

    let proof_value = if proof_object_v.len() == 1 {
        serde_json::Value::Object(proof_object_v.remove(0))
    } else {
        serde_json::Value::Array(
            proof_object_v
                .into_iter()
                .map(serde_json::Value::Object)
                .collect(),
        )
    };
    document.insert(PROOF_FIELD.to_string(), proof_value);
    Ok(serde_json::to_vec(&document)?)
}

/// Verifies every proof in the JSON-LD document `jsonld_bytes` whose type `suite` accepts, using
/// `public_key_fetcher` to obtain the key named by each proof's verificationMethod.  Proofs of
/// other types are ignored, but at least one proof must be accepted by the suite.
pub fn check_linked_data_proof(
    jsonld_bytes: &[u8],
    suite: &dyn VerifierSuite,
    public_key_fetcher: &dyn PublicKeyFetcher,
) -> Result<()> {
    let key_resolver_adapter = KeyResolverAdapter::new(public_key_fetcher);
    let mut document = parse_json_object(jsonld_bytes)?;
    let proof_object_v = take_proof_objects(&mut document)?;
    if proof_object_v.is_empty() {
        return Err(Error::MalformedDocument("document has no proof".into()));
    }

    let mut checked_proof_count = 0usize;
    for proof_object in &proof_object_v {
        let proof_type = proof_object
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::MalformedDocument("proof has no string \"type\"".into()))?;
        if !suite.accepts(proof_type) {
            tracing::debug!("skipping {:?} proof; not accepted by suite", proof_type);
            continue;
        }
        let proof: Proof = serde_json::from_value(serde_json::Value::Object(proof_object.clone()))?;
        check_proof(
            &document,
            proof_object,
            &proof,
            suite,
            &key_resolver_adapter,
        )?;
        checked_proof_count += 1;
    }
    if checked_proof_count == 0 {
        return Err(Error::VerificationFailed(
            "document has no proof of a type accepted by the suite".into(),
        ));
    }
    tracing::debug!("verified {} proof(s)", checked_proof_count);
    Ok(())
}

fn check_proof(
    document: &JSONObject,
    proof_object: &JSONObject,
    proof: &Proof,
    suite: &dyn VerifierSuite,
    key_resolver_adapter: &KeyResolverAdapter<'_>,
) -> Result<()> {
    let verification_method = proof.verification_method_o.as_deref().ok_or_else(|| {
        Error::MalformedDocument(
            format!("{:?} proof has no verificationMethod", proof.r#type).into(),
        )
    })?;
    let public_key = key_resolver_adapter
        .resolve(verification_method)
        .map_err(|e| match e {
            Error::KeyResolutionFailed(_) => e,
            _ => Error::KeyResolutionFailed(e.to_string().into()),
        })?;

    let (mut signing_input, signature_byte_v) = match proof.signature_representation()? {
        SignatureRepresentation::ProofValue => (
            Vec::new(),
            decode_proof_value(proof.proof_value_o.as_deref().unwrap_or_default())
                .map_err(|e| Error::VerificationFailed(e.to_string().into()))?,
        ),
        SignatureRepresentation::DetachedSignature => {
            let jws = DetachedJWS::from_str(proof.jws_o.as_deref().unwrap_or_default())
                .map_err(|e| Error::VerificationFailed(e.to_string().into()))?;
            (
                jws.signing_input_prefix().into_bytes(),
                jws.into_signature_bytes(),
            )
        }
    };
    signing_input.extend(
        create_verify_data(suite, document, proof_object).map_err(|e| {
            Error::VerificationFailed(format!("failed to create verify data: {:#}", e).into())
        })?,
    );
    suite
        .verify(&public_key, &signing_input, &signature_byte_v)
        .map_err(|e| {
            Error::VerificationFailed(
                format!(
                    "{:?} proof by {} did not verify: {:#}",
                    proof.r#type, verification_method, e
                )
                .into(),
            )
        })
}

/// The bytes that get signed: digest(canonical(proof options)) || digest(canonical(document)).
/// The proof options are the proof without its signature, under the document's @context.  The
/// document must already have its "proof" field removed.
fn create_verify_data<S: SignatureSuite + ?Sized>(
    suite: &S,
    document: &JSONObject,
    proof_object: &JSONObject,
) -> anyhow::Result<Vec<u8>> {
    let mut proof_options = proof_object.clone();
    proof_options.remove(SignatureRepresentation::ProofValue.as_str());
    proof_options.remove(SignatureRepresentation::DetachedSignature.as_str());
    if let Some(context) = document.get(CONTEXT_FIELD) {
        proof_options.insert(CONTEXT_FIELD.to_string(), context.clone());
    }

    let (canonical_proof_options, canonical_document) = if suite.compact_before_canonicalize() {
        (
            suite.canonicalize(&compacted(&proof_options))?,
            suite.canonicalize(&compacted(document))?,
        )
    } else {
        (
            suite.canonicalize(&proof_options)?,
            suite.canonicalize(document)?,
        )
    };

    let mut verify_data = suite.digest(&canonical_proof_options);
    verify_data.extend(suite.digest(&canonical_document));
    Ok(verify_data)
}

fn proof_options(context: &LinkedDataProofContext<'_>) -> Result<JSONObject> {
    let mut proof_options = JSONObject::new();
    proof_options.insert(
        "type".to_string(),
        serde_json::Value::String(context.signature_type.clone()),
    );
    if let Some(created) = context.created_o {
        let created_str = created
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| {
                Error::SigningFailed(format!("failed to format created time: {}", e).into())
            })?;
        proof_options.insert("created".to_string(), serde_json::Value::String(created_str));
    }
    if let Some(verification_method) = context.verification_method_o.as_ref() {
        proof_options.insert(
            "verificationMethod".to_string(),
            serde_json::Value::String(verification_method.clone()),
        );
    }
    Ok(proof_options)
}

fn parse_json_object(jsonld_bytes: &[u8]) -> Result<JSONObject> {
    match serde_json::from_slice::<serde_json::Value>(jsonld_bytes)? {
        serde_json::Value::Object(document) => Ok(document),
        _ => Err(Error::MalformedDocument(
            "JSON-LD document must be a JSON object".into(),
        )),
    }
}

/// Removes the "proof" field from `document`, returning its proof objects in order.
fn take_proof_objects(document: &mut JSONObject) -> Result<Vec<JSONObject>> {
    match document.remove(PROOF_FIELD) {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(serde_json::Value::Object(proof_object)) => Ok(vec![proof_object]),
        Some(serde_json::Value::Array(proof_value_v)) => proof_value_v
            .into_iter()
            .map(|proof_value| match proof_value {
                serde_json::Value::Object(proof_object) => Ok(proof_object),
                _ => Err(Error::MalformedDocument(
                    "each element of proof must be an object".into(),
                )),
            })
            .collect(),
        Some(_) => Err(Error::MalformedDocument(
            "proof must be an object or an array of objects".into(),
        )),
    }
}
