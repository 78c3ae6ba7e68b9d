use std::str::FromStr;

use did_trust_core::{
    compacted, create_destination, get_destination, lookup_recipient_keys, DIDDocument,
    DIDKeyReference, Destination, Error, KeyResolverAdapter, PublicKey, Service,
    SignatureRepresentation, VDRRegistry,
};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    env_logger::init();
}

const ED25519_KEY_TYPE: &str = "Ed25519VerificationKey2018";
const DID_COMMUNICATION: &str = "did-communication";

fn create_did_document() -> DIDDocument {
    let did = "did:test:abc";
    let public_key = PublicKey::new(
        "did:test:abc#keys-1",
        ED25519_KEY_TYPE,
        did,
        (0u8..32).collect(),
    );
    DIDDocument::new(
        did,
        vec![public_key],
        vec![Service {
            id: "did:test:abc#endpoint-1".to_string(),
            r#type: DID_COMMUNICATION.to_string(),
            service_endpoint: "http://localhost:58416".to_string(),
            priority: 0,
            recipient_key_v: vec!["did:test:abc#keys-1".to_string()],
            routing_key_v: Vec::new(),
        }],
    )
}

struct TestRegistry {
    did_document_o: Option<DIDDocument>,
}

impl VDRRegistry for TestRegistry {
    fn resolve(&self, did: &str) -> anyhow::Result<DIDDocument> {
        match self.did_document_o.as_ref() {
            Some(did_document) if did_document.id == did => Ok(did_document.clone()),
            Some(_) => anyhow::bail!("DID {:?} not found", did),
            None => anyhow::bail!("resolver error"),
        }
    }
}

#[test]
fn test_create_destination() {
    let did_document = create_did_document();
    let destination = create_destination(&did_document).expect("pass");
    println!(
        "destination:\n{}",
        serde_json::to_string_pretty(&destination).unwrap()
    );
    assert_eq!(destination.service_endpoint, "http://localhost:58416");
    assert_eq!(
        destination.recipient_key_v,
        vec![did_document.public_key_v[0].value_base58()]
    );
    assert!(destination.routing_key_v.is_empty());
}

#[test]
fn test_create_destination_preserves_key_order() {
    let mut did_document = create_did_document();
    did_document.public_key_v.push(PublicKey::new(
        "#keys-2",
        ED25519_KEY_TYPE,
        "did:test:abc",
        vec![7u8; 32],
    ));
    let service = &mut did_document.service_v[0];
    service.recipient_key_v = vec![
        "#keys-2".to_string(),
        "literalRecipientKey".to_string(),
        "did:test:abc#keys-1".to_string(),
        "did:test:abc#no-such-key".to_string(),
    ];
    service.routing_key_v = vec![
        "76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby".to_string(),
        "#keys-1".to_string(),
    ];

    let destination = Destination::create(&did_document).expect("pass");
    assert_eq!(
        destination.recipient_key_v,
        vec![
            did_document.public_key_v[1].value_base58(),
            "literalRecipientKey".to_string(),
            did_document.public_key_v[0].value_base58(),
        ]
    );
    assert_eq!(
        destination.routing_key_v,
        vec![
            "76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby".to_string(),
            did_document.public_key_v[0].value_base58(),
        ]
    );
}

#[test]
fn test_create_destination_uses_first_matching_service() {
    let mut did_document = create_did_document();
    let mut second_service = did_document.service_v[0].clone();
    second_service.id = "did:test:abc#endpoint-2".to_string();
    second_service.service_endpoint = "http://localhost:9999".to_string();
    did_document.service_v.push(second_service);
    did_document.service_v.insert(
        0,
        Service {
            id: "did:test:abc#other".to_string(),
            r#type: "other".to_string(),
            service_endpoint: "http://localhost:1".to_string(),
            priority: 0,
            recipient_key_v: vec!["did:test:abc#keys-1".to_string()],
            routing_key_v: Vec::new(),
        },
    );
    let destination = Destination::create(&did_document).expect("pass");
    assert_eq!(destination.service_endpoint, "http://localhost:58416");
}

#[test]
fn test_create_destination_failures() {
    // No services at all.
    let mut did_document = create_did_document();
    did_document.service_v.clear();
    let err = Destination::create(&did_document).expect_err("pass");
    assert!(matches!(err, Error::MissingService));
    assert!(err.to_string().contains("missing DID doc service"));

    // Services, but none of type did-communication.
    let mut did_document = create_did_document();
    for service in did_document.service_v.iter_mut() {
        service.r#type = "invalid".to_string();
    }
    let err = Destination::create(&did_document).expect_err("pass");
    assert!(matches!(err, Error::ServiceTypeNotFound(_)), "{:?}", err);

    // Empty endpoint.
    let mut did_document = create_did_document();
    for service in did_document.service_v.iter_mut() {
        service.service_endpoint.clear();
    }
    let err = Destination::create(&did_document).expect_err("pass");
    assert!(matches!(err, Error::MissingEndpoint(_)), "{:?}", err);

    // No recipient keys.
    let mut did_document = create_did_document();
    for service in did_document.service_v.iter_mut() {
        service.recipient_key_v.clear();
    }
    let err = Destination::create(&did_document).expect_err("pass");
    assert!(matches!(err, Error::NoRecipientKeys(_)), "{:?}", err);

    // Recipient keys present, but none resolvable.
    let mut did_document = create_did_document();
    did_document.service_v[0].recipient_key_v = vec!["#missing".to_string()];
    let err = Destination::create(&did_document).expect_err("pass");
    assert!(matches!(err, Error::NoRecipientKeys(_)), "{:?}", err);
}

#[test]
fn test_get_destination() {
    let did_document = create_did_document();
    let registry = TestRegistry {
        did_document_o: Some(did_document.clone()),
    };
    let destination = get_destination(did_document.id(), &registry).expect("pass");
    assert_eq!(destination, Destination::create(&did_document).expect("pass"));

    let registry = TestRegistry {
        did_document_o: None,
    };
    let err = get_destination(did_document.id(), &registry).expect_err("pass");
    assert!(matches!(err, Error::RegistryResolutionFailed(_)), "{:?}", err);
    assert!(err.to_string().contains("resolver error"));

    let mut did_document_without_services = did_document.clone();
    did_document_without_services.service_v.clear();
    let registry = TestRegistry {
        did_document_o: Some(did_document_without_services),
    };
    let err = get_destination(did_document.id(), &registry).expect_err("pass");
    assert!(err.to_string().contains("missing DID doc service"));
}

#[test]
fn test_lookup_recipient_keys() {
    let did_document = create_did_document();
    let recipient_key_v =
        lookup_recipient_keys(&did_document, DID_COMMUNICATION, ED25519_KEY_TYPE).expect("pass");
    assert_eq!(
        recipient_key_v,
        vec![did_document.public_key_v[0].value.as_slice()]
    );

    // Wrong key type, even though the key is referenced by the service.
    assert!(lookup_recipient_keys(&did_document, DID_COMMUNICATION, "X25519KeyAgreementKey2019")
        .is_none());
    // No service of the requested type.
    assert!(lookup_recipient_keys(&did_document, "other", ED25519_KEY_TYPE).is_none());

    let mut did_document = create_did_document();
    did_document.service_v[0].recipient_key_v.clear();
    assert!(lookup_recipient_keys(&did_document, DID_COMMUNICATION, ED25519_KEY_TYPE).is_none());
}

#[test]
fn test_did_key_reference() {
    let did_key_reference = DIDKeyReference::from_str("did:example:123#keys-1").expect("pass");
    assert_eq!(did_key_reference.owner(), "did:example:123");
    assert_eq!(did_key_reference.fragment(), "keys-1");
    assert_eq!(did_key_reference.relative_fragment(), "#keys-1");
    assert_eq!(did_key_reference.to_string(), "did:example:123#keys-1");

    for s in [
        "did:example:123",
        "did:example:123#keys-1#extra",
        "#keys-1",
        "did:example:123#",
        "",
    ] {
        let err = DIDKeyReference::from_str(s).expect_err("pass");
        assert!(matches!(err, Error::MalformedIdentifier(_)), "{:?}", err);
    }
}

#[test]
fn test_key_resolver_adapter() {
    let did_document = create_did_document();
    let fetcher = |owner: &str, key_fragment: &str| -> anyhow::Result<PublicKey> {
        assert_eq!(owner, "did:test:abc");
        assert_eq!(key_fragment, "#keys-1");
        Ok(did_document.public_key_v[0].clone())
    };
    let key_resolver_adapter = KeyResolverAdapter::new(&fetcher);
    let public_key = key_resolver_adapter
        .resolve("did:test:abc#keys-1")
        .expect("pass");
    assert_eq!(public_key, did_document.public_key_v[0]);

    for key_id in ["did:test:abc", "did:test:abc#keys-1#more"] {
        let err = key_resolver_adapter.resolve(key_id).expect_err("pass");
        assert!(matches!(err, Error::MalformedIdentifier(_)), "{:?}", err);
    }

    let failing_fetcher = |_: &str, _: &str| -> anyhow::Result<PublicKey> {
        anyhow::bail!("key store unavailable")
    };
    let err = KeyResolverAdapter::new(&failing_fetcher)
        .resolve("did:test:abc#keys-1")
        .expect_err("pass");
    assert!(matches!(err, Error::KeyResolutionFailed(_)), "{:?}", err);
    assert!(err.to_string().contains("key store unavailable"));
}

#[test]
fn test_did_document_wire_format() {
    let did_document_json = r#"{
        "@context": ["https://w3id.org/did/v1"],
        "id": "did:example:21tDAKCERh95uGgKbJNHYp",
        "publicKey": [
            {
                "id": "did:example:21tDAKCERh95uGgKbJNHYp#key-1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:example:21tDAKCERh95uGgKbJNHYp",
                "publicKeyBase58": "76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby"
            }
        ],
        "service": [
            {
                "id": "did:example:21tDAKCERh95uGgKbJNHYp#did-communication",
                "type": "did-communication",
                "serviceEndpoint": "https://localhost:8090",
                "priority": 0,
                "recipientKeys": ["did:example:21tDAKCERh95uGgKbJNHYp#key-1"],
                "routingKeys": ["76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby"]
            }
        ],
        "created": "2018-03-15T00:00:00Z"
    }"#;
    let did_document: DIDDocument = serde_json::from_str(did_document_json).expect("pass");
    did_document.verify().expect("pass");
    assert_eq!(did_document.public_key_v[0].value.len(), 32);
    assert_eq!(
        did_document.public_key_v[0].value_base58(),
        "76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby"
    );
    assert!(did_document.created_o().is_some());
    assert!(did_document.updated_o().is_none());

    let destination = Destination::create(&did_document).expect("pass");
    assert_eq!(destination.service_endpoint, "https://localhost:8090");
    assert_eq!(
        destination.routing_key_v,
        vec!["76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby".to_string()]
    );
    assert_eq!(
        destination.recipient_key_v,
        vec!["76HmFbj8sds7jjdnZ4hMVcQgtUYZpEN1HEmPnCrH2Bby".to_string()]
    );

    // Canonical serialization is stable under re-parsing.
    let canonical = did_document.serialize_canonically().expect("pass");
    let reparsed: DIDDocument = serde_json::from_str(&canonical).expect("pass");
    assert_eq!(reparsed, did_document);
    assert_eq!(reparsed.serialize_canonically().expect("pass"), canonical);
}

#[test]
fn test_did_document_verify() {
    let did_document = create_did_document();
    did_document.verify().expect("pass");

    let mut did_document_with_empty_id = create_did_document();
    did_document_with_empty_id.id.clear();
    assert!(matches!(
        did_document_with_empty_id.verify(),
        Err(Error::Malformed(_))
    ));

    let mut did_document_with_duplicate_key = create_did_document();
    let public_key = did_document_with_duplicate_key.public_key_v[0].clone();
    did_document_with_duplicate_key.public_key_v.push(public_key);
    assert!(matches!(
        did_document_with_duplicate_key.verify(),
        Err(Error::Malformed(_))
    ));

    let mut did_document_with_duplicate_service = create_did_document();
    let service = did_document_with_duplicate_service.service_v[0].clone();
    did_document_with_duplicate_service.service_v.push(service);
    assert!(matches!(
        did_document_with_duplicate_service.verify(),
        Err(Error::Malformed(_))
    ));
}

#[test]
fn test_public_key_for_reference() {
    let mut did_document = create_did_document();
    did_document.public_key_v.push(PublicKey::new(
        "#keys-2",
        ED25519_KEY_TYPE,
        "did:test:abc",
        vec![1u8; 32],
    ));
    let key_1 = &did_document.public_key_v[0];
    let key_2 = &did_document.public_key_v[1];
    assert_eq!(
        did_document.public_key_for_reference("did:test:abc#keys-1"),
        Some(key_1)
    );
    assert_eq!(did_document.public_key_for_reference("#keys-1"), Some(key_1));
    assert_eq!(did_document.public_key_for_reference("#keys-2"), Some(key_2));
    assert_eq!(
        did_document.public_key_for_reference("did:test:abc#keys-2"),
        Some(key_2)
    );
    assert_eq!(
        did_document.public_key_for_reference("did:test:other#keys-1"),
        None
    );
    assert_eq!(did_document.public_key_for_reference("keys-1"), None);
}

#[test]
fn test_compaction() {
    let object = serde_json::json!({
        "a": null,
        "b": ["only"],
        "c": [1, 2],
        "d": { "e": null, "f": [{ "g": [true] }] }
    });
    let compacted_object = compacted(object.as_object().unwrap());
    assert_eq!(
        serde_json::Value::Object(compacted_object),
        serde_json::json!({
            "b": "only",
            "c": [1, 2],
            "d": { "f": { "g": true } }
        })
    );
}

#[test]
fn test_signature_representation() {
    assert_eq!(
        SignatureRepresentation::from_str("proofValue").expect("pass"),
        SignatureRepresentation::ProofValue
    );
    assert_eq!(
        SignatureRepresentation::from_str("jws").expect("pass"),
        SignatureRepresentation::DetachedSignature
    );
    assert!(SignatureRepresentation::from_str("signatureValue").is_err());
    assert_eq!(SignatureRepresentation::DetachedSignature.to_string(), "jws");
    assert_eq!(
        serde_json::to_string(&SignatureRepresentation::ProofValue).unwrap(),
        "\"proofValue\""
    );
}

#[cfg(feature = "clap")]
#[test]
#[serial_test::serial]
fn test_linked_data_proof_args() {
    use clap::Parser;

    #[derive(clap::Parser)]
    struct TestCLI {
        #[command(flatten)]
        linked_data_proof_args: did_trust_core::LinkedDataProofArgs,
    }

    let test_cli = TestCLI::try_parse_from([
        "test",
        "--signature-representation",
        "jws",
        "--verification-method",
        "did:test:abc#keys-1",
        "--created",
        "2024-01-01T00:00:00Z",
    ])
    .expect("pass");
    let args = test_cli.linked_data_proof_args;
    assert_eq!(args.signature_type, "Ed25519Signature2018");
    assert_eq!(
        args.signature_representation,
        SignatureRepresentation::DetachedSignature
    );
    assert_eq!(
        args.verification_method.as_deref(),
        Some("did:test:abc#keys-1")
    );
    assert_eq!(
        args.created,
        Some(time::macros::datetime!(2024-01-01 00:00:00 UTC))
    );
}
