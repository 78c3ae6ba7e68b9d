use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Registry resolution failed: {0}")]
    RegistryResolutionFailed(Cow<'static, str>),
    #[error("missing DID doc service")]
    MissingService,
    #[error("Service type not found: {0}")]
    ServiceTypeNotFound(Cow<'static, str>),
    #[error("Missing service endpoint: {0}")]
    MissingEndpoint(Cow<'static, str>),
    #[error("No recipient keys: {0}")]
    NoRecipientKeys(Cow<'static, str>),
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(Cow<'static, str>),
    #[error("Signing failed: {0}")]
    SigningFailed(Cow<'static, str>),
    #[error("Verification failed: {0}")]
    VerificationFailed(Cow<'static, str>),
    #[error("Malformed document: {0}")]
    MalformedDocument(Cow<'static, str>),
    #[error("Key resolution failed: {0}")]
    KeyResolutionFailed(Cow<'static, str>),
    #[error("Malformed: {0}")]
    Malformed(Cow<'static, str>),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedDocument(e.to_string().into())
    }
}
