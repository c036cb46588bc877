use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The environment variable named by `token_env` is unset or blank.
    ///
    /// Connecting with an empty token must fail immediately rather than
    /// retrying silently, so this is raised before the client is built.
    #[error("Missing bot token: environment variable {0} is not set")]
    MissingToken(String),

    /// Discord rejected the token at connect time.
    ///
    /// Boxed due to large size. Carries whatever diagnostic Serenity reported.
    #[error("Discord rejected the bot token: {0}")]
    Rejected(#[source] Box<serenity::Error>),
}

/// Checks whether a Serenity error indicates the token was refused.
///
/// Covers both the gateway close code for invalid authentication and a 401
/// returned by the REST call made while starting shards.
pub fn is_authentication_failure(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Gateway(serenity::gateway::GatewayError::InvalidAuthentication) => true,
        serenity::Error::Http(http_err) => {
            http_err.status_code().map(|status| status.as_u16()) == Some(401)
        }
        _ => false,
    }
}
