use thiserror::Error;

/// Errors the browse client can hit while fetching the catalog
#[derive(Error, Debug)]
pub enum ClientError {
    /// The item service could not be reached at all
    #[error("failed to reach item service: {0}")]
    Network(String),

    /// The item service answered with an error status
    #[error("item service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The item service answered 200 but the body was not a valid item list
    #[error("malformed response from item service: {0}")]
    Decode(String),
}

impl ClientError {
    /// The message a browsing session shows for this failure.
    ///
    /// Transport and decode problems collapse into one generic message;
    /// a service-reported error surfaces its own message.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Service { message, .. } => message.clone(),
            ClientError::Network(_) | ClientError::Decode(_) => {
                "Failed to fetch items".to_string()
            }
        }
    }
}
