#[derive(Debug)]
pub enum ClientError {
    /// Rejected client-side before any request was made.
    Invalid(String),
    /// The backend answered and reported failure.
    Rejected(String),
    /// Network failure, timeout, or a response that is not valid JSON.
    Transport(String),
    /// The durable key-value store failed to read or write.
    Storage(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Invalid(msg) => write!(f, "Invalid Request: {msg}"),
            ClientError::Rejected(msg) => write!(f, "Rejected by Backend: {msg}"),
            ClientError::Transport(msg) => write!(f, "Transport Error: {msg}"),
            ClientError::Storage(msg) => write!(f, "Storage Error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
