/// Prediction endpoint. Built into the binary: pointing the client at a
/// different deployment means rebuilding it.
pub const PREDICT_URL: &str = "http://107.21.91.140:8720/predict";

/// Shown when a submit is attempted with at least one blank field.
pub const MSG_INCOMPLETE: &str = "Please complete all fields.";

/// Shown for any transport-level failure, from refused connections to
/// bodies that are not JSON.
pub const MSG_NO_CONNECTION: &str = "Could not connect to the server.";

/// Stand-in detail when an error response carries no usable message.
pub const UNKNOWN_SERVER_ERROR: &str = "unknown error";
