/// Credential store keys. Names are shared with the backend-issued mobile
/// client so an existing session survives the migration.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
pub const STORAGE_KEY_ROLE: &str = "uRole";
pub const STORAGE_KEY_USER_ID: &str = "uid";
pub const STORAGE_KEY_DEVICE_ID: &str = "deviceId";

/// Keys that make up a session; removed together
pub const SESSION_KEYS: [&str; 3] = [STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_ROLE, STORAGE_KEY_USER_ID];

/// Sort order sent to the list endpoint
pub const LIST_ORDER: &str = "asc";

/// Fallback text for a non-2xx response without a `message` field
pub const DEFAULT_REQUEST_ERROR: &str = "Request failed";

pub const NOT_SPECIFIED: &str = "Not specified";
