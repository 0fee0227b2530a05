pub mod auth;
pub mod json;
pub mod path;
pub mod response;

pub use auth::{require_policy, AuthGate};
pub use json::ValidJson;
pub use path::ValidPath;
pub use response::{ApiResponse, ApiResult};
