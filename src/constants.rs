//! Common constants used throughout the stencil application.

/// Remote repository the project template is fetched from
pub const TEMPLATE_REPO: &str = "https://github.com/talentseer/backend-service-template.git";

/// Environment variables required by the generated project, in `.env` order.
/// The first three are credential placeholders written with empty values.
pub const REQUIRED_ENV_VARS: [&str; 6] = [
    "DB_CONNECTION_STRING",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "DOMAIN",
    "BASE_PATH",
    "RUNTIME",
];

/// Command the pre-push hook uses to register variables with the CI provider
pub const DEFAULT_CI_COMMAND: &str = "travis env set";

/// Upper bound on the template clone before the transfer is aborted
pub const FETCH_TIMEOUT_SECS: u64 = 120;
