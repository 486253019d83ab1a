use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static GOOGLE_API_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AIza[0-9A-Za-z_\-]{20,}").expect("valid regex"));
static KEY_QUERY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&](?:key|access_token)=)[^&#\s]+").expect("valid regex"));
static BEARER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("valid regex"));

/// Redacts credentials from text headed for logs or error messages.
///
/// Request URLs carry the API key as a query parameter, so any URL that
/// is logged goes through [`scrub`](SecretScrubber::scrub) first.
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let scrubbed = KEY_QUERY_PARAM.replace_all(message, "${1}[REDACTED]");
        let scrubbed = GOOGLE_API_KEY.replace_all(&scrubbed, "[API_KEY_REDACTED]");
        BEARER
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
