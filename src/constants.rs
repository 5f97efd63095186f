pub const COMPLETIONS_API_URL: &str = "https://api.openai.com/v1/completions";
pub const DEFAULT_MODEL: &str = "text-davinci-002";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_URL: &str = "OPENAI_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";

pub const NO_QUERY_MESSAGE: &str = "No query was provided.";
pub const INVALID_UTF8_MESSAGE: &str = "The query is not valid UTF-8.";
pub const NO_COMPLETION_MESSAGE: &str = "No completion returned.";
