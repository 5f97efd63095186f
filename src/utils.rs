use crate::completion::{ApiErrorResponse, CompletionApiResponse, OpenAiCompletionRequestBody};
use crate::config::Config;
use crate::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, INVALID_UTF8_MESSAGE, NO_COMPLETION_MESSAGE,
    NO_QUERY_MESSAGE,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::{error::Error, ffi::OsString, io::Write};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn build_client(config: &Config) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(client)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn collect_args<I>(args: I) -> Result<Vec<String>, Box<dyn Error>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.into_string().map_err(|_| -> Box<dyn Error> { INVALID_UTF8_MESSAGE.into() }))
        .collect()
}

/// Only a lone flag asks for help; inside a prompt it is just another word.
pub fn is_help_request(args: &[String]) -> bool {
    args.len() == 2 && matches!(args[1].as_str(), "-h" | "-help" | "--help")
}

/// Everything after the program name is the prompt, joined by spaces.
pub fn parse_query(args: &[String]) -> Result<String, Box<dyn Error>> {
    let query = args.get(1..).unwrap_or_default().join(" ");
    if query.trim().is_empty() {
        return Err(NO_QUERY_MESSAGE.into());
    }
    Ok(query)
}

pub fn build_completion_request(query: &str) -> OpenAiCompletionRequestBody {
    OpenAiCompletionRequestBody {
        model: DEFAULT_MODEL.to_string(),
        prompt: query.to_string(),
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

/// Returns the first choice's text, or `None` when the API sent no choices.
pub fn extract_completion(body: &str) -> Result<Option<String>, Box<dyn Error>> {
    let api_response: CompletionApiResponse = serde_json::from_str(body)?;
    debug!("Response carried {} choice(s)", api_response.choices.len());
    Ok(api_response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text))
}

pub fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(ApiErrorResponse { error }) => match error.kind {
            Some(kind) => format!(
                "Request failed with status {}: {} ({})",
                status, error.message, kind
            ),
            None => format!("Request failed with status {}: {}", status, error.message),
        },
        Err(_) if body.trim().is_empty() => format!("Request failed with status {}", status),
        Err(_) => format!("Request failed with status {}: {}", status, body.trim()),
    }
}

pub async fn make_completion_request(
    client: &Client,
    config: &Config,
    request_body: &OpenAiCompletionRequestBody,
) -> Result<Option<String>, Box<dyn Error>> {
    let headers = build_headers(&config.api_key)?;
    info!(
        "Requesting completion from {} (model {}, max_tokens {})",
        config.api_url, request_body.model, request_body.max_tokens
    );

    let spinner = create_spinner("green", "Processing request...".to_string());
    let sent = client
        .post(&config.api_url)
        .headers(headers)
        .json(request_body)
        .send()
        .await;
    spinner.finish_and_clear();
    let response = sent?;

    let status = response.status();
    debug!("Received status {}", status);
    let response_body = response.text().await?;

    if !status.is_success() {
        warn!("Completion request rejected with status {}", status);
        return Err(describe_api_error(status, &response_body).into());
    }

    extract_completion(&response_body)
}

pub async fn process_command<O, E>(
    client: &Client,
    config: &Config,
    query: &str,
    out: &mut O,
    err: &mut E,
) -> Result<(), Box<dyn Error>>
where
    O: Write,
    E: Write,
{
    let request_body = build_completion_request(query);

    match make_completion_request(client, config, &request_body).await? {
        Some(text) => writeln!(out, "{}", text)?,
        None => writeln!(err, "{}", NO_COMPLETION_MESSAGE)?,
    }
    Ok(())
}
