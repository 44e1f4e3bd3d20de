use reqwest::Url;

pub const DEFAULT_DIRECTORY_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DIRECTORY_ENDPOINT_VAR: &str = "DIRECTORY_API_URL";

/// URL the dashboard loads employee records from.
pub fn directory_endpoint() -> String {
    resolve_endpoint(endpoint_override().as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
fn endpoint_override() -> Option<String> {
    std::env::var(DIRECTORY_ENDPOINT_VAR).ok()
}

// No process environment in the browser, so the override is baked in at build time.
#[cfg(target_arch = "wasm32")]
fn endpoint_override() -> Option<String> {
    option_env!("DIRECTORY_API_URL").map(str::to_string)
}

pub fn resolve_endpoint(candidate: Option<&str>) -> String {
    let Some(raw) = candidate.map(str::trim).filter(|raw| !raw.is_empty()) else {
        log::debug!("{} not set, using {}", DIRECTORY_ENDPOINT_VAR, DEFAULT_DIRECTORY_ENDPOINT);
        return DEFAULT_DIRECTORY_ENDPOINT.to_string();
    };

    match validate_endpoint(raw) {
        Ok(url) => {
            log::info!("Using directory endpoint: {}", url);
            url.to_string()
        }
        Err(reason) => {
            log::warn!(
                "Ignoring {}={:?} ({}), falling back to {}",
                DIRECTORY_ENDPOINT_VAR,
                raw,
                reason,
                DEFAULT_DIRECTORY_ENDPOINT
            );
            DEFAULT_DIRECTORY_ENDPOINT.to_string()
        }
    }
}

fn validate_endpoint(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme `{}`", other)),
    }
}
