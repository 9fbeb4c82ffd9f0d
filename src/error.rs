use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP error: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("Failed to load season{season}.json (status {status})")]
    Status { season: u32, status: u16 },

    #[error("Malformed season{season}.json: {source}")]
    Parse {
        season: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No episode id given")]
    MissingId,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SiteError {
    /// Message shown to visitors in place of content.
    pub fn user_message(&self) -> &'static str {
        match self {
            SiteError::MissingId | SiteError::NotFound(_) => "Епизодата не е пронајдена.",
            SiteError::Config(_) => "Страницата не е правилно конфигурирана.",
            _ => "Епизодите не можат да се вчитаат. Обидете се повторно подоцна.",
        }
    }
}
