//! Gateway configuration loaded from environment variables.

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8081").
    pub bind_addr: String,

    /// Firestore project identifier.
    pub firestore_project: String,

    /// Firestore REST API root, without the `/projects/...` suffix.
    /// e.g., "https://firestore.googleapis.com/v1"
    pub firestore_base_url: String,

    /// Public origin of the human-facing site (used in canonical URLs).
    /// e.g., "https://my-maps-d00.pages.dev"
    pub site_url: String,

    /// Site name shown in OG tags and page titles.
    pub site_name: String,

    /// Image used when an entity has no photo of its own.
    pub default_image: String,

    /// Origin that receives every request the gateway does not answer itself.
    pub upstream_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `PREVIEW_BIND_ADDR`: Server bind address (default: "0.0.0.0:8081")
    /// - `FIRESTORE_PROJECT_ID`: Firestore project (default: "my-maps-app-9cf67")
    /// - `FIRESTORE_BASE_URL`: REST API root (default: "https://firestore.googleapis.com/v1")
    /// - `PREVIEW_SITE_URL`: Public site origin (default: "https://my-maps-d00.pages.dev")
    /// - `PREVIEW_SITE_NAME`: Site name (default: "MyMaps")
    /// - `PREVIEW_DEFAULT_IMAGE`: Fallback image (default: "{site_url}/og-image.png")
    /// - `PREVIEW_UPSTREAM_URL`: Pass-through origin (default: "http://127.0.0.1:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PREVIEW_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let firestore_project = std::env::var("FIRESTORE_PROJECT_ID")
            .unwrap_or_else(|_| "my-maps-app-9cf67".to_string());

        let firestore_base_url = std::env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| "https://firestore.googleapis.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_url = std::env::var("PREVIEW_SITE_URL")
            .unwrap_or_else(|_| "https://my-maps-d00.pages.dev".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("PREVIEW_SITE_NAME").unwrap_or_else(|_| "MyMaps".to_string());

        let default_image = std::env::var("PREVIEW_DEFAULT_IMAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("{site_url}/og-image.png"));

        let upstream_url = std::env::var("PREVIEW_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        if firestore_project.trim().is_empty() {
            anyhow::bail!("FIRESTORE_PROJECT_ID must not be empty");
        }

        tracing::info!(
            bind_addr = %bind_addr,
            firestore_project = %firestore_project,
            firestore_base_url = %firestore_base_url,
            site_url = %site_url,
            site_name = %site_name,
            upstream_url = %upstream_url,
            "gateway configuration loaded"
        );

        Ok(Self {
            bind_addr,
            firestore_project,
            firestore_base_url,
            site_url,
            site_name,
            default_image,
            upstream_url,
        })
    }

    /// Root URL of the document collection tree for the configured project.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.firestore_base_url, self.firestore_project
        )
    }
}
