use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub scaler_path: String,
    pub model_path: String,
    /// Browser origins allowed by CORS; `None` means permissive.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            scaler_path: std::env::var("SCALER_PATH")
                .unwrap_or_else(|_| "models/scaler.json".to_string()),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/model.json".to_string()),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                }),
        };

        if config.scaler_path.trim().is_empty() {
            anyhow::bail!("SCALER_PATH cannot be empty");
        }
        if config.model_path.trim().is_empty() {
            anyhow::bail!("MODEL_PATH cannot be empty");
        }

        // Log successful configuration load
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Scaler artifact: {}", config.scaler_path);
        tracing::debug!("Model artifact: {}", config.model_path);
        if let Some(ref origins) = config.cors_allowed_origins {
            tracing::info!("CORS restricted to {} origin(s)", origins.len());
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
