use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub watch: WatchConfig,
    pub journal: JournalConfig,
    pub annotation: AnnotationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Root directory this process owns and organizes.
    pub root: String,
    /// Glob patterns for paths the walker must leave alone.
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Journal filename, resolved relative to the watched root.
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// "openai" (needs OPENAI_API_KEY), "noop", or "none".
    pub provider: String,
    pub model: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            root: "downloads".to_string(),
            exclude: Vec::new(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            file: "organization_summary.json".to_string(),
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            provider: "none".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
