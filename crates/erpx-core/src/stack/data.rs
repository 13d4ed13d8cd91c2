use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TechChoice;

/// Persistence, caching, search, analytics, and messaging choices.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DataLayer {
    /// e.g. "PostgreSQL 16".
    pub primary_db: TechChoice,
    /// e.g. "Prisma", "SQLAlchemy".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orm: Option<TechChoice>,
    /// e.g. "Redis".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<TechChoice>,
    /// e.g. "OpenSearch", "Meilisearch".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<TechChoice>,
    /// e.g. "BigQuery", "DuckDB".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_dw: Option<TechChoice>,
    /// e.g. "RabbitMQ", "Kafka", "Pub/Sub".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging: Option<TechChoice>,
}

impl DataLayer {
    /// A data layer with only its primary database chosen.
    #[must_use]
    pub const fn with_primary(primary_db: TechChoice) -> Self {
        Self {
            primary_db,
            orm: None,
            cache: None,
            search: None,
            analytics_dw: None,
            messaging: None,
        }
    }
}

/// AI capabilities: inference providers, retrieval, and safety.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "AIModule")]
pub struct AiModule {
    /// e.g. "OpenAI", "Vertex AI", "Ollama". Must hold at least one entry.
    #[schemars(length(min = 1))]
    pub inference: Vec<TechChoice>,
    /// e.g. "pgvector", "Qdrant".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_db: Option<TechChoice>,
    /// Brief RAG pipeline steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_pipeline: Option<Vec<String>>,
    /// Safety policies or filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_layer_requires_primary_db() {
        let result: Result<DataLayer, _> =
            serde_json::from_str(r#"{"cache":{"name":"Redis","why":"sessions"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn with_primary_leaves_everything_else_absent() {
        let data = DataLayer::with_primary(TechChoice::new("PostgreSQL", "relational core"));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
