use serde::{Deserialize, Serialize};

/// Внешний источник данных (коннектор), как его отдаёт API.
///
/// Кроме логотипа и названия компонент ничего не интерпретирует: остальные
/// поля приходят в `extra` и выводятся строкой деталей как есть.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URL логотипа
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Ответ `GET /api/safe/data-sources`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSourcesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub connectors: Vec<Connector>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Connector>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Connector>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectors_keep_api_order_and_passthrough_fields() {
        let json = r#"{
            "connectors": [
                {"name": "Kafka", "image": "https://cdn/kafka.svg", "topic": "blocks"},
                {"name": "Postgres", "image": "https://cdn/pg.svg", "description": "OLTP"}
            ]
        }"#;
        let resp: DataSourcesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.connectors.len(), 2);
        assert_eq!(resp.connectors[0].name, "Kafka");
        assert_eq!(resp.connectors[0].extra["topic"], "blocks");
        assert_eq!(resp.connectors[1].description.as_deref(), Some("OLTP"));
        assert!(resp.connectors[1].extra.is_empty());
    }

    #[test]
    fn test_missing_or_null_connectors_is_empty() {
        let resp: DataSourcesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.connectors.is_empty());
        let resp: DataSourcesResponse = serde_json::from_str(r#"{"connectors": null}"#).unwrap();
        assert!(resp.connectors.is_empty());
    }

    #[test]
    fn test_connector_without_image() {
        let c: Connector = serde_json::from_str(r#"{"name": "S3"}"#).unwrap();
        assert_eq!(c.image, "");
    }
}
