use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Состояние загрузки сущности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchStatus {
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Loading => "LOADING",
            FetchStatus::Success => "SUCCESS",
            FetchStatus::Error => "ERROR",
        }
    }
}

impl FromStr for FetchStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOADING" => Ok(FetchStatus::Loading),
            "SUCCESS" => Ok(FetchStatus::Success),
            "ERROR" => Ok(FetchStatus::Error),
            other => anyhow::bail!("unknown fetch status: {}", other),
        }
    }
}

/// Safe-переменная: именованный внешний ресурс со ссылкой.
///
/// Создаётся слоем API/хранилища и передаётся в карточку неизменяемой;
/// закрепление и удаление выполняет владелец коллекции.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVariable {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    pub fetch_status: FetchStatus,
}

impl UserVariable {
    /// Заглушка в состоянии загрузки: известен только URL.
    pub fn loading(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            id: url.clone(),
            name: String::new(),
            description: String::new(),
            url,
            image_url: String::new(),
            fetch_status: FetchStatus::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_status == FetchStatus::Loading
    }
}

/// Ответ `GET /api/safe/variables`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVariablesResponse {
    #[serde(default)]
    pub variables: Vec<UserVariable>,
    /// Добавленные пользователем, могут быть удалены
    #[serde(default)]
    pub custom_variables: Vec<UserVariable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_parse() {
        assert_eq!("LOADING".parse::<FetchStatus>().unwrap(), FetchStatus::Loading);
        assert_eq!("SUCCESS".parse::<FetchStatus>().unwrap(), FetchStatus::Success);
        assert!("loading".parse::<FetchStatus>().is_err());
        assert_eq!(FetchStatus::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_user_variable_camel_case() {
        let json = r#"{
            "name": "Gas price",
            "description": "Current gas price",
            "url": "https://vars.example/gas",
            "imageUrl": "https://vars.example/gas.svg",
            "fetchStatus": "SUCCESS"
        }"#;
        let v: UserVariable = serde_json::from_str(json).unwrap();
        assert_eq!(v.image_url, "https://vars.example/gas.svg");
        assert_eq!(v.fetch_status, FetchStatus::Success);
        assert!(!v.is_loading());
        assert_eq!(v.id, "");
    }

    #[test]
    fn test_loading_placeholder() {
        let v = UserVariable::loading("https://vars.example/x");
        assert!(v.is_loading());
        assert_eq!(v.id, v.url);
    }
}
