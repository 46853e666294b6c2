use contracts::safe::data_sources::{Connector, DataSourcesResponse};
use leptos::prelude::*;

/// View-local state of the data sources table.
#[derive(Clone, Debug, Default)]
pub struct DataSourcesState {
    pub items: Vec<Connector>,
    pub is_loaded: bool,
}

impl DataSourcesState {
    /// Success replaces the list; failure is logged and keeps what is shown.
    pub fn apply_fetch(&mut self, result: Result<DataSourcesResponse, String>) {
        match result {
            Ok(resp) => self.items = resp.connectors,
            Err(e) => log::error!("Failed to load data sources: {}", e),
        }
        self.is_loaded = true;
    }

    pub fn has_rows(&self) -> bool {
        !self.items.is_empty()
    }
}

pub fn create_state() -> RwSignal<DataSourcesState> {
    RwSignal::new(DataSourcesState::default())
}
