use contracts::safe::data_sources::Connector;
use leptos::prelude::*;

/// What the detail cell shows for one connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorDetail {
    pub title: String,
    pub description: Option<String>,
    /// Passthrough fields, sorted by key
    pub fields: Vec<(String, String)>,
}

impl ConnectorDetail {
    pub fn from_connector(connector: &Connector) -> Self {
        let mut fields: Vec<(String, String)> = connector
            .extra
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            title: connector.name.clone(),
            description: connector.description.clone().filter(|d| !d.is_empty()),
            fields,
        }
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One table row: logo cell + detail cell.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSourceRowModel {
    pub logo_src: String,
    pub detail: ConnectorDetail,
}

pub fn build_rows(connectors: &[Connector]) -> Vec<DataSourceRowModel> {
    connectors
        .iter()
        .map(|c| DataSourceRowModel {
            logo_src: c.image.clone(),
            detail: ConnectorDetail::from_connector(c),
        })
        .collect()
}

/// Detail cell of a data source row.
#[component]
pub fn DataSourceRow(detail: ConnectorDetail) -> impl IntoView {
    let ConnectorDetail {
        title,
        description,
        fields,
    } = detail;

    view! {
        <div class="data-source-row">
            <div class="data-source-row__title">{title}</div>
            {description.map(|d| view! { <div class="data-source-row__description">{d}</div> })}
            <dl class="data-source-row__fields">
                {fields
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="data-source-row__field">
                                <dt>{key}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
