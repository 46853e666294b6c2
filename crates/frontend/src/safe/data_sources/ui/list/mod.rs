mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::columns::{DataSourceColumn, COLUMNS};
use super::logo::{connector_logo_px, ConnectorLogo};
use super::row::{build_rows, DataSourceRow};
use crate::safe::data_sources::api;
use crate::safe::CardSize;
use crate::shared::components::breadcrumb::BreadcrumbHeader;
use state::create_state;

pub use state::DataSourcesState;

const TABLE_ID: &str = "safe-data-sources-table";

/// Table of connectors. Loads once when mounted.
///
/// A failed load is only logged; the table stays hidden until there is at
/// least one connector, the breadcrumb is always shown.
#[component]
pub fn DataSourcesTable(
    /// Backend port from `AppConfig`
    api_port: u16,
    /// Placeholder for logos that fail to load
    #[prop(into)]
    fallback_logo: String,
    #[prop(optional)]
    logo_size: CardSize,
) -> impl IntoView {
    let state = create_state();
    let fallback_logo = StoredValue::new(fallback_logo);

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        spawn_local(async move {
            let result = api::fetch_data_sources(api_port).await;
            // the table may be gone by now
            if state.try_update(|s| s.apply_fetch(result)).is_none() {
                log::debug!("Data sources response arrived after unmount, dropped");
            }
        });
    });

    let logo_px = connector_logo_px(logo_size);
    let rows = Memo::new(move |_| state.with(|s| build_rows(&s.items)));

    view! {
        <BreadcrumbHeader text="Data Sources" icon_name="arrow-down" />
        <div class="data-sources">
            <div class="table-wrapper" style="margin-top: 20px;">
                <Show when=move || state.with(|s| s.has_rows())>
                    <Table attr:id=TABLE_ID attr:aria-label="Data Sources" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {COLUMNS
                                    .iter()
                                    .map(|column| {
                                        view! {
                                            <TableHeaderCell attr:style=column.header_style(logo_px)>
                                                {column.label()}
                                            </TableHeaderCell>
                                        }
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let cells = COLUMNS
                                            .iter()
                                            .map(|column| {
                                                let content = match column {
                                                    DataSourceColumn::Logo => view! {
                                                        <ConnectorLogo
                                                            src=row.logo_src.clone()
                                                            fallback=fallback_logo.get_value()
                                                            size=logo_size
                                                        />
                                                    }
                                                    .into_any(),
                                                    DataSourceColumn::Detail => {
                                                        view! { <DataSourceRow detail=row.detail.clone() /> }
                                                            .into_any()
                                                    }
                                                };
                                                view! {
                                                    <TableCell class="data-sources__cell">{content}</TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! { <TableRow attr:tabindex="-1">{cells}</TableRow> }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </div>
    }
}
