//! Component previews: every card state and size on one page.

use contracts::safe::user_variable::{FetchStatus, UserVariable};
use leptos::prelude::*;

use crate::safe::variables::ui::card::UserVariableCard;
use crate::safe::{CardSize, SafeSession};
use crate::shared::components::breadcrumb::BreadcrumbHeader;
use crate::shared::config::AppConfig;
use crate::shared::notifications::NotificationService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DEV;

fn sample_variable(id: &str, status: FetchStatus) -> UserVariable {
    UserVariable {
        id: id.to_string(),
        name: format!("Preview {}", id),
        description: "Sample safe variable used to check card layout in both sizes.".to_string(),
        url: format!("https://vars.example/{}", id),
        image_url: format!("https://vars.example/{}/logo.svg", id),
        fetch_status: status,
    }
}

#[component]
pub fn ComponentPreviews() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let notifications = expect_context::<NotificationService>();
    let session = SafeSession {
        short_name: config.chain.short_name.clone(),
        safe_address: "0x0000000000000000000000000000000000000000".to_string(),
        chain_id: config.chain.chain_id.clone(),
    };
    let fallback = config.assets.fallback_logo.clone();

    let pinned = RwSignal::new(false);
    let toggle_pin = Callback::new(move |v: UserVariable| {
        log::info!("preview: toggle pin {}", v.name);
        pinned.update(|p| *p = !*p);
    });
    let on_remove = Callback::new(|v: UserVariable| log::info!("preview: remove {}", v.name));

    let cases = [
        ("Loading md", sample_variable("loading-md", FetchStatus::Loading), CardSize::Md, false),
        ("Loading lg", sample_variable("loading-lg", FetchStatus::Loading), CardSize::Lg, false),
        ("Ready md", sample_variable("ready-md", FetchStatus::Success), CardSize::Md, false),
        ("Ready lg", sample_variable("ready-lg", FetchStatus::Success), CardSize::Lg, false),
        ("Custom md", sample_variable("custom-md", FetchStatus::Success), CardSize::Md, true),
    ];

    view! {
        <PageFrame page_id="dev_previews--dev" category=PAGE_CAT_DEV>
            <BreadcrumbHeader text="Data Sources" icon_name="arrow-down" />
            <div class="page__content previews">
                {cases
                    .into_iter()
                    .map(|(title, variable, size, is_custom)| {
                        view! {
                            <section class="previews__case">
                                <h3 class="previews__title">{title}</h3>
                                <div class="variables__grid">
                                    <UserVariableCard
                                        variable=variable
                                        size=size
                                        session=session.clone()
                                        toggle_pin=toggle_pin
                                        is_pinned=Signal::derive(move || pinned.get())
                                        is_custom=is_custom
                                        on_remove=on_remove
                                        notifications=notifications
                                        fallback_logo=fallback.clone()
                                    />
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
