//! Sidebar navigation over the route table.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::ROUTES;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav
            class="app-sidebar"
            class:app-sidebar--open=move || ctx.sidebar_open.get()
        >
            <div class="app-sidebar__brand">"Retenção & Segmentação"</div>
            <div class="app-sidebar__content">
                {ROUTES
                    .into_iter()
                    .map(|route| {
                        let path = route.path;
                        view! {
                            <a
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active_route.get() == path
                                href=format!("#{}", path)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(path);
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(route.icon)}
                                    <span>{route.label}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
