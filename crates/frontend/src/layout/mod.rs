pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// Element the router installs page markup into.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |        main-content          |
/// +------------------------------------------+
/// ```
///
/// `main-content` has no Leptos children: views write into it through the
/// outlet.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                // Covers the content while the mobile drawer is open.
                <div
                    id="backdrop"
                    class="app-backdrop"
                    class:active=move || ctx.sidebar_open.get()
                    on:click=move |_| ctx.close_sidebar()
                ></div>
                <main id=MAIN_CONTENT_ID class="app-main"></main>
            </div>
        </div>
    }
}
