use crate::layout::global_context::AppGlobalContext;
use crate::layout::MAIN_CONTENT_ID;
use crate::routes::routes::AppRoutes;
use crate::routes::{Router, ViewContext};
use crate::shared::charts::ChartJs;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::data::{DataService, GlooFetch};
use crate::shared::dom::{BrowserLocation, BrowserOutlet, BrowserStorage};
use crate::shared::state::Store;
use crate::shared::tasks::BrowserSpawner;
use crate::shared::theme::{ThemeManager, ThemeProvider};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Long-lived services built once at startup.
pub struct AppServices {
    pub config: AppConfig,
    pub store: Store,
    pub data: Rc<DataService>,
    pub router: Router<BrowserLocation>,
    pub theme: Rc<ThemeManager>,
}

impl AppServices {
    pub fn browser(config: AppConfig) -> Self {
        let store = Store::new();
        let data = Rc::new(DataService::new(Rc::new(GlooFetch), config.data.clone()));
        let context = ViewContext {
            outlet: Rc::new(BrowserOutlet::new(MAIN_CONTENT_ID)),
            charts: Rc::new(ChartJs),
            data: data.clone(),
            store: store.clone(),
            spawner: Rc::new(BrowserSpawner),
        };
        let router = Router::new(BrowserLocation, context)
            .with_default_route(config.ui.default_route.clone());
        let theme = Rc::new(ThemeManager::browser(Rc::new(BrowserStorage), store.clone()));

        Self {
            config,
            store,
            data,
            router,
            theme,
        }
    }
}

fn listen_hash_changes(ctx: AppGlobalContext) {
    let Some(window) = web_sys::window() else {
        log::error!("no window; routing disabled");
        return;
    };
    let on_hash_change = Closure::<dyn Fn()>::new(move || {
        ctx.sync_route();
    });
    if let Err(err) = window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
    {
        log::error!("could not listen for hash changes: {:?}", err);
    }
    // The listener lives as long as the page.
    on_hash_change.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!(
        "starting dashboard (default route {}, preload {})",
        config.ui.default_route,
        config.data.preload
    );

    let services = Rc::new(AppServices::browser(config));
    let theme = StoredValue::new_local(services.theme.clone());

    let ctx = AppGlobalContext::new(services);
    provide_context(ctx);
    listen_hash_changes(ctx);

    // Runs once the shell, and with it the outlet element, is mounted.
    Effect::new(move |_| ctx.start());

    view! {
        <ThemeProvider manager=theme>
            <AppRoutes />
        </ThemeProvider>
    }
}
