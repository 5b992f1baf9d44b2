//! TopHeader component - application top bar.
//!
//! Contains the mobile navigation toggle, the breadcrumb of the active page
//! and the theme toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_theme();

    // The breadcrumb lives in the store; mirror it into the context signal.
    let store = ctx.services().store.clone();
    if let Some(label) = store.get_as::<String>("ui.breadcrumb") {
        ctx.breadcrumb.set(label);
    }
    let breadcrumb = ctx.breadcrumb;
    let subscription = store.subscribe(move |state: &Value| {
        if let Some(label) = state.pointer("/ui/breadcrumb").and_then(Value::as_str) {
            if breadcrumb.get_untracked() != label {
                breadcrumb.set(label.to_string());
            }
        }
        Ok(())
    });
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        if let Some(subscription) = subscription.try_update_value(Option::take).flatten() {
            subscription.unsubscribe();
        }
    });

    let toggle_sidebar = move |_| ctx.toggle_sidebar();
    let toggle_theme = move |_| theme.toggle();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-toggle"
                    class:active=move || ctx.sidebar_open.get()
                    on:click=toggle_sidebar
                    title=move || if ctx.sidebar_open.get() { "Fechar menu" } else { "Abrir menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__breadcrumb">{move || ctx.breadcrumb.get()}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_theme
                    title=move || theme.theme.get().toggle_title()
                >
                    {move || icon(theme.theme.get().toggle_icon())}
                </button>
            </div>
        </header>
    }
}
