use crate::layout::Shell;
use leptos::prelude::*;

/// Every page is mounted by the hash router into the shell's outlet, so the
/// component tree is only the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <Shell /> }
}
