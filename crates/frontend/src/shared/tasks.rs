use futures::future::LocalBoxFuture;

/// Runs futures on the UI thread.
pub trait Spawn {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);
}

/// Browser spawner backed by the Leptos task queue.
#[derive(Clone, Copy, Default)]
pub struct BrowserSpawner;

impl Spawn for BrowserSpawner {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(future);
    }
}
