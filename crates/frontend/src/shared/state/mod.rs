mod store;

pub use store::{Listener, ListenerError, Store, Subscription};
