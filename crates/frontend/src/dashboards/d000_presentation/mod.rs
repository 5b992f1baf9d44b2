pub mod ui;

pub use ui::dashboard::PresentationView;
