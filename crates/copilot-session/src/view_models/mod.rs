pub mod screen;

pub use screen::{screen_for, Screen, ScreenViewModel};
