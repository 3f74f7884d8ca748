//! Story page: controller tying fetch, render, and user actions together.
mod controller;
mod event;
mod surface;

pub use controller::{PageController, PageError, ViewState};
pub use event::PageEvent;
pub use surface::Surface;
