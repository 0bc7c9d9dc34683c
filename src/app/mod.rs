mod app;
mod settings;

pub use app::*;
pub use settings::*;
