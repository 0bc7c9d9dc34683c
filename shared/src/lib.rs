mod backdrop;
pub use backdrop::*;

mod color;
pub use color::*;

mod field;
pub use field::*;

mod frame;
pub use frame::*;

mod particle;
pub use particle::*;

mod pool;
pub use pool::*;

pub mod random;

mod records;
pub use records::*;

mod ripple;
pub use ripple::*;

mod settings;
pub use settings::*;

mod surface;
pub use surface::*;

mod viewport;
pub use viewport::*;
