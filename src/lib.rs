pub mod config;
pub mod console;
pub mod logging;
pub mod scalar;
pub mod size;
pub mod vec;

pub use console::Console;
pub use scalar::{Real, Scalar, SignedScalar};
pub use size::Size;
pub use vec::{Vector2, Vector2d, Vector2f, Vector2i, Vector2i64, Vector2u, Vector2u64};
