mod logging;
pub use logging::*;

mod rect;
pub use rect::*;

mod vec2;
pub use vec2::*;
