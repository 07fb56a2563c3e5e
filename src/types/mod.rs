pub mod bar;
pub mod chart;
pub mod indicators;
pub mod signals;

pub use bar::*;
pub use chart::*;
pub use indicators::*;
pub use signals::*;
