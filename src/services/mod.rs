pub mod signals;

pub use signals::{IndicatorEngine, SignalService, SignalState};
