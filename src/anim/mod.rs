mod interpolator;
mod spin;

pub use interpolator::{AngularDelta, InterpolatorConfig, Phase, PhaseBands, PositionalInterpolator};
pub use spin::Spin;
