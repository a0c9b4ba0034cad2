mod error;
pub mod geodetic;
mod parsing;
mod propagator;
mod sample;
mod stats;
mod track;

pub use error::OrbitError;
pub use parsing::parse_tle_lines;
pub use propagator::Propagator;
pub use sample::GeodeticSample;
pub use stats::OrbitalStats;
pub use track::{build_track_set, TrackPoint, TrackSet};
