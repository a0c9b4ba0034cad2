mod position;
mod sampler;
mod source;

pub use position::PositionPoller;
pub use sampler::TrackSampler;
pub use source::{PositionSource, RemoteClient, SourceError};
