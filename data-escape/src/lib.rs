mod modes;
mod transcode;

pub use modes::DisplayModes;
pub use transcode::transcode;
