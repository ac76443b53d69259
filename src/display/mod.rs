pub mod playback;
mod render;

pub use playback::{
    CancelHandle, CancelToken, Playback, PlaybackDelays, PlaybackOutcome, cancellation,
};
pub use render::{Rgb, render, render_plain, strategy_color};
