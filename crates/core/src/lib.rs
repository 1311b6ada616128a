//! Core library for the linear search visualiser.
//!
//! The crate turns an `(array, target)` pair into a replayable trace of
//! [`Step`]s and drives that trace through a [`PlaybackController`]. Nothing
//! in here renders anything: presentation layers read the derived
//! [`PlaybackView`] and forward user actions to the controller.
//!
//! Timers are abstracted behind [`Scheduler`], so playback can be driven by a
//! real event loop or by a [`ManualClock`] in tests.

pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod random;
pub mod registry;
pub mod search;
pub mod step;
pub mod timeline;
pub mod view;

pub use config::{AppConfig, InitialData, InputConfig, PlaybackConfig};
pub use error::{Result, VisualiserError};
pub use input::{parse_array, parse_target};
pub use playback::{PlaybackController, PlaybackPhase, PlaybackState, DEFAULT_SPEED_MS};
pub use random::{random_array, random_target};
pub use registry::{
    AlgorithmCategory, AlgorithmDefinition, AlgorithmRegistry, ArrayData, Complexity,
    VisualizerKind, LINEAR_SEARCH,
};
pub use search::{found_index, generate, generate_optional, LinearSearch, StepGenerator};
pub use step::{statuses_at, ElementStatus, Step, Value};
pub use timeline::{ManualClock, Scheduler, TimerId};
pub use view::{ControlAvailability, PlaybackView, SearchOutcome, ViewSource};
