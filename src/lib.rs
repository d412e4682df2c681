//! Pitchboard is the animation engine behind a football tactics board.
//!
//! Two components share one data format, the [`Frame`]:
//!
//! - **Keyframe animator**: sparse authored [`Pose`]s in, dense timestamped frames out
//!   ([`interpolate_segment`], [`chain_animation`]), plus a deterministic scripted drill
//!   ([`generate_scripted_scenario`]) used whenever a text-to-tactic model is unavailable.
//! - **Live recorder/player**: a [`LiveBoard`] samples a user-manipulated [`Scene`] at a fixed
//!   interval while recording and drives the scene frame by frame while playing. A
//!   [`BoardDriver`] owns the board and its single [`Ticker`].
//!
//! Recorded and generated animations are interchangeable: both can be stored through a
//! [`TacticStore`] and loaded back into a board.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: animator and scripted scenario are pure functions of their inputs.
//! - **Single owner**: all scene and frame-buffer mutation of a live board goes through one lock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod generate;
mod live;
mod model;
mod store;

pub use animation::keyframes::{chain_animation, chain_animation_at, interpolate_segment};
pub use animation::lerp::Lerp;
pub use animation::scenario::{
    Lane, ScenarioKeywords, ScenarioParams, ScenarioTags, ScriptedScenario,
    generate_scripted_scenario,
};
pub use config::BoardConfig;
pub use foundation::core::{BoardBounds, Point, SampleRate, TimestampMs, Vec2};
pub use foundation::error::{BoardError, BoardResult};
pub use generate::composer::{
    GeneratedTactic, GenerationSource, TacticComposer, TacticGenerator, TextModelGenerator,
};
pub use generate::parse::parse_generated_frames;
pub use live::board::{BoardState, LiveBoard, Progress, TickOutcome};
pub use live::clock::{Clock, ManualClock, MonotonicClock};
pub use live::driver::BoardDriver;
pub use live::scene::Scene;
pub use live::ticker::Ticker;
pub use model::frame::{Animation, Frame, animation_duration_ms, validate_animation};
pub use model::token::{Pose, Token, TokenKind};
pub use store::file::JsonFileTacticStore;
pub use store::memory::InMemoryTacticStore;
pub use store::presets::{preset_tactics, seed_presets};
pub use store::tactic::{NewTactic, Tactic, TacticId, TacticKind, TacticStore};
