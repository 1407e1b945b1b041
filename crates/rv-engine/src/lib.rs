//! # rv-engine - Constrained Random Value Engine
//!
//! Generates random values under constraints and resolves wheel-of-fortune
//! spins. Every draw goes through a [`UniformSource`], so seeding the source
//! makes all output reproducible.
//!
//! ## Features
//!
//! - **Numbers**: distinct integers with exclusions, rounded floats
//! - **Strings**: named character patterns with character exclusions
//! - **Colors**: hex, `rgb(...)` and `hsl(...)` output with exact truncation
//! - **Templates**: `{d}{l}{u}{a}{x}{s}{w}` placeholder expansion
//! - **Lists**: selection with or without repeats
//! - **Wheel**: decaying spin state machine with angle→slice resolution
//!
//! ## Architecture
//!
//! ```text
//! RandomGenerator
//!     │
//!     ├── UniformSource (ChaCha8 / scripted)
//!     ├── EngineConfig (domain limit, WheelConfig)
//!     │
//!     ├── GenerationRequest ──▶ GenerationOutput
//!     └── WheelState: reset → spin → tick… → Resolved
//! ```

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod list;
pub mod numeric;
pub mod request;
pub mod source;
pub mod template;
pub mod wheel;

pub use charset::{CharsetDomain, CharsetPattern, generate_strings};
pub use color::{ColorFormat, Hsl, Rgb, generate_colors, hsl_to_rgb, rgb_to_hsl};
pub use config::{EngineConfig, WheelConfig};
pub use error::{GenError, GenResult};
pub use generator::RandomGenerator;
pub use list::select_from_list;
pub use numeric::{round_to_decimals, sample_floats, sample_integers};
pub use request::{GenerationOutput, GenerationRequest};
pub use source::{FixedSource, RngSource, UniformSource};
pub use template::{TemplateExpander, TokenKind, expand_template, template_tokens};
pub use wheel::{
    TickOutcome, WheelPhase, WheelState, slice_width, winning_index, winning_index_geometric,
};
