//! Meme render planning.
//!
//! # Data Flow
//! ```text
//! melody tracks + clip lengths (config)
//!     → melody.rs (notes, reference pitch)
//!     → plan.rs (filter, shift, stretch, order)
//!     → RenderPlan shown by the Result page
//! ```
//!
//! # Design Decisions
//! - Planning only: no audio or video is decoded or written
//! - Pure function of its inputs; built once at startup

pub mod melody;
pub mod plan;

pub use melody::{Note, Track};
pub use plan::{build_plan, ClipInfo, Origin, PlanError, RenderPlan, Segment, DEFAULT_MIN_PITCH};
