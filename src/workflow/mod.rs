//! Workflow module
//!
//! This module contains components for orchestrating the planning steps.

mod context;
mod engine;

pub use context::{PlannedRender, RenderStats, WorkflowContext};
pub use engine::{plan_from_arguments, plan_renders, PlanningOptions};
