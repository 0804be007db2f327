//! Workflow context
//!
//! This module contains the context and statistics carried through a
//! planning run.

use std::path::PathBuf;

use crate::options::RenderOptions;
use crate::resolver::ResolutionRequest;

/// A single planned conversion
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRender {
    /// The absolute path of the source file
    pub source: PathBuf,
    /// The path the conversion would be written to
    pub target: PathBuf,
}

/// Statistics collected while planning
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Number of source files resolved
    pub files_resolved: usize,
    /// Number of conversions planned
    pub renders_planned: usize,
}

/// Context carried through a planning run
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The resolution request being planned
    pub request: ResolutionRequest,
    /// The render options applied to every planned conversion
    pub options: RenderOptions,
    /// Whether the run is a dry run
    pub dry_run: bool,
    /// The planned conversions, in resolution order
    pub planned: Vec<PlannedRender>,
    /// Counters for the summary block
    pub stats: RenderStats,
}

impl WorkflowContext {
    /// Creates a fresh context for a planning run
    pub fn new(request: ResolutionRequest, options: RenderOptions, dry_run: bool) -> Self {
        WorkflowContext {
            request,
            options,
            dry_run,
            planned: Vec::new(),
            stats: RenderStats::default(),
        }
    }

    /// Increments the resolved file counter
    pub fn increment_files_resolved(&mut self) {
        self.stats.files_resolved += 1;
    }

    /// Records a planned conversion
    pub fn add_planned(&mut self, planned: PlannedRender) {
        self.stats.renders_planned += 1;
        self.planned.push(planned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> WorkflowContext {
        WorkflowContext::new(
            ResolutionRequest {
                source: String::from("in/*.jpg"),
                output: PathBuf::from("out"),
                batch: true,
            },
            RenderOptions {
                brightness: 1.0,
                saturation: 1.0,
                tint: 0.0,
            },
            true,
        )
    }

    #[test]
    fn test_new_context_is_empty() {
        let context = test_context();
        assert!(context.planned.is_empty());
        assert_eq!(context.stats.files_resolved, 0);
        assert_eq!(context.stats.renders_planned, 0);
    }

    #[test]
    fn test_add_planned_updates_stats() {
        let mut context = test_context();
        context.increment_files_resolved();
        context.add_planned(PlannedRender {
            source: PathBuf::from("/in/a.jpg"),
            target: PathBuf::from("/out/a-fc.jpg"),
        });

        assert_eq!(context.planned.len(), 1);
        assert_eq!(context.stats.files_resolved, 1);
        assert_eq!(context.stats.renders_planned, 1);
    }
}
