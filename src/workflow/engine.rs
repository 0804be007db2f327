//! Workflow engine
//!
//! This module contains the engine that orchestrates the planning steps.

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use log::{debug, info};

use crate::cli::{build_request, gather_render_options};
use crate::logging::format_message;
use crate::options::RenderOptions;
use crate::resolver::{prepare_output, resolve, ResolutionRequest};

use super::context::{PlannedRender, WorkflowContext};

/// Options for a planning run
#[derive(Debug, Clone)]
pub struct PlanningOptions {
    /// The resolution request to plan
    pub request: ResolutionRequest,
    /// The render options carried into the plan
    pub render: RenderOptions,
    /// Whether to skip filesystem mutation (true) or prepare the output
    /// directory (false)
    pub dry_run: bool,
}

/// Plans conversions based on the command-line arguments
///
/// Builds the resolution request and render options from the parsed
/// arguments, then runs the planning steps.
///
/// # Errors
/// Returns an error if argument validation, settings loading, or any
/// planning step fails
pub fn plan_from_arguments(matches: &ArgMatches) -> Result<WorkflowContext> {
    let request = build_request(matches)?;
    let render = gather_render_options(matches)?;

    plan_renders(PlanningOptions {
        request,
        render,
        dry_run: matches.get_flag("dry"),
    })
}

/// Plans conversions for a resolution request
///
/// This function orchestrates the planning steps:
/// 1. Ensure the output directory exists (batch mode, unless dry run)
/// 2. Resolve the source specification into the ordered file list
/// 3. Pair every source file with its computed output path
/// 4. Report the resulting plan
///
/// # Arguments
/// * `options` - Options for the planning run
///
/// # Returns
/// * `Result<WorkflowContext>` - The context with the plan and statistics
///
/// # Errors
/// * Returns an error if any step fails
pub fn plan_renders(options: PlanningOptions) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.request, options.render, options.dry_run);

    // Step 1: Ensure the output directory exists
    if options.dry_run {
        debug!("Dry run, skipping output directory creation");
    } else {
        prepare_output(&context.request)?;
    }

    // Step 2: Resolve the source specification
    let resolved = resolve(&context.request)?;

    if resolved.is_empty() {
        info!("No files matched the source specification");
        return Ok(context);
    }

    info!(
        "Planning {} conversions{}...",
        resolved.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    // Step 3: Pair every source file with its output path
    for file in resolved {
        context.increment_files_resolved();
        debug!(
            "Resolved {} -> {}",
            file.source.display(),
            file.output.display()
        );
        context.add_planned(PlannedRender {
            source: file.source,
            target: file.output,
        });
    }

    // Step 4: Report the plan
    display_plan(&context);

    info!(
        "Finished planning {} conversions",
        context.stats.renders_planned
    );

    Ok(context)
}

/// Prints the planned conversions and a summary block
fn display_plan(context: &WorkflowContext) {
    let header = "Planned conversions:";
    println!("\n{}", format_message(header, &header.bold().to_string()));
    println!("--------------------");

    for render in &context.planned {
        println!("  From: {}", render.source.display());
        println!("  To:   {}", render.target.display());
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Files resolved:      {}", context.stats.files_resolved);
    println!("  Conversions planned: {}", context.stats.renders_planned);
    println!(
        "  Brightness: {}, saturation: {}, tint: {}",
        context.options.brightness, context.options.saturation, context.options.tint
    );

    if context.dry_run {
        println!("\nRun without the --dry flag to create the output directory.");
    }
}
