use atty::Stream;
use clap::{command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches};
use std::path::PathBuf;

use crate::constants::{
    BATCH_HELP, BRIGHTNESS_HELP, DEFAULT_SETTINGS_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, OUTPUT_HELP, SATURATION_HELP, SETTINGS_HELP, SOURCE_HELP,
    TINT_HELP, VERBOSE_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::options::{load_defaults, locate_settings, RenderOptions};
use crate::resolver::ResolutionRequest;
use crate::utils::{expand_path, find_project_folder};

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `source`: Source file, directory, or glob pattern
/// - `output`: Output file or directory
/// - `batch`: Process every matched file
/// - `brightness`, `saturation`, `tint`: Render options
/// - `dry`: Resolve and report without creating directories
/// - `settings`: Path to the settings file
/// - `verbose`: Increase verbosity level
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
pub fn get_matches() -> Result<ArgMatches> {
    let arg_source = Arg::new("source").help(SOURCE_HELP).required(true);

    let arg_output = Arg::new("output").help(OUTPUT_HELP).required(true);

    let arg_batch = Arg::new("batch")
        .short('b')
        .long("batch")
        .help(BATCH_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_brightness = Arg::new("brightness")
        .short('B')
        .long("brightness")
        .help(BRIGHTNESS_HELP)
        .value_parser(clap::value_parser!(f32));

    let arg_saturation = Arg::new("saturation")
        .short('S')
        .long("saturation")
        .help(SATURATION_HELP)
        .value_parser(clap::value_parser!(f32));

    let arg_tint = Arg::new("tint")
        .short('T')
        .long("tint")
        .help(TINT_HELP)
        .value_parser(clap::value_parser!(f32));

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for reading from a specific settings file
    let arg_settings = Arg::new("settings")
        .short('c')
        .long("settings")
        .help(SETTINGS_HELP)
        .default_value(DEFAULT_SETTINGS_PATH);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_source)
        .arg(arg_output)
        .arg(arg_batch)
        .arg(arg_brightness)
        .arg(arg_saturation)
        .arg(arg_tint)
        .arg(arg_dry)
        .arg(arg_settings)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Builds the resolution request from the command-line arguments
///
/// # Errors
/// Returns an error if the source specification is empty
pub fn build_request(matches: &ArgMatches) -> Result<ResolutionRequest> {
    let source = matches
        .get_one::<String>("source")
        .ok_or_else(|| generic_error("Source specification not found"))?
        .clone();
    if source.trim().is_empty() {
        return Err(generic_error("Source specification must not be empty"));
    }

    let output = matches
        .get_one::<String>("output")
        .ok_or_else(|| generic_error("Output path not found"))?;
    let output = PathBuf::from(expand_path(output));

    Ok(ResolutionRequest {
        source,
        output,
        batch: matches.get_flag("batch"),
    })
}

/// Builds the effective render options from the arguments and settings file
///
/// # Errors
/// Returns an error if the settings file exists but cannot be parsed
pub fn gather_render_options(matches: &ArgMatches) -> Result<RenderOptions> {
    let settings = matches
        .get_one::<String>("settings")
        .cloned()
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings_file = locate_settings(PathBuf::from(settings))?;
    let defaults = load_defaults(&settings_file)?;

    Ok(RenderOptions::merge(
        defaults,
        matches.get_one::<f32>("brightness").copied(),
        matches.get_one::<f32>("saturation").copied(),
        matches.get_one::<f32>("tint").copied(),
    ))
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count
/// to a LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {:?}", path)))?;
        Ok(path_str.to_string())
    }
}
