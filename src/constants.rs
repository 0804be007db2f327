/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Suffix appended to the file stem of every batch output file
///
/// A source file `photo.jpg` processed in batch mode is written as
/// `photo-fc.jpg` in the output directory.
pub const OUTPUT_SUFFIX: &str = "-fc";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// settings file paths and application identification.
pub const APPLICATION: &str = "false_color";

/// Help text for the source positional argument
pub const SOURCE_HELP: &str = "Source file, directory, or glob pattern (* and ? wildcards)";

/// Help text for the output positional argument
pub const OUTPUT_HELP: &str = "Output file (single mode) or output directory (batch mode)";

/// Help text for the batch command-line option
pub const BATCH_HELP: &str = "Process every file matched by the source specification";

/// Help text for the brightness command-line option
pub const BRIGHTNESS_HELP: &str = "Brightness multiplier applied to the conversion";

/// Help text for the saturation command-line option
pub const SATURATION_HELP: &str = "Saturation multiplier applied to the conversion";

/// Help text for the tint command-line option
pub const TINT_HELP: &str = "Tint shift applied to the conversion";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Resolve and report without creating any directories";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the settings command-line option
pub const SETTINGS_HELP: &str = "Read render defaults from a specific settings file";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the working directory";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "false_color.log";

/// Default filename for the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "settings.yaml";
