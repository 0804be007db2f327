pub mod cli;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod options;
pub mod resolver;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{check_for_stdout_stream, get_log_file, get_matches, get_verbosity};
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, glob_pattern_error,
        invalid_filename_error, settings_parsing_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::resolver::{
        get_source_files, output_filename, prepare_output, resolve, ResolutionRequest,
        ResolvedFile,
    };
    pub use crate::workflow::plan_from_arguments;
}
