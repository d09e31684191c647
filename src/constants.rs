//! Constants used throughout hoganizer

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["hoganizer.json", "hoganizer.yaml", "hoganizer.yml"];

/// Default directory holding the template sources
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";

/// Default template file extension
pub const DEFAULT_EXTENSION: &str = ".mustache";

/// Default location of the generated bundle
pub const DEFAULT_WRITE_LOCATION: &str = "./templates.js";

/// Default location of the Hogan.js runtime that is copied into the bundle
pub const DEFAULT_RUNTIME: &str = "./template.js";

/// Default name of the exported namespace object
pub const DEFAULT_GLOBAL_NAME: &str = "templates";

/// Ignore file name, looked up inside the template directory
pub const IGNORE_FILE: &str = ".hoganizerignore";

/// UTF-8 byte order mark
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Bundle text fragments
pub mod bundle {
    /// Local variable holding the namespace tree inside the bundle closure
    pub const LOCAL: &str = "templates";

    /// Member of the local namespace holding the raw `Hogan.Template` objects
    pub const RAW: &str = "raw";

    /// Assigning this member rebinds an object's prototype instead of adding a property
    pub const PROTO: &str = "__proto__";

    /// Constructor the compiled code objects are passed to
    pub const TEMPLATE_CONSTRUCTOR: &str = "Hogan.Template";

    /// Banner emitted at the top of every bundle
    pub const DEFAULT_HEADER: &str = "//\t\t }} Precompiled by Hoganizer {{\n//\t\t }} Compiled templates are at the bottom {{\n\n";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
