//! Common constants used throughout fast-setup.

/// Optional descriptor file inside a template directory
pub const META_FILE: &str = "meta.json";

/// Package manifest whose `name` field is rewritten after generation
pub const PACKAGE_FILE: &str = "package.json";

/// Suggested project name for the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Templates root used when `--templates-dir` is not given
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Name under which the binary advertises itself in usage hints
pub const BIN_NAME: &str = "fast-setup";
