//! Default configuration values

/// Shared install prefix for every package
pub const DEFAULT_PREFIX: &str = "/Users/Shared/Gargoyle";

/// System directories appended after `<prefix>/bin` on the build search path
pub const SYSTEM_PATH: &str = "/usr/bin:/bin:/usr/sbin:/sbin";

/// Environment variable overriding the install prefix
pub const ENV_PREFIX: &str = "GARGOYLE_DEPS_PREFIX";

/// Environment variable overriding the directory searched for archives
pub const ENV_SOURCE_DIR: &str = "GARGOYLE_DEPS_SOURCE_DIR";

/// Name prefix for staging directories
pub const STAGING_PREFIX: &str = "gargoyle-deps-";

/// Out-of-tree build directory used by the CMake protocol
pub const CMAKE_BUILD_DIR: &str = "build";

/// Archive extraction tool
pub const TAR: &str = "tar";

/// Native build tool
pub const MAKE: &str = "make";

/// Host tools that must resolve on the build search path before a run
pub const REQUIRED_HOST_TOOLS: &[&str] = &[TAR, MAKE];
