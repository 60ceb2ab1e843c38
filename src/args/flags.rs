//! Short option names understood by `mvn`.
//!
//! Names are stored without the leading dash; [`super::CliOption::flag`]
//! adds it when rendering.

/// Alternate POM file: `-f <file>`
pub const ALTERNATE_POM_FILE: &str = "f";

/// System property: `-D <key>=<value>[,...]`
pub const SET_SYSTEM_PROPERTY: &str = "D";

/// Work offline: `-o`
pub const OFFLINE: &str = "o";

/// Quiet output: `-q`
pub const QUIET: &str = "q";

/// Debug output: `-X`
pub const DEBUG: &str = "X";

/// Produce execution error messages: `-e`
pub const ERRORS: &str = "e";

/// Do not recurse into sub-projects: `-N`
pub const NON_RECURSIVE: &str = "N";

/// Force a check for updated snapshots: `-U`
pub const UPDATE_SNAPSHOTS: &str = "U";

/// Profiles to activate: `-P <a,b>`
pub const ACTIVATE_PROFILES: &str = "P";

/// Non-interactive mode: `-B`
pub const BATCH_MODE: &str = "B";

/// Suppress snapshot updates: `-nsu`
pub const SUPPRESS_SNAPSHOT_UPDATES: &str = "nsu";

/// Fail the build if checksums don't match: `-C`
pub const CHECKSUM_FAILURE_POLICY: &str = "C";

/// Warn if checksums don't match: `-c`
pub const CHECKSUM_WARNING_POLICY: &str = "c";

/// Alternate user settings file: `-s <file>`
pub const ALTERNATE_USER_SETTINGS: &str = "s";

/// Alternate global settings file: `-gs <file>`
pub const ALTERNATE_GLOBAL_SETTINGS: &str = "gs";

/// Alternate user toolchains file: `-t <file>`
pub const ALTERNATE_USER_TOOLCHAINS: &str = "t";

/// Alternate global toolchains file: `-gt <file>`
pub const ALTERNATE_GLOBAL_TOOLCHAINS: &str = "gt";

/// Stop at first failure: `-ff`
pub const FAIL_FAST: &str = "ff";

/// Only fail the build afterwards: `-fae`
pub const FAIL_AT_END: &str = "fae";

/// Never fail the build: `-fn`
pub const FAIL_NEVER: &str = "fn";

/// Resume reactor from a project: `-rf <project>`
pub const RESUME_FROM: &str = "rf";

/// Reactor projects to build: `-pl <a,b>`
pub const PROJECT_LIST: &str = "pl";

/// Also build required projects: `-am`
pub const ALSO_MAKE: &str = "am";

/// Also build dependent projects: `-amd`
pub const ALSO_MAKE_DEPENDENTS: &str = "amd";

/// Log file for build output: `-l <file>`
pub const LOG_FILE: &str = "l";

/// Display version and continue: `-V`
pub const SHOW_VERSION: &str = "V";

/// Encrypt master security password: `-emp <password>`
pub const ENCRYPT_MASTER_PASSWORD: &str = "emp";

/// Encrypt server password: `-ep <password>`
pub const ENCRYPT_PASSWORD: &str = "ep";

/// Thread count: `-T <count>`
pub const THREADS: &str = "T";

/// Legacy local repository layout: `-llr`
pub const LEGACY_LOCAL_REPOSITORY: &str = "llr";

/// Build strategy id: `-b <id>`
pub const BUILDER: &str = "b";

/// Hide transfer progress: `-ntp`
pub const NO_TRANSFER_PROGRESS: &str = "ntp";
