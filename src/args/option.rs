//! Declarative table of the options `mvn` accepts and how each one renders.

use std::collections::BTreeMap;

use strum::Display;

use super::flags;
use super::{CommandArgsBuilder, MavenArgs, OrderedSet};

/// Rendering grammar of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OptionKind {
    /// Bare `-x` when enabled.
    Boolean,
    /// `-x value`.
    Text,
    /// `-x a,b,c`.
    OrderedList,
    /// `-x a -x b`, one flag per value.
    Set,
    /// `-x k=v,k2="v 2"`.
    Mapping,
}

/// Reads one option's value out of a [`MavenArgs`], tagged with the kind of
/// value it yields.
#[derive(Clone, Copy)]
pub enum Accessor {
    Boolean(fn(&MavenArgs) -> bool),
    Text(fn(&MavenArgs) -> Option<&str>),
    OrderedList(fn(&MavenArgs) -> &[String]),
    Set(fn(&MavenArgs) -> &OrderedSet),
    Mapping(fn(&MavenArgs) -> &BTreeMap<String, String>),
}

impl Accessor {
    pub fn kind(&self) -> OptionKind {
        match self {
            Accessor::Boolean(_) => OptionKind::Boolean,
            Accessor::Text(_) => OptionKind::Text,
            Accessor::OrderedList(_) => OptionKind::OrderedList,
            Accessor::Set(_) => OptionKind::Set,
            Accessor::Mapping(_) => OptionKind::Mapping,
        }
    }
}

impl std::fmt::Debug for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Accessor::{:?}", self.kind())
    }
}

/// One renderable option: its short name, the field it reads and how.
#[derive(Debug, Clone, Copy)]
pub struct CliOption {
    name: &'static str,
    field: &'static str,
    accessor: Accessor,
}

impl CliOption {
    const fn new(name: &'static str, field: &'static str, accessor: Accessor) -> Self {
        Self {
            name,
            field,
            accessor,
        }
    }

    /// Short option name without the leading dash (e.g. `nsu`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the [`MavenArgs`] field backing this option.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> OptionKind {
        self.accessor.kind()
    }

    /// The option as it appears on the command line (e.g. `-nsu`).
    pub fn flag(&self) -> String {
        format!("-{}", self.name)
    }

    /// Whether `args` holds a value for this option that should be rendered.
    ///
    /// Booleans count when true, text when not blank, collections and
    /// mappings when not empty.
    pub fn is_present(&self, args: &MavenArgs) -> bool {
        match self.accessor {
            Accessor::Boolean(get) => get(args),
            Accessor::Text(get) => get(args).is_some_and(|value| !value.trim().is_empty()),
            Accessor::OrderedList(get) => !get(args).is_empty(),
            Accessor::Set(get) => !get(args).is_empty(),
            Accessor::Mapping(get) => !get(args).is_empty(),
        }
    }

    /// Append this option's tokens to `builder`, or nothing when absent.
    pub fn render_into(&self, args: &MavenArgs, builder: &mut CommandArgsBuilder) {
        if !self.is_present(args) {
            return;
        }

        let flag = self.flag();
        match self.accessor {
            Accessor::Boolean(_) => builder.push_flag(&flag),
            Accessor::Text(get) => {
                if let Some(value) = get(args) {
                    builder.push_flag_value(&flag, value);
                }
            }
            Accessor::OrderedList(get) => builder.push_comma_joined(&flag, get(args)),
            Accessor::Set(get) => builder.push_flag_values(&flag, get(args)),
            Accessor::Mapping(get) => builder.push_key_values(&flag, get(args)),
        }
    }
}

/// Every renderable option, in the order it is emitted.
pub static FLAG_TABLE: &[CliOption] = &[
    CliOption::new(
        flags::ALTERNATE_POM_FILE,
        "alternate_pom_file",
        Accessor::Text(MavenArgs::get_alternate_pom_file),
    ),
    CliOption::new(
        flags::SET_SYSTEM_PROPERTY,
        "system_properties",
        Accessor::Mapping(MavenArgs::get_system_properties),
    ),
    CliOption::new(flags::OFFLINE, "offline", Accessor::Boolean(MavenArgs::is_offline)),
    CliOption::new(flags::QUIET, "quiet", Accessor::Boolean(MavenArgs::is_quiet)),
    CliOption::new(flags::DEBUG, "debug", Accessor::Boolean(MavenArgs::is_debug)),
    CliOption::new(flags::ERRORS, "errors", Accessor::Boolean(MavenArgs::is_errors)),
    CliOption::new(
        flags::NON_RECURSIVE,
        "non_recursive",
        Accessor::Boolean(MavenArgs::is_non_recursive),
    ),
    CliOption::new(
        flags::UPDATE_SNAPSHOTS,
        "update_snapshots",
        Accessor::Boolean(MavenArgs::is_update_snapshots),
    ),
    CliOption::new(
        flags::ACTIVATE_PROFILES,
        "activate_profiles",
        Accessor::OrderedList(MavenArgs::get_activate_profiles),
    ),
    CliOption::new(flags::BATCH_MODE, "batch_mode", Accessor::Boolean(MavenArgs::is_batch_mode)),
    CliOption::new(
        flags::SUPPRESS_SNAPSHOT_UPDATES,
        "suppress_snapshot_updates",
        Accessor::Boolean(MavenArgs::is_suppress_snapshot_updates),
    ),
    CliOption::new(
        flags::CHECKSUM_FAILURE_POLICY,
        "checksum_failure_policy",
        Accessor::Boolean(MavenArgs::is_checksum_failure_policy),
    ),
    CliOption::new(
        flags::CHECKSUM_WARNING_POLICY,
        "checksum_warning_policy",
        Accessor::Boolean(MavenArgs::is_checksum_warning_policy),
    ),
    CliOption::new(
        flags::ALTERNATE_USER_SETTINGS,
        "alternate_user_settings",
        Accessor::Text(MavenArgs::get_alternate_user_settings),
    ),
    CliOption::new(
        flags::ALTERNATE_GLOBAL_SETTINGS,
        "alternate_global_settings",
        Accessor::Text(MavenArgs::get_alternate_global_settings),
    ),
    CliOption::new(
        flags::ALTERNATE_USER_TOOLCHAINS,
        "alternate_user_toolchains",
        Accessor::Set(MavenArgs::get_alternate_user_toolchains),
    ),
    CliOption::new(
        flags::ALTERNATE_GLOBAL_TOOLCHAINS,
        "alternate_global_toolchains",
        Accessor::Set(MavenArgs::get_alternate_global_toolchains),
    ),
    CliOption::new(flags::FAIL_FAST, "fail_fast", Accessor::Boolean(MavenArgs::is_fail_fast)),
    CliOption::new(flags::FAIL_AT_END, "fail_at_end", Accessor::Boolean(MavenArgs::is_fail_at_end)),
    CliOption::new(flags::FAIL_NEVER, "fail_never", Accessor::Boolean(MavenArgs::is_fail_never)),
    CliOption::new(flags::RESUME_FROM, "resume_from", Accessor::Text(MavenArgs::get_resume_from)),
    CliOption::new(
        flags::PROJECT_LIST,
        "project_list",
        Accessor::OrderedList(MavenArgs::get_project_list),
    ),
    CliOption::new(flags::ALSO_MAKE, "also_make", Accessor::Boolean(MavenArgs::is_also_make)),
    CliOption::new(
        flags::ALSO_MAKE_DEPENDENTS,
        "also_make_dependents",
        Accessor::Boolean(MavenArgs::is_also_make_dependents),
    ),
    CliOption::new(flags::LOG_FILE, "log_file", Accessor::Text(MavenArgs::get_log_file)),
    CliOption::new(
        flags::SHOW_VERSION,
        "show_version",
        Accessor::Boolean(MavenArgs::is_show_version),
    ),
    CliOption::new(
        flags::ENCRYPT_MASTER_PASSWORD,
        "encrypt_master_password",
        Accessor::Text(MavenArgs::get_encrypt_master_password),
    ),
    CliOption::new(
        flags::ENCRYPT_PASSWORD,
        "encrypt_password",
        Accessor::Text(MavenArgs::get_encrypt_password),
    ),
    CliOption::new(flags::THREADS, "threads", Accessor::Text(MavenArgs::get_threads)),
    CliOption::new(
        flags::LEGACY_LOCAL_REPOSITORY,
        "legacy_local_repository",
        Accessor::Boolean(MavenArgs::is_legacy_local_repository),
    ),
    CliOption::new(flags::BUILDER, "builder", Accessor::Text(MavenArgs::get_builder)),
    CliOption::new(
        flags::NO_TRANSFER_PROGRESS,
        "no_transfer_progress",
        Accessor::Boolean(MavenArgs::is_no_transfer_progress),
    ),
];

/// Look up an option by its short name (without the leading dash).
pub fn find_option(name: &str) -> Option<&'static CliOption> {
    FLAG_TABLE.iter().find(|option| option.name == name)
}
