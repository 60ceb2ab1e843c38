//! The `mvn` invocation accumulator.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{CommandArgsBuilder, FLAG_TABLE, OrderedSet};

/// Generates the fluent enabler, setter and getter of a boolean option.
macro_rules! switch_options {
    ($($(#[$doc:meta])* $field:ident, $setter:ident, $getter:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&mut self) -> &mut Self {
                self.$setter(true);
                self
            }

            pub fn $setter(&mut self, value: bool) {
                self.$field = value;
            }

            pub fn $getter(&self) -> bool {
                self.$field
            }
        )*
    };
}

/// Generates the fluent setter, replacing setter and getter of a text option.
macro_rules! text_options {
    ($($(#[$doc:meta])* $field:ident, $setter:ident, $getter:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&mut self, value: impl Into<String>) -> &mut Self {
                self.$setter(Some(value.into()));
                self
            }

            pub fn $setter(&mut self, value: Option<String>) {
                self.$field = value;
            }

            pub fn $getter(&self) -> Option<&str> {
                self.$field.as_deref()
            }
        )*
    };
}

/// Generates the accumulating, replacing, reading and mutable accessors of a
/// collection option backed by `$container`.
macro_rules! collection_options {
    ($($(#[$doc:meta])* $field:ident: $container:ty, $setter:ident, $getter:ident -> $view:ty, $getter_mut:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field<I, S>(&mut self, values: I) -> &mut Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.$field.extend(values.into_iter().map(Into::<String>::into));
                self
            }

            pub fn $setter(&mut self, values: $container) {
                self.$field = values;
            }

            pub fn $getter(&self) -> &$view {
                &self.$field
            }

            pub fn $getter_mut(&mut self) -> &mut $container {
                &mut self.$field
            }
        )*
    };
}

/// Accumulated options of a single `mvn` invocation.
///
/// Every mutator is total: blank text, empty collections and unset booleans
/// are simply left out when rendering. Fluent mutators return `&mut Self`,
/// and list-like mutators append to what is already there.
///
/// Rendering walks [`FLAG_TABLE`] in its fixed order, so the token order never
/// depends on the order the options were set in. Goals and then phases are
/// appended last as bare tokens.
///
/// Two values compare equal (and hash equally) when every field holds the
/// same value, which makes `MavenArgs` usable as a memoisation key.
///
/// The type has no internal synchronisation. Share it across threads behind
/// a lock of your own.
///
/// # Example
/// ```
/// use mvnargs::MavenArgs;
///
/// let mut args = MavenArgs::new();
/// args.quiet()
///     .system_property("skipTests", Some("true"))
///     .activate_profiles(["ci", "release"])
///     .goals(["clean", "install"]);
///
/// assert_eq!(args.to_string(), "-D skipTests=true -q -P ci,release clean install");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MavenArgs {
    goals: OrderedSet,
    phases: OrderedSet,
    properties: BTreeMap<String, String>,

    alternate_pom_file: Option<String>,
    system_properties: BTreeMap<String, String>,
    offline: bool,
    quiet: bool,
    debug: bool,
    errors: bool,
    non_recursive: bool,
    update_snapshots: bool,
    activate_profiles: Vec<String>,
    batch_mode: bool,
    suppress_snapshot_updates: bool,
    checksum_failure_policy: bool,
    checksum_warning_policy: bool,
    alternate_user_settings: Option<String>,
    alternate_global_settings: Option<String>,
    alternate_user_toolchains: OrderedSet,
    alternate_global_toolchains: OrderedSet,
    fail_fast: bool,
    fail_at_end: bool,
    fail_never: bool,
    resume_from: Option<String>,
    project_list: Vec<String>,
    also_make: bool,
    also_make_dependents: bool,
    log_file: Option<String>,
    show_version: bool,
    encrypt_master_password: Option<String>,
    encrypt_password: Option<String>,
    threads: Option<String>,
    legacy_local_repository: bool,
    builder: Option<String>,
    no_transfer_progress: bool,
}

impl MavenArgs {
    /// Create an accumulator with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    switch_options! {
        /// Work offline (`-o`).
        offline, set_offline, is_offline;
        /// Quiet output, only show errors (`-q`).
        quiet, set_quiet, is_quiet;
        /// Debug output (`-X`).
        debug, set_debug, is_debug;
        /// Produce execution error messages (`-e`).
        errors, set_errors, is_errors;
        /// Do not recurse into sub-projects (`-N`).
        non_recursive, set_non_recursive, is_non_recursive;
        /// Force a check for updated releases and snapshots (`-U`).
        update_snapshots, set_update_snapshots, is_update_snapshots;
        /// Run in non-interactive mode (`-B`).
        batch_mode, set_batch_mode, is_batch_mode;
        /// Suppress snapshot updates (`-nsu`).
        suppress_snapshot_updates, set_suppress_snapshot_updates, is_suppress_snapshot_updates;
        /// Fail the build if checksums don't match (`-C`).
        checksum_failure_policy, set_checksum_failure_policy, is_checksum_failure_policy;
        /// Warn if checksums don't match (`-c`).
        checksum_warning_policy, set_checksum_warning_policy, is_checksum_warning_policy;
        /// Stop at first failure in reactorized builds (`-ff`).
        fail_fast, set_fail_fast, is_fail_fast;
        /// Only fail the build afterwards (`-fae`).
        fail_at_end, set_fail_at_end, is_fail_at_end;
        /// Never fail the build, regardless of project result (`-fn`).
        fail_never, set_fail_never, is_fail_never;
        /// Also build projects required by the project list (`-am`).
        also_make, set_also_make, is_also_make;
        /// Also build projects depending on the project list (`-amd`).
        also_make_dependents, set_also_make_dependents, is_also_make_dependents;
        /// Display version information without stopping the build (`-V`).
        show_version, set_show_version, is_show_version;
        /// Use the legacy local repository layout (`-llr`).
        legacy_local_repository, set_legacy_local_repository, is_legacy_local_repository;
        /// Do not display transfer progress (`-ntp`).
        no_transfer_progress, set_no_transfer_progress, is_no_transfer_progress;
    }

    text_options! {
        /// Alternate POM file (`-f`).
        alternate_pom_file, set_alternate_pom_file, get_alternate_pom_file;
        /// Alternate user settings file (`-s`).
        alternate_user_settings, set_alternate_user_settings, get_alternate_user_settings;
        /// Alternate global settings file (`-gs`).
        alternate_global_settings, set_alternate_global_settings, get_alternate_global_settings;
        /// Resume the reactor from the given project (`-rf`).
        resume_from, set_resume_from, get_resume_from;
        /// Log file for all build output (`-l`).
        log_file, set_log_file, get_log_file;
        encrypt_master_password, set_encrypt_master_password, get_encrypt_master_password;
        encrypt_password, set_encrypt_password, get_encrypt_password;
        /// Thread count, e.g. `4` or `1C` (`-T`).
        threads, set_threads, get_threads;
        /// Build strategy id (`-b`).
        builder, set_builder, get_builder;
    }

    collection_options! {
        /// Append goals, rendered as bare trailing tokens.
        goals: OrderedSet, set_goals, get_goals -> OrderedSet, goals_mut;
        /// Append phases, rendered as bare tokens after the goals.
        phases: OrderedSet, set_phases, get_phases -> OrderedSet, phases_mut;
        /// Append profiles to activate (`-P a,b`).
        activate_profiles: Vec<String>, set_activate_profiles, get_activate_profiles -> [String], activate_profiles_mut;
        /// Append alternate user toolchains files (`-t a -t b`).
        alternate_user_toolchains: OrderedSet, set_alternate_user_toolchains, get_alternate_user_toolchains -> OrderedSet, alternate_user_toolchains_mut;
        /// Append alternate global toolchains files (`-gt a -gt b`).
        alternate_global_toolchains: OrderedSet, set_alternate_global_toolchains, get_alternate_global_toolchains -> OrderedSet, alternate_global_toolchains_mut;
        /// Append reactor projects to build (`-pl a,b`).
        project_list: Vec<String>, set_project_list, get_project_list -> [String], project_list_mut;
    }

    /// Upsert a system property (`-D`), or remove it when `value` is `None`.
    pub fn system_property<K, V>(&mut self, name: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        upsert_or_remove(&mut self.system_properties, name.into(), value.map(Into::into));
        self
    }

    /// Upsert every pair into the system properties.
    pub fn system_properties<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.system_properties
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn set_system_properties(&mut self, entries: BTreeMap<String, String>) {
        self.system_properties = entries;
    }

    pub fn get_system_properties(&self) -> &BTreeMap<String, String> {
        &self.system_properties
    }

    pub fn system_properties_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.system_properties
    }

    /// Upsert an invocation property, or remove it when `value` is `None`.
    ///
    /// Invocation properties travel with the arguments for whoever launches
    /// the build; they are never rendered.
    pub fn property<K, V>(&mut self, name: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        upsert_or_remove(&mut self.properties, name.into(), value.map(Into::into));
        self
    }

    /// Upsert every pair into the invocation properties.
    pub fn properties<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn set_properties(&mut self, entries: BTreeMap<String, String>) {
        self.properties = entries;
    }

    pub fn get_properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.properties
    }

    /// Render the accumulated options into argument tokens.
    ///
    /// Options are emitted in [`FLAG_TABLE`] order, followed by goals and then
    /// phases. The result is the same every time for the same state.
    pub fn render(&self) -> Vec<String> {
        let mut builder = CommandArgsBuilder::new();

        for option in FLAG_TABLE {
            if option.is_present(self) {
                trace!(option = option.name(), kind = %option.kind(), "rendering option");
                option.render_into(self, &mut builder);
            }
        }

        for goal in &self.goals {
            builder.push_arg(goal.as_str());
        }
        for phase in &self.phases {
            builder.push_arg(phase.as_str());
        }

        let args = builder.into_args();
        debug!(
            "rendered {} argument(s) for {} goal(s) and {} phase(s)",
            args.len(),
            self.goals.len(),
            self.phases.len()
        );
        args
    }

    /// Render into `OsString`s, ready for `std::process::Command::args`.
    pub fn to_os_args(&self) -> Vec<OsString> {
        self.render().into_iter().map(OsString::from).collect()
    }
}

fn upsert_or_remove(map: &mut BTreeMap<String, String>, name: String, value: Option<String>) {
    match value {
        Some(value) => {
            map.insert(name, value);
        }
        None => {
            map.remove(&name);
        }
    }
}

impl fmt::Display for MavenArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join(" "))
    }
}
