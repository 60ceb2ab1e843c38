use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use mvnargs::MavenArgs;

/// Writes `yaml` to `invocation.yaml` inside `dir` and returns its path.
#[allow(dead_code)]
pub fn write_invocation(dir: &Utf8Path, yaml: &str) -> Utf8PathBuf {
    let path = dir.join("invocation.yaml");
    fs::write(&path, yaml).expect("failed to write invocation file");
    path
}

/// Converts a temp dir path into a UTF-8 path.
#[allow(dead_code)]
pub fn utf8_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp dir path should be UTF-8")
}

/// Returns the index of the first occurrence of `token`, panicking when absent.
#[allow(dead_code)]
pub fn position_of(tokens: &[String], token: &str) -> usize {
    tokens
        .iter()
        .position(|t| t == token)
        .unwrap_or_else(|| panic!("{:?} should be in {:?}", token, tokens))
}

/// An accumulator with every option kind populated.
#[allow(dead_code)]
pub fn populated_args() -> MavenArgs {
    let mut args = MavenArgs::new();
    args.alternate_pom_file("module/pom.xml")
        .system_property("skipTests", Some("true"))
        .system_property("argLine", Some("-Xmx1g -ea"))
        .batch_mode()
        .activate_profiles(["ci", "release"])
        .alternate_user_toolchains(["toolchains.xml", "extra-toolchains.xml"])
        .threads("1C")
        .no_transfer_progress()
        .goals(["clean", "install"])
        .phases(["verify"]);
    args
}
