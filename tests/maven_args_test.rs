mod helpers;

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashSet};
use std::hash::{Hash, Hasher};

use mvnargs::MavenArgs;
use mvnargs::args::OrderedSet;

fn hash_of(args: &MavenArgs) -> u64 {
    let mut hasher = DefaultHasher::new();
    args.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_call_order_does_not_matter() {
    let mut first = MavenArgs::new();
    first
        .offline()
        .system_property("b", Some("2"))
        .system_property("a", Some("1"))
        .threads("2")
        .goals(["clean", "install"])
        .phases(["verify"]);

    let mut second = MavenArgs::new();
    second
        .phases(["verify"])
        .goals(["clean"])
        .threads("8")
        .system_property("a", Some("1"))
        .goals(["install"])
        .threads("2")
        .system_property("b", Some("2"))
        .system_property("c", Some("3"))
        .system_property("c", None::<&str>)
        .offline();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
    assert_eq!(first.render(), second.render());
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_different_values_are_not_equal() {
    let mut quiet = MavenArgs::new();
    quiet.quiet();
    let mut debug = MavenArgs::new();
    debug.debug();

    assert_ne!(quiet, debug);
    assert_ne!(quiet, MavenArgs::new());
}

#[test]
fn test_goal_order_is_part_of_equality() {
    let mut a = MavenArgs::new();
    a.goals(["clean", "install"]);
    let mut b = MavenArgs::new();
    b.goals(["install", "clean"]);

    assert_ne!(a, b);
    assert_ne!(a.render(), b.render());
}

#[test]
fn test_usable_as_cache_key() {
    let mut seen = HashSet::new();
    assert!(seen.insert(helpers::populated_args()));
    assert!(!seen.insert(helpers::populated_args()));
    assert!(seen.insert(MavenArgs::new()));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_clone_is_independent() {
    let original = helpers::populated_args();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.goals(["deploy"]);
    assert_ne!(copy, original);
    assert!(!original.get_goals().contains("deploy"));
}

#[test]
fn test_goals_deduplicate_in_insertion_order() {
    let mut args = MavenArgs::new();
    args.goals(["clean", "install"]).goals(["clean", "deploy"]);
    assert_eq!(args.render(), vec!["clean", "install", "deploy"]);
}

#[test]
fn test_setters_replace_collections() {
    let mut args = MavenArgs::new();
    args.activate_profiles(["ci"]);
    args.set_activate_profiles(vec!["release".to_string()]);
    assert_eq!(args.get_activate_profiles(), ["release"]);

    args.goals(["clean"]);
    args.set_goals(["package"].into_iter().collect::<OrderedSet>());
    assert_eq!(args.render(), vec!["-P", "release", "package"]);

    let mut props = BTreeMap::new();
    props.insert("x".to_string(), "y".to_string());
    args.system_property("old", Some("gone"));
    args.set_system_properties(props);
    assert_eq!(args.get_system_properties().len(), 1);
    assert!(args.get_system_properties().contains_key("x"));
}

#[test]
fn test_mutation_through_live_container() {
    let mut args = MavenArgs::new();
    args.alternate_user_toolchains(["a.xml"]);
    args.alternate_user_toolchains_mut().insert("b.xml".to_string());
    args.phases_mut().insert("verify".to_string());
    args.activate_profiles_mut().clear();

    assert_eq!(args.to_string(), "-t a.xml -t b.xml verify");

    args.alternate_user_toolchains_mut().clear();
    args.phases_mut().clear();
    assert_eq!(args, MavenArgs::new());
}

#[test]
fn test_empty_input_is_a_noop() {
    let mut args = MavenArgs::new();
    args.goals(Vec::<String>::new())
        .phases(Vec::<&str>::new())
        .activate_profiles(Vec::<String>::new())
        .system_properties(Vec::<(String, String)>::new());
    assert_eq!(args, MavenArgs::new());
}
