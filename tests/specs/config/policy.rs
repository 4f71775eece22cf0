//! Configuration specs: strict removal, meta-events, file loading

use crate::prelude::*;

fn strict_emitter() -> Emitter {
    Emitter::with_config(
        EmitterConfig::default()
            .with_meta_events(false)
            .with_missing_event(MissingEventPolicy::Strict),
    )
}

#[test]
fn strict_policy_names_the_missing_event() {
    let emitter = strict_emitter();
    let rec = Recorder::new();

    let err = emitter.remove_listener("ghost", &rec.listener("l")).unwrap_err();
    assert_eq!(err, MissingEventError::new("ghost"));
    assert_eq!(
        err.to_string(),
        "event 'ghost' does not exist within emitter"
    );

    let err = emitter.remove_all_listeners(Some("ghost")).unwrap_err();
    assert_eq!(err.event, "ghost");
}

#[test]
fn strict_policy_still_allows_emit_on_unknown_event() {
    let emitter = strict_emitter();
    assert!(!emitter.emit("ghost", &[]));
    assert!(!emitter.has_listeners("ghost"));
}

#[test]
fn meta_events_follow_registration_changes() {
    let emitter: Emitter = Emitter::new();
    let rec = Recorder::new();
    emitter
        .on("addlistener:job", &rec.listener("added"))
        .on("rmlistener:job", &rec.listener("removed"));

    let worker = rec.listener("worker");
    emitter.on("job", &worker);
    emitter.emit("job", &[json!("run")]);
    emitter.off("job", &worker).unwrap();

    assert_eq!(rec.names(), vec!["added", "worker", "removed"]);
    similar_asserts::assert_eq!(rec.args_of("added"), vec![Vec::<Value>::new()]);
}

#[test]
fn config_file_drives_emitter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("herald.toml");
    std::fs::write(
        &path,
        "meta_events = false\nmissing_event = \"strict\"\nmax_listeners = 0\n",
    )
    .unwrap();

    let config = EmitterConfig::load(&path).unwrap();
    let emitter: Emitter = Emitter::with_config(config);
    let rec = Recorder::new();
    emitter.on("addlistener:job", &rec.listener("added"));
    emitter.on("job", &rec.listener("worker"));

    assert!(rec.is_empty());
    assert!(emitter.config().is_strict());
    assert!(emitter.off("missing", &rec.listener("x")).is_err());
}

#[test]
fn emitter_debug_names_registered_events() {
    let emitter = strict_emitter();
    let rec = Recorder::new();
    emitter.on("job", &rec.listener("worker"));

    let rendered = format!("{emitter:?}");
    assert!(rendered.contains(r#"events: ["job"]"#));
    assert!(rendered.contains("missing_event: Strict"));
}
