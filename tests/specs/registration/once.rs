//! Once-listener specs

use crate::prelude::*;

#[test]
fn once_fires_only_for_first_emit() {
    let emitter = plain_emitter();
    let rec = Recorder::new();
    emitter.once("ready", &rec.listener("l"));

    emitter.emit("ready", &[json!("first")]);
    emitter.emit("ready", &[json!("second")]);

    similar_asserts::assert_eq!(rec.args_of("l"), vec![vec![json!("first")]]);
    assert!(!emitter.has_listeners("ready"));
    assert!(emitter.has_event("ready"));
}

#[test]
fn once_does_not_refire_from_its_own_emit() {
    let emitter = plain_emitter();
    let rec = Recorder::new();
    let inner = rec.listener("l");

    let reentrant = {
        let emitter = emitter.clone();
        Callback::new(move |args: &[Value]| {
            inner.call(args);
            emitter.emit("ready", &[json!("again")]);
        })
    };
    emitter.once("ready", &reentrant);

    emitter.emit("ready", &[json!("go")]);
    similar_asserts::assert_eq!(rec.args_of("l"), vec![vec![json!("go")]]);
}

#[test]
fn prepend_once_runs_before_others_then_disappears() {
    let emitter = plain_emitter();
    let rec = Recorder::new();
    emitter
        .on("ready", &rec.listener("steady"))
        .prepend_once_listener("ready", &rec.listener("first"));

    emitter.emit("ready", &[]);
    emitter.emit("ready", &[]);

    assert_eq!(rec.names(), vec!["first", "steady", "steady"]);
}

#[test]
fn once_listener_counts_single_call() {
    let emitter = plain_emitter();
    let rec = Recorder::new();
    emitter.on("ready", &rec.listener("steady"));
    emitter.once("ready", &rec.listener("once"));
    let handles = emitter.listener_handles("ready");

    emitter.emit("ready", &[]);
    emitter.emit("ready", &[]);

    assert_eq!(handles[0].called_count(), 2);
    assert_eq!(handles[1].called_count(), 1);
    assert!(handles[1].is_once());
    assert!(!handles[1].is_attached());
}

#[test]
fn once_and_on_of_same_callback_are_separate_registrations() {
    let emitter = plain_emitter();
    let rec = Recorder::new();
    let f = rec.listener("f");

    emitter.once("ready", &f).on("ready", &f);
    assert_eq!(emitter.listener_count("ready"), 2);

    emitter.emit("ready", &[json!(1)]);
    emitter.emit("ready", &[json!(2)]);

    similar_asserts::assert_eq!(
        rec.args_of("f"),
        vec![vec![json!(1)], vec![json!(1)], vec![json!(2)]]
    );
    assert_eq!(emitter.listeners("ready"), vec![f]);
}
