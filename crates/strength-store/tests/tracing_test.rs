use strength_store::tracing_setup::{init_tracing, init_tracing_with_filter};

#[test]
fn global_subscriber_installs_once() {
    // Whichever call wins, a second install must report the existing subscriber.
    let _ = init_tracing_with_filter("strength_store=debug");
    assert!(!init_tracing_with_filter("info"));
}

#[test]
fn env_driven_install_can_be_repeated() {
    let _ = init_tracing();
    assert!(!init_tracing());
    assert!(!init_tracing_with_filter("warn"));
}
