//! Readers and writers sharing one registry across worker threads.

use std::sync::{Arc, Barrier};
use std::thread;

use vdiag_diagnostics::{
    DiagnosticKind, DiagnosticOccurrence, DiagnosticRegistry, Severity, WaiverRule,
};

const WORKERS: usize = 8;

fn registry() -> Arc<DiagnosticRegistry> {
    Arc::new(DiagnosticRegistry::with_builtin_catalog().unwrap())
}

#[test]
fn readers_see_fully_configured_state() {
    let reg = registry();
    reg.waivers()
        .add_rule(DiagnosticKind::PP_UNKNOWN_MACRO, "foo.sv", 42, "bar");
    reg.waivers()
        .add_rule(DiagnosticKind::PA_NOTIMESCALE_INFO, "legacy.v", 0, "");
    reg.catalog()
        .override_severity(DiagnosticKind::PA_NOTIMESCALE_INFO, Severity::Fatal);

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                for line in 1..500 {
                    let exact = DiagnosticOccurrence::named(
                        DiagnosticKind::PP_UNKNOWN_MACRO,
                        "foo.sv",
                        42,
                        "bar",
                    );
                    assert!(reg.is_waived(&exact));
                    let other = DiagnosticOccurrence::named(
                        DiagnosticKind::PP_UNKNOWN_MACRO,
                        "foo.sv",
                        43,
                        "bar",
                    );
                    assert!(!reg.is_waived(&other));
                    let legacy = DiagnosticOccurrence::new(
                        DiagnosticKind::PA_NOTIMESCALE_INFO,
                        "legacy.v",
                        line,
                    );
                    assert!(reg.is_waived(&legacy));
                    assert_eq!(
                        reg.catalog().lookup(DiagnosticKind::PA_NOTIMESCALE_INFO).severity,
                        Severity::Fatal
                    );
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn override_is_never_torn() {
    let reg = registry();
    let kind = DiagnosticKind::COMP_UNDEFINED_TYPE;
    let original = reg.catalog().lookup(kind);
    let barrier = Arc::new(Barrier::new(WORKERS + 1));

    let readers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..2000 {
                    let entry = reg.catalog().lookup(kind);
                    assert!(matches!(entry.severity, Severity::Error | Severity::Warning));
                    assert_eq!(entry.category, original.category);
                    assert_eq!(entry.message, original.message);
                    let tag = entry.tag();
                    assert_eq!(tag.severity, entry.severity);
                }
            })
        })
        .collect();

    barrier.wait();
    for i in 0..200 {
        let severity = if i % 2 == 0 { Severity::Warning } else { Severity::Error };
        reg.catalog().override_severity(kind, severity);
    }
    reg.catalog().override_severity(kind, Severity::Warning);

    for h in readers {
        h.join().unwrap();
    }
    assert_eq!(reg.catalog().lookup(kind).severity, Severity::Warning);
}

#[test]
fn inline_waivers_during_emission() {
    let reg = registry();
    let kind = DiagnosticKind::COMP_PORT_MISSING_DIRECTION;
    let barrier = Arc::new(Barrier::new(WORKERS + 1));

    let writer = {
        let reg = Arc::clone(&reg);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for line in 1..=500 {
                reg.waivers().add(WaiverRule::new(kind, "ports.sv", line, ""));
            }
        })
    };

    let readers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for line in 1..=500 {
                    // Unrelated files are never waived, whatever has been added so far.
                    let occ = DiagnosticOccurrence::named(kind, "other.sv", line, "p");
                    assert!(!reg.is_waived(&occ));
                    // Rules are only appended, so a waived occurrence stays waived.
                    let target = DiagnosticOccurrence::named(kind, "ports.sv", line, "p");
                    let before = reg.is_waived(&target);
                    let after = reg.is_waived(&target);
                    assert!(!before || after);
                }
            })
        })
        .collect();

    barrier.wait();
    writer.join().unwrap();
    for h in readers {
        h.join().unwrap();
    }

    assert_eq!(reg.waivers().len(), 500);
    for line in 1..=500 {
        let occ = DiagnosticOccurrence::named(kind, "ports.sv", line, "p");
        assert!(reg.is_waived(&occ));
    }
    assert!(!reg.is_waived(&DiagnosticOccurrence::named(kind, "ports.sv", 501, "p")));
}

#[test]
fn concurrent_initialize_registers_once() {
    let reg = Arc::new(DiagnosticRegistry::new());
    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || reg.catalog().initialize().unwrap())
        })
        .collect();

    let populated = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&first| first)
        .count();
    assert_eq!(populated, 1);
    assert_eq!(reg.catalog().len(), vdiag_diagnostics::builtin::BUILTIN.len());
}

#[test]
fn allowlist_shared_across_threads() {
    let reg = registry();
    reg.macro_args().add("UVM_INFO");
    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                reg.macro_args().add(format!("M{i}"));
                assert!(reg.macro_args().contains("UVM_INFO"));
                assert!(!reg.macro_args().contains("UVM_ERROR"));
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(reg.macro_args().len(), WORKERS + 1);
}
