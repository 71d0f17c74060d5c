//! `vdiag triage`: re-classify a saved compiler log.
//!
//! Every line carrying a diagnostic tag is decoded back to its kind, checked
//! against the configured waivers and re-tagged with the kind's current
//! severity. Lines are processed in parallel; output keeps log order.

use rayon::prelude::*;
use vdiag_diagnostics::{
    tag, Diagnostic, DiagnosticKind, DiagnosticOccurrence, DiagnosticRegistry, DiagnosticSink,
    Severity,
};

use crate::setup::load_registry;
use crate::{GlobalArgs, ReportFormat, TriageArgs};

/// What triage decided for one log line.
#[derive(Debug, PartialEq)]
enum Triaged<'a> {
    /// No diagnostic tag on the line.
    Untagged(&'a str),
    /// Tagged with a kind the catalog does not know.
    Unknown(DiagnosticKind, &'a str),
    /// Suppressed by a waiver rule.
    Waived,
    /// Survived; the line re-rendered with its current tag.
    Kept(Diagnostic, String),
}

/// A line split around its diagnostic tag.
struct TaggedLine<'a> {
    before: &'a str,
    kind: DiagnosticKind,
    after: &'a str,
}

/// Runs the `vdiag triage` command.
///
/// Returns exit code 1 if any surviving diagnostic is an error or fatal.
pub fn run(args: &TriageArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let registry = load_registry(global)?;
    let content = std::fs::read_to_string(&args.log)?;
    let lines: Vec<&str> = content.lines().collect();
    tracing::debug!(log = %args.log, lines = lines.len(), "triaging log");

    let triaged: Vec<Triaged<'_>> = lines
        .par_iter()
        .map(|line| triage_line(&registry, line))
        .collect();

    let sink = DiagnosticSink::new();
    let mut waived = 0;
    let mut unknown = 0;
    for outcome in triaged {
        match outcome {
            Triaged::Untagged(line) => {
                if args.keep_untagged && args.format == ReportFormat::Text {
                    println!("{line}");
                }
            }
            Triaged::Unknown(kind, line) => {
                tracing::warn!(%kind, "log line tagged with an unregistered diagnostic");
                unknown += 1;
                if args.format == ReportFormat::Text {
                    println!("{line}");
                }
            }
            Triaged::Waived => waived += 1,
            Triaged::Kept(diag, rendered) => {
                if args.format == ReportFormat::Text {
                    println!("{rendered}");
                }
                sink.emit(diag);
            }
        }
    }

    if args.format == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&sink.diagnostics())?);
    }

    if !global.quiet {
        eprintln!("   Result: {}", summary(&sink, waived, unknown));
    }

    Ok(i32::from(sink.has_errors()))
}

/// Classifies one log line against the registry.
fn triage_line<'a>(registry: &DiagnosticRegistry, line: &'a str) -> Triaged<'a> {
    let Some(tagged) = split_tag(line) else {
        return Triaged::Untagged(line);
    };
    let Some(entry) = registry.catalog().get(tagged.kind) else {
        return Triaged::Unknown(tagged.kind, line);
    };

    let (file, line_no, message) = split_locator(tagged.after);
    let occ = DiagnosticOccurrence::new(tagged.kind, file, line_no);
    if registry.is_waived(&occ) {
        return Triaged::Waived;
    }

    let tag = entry.tag();
    let rendered = format!("{}{}{}", tagged.before, tag, tagged.after);
    let diag = Diagnostic {
        tag,
        file: occ.file,
        line: line_no,
        message: message.to_string(),
        related: None,
    };
    Triaged::Kept(diag, rendered)
}

/// Finds the first bracketed token that decodes as a tag.
fn split_tag(line: &str) -> Option<TaggedLine<'_>> {
    let mut offset = 0;
    while let Some(open) = line[offset..].find('[') {
        let open = offset + open;
        let close = open + line[open..].find(']')?;
        if line[open + 1..close].contains('[') {
            offset = open + 1;
            continue;
        }
        if let Some(kind) = tag::decode(&line[open..=close]) {
            return Some(TaggedLine {
                before: &line[..open],
                kind,
                after: &line[close + 1..],
            });
        }
        offset = open + 1;
    }
    None
}

/// Splits ` file:line: message` into its parts.
///
/// Text without a `file:line:` locator yields an empty file, line 0 and the
/// trimmed text as message.
fn split_locator(text: &str) -> (&str, u32, &str) {
    let text = text.trim_start();
    let parsed = text.split_once(": ").and_then(|(locator, message)| {
        let (file, line) = locator.rsplit_once(':')?;
        let line = line.parse::<u32>().ok()?;
        (!file.is_empty()).then_some((file, line, message))
    });
    parsed.unwrap_or(("", 0, text.trim_end()))
}

fn summary(sink: &DiagnosticSink, waived: usize, unknown: usize) -> String {
    let mut parts: Vec<String> = Severity::ALL
        .iter()
        .rev()
        .map(|&severity| format!("{} {severity}", sink.count(severity)))
        .collect();
    parts.push(format!("{waived} waived"));
    if unknown > 0 {
        parts.push(format!("{unknown} unknown"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdiag_diagnostics::WaiverRule;

    fn registry() -> DiagnosticRegistry {
        DiagnosticRegistry::with_builtin_catalog().unwrap()
    }

    #[test]
    fn split_locator_forms() {
        assert_eq!(split_locator(" top.sv:3: Unknown macro"), ("top.sv", 3, "Unknown macro"));
        assert_eq!(
            split_locator(" C:/work/top.sv:12: a: b"),
            ("C:/work/top.sv", 12, "a: b")
        );
        assert_eq!(split_locator(" top.sv: message"), ("", 0, "top.sv: message"));
        assert_eq!(split_locator(" Unknown macro "), ("", 0, "Unknown macro"));
    }

    #[test]
    fn split_tag_skips_unrelated_brackets() {
        let tagged = split_tag("[info] [ERR:PP_:0202] top.sv:3: x").unwrap();
        assert_eq!(tagged.before, "[info] ");
        assert_eq!(tagged.kind, DiagnosticKind::PP_UNKNOWN_MACRO);
        assert_eq!(tagged.after, " top.sv:3: x");
        assert!(split_tag("no tag [here]").is_none());

        let nested = split_tag("[[WRN:PA_:0305] x").unwrap();
        assert_eq!(nested.before, "[");
        assert_eq!(nested.kind, DiagnosticKind::PA_NOTIMESCALE_INFO);
    }

    #[test]
    fn untagged_and_unknown_lines() {
        let reg = registry();
        assert_eq!(triage_line(&reg, "plain text"), Triaged::Untagged("plain text"));
        let line = "[ERR:PP_:9999] a.sv:1: ?";
        assert_eq!(
            triage_line(&reg, line),
            Triaged::Unknown(DiagnosticKind::from_raw(9999), line)
        );
    }

    #[test]
    fn kept_line_is_retagged_with_current_severity() {
        let reg = registry();
        reg.catalog()
            .override_severity(DiagnosticKind::PA_NOTIMESCALE_INFO, Severity::Error);
        let line = r#"[WRN:PA_:0305] top.sv:1: No timescale set for "top""#;
        match triage_line(&reg, line) {
            Triaged::Kept(diag, rendered) => {
                assert_eq!(rendered, r#"[ERR:PA_:0305] top.sv:1: No timescale set for "top""#);
                assert_eq!(diag.severity(), Severity::Error);
                assert_eq!(diag.file, "top.sv");
                assert_eq!(diag.line, 1);
                assert_eq!(diag.message, r#"No timescale set for "top""#);
            }
            other => panic!("expected kept line, got {other:?}"),
        }
    }

    #[test]
    fn waivers_match_global_and_locator() {
        let reg = registry();
        reg.waivers()
            .add(WaiverRule::global(DiagnosticKind::PA_NOTIMESCALE_INFO));
        reg.waivers()
            .add_rule(DiagnosticKind::PP_UNKNOWN_MACRO, "top.sv", 3, "");

        assert_eq!(triage_line(&reg, "[WRN:PA_:0305] any.sv:9: x"), Triaged::Waived);
        assert_eq!(triage_line(&reg, "[WRN:PA_:0305] no locator"), Triaged::Waived);
        assert_eq!(triage_line(&reg, "[ERR:PP_:0202] top.sv:3: x"), Triaged::Waived);
        assert!(matches!(
            triage_line(&reg, "[ERR:PP_:0202] top.sv:4: x"),
            Triaged::Kept(..)
        ));
    }

    #[test]
    fn summary_lists_severities_most_severe_first() {
        let reg = registry();
        let sink = DiagnosticSink::new();
        if let Triaged::Kept(diag, _) = triage_line(&reg, "[ERR:PP_:0202] top.sv:3: x") {
            sink.emit(diag);
        }
        assert_eq!(
            summary(&sink, 2, 0),
            "0 fatal, 1 error, 0 warning, 0 note, 0 info, 2 waived"
        );
        assert!(summary(&sink, 0, 1).ends_with("1 unknown"));
    }

    #[test]
    fn run_on_log_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let log = tmp.path().join("run.log");
        std::fs::write(&log, "[NTE:EL_:0603] top.sv:1: x\n").unwrap();
        let args = TriageArgs {
            log: log.display().to_string(),
            format: ReportFormat::Json,
            keep_untagged: false,
        };
        let global = GlobalArgs {
            quiet: true,
            config: None,
            strict: false,
        };
        assert_eq!(run(&args, &global).unwrap(), 0);
    }
}
