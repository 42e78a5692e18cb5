//! Check command handler
//!
//! Loads a deprecation report, evaluates it against the configured Minecraft
//! version, and turns the findings into diagnostics and an exit code.

use crate::cli::{CheckArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::fs;
use sunset_core::{Decision, Deprecation, RemovalPolicy, Version};
use tracing::{debug, info, warn};

/// Handle the check command
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let policy = match removal_policy(&args, output)? {
        Some(policy) => policy,
        // Checking disabled: the report is not even read, matching how a
        // build without a configured target version behaves.
        None => return Ok(()),
    };

    output.info(&format!(
        "Checking deprecation report: {}",
        args.report.display()
    ))?;

    if !args.report.exists() {
        return Err(Error::FileNotFound {
            path: args.report.clone(),
        });
    }

    debug!("Reading deprecation report");
    let content = fs::read_to_string(&args.report)?;
    debug!("Report read successfully, {} bytes", content.len());

    let report = parse_report(&args, &content)?;
    let findings = policy.evaluate_report(&report)?;

    if output.format() == OutputFormat::Human {
        for finding in &findings {
            let line = format!("{}: {}", finding.element, finding.message);
            match finding.decision {
                Decision::Warn => output.warning(&line)?,
                _ => output.error(&line)?,
            }
        }
    } else {
        output.data(&findings)?;
    }

    if args.detailed && output.format() == OutputFormat::Human {
        let marked = report.iter().filter(|d| d.for_removal).count();
        output.section("Summary")?;
        output.writeln(&format!(
            "{} element(s) in report, {} marked for removal, {} due for removal",
            report.len(),
            marked,
            findings.len()
        ))?;
    }

    let errors = findings
        .iter()
        .filter(|f| f.decision == Decision::Error)
        .count();
    if errors > 0 {
        warn!("{} element(s) due for removal", errors);
        return Err(Error::RemovalsFound { count: errors });
    }

    if findings.is_empty() {
        output.success("✓ No deprecated elements due for removal")?;
    }

    Ok(())
}

/// Build the removal policy from the CLI options
///
/// An absent version disables checking with a note. A malformed version is
/// reported as a warning and then also disables checking, so a bad option
/// never fails the build on its own.
fn removal_policy(args: &CheckArgs, output: &mut OutputWriter) -> Result<Option<RemovalPolicy>> {
    let version_str = match args.minecraft_version.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => {
            output.info("No Minecraft version configured, deprecation checking disabled")?;
            return Ok(None);
        }
    };

    match Version::parse(version_str) {
        Ok(current) => {
            info!(current = %current, warn_only = args.warn_only, "Deprecation checking enabled");
            Ok(Some(RemovalPolicy::new(current, args.warn_only)))
        }
        Err(e) => {
            warn!(version = version_str, error = %e, "Unusable Minecraft version");
            output.warning(&format!(
                "Cannot parse Minecraft version '{}' ({}); deprecation checking disabled",
                version_str, e
            ))?;
            Ok(None)
        }
    }
}

/// Parse a report file as JSON or YAML, chosen by file extension
fn parse_report(args: &CheckArgs, content: &str) -> Result<Vec<Deprecation>> {
    let is_yaml = args
        .report
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(content).map_err(|_e| Error::InvalidFormat {
            path: args.report.clone(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(content).map_err(|_e| Error::InvalidFormat {
            path: args.report.clone(),
            expected: "JSON".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn check_args(report: &str, version: Option<&str>, warn_only: bool) -> CheckArgs {
        CheckArgs {
            report: PathBuf::from(report),
            minecraft_version: version.map(str::to_string),
            warn_only,
            detailed: false,
        }
    }

    fn sink_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(io::sink()))
    }

    #[test]
    fn test_removal_policy_absent_version() {
        let args = check_args("report.json", None, false);
        let policy = removal_policy(&args, &mut sink_output()).unwrap();
        assert!(policy.is_none());
    }

    #[test]
    fn test_removal_policy_malformed_version() {
        // A bad option is reported and disables checking instead of failing
        let args = check_args("report.json", Some("latest"), false);
        let policy = removal_policy(&args, &mut sink_output()).unwrap();
        assert!(policy.is_none());
    }

    #[test]
    fn test_removal_policy_enabled() {
        let args = check_args("report.json", Some("1.20.1"), true);
        let policy = removal_policy(&args, &mut sink_output())
            .unwrap()
            .expect("policy should be enabled");
        assert!(policy.is_enabled());
        assert_eq!(policy.current().unwrap().to_string(), "1.20.1");
    }

    #[test]
    fn test_parse_report_json() {
        let args = check_args("report.json", Some("1.20"), false);
        let report = parse_report(
            &args,
            r#"[{"element": "net.example.Widget#resize()", "for_removal": true, "since": "1.20"}]"#,
        )
        .unwrap();
        assert_eq!(report.len(), 1);
        assert!(report[0].for_removal);
    }

    #[test]
    fn test_parse_report_yaml() {
        let args = check_args("report.yaml", Some("1.20"), false);
        let report = parse_report(
            &args,
            "- element: net.example.Widget#resize()\n  for_removal: true\n  since: \"1.20\"\n",
        )
        .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].since.as_deref(), Some("1.20"));
    }

    #[test]
    fn test_parse_report_invalid() {
        let args = check_args("report.json", Some("1.20"), false);
        let err = parse_report(&args, "not json").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_handle_check_missing_report() {
        let args = check_args("definitely-missing-report.json", Some("1.20"), false);
        let err = handle_check(args, &mut sink_output()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_handle_check_disabled_skips_report_entirely() {
        // No version configured: the (missing) report is never opened
        let args = check_args("definitely-missing-report.json", None, false);
        assert!(handle_check(args, &mut sink_output()).is_ok());
    }
}
