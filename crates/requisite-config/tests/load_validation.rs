//! Config load validation tests for requisite-config.
// crates/requisite-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding, schema).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use requisite_config::AuditSinkKind;
use requisite_config::ConfigError;
use requisite_config::RequisiteConfig;
use requisite_core::RequirementKind;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<RequisiteConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    Ok(file)
}

// =============================================================================
// SECTION: Input Guards
// =============================================================================

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(RequisiteConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(RequisiteConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_reports_missing_file_as_io() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match RequisiteConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(error) => Err(format!("expected io error, got {error}")),
        Ok(_) => Err("expected missing file to fail".to_string()),
    }
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let file = write_config(&vec![b'a'; 1_048_577])?;
    assert_invalid(RequisiteConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(RequisiteConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = write_config(b"[messages\nstrict_placeholders = true")?;
    assert_invalid(RequisiteConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_fields() -> TestResult {
    let file = write_config(b"[messages]\nstrict = true\n")?;
    assert_invalid(RequisiteConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_requirement_name() -> TestResult {
    let file = write_config(b"[messages.templates]\nIsPositive = \"{ValueExpression}\"\n")?;
    assert_invalid(RequisiteConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

// =============================================================================
// SECTION: Successful Loads
// =============================================================================

#[test]
fn load_accepts_empty_file_with_defaults() -> TestResult {
    let file = write_config(b"")?;
    let config = RequisiteConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.audit.sink != AuditSinkKind::None || config.messages.strict_placeholders {
        return Err("empty config should use defaults".to_string());
    }
    if !config.messages.templates.is_empty() {
        return Err("empty config should have no overrides".to_string());
    }
    Ok(())
}

#[test]
fn load_reads_templates_and_audit() -> TestResult {
    let file = write_config(
        br#"
[messages]
strict_placeholders = true

[messages.templates]
GreaterThanOrEqual = "{ValueExpression} must be at least {LowerBound}"
NotNull = "{ValueExpression} is required"

[audit]
sink = "stderr"
redact_values = true
"#,
    )?;
    let config = RequisiteConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.messages.templates.len() != 2 {
        return Err("expected two template overrides".to_string());
    }
    if config.messages.templates.get(&RequirementKind::NotNull).map(String::as_str)
        != Some("{ValueExpression} is required")
    {
        return Err("NotNull override not loaded".to_string());
    }
    if config.audit.sink != AuditSinkKind::Stderr || !config.audit.redact_values {
        return Err("audit section not loaded".to_string());
    }
    Ok(())
}
