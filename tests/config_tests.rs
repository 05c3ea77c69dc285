// Integration tests for layered configuration loading

use anyhow::Result;
use meeting_insights::Config;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> Result<String> {
    let path = dir.path().join("meeting-insights.toml");
    fs::write(&path, contents)?;
    Ok(path.with_extension("").to_string_lossy().into_owned())
}

#[test]
fn test_defaults_without_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("absent");

    let cfg = Config::load(&missing.to_string_lossy())?;

    assert_eq!(cfg.service.name, "meeting-insights");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.service.http.max_body_bytes, 16 * 1024 * 1024);
    assert_eq!(cfg.llm.base_url, "https://ai.gateway.lovable.dev/v1");
    assert_eq!(cfg.llm.model, "google/gemini-2.5-flash");
    assert_eq!(cfg.llm.timeout_secs, None);
    Ok(())
}

#[test]
fn test_file_values_override_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_config(
        &temp_dir,
        r#"
[service.http]
bind = "127.0.0.1"
port = 9000
max_body_bytes = 4096

[llm]
base_url = "https://llm.internal/v1"
model = "test-model"
api_key = "file-key"
timeout_secs = 30
"#,
    )?;

    let cfg = Config::load(&path)?;
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 9000);
    assert_eq!(cfg.service.http.max_body_bytes, 4096);

    let settings = cfg.gateway_settings()?;
    assert_eq!(settings.base_url, "https://llm.internal/v1");
    assert_eq!(settings.model, "test-model");
    assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    Ok(())
}

#[test]
fn test_credential_is_required_and_env_supplies_it() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blank = write_config(&temp_dir, "[llm]\napi_key = \"   \"\n")?;
    let missing = temp_dir.path().join("absent").to_string_lossy().into_owned();

    // Env mutation stays inside this one test
    std::env::remove_var("MEETING_INSIGHTS_LLM__API_KEY");
    assert!(Config::load(&missing)?.gateway_settings().is_err());
    assert!(Config::load(&blank)?.gateway_settings().is_err());

    std::env::set_var("MEETING_INSIGHTS_LLM__API_KEY", "env-key");
    let settings = Config::load(&blank)?.gateway_settings();
    std::env::remove_var("MEETING_INSIGHTS_LLM__API_KEY");

    assert_eq!(settings?.api_key, "env-key");
    Ok(())
}
