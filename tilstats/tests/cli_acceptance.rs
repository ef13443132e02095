use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const NOW: &str = "2026-02-21T12:00:00Z";

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
        }
    }

    fn write_config(&self, content: &str) {
        let path = self.xdg_config.join("tilstats/config.toml");
        fs::create_dir_all(path.parent().expect("missing config parent"))
            .expect("failed to create config directory");
        fs::write(path, content).expect("failed to write config");
    }

    fn scratch(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        fs::write(&path, content).expect("failed to write scratch file");
        path
    }
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tilstats-core/tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn run_bin(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("tilstats"));

    Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute tilstats: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "tilstats {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn text_report_renders_fixture_dashboard() {
    let env = CliTestEnv::new();
    let entries = fixture("entries.json");
    let backlog = fixture("backlog.json");
    let args = [
        "--entries",
        entries.as_str(),
        "--backlog",
        backlog.as_str(),
        "--now",
        NOW,
    ];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Learning Dashboard"), "got:\n{stdout}");
    assert!(stdout.contains("| Total entries | 7 |"));
    assert!(stdout.contains("| Streak | 3 days |"));
    assert!(stdout.contains("Overall: 7/17 (41%)"));
    assert!(!stdout.contains("### Treemap"));
}

#[test]
fn json_export_includes_requested_views() {
    let env = CliTestEnv::new();
    let entries = fixture("entries.json");
    let args = [
        "--entries",
        entries.as_str(),
        "--now",
        NOW,
        "--export",
        "json",
        "--weeks",
        "4",
        "--treemap",
        "200x100",
        "--recent",
        "2",
    ];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["totalEntries"], 7);
    assert_eq!(json["summary"]["thisWeekCount"], 4);
    assert_eq!(json["weeklyTrend"].as_array().unwrap().len(), 4);
    assert_eq!(json["heatmap"]["cells"].as_array().unwrap().len(), 365);
    assert_eq!(json["categoryDistribution"][0]["name"], "rust");
    assert_eq!(json["generatedAt"], "2026-02-21T12:00:00+00:00");

    let treemap = json["treemap"].as_array().unwrap();
    assert_eq!(treemap.len(), 4);
    let area: f64 = treemap
        .iter()
        .map(|r| r["width"].as_f64().unwrap() * r["height"].as_f64().unwrap())
        .sum();
    assert!((area - 20_000.0).abs() < 1e-6);

    let recent = json["recent"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["path"], "til/rust/ownership.md");
    assert_eq!(recent[0]["canonicalDate"], "2026-02-21");
}

#[test]
fn config_supplies_root_and_defaults() {
    let env = CliTestEnv::new();
    env.write_config(
        r#"
[dashboard]
root = "notes"
week_count = 2
"#,
    );
    let entries = env.scratch(
        "entries.json",
        r#"[
            {"path": "notes/go/channels.md", "extension": "md",
             "createdAt": 1771675200000, "modifiedAt": 1771675200000,
             "labels": ["til"]},
            {"path": "til/rust/ownership.md", "extension": "md",
             "createdAt": 1771675200000, "modifiedAt": 1771675200000,
             "labels": ["til"]}
        ]"#,
    );
    let entries = entries.to_string_lossy().into_owned();
    let args = ["--entries", entries.as_str(), "--now", NOW, "--export", "json"];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["totalEntries"], 1);
    assert_eq!(json["categories"][0]["name"], "go");
    assert_eq!(json["weeklyTrend"].as_array().unwrap().len(), 2);
    assert!(json.get("treemap").is_none());
}

#[test]
fn text_report_appends_treemap_and_recent_sections() {
    let env = CliTestEnv::new();
    let entries = fixture("entries.json");
    let args = [
        "--entries",
        entries.as_str(),
        "--now",
        NOW,
        "--treemap",
        "--recent",
    ];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### Treemap"));
    assert!(stdout.contains("rust (3, 43%)"));
    assert!(stdout.contains("### Recent"));
    assert!(stdout.contains("- til/rust/ownership.md"));
}

#[test]
fn missing_entries_file_fails_with_context() {
    let env = CliTestEnv::new();
    let missing = env.home.join("nope.json");
    let missing = missing.to_string_lossy().into_owned();

    let output = run_bin(&env, &["--entries", missing.as_str(), "--now", NOW]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read entries"), "got:\n{stderr}");
}

#[test]
fn malformed_inputs_are_rejected() {
    let env = CliTestEnv::new();
    let bad = env.scratch("bad.json", "{ not json");
    let bad = bad.to_string_lossy().into_owned();
    let entries = fixture("entries.json");

    let output = run_bin(&env, &["--entries", bad.as_str(), "--now", NOW]);
    assert!(!output.status.success());

    let output = run_bin(&env, &["--entries", entries.as_str(), "--now", "yesterday"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid --now value"));

    let output = run_bin(
        &env,
        &["--entries", entries.as_str(), "--now", NOW, "--export", "yaml"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown export format"));
}

#[test]
fn invalid_config_is_reported() {
    let env = CliTestEnv::new();
    env.write_config("[treemap]\nmax_segments = 0\n");
    let entries = fixture("entries.json");

    let output = run_bin(&env, &["--entries", entries.as_str(), "--now", NOW]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load configuration"));
}

#[test]
fn oversized_week_count_yields_empty_trend() {
    let env = CliTestEnv::new();
    let entries = fixture("entries.json");
    let weeks = u64::MAX.to_string();
    let args = [
        "--entries",
        entries.as_str(),
        "--now",
        NOW,
        "--export",
        "json",
        "--weeks",
        weeks.as_str(),
    ];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let json = stdout_json(&output);
    assert!(json["weeklyTrend"].as_array().unwrap().is_empty());
    assert_eq!(json["summary"]["totalEntries"], 7);
}
