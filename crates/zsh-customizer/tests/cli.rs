use std::path::{
    Path,
    PathBuf,
};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("zsh-customizer").unwrap();
        cmd.env_remove("ZSH_CUSTOMIZER_LOG")
            .env_remove("ZSH_CUSTOMIZER_STORE")
            .arg("--store")
            .arg(self.store());
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_fresh_store_generates_default_config() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["config", "show", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Generated by Zsh Customizer\n"))
        .stdout(predicate::str::contains("ZSH_THEME=\"robbyrussell\"\n"))
        .stdout(predicate::str::contains("plugins=(git docker)\n"))
        .stdout(predicate::str::contains("# Add your custom configurations below"))
        .stderr(predicate::str::contains("zsh-customizer guide"));
}

#[test]
fn test_selection_survives_between_runs() {
    let fixture = Fixture::new();

    fixture.run(&["themes", "select", "agnoster"]);
    fixture.run(&["plugins", "toggle", "docker"]);
    fixture.run(&["plugins", "toggle", "zsh-autosuggestions"]);

    assert_eq!(fixture.run(&["plugins", "selected"]), "git\nzsh-autosuggestions\n");
    assert!(fixture.run(&["themes", "current"]).starts_with("agnoster\n"));

    let config = fixture.run(&["config", "show", "--quiet"]);
    assert!(config.contains("ZSH_THEME=\"agnoster\"\n"));
    assert!(config.contains("plugins=(git zsh-autosuggestions)\n"));

    let store = read(&fixture.store());
    assert!(store.contains("\"zsh-theme\": \"agnoster\""));
}

#[test]
fn test_show_lists_external_plugin_install_steps() {
    let fixture = Fixture::new();
    fixture.run(&["plugins", "toggle", "zsh-syntax-highlighting"]);

    fixture
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Install selected external plugins:"))
        .stderr(predicate::str::contains("git clone https://github.com/zsh-users/zsh-syntax-highlighting"));
}

#[test]
fn test_custom_prompt_is_not_persisted() {
    let fixture = Fixture::new();

    let with_prompt = fixture.run(&["config", "show", "--quiet", "--prompt", "%n@%m %~ "]);
    assert!(with_prompt.contains("# Custom prompt\nPROMPT=\"%n@%m %~ \"\n"));

    let without = fixture.run(&["config", "show", "--quiet"]);
    assert!(!without.contains("PROMPT="));
}

#[test]
fn test_prompt_style_flags() {
    let fixture = Fixture::new();

    let arrow = fixture.run(&["config", "show", "--quiet", "--style", "arrow", "--no-user"]);
    assert!(arrow.contains("PROMPT=\"at host in ~/projects (main) ➜ \"\n"));

    let minimal = fixture.run(&["config", "show", "--quiet", "--style", "minimal"]);
    assert!(minimal.contains("PROMPT=\"~/projects $ \"\n"));

    fixture
        .cmd()
        .args(["config", "show", "--style", "arrow", "--prompt", "%~ "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--style custom"));
}

#[test]
fn test_malformed_saved_plugins_fall_back_to_defaults() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.store(),
        r#"{"zsh-theme": "bira", "zsh-plugins": "[\"git\",", "themeGuided": "true"}"#,
    )
    .unwrap();

    fixture
        .cmd()
        .args(["plugins", "selected"])
        .assert()
        .success()
        .stdout("git\ndocker\n")
        .stderr(predicate::str::contains("failed to parse saved plugins"));

    assert_eq!(fixture.run(&["config", "show", "--quiet"]).matches("ZSH_THEME=\"bira\"").count(), 1);
}

#[test]
fn test_unreadable_store_is_ignored() {
    let fixture = Fixture::new();
    std::fs::write(fixture.store(), "{ not json").unwrap();

    assert!(fixture.run(&["themes", "current"]).starts_with("robbyrussell\n"));
}

#[test]
fn test_write_refuses_to_overwrite_without_force() {
    let fixture = Fixture::new();
    let zshrc = fixture.path(".zshrc");
    let zshrc_arg = zshrc.to_str().unwrap();

    fixture.run(&["config", "write", zshrc_arg]);
    assert!(read(&zshrc).contains("ZSH_THEME=\"robbyrussell\""));

    fixture.run(&["themes", "select", "candy"]);
    fixture
        .cmd()
        .args(["config", "write", zshrc_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert!(read(&zshrc).contains("ZSH_THEME=\"robbyrussell\""));

    fixture.run(&["config", "write", "--force", zshrc_arg]);
    assert!(read(&zshrc).contains("ZSH_THEME=\"candy\""));
}

#[test]
fn test_import_existing_zshrc() {
    let fixture = Fixture::new();
    let zshrc = fixture.path("imported.zshrc");
    std::fs::write(&zshrc, "ZSH_THEME=\"fino\"\nplugins=(sudo z)\n").unwrap();

    fixture.run(&["config", "import", zshrc.to_str().unwrap()]);
    assert_eq!(fixture.run(&["plugins", "selected"]), "sudo\nz\n");
    assert!(fixture.run(&["themes", "current"]).starts_with("fino\n"));
}

#[test]
fn test_palette_json_has_every_role() {
    let fixture = Fixture::new();

    let dark = fixture.run(&["palette", "--theme", "agnoster", "--dark"]);
    let light = fixture.run(&["palette", "--theme", "agnoster", "--light"]);
    let dark: serde_json::Value = serde_json::from_str(&dark).unwrap();
    let light: serde_json::Value = serde_json::from_str(&light).unwrap();

    assert_eq!(dark.as_object().unwrap().len(), 20);
    assert_eq!(dark["background"], "#2d2d2d");
    assert_eq!(light["background"], "#f0f0f0");
    assert!(dark["selectionBackground"].is_string());
}

#[test]
fn test_mode_is_persisted() {
    let fixture = Fixture::new();

    assert_eq!(fixture.run(&["mode"]), "dark\n");
    assert_eq!(fixture.run(&["mode", "toggle"]), "light\n");
    assert_eq!(fixture.run(&["mode"]), "light\n");
    assert!(read(&fixture.store()).contains("\"darkMode\": \"false\""));
}

#[test]
fn test_preview_renders_banner_and_prompt() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["preview", "--theme", "bira", "--cols", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ Welcome to Zsh Customizer!"))
        .stdout(predicate::str::contains("$ Theme: bira"))
        .stdout(predicate::str::contains("$ Plugins: git, docker"));
}

#[test]
fn test_preview_unknown_theme_falls_back() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["preview", "--theme", "does-not-exist", "--cols", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ Theme: does-not-exist"))
        .stdout(predicate::str::contains("git:(main)"));
}

#[test]
fn test_unknown_theme_preview_command_fails() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["themes", "preview", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Theme 'does-not-exist' not found"));
}

#[test]
fn test_guide_runs_once() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .arg("guide")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Zsh Customizer"))
        .stderr(predicate::str::contains("New here?").not());

    fixture
        .cmd()
        .args(["themes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("robbyrussell"))
        .stderr(predicate::str::contains("New here?").not());
}

#[test]
fn test_view_tab_dispatches() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["view", "plugins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zsh-autosuggestions"));

    fixture
        .cmd()
        .args(["view", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source $ZSH/oh-my-zsh.sh"));
}
