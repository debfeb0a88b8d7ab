//! End-to-End CLI Tests for foodgram-pages

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the foodgram-pages binary
fn pages() -> Command {
    cargo_bin_cmd!("foodgram-pages")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        pages()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("export"));
    }

    #[test]
    fn shows_version() {
        pages()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_technologies_document_by_default() {
        let output = pages().arg("render").output().expect("run render");
        assert!(output.status.success());

        let html = String::from_utf8(output.stdout).expect("utf8 output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>О проекте</title>"));
        assert!(html.contains("<h1 class=\"title\">Технологии</h1>"));

        let subtitles = [
            "Backend:",
            "Frontend:",
            "Инфраструктура и развертывание:",
            "CI/CD и автоматизация:",
        ];
        let positions: Vec<usize> = subtitles
            .iter()
            .map(|s| html.find(s).expect("subtitle present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Python — основной язык программирования."));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        pages()
            .args(["render", "--fragment", "--route", "technologies/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<main class=\"main\">"))
            .stdout(predicate::str::contains("<html").not())
            .stdout(predicate::str::contains("<title>").not());
    }

    #[test]
    fn writes_to_out_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("nested").join("technologies.html");

        pages()
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.contains("Фудграм - Технологии"));
    }

    #[test]
    fn unknown_route_fails() {
        pages()
            .args(["render", "--route", "/recipes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no page is registered for route '/recipes'"));
    }

    #[test]
    fn explicit_config_is_applied() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("pages.toml");
        std::fs::write(
            &config,
            "lang = \"en\"\ninline_css = false\nstylesheet_href = \"/static/main.css\"\n",
        )
        .expect("write config");

        pages()
            .args(["render", "--config"])
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("<html lang=\"en\">"))
            .stdout(predicate::str::contains("href=\"/static/main.css\""))
            .stdout(predicate::str::contains("<style>").not());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");

        pages()
            .args(["render", "--config"])
            .arg(temp.path().join("absent.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot load site config"));
    }
}

// ============================================
// Meta & Export Tests
// ============================================

mod meta_and_export {
    use super::*;

    #[test]
    fn meta_prints_json() {
        let output = pages().arg("meta").output().expect("run meta");
        assert!(output.status.success());

        let meta: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(meta["title"], "О проекте");
        assert_eq!(meta["description"], "Фудграм - Технологии");
        assert_eq!(meta["og_title"], "О проекте");
    }

    #[test]
    fn export_writes_every_route() {
        let temp = TempDir::new().expect("temp dir");
        let dist = temp.path().join("dist");

        pages()
            .current_dir(temp.path())
            .args(["export", "--dir"])
            .arg(&dist)
            .assert()
            .success();

        let index = dist.join("technologies").join("index.html");
        let html = std::fs::read_to_string(index).expect("exported page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("GitHub Actions"));
    }
}
