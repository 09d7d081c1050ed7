use anyhow::Result;
use httpmock::prelude::*;
use portfolio_render::domain::site::SiteSettings;
use portfolio_render::utils::error::{LoadCause, LOAD_FAILURE_MESSAGE};
use portfolio_render::{
    source_from_config, ExportEngine, ExportStatus, FileSource, HttpSource, LocalStorage,
    SiteConfig,
};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

const SAMPLE: &str = include_str!("../demos/site/data/data.json");

fn write_site(dir: &TempDir, body: &str) -> Result<String> {
    let site_dir = dir.path().join("site");
    std::fs::create_dir_all(site_dir.join("data"))?;
    std::fs::write(site_dir.join("data/data.json"), body)?;
    Ok(site_dir.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_export_local_site() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let site_dir = write_site(&temp_dir, SAMPLE)?;
    let output_path = temp_dir.path().join("dist").to_str().unwrap().to_string();

    let settings = SiteSettings {
        title: "Ada | Portfolio".to_string(),
        owner: "Ada".to_string(),
        ..SiteSettings::default()
    };
    let source = FileSource::new(LocalStorage::new(site_dir), "data/data.json");
    let engine = ExportEngine::new(LocalStorage::new(output_path.clone()), source, settings)
        .with_output(&output_path, "index.html")
        .with_year(Some(2026));

    let report = engine.run().await?;
    assert!(report.is_success());
    assert_eq!(
        report.status,
        ExportStatus::Rendered {
            skills: 3,
            projects: 2,
            certificates: 2
        }
    );
    assert_eq!(report.revealed, 7);
    assert!(report.output_path.ends_with("dist/index.html"));

    let html = std::fs::read_to_string(temp_dir.path().join("dist/index.html"))?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Ada | Portfolio</title>"));
    assert!(html.contains("<span id=\"current-year\">2026</span>"));
    assert_eq!(html.matches("class=\"skill-card fade-in visible\"").count(), 3);
    assert_eq!(html.matches("class=\"project-card fade-in visible\"").count(), 2);
    assert_eq!(html.matches("class=\"certificate-card fade-in visible\"").count(), 2);
    assert!(html.contains("style=\"color: #00d4aa\">Advanced</div>"));
    assert!(html.contains("style=\"color: #5a67ff\">Intermediate</div>"));
    assert!(html.contains("style=\"color: #ff6b9d\">Beginner</div>"));
    assert!(!html.contains(LOAD_FAILURE_MESSAGE));
    Ok(())
}

#[tokio::test]
async fn test_export_without_static_reveal_keeps_cards_hidden() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let site_dir = write_site(&temp_dir, SAMPLE)?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let settings = SiteSettings {
        static_reveal: false,
        ..SiteSettings::default()
    };
    let source = FileSource::new(LocalStorage::new(site_dir), "data/data.json");
    let report = ExportEngine::new(LocalStorage::new(output_path.clone()), source, settings)
        .with_output(&output_path, "index.html")
        .run()
        .await?;

    assert_eq!(report.revealed, 0);
    let html = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert!(!html.contains(" visible\""));
    assert_eq!(html.matches("fade-in").count(), 7);
    Ok(())
}

#[tokio::test]
async fn test_export_writes_failure_page_on_http_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/portfolio/data/data.json");
        then.status(503);
    });

    let source = HttpSource::new(&server.url("/portfolio/"), "data/data.json", 5)?;
    let report = ExportEngine::new(
        LocalStorage::new(output_path.clone()),
        source,
        SiteSettings::default(),
    )
    .with_output(&output_path, "index.html")
    .run()
    .await?;

    api_mock.assert();
    assert!(!report.is_success());
    match &report.status {
        ExportStatus::Failed { cause, message } => {
            assert_eq!(*cause, LoadCause::Status(503));
            assert!(message.contains("503"));
        }
        other => panic!("unexpected status {:?}", other),
    }

    let html = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert_eq!(html.matches(LOAD_FAILURE_MESSAGE).count(), 3);
    assert_eq!(html.matches(">Retry</button>").count(), 3);
    assert!(!html.contains("class=\"skill-card"));
    assert!(!html.contains("class=\"project-card"));
    assert!(!html.contains("class=\"certificate-card"));
    Ok(())
}

#[tokio::test]
async fn test_export_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let site_dir = write_site(&temp_dir, SAMPLE)?;
    let output_path = temp_dir.path().join("public");

    let toml_content = format!(
        r##"
[site]
title = "Configured"
owner = "Ada"
year = 2031

[source]
site_dir = "{}"

[output]
path = "{}"
file = "portfolio.html"

[[nav.links]]
label = "Work"
href = "#projects"
"##,
        site_dir.replace('\\', "/"),
        output_path.to_str().unwrap().replace('\\', "/")
    );

    let config = SiteConfig::from_toml_str(&toml_content)?;
    assert_ok!(portfolio_render::utils::validation::Validate::validate(&config));

    let source = source_from_config(&config)?;
    let storage = LocalStorage::new(output_path.to_str().unwrap().to_string());
    let report = ExportEngine::from_config(storage, source, &config).run().await?;
    assert!(report.is_success());

    let html = std::fs::read_to_string(output_path.join("portfolio.html"))?;
    assert!(html.contains("<span id=\"current-year\">2031</span>"));
    assert!(html.contains("<a href=\"#projects\" class=\"nav-link\" onclick="));
    assert!(html.contains(">Work</a>"));
    assert!(!html.contains(">Contact</a>"));
    Ok(())
}

#[tokio::test]
async fn test_export_missing_data_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let source = FileSource::new(
        LocalStorage::new(temp_dir.path().join("nowhere").to_str().unwrap().to_string()),
        "data/data.json",
    );

    let report = ExportEngine::new(
        LocalStorage::new(output_path.clone()),
        source,
        SiteSettings::default(),
    )
    .with_output(&output_path, "index.html")
    .run()
    .await?;

    assert!(matches!(
        report.status,
        ExportStatus::Failed {
            cause: LoadCause::Io,
            ..
        }
    ));
    Ok(())
}

#[test]
fn test_config_validation_rejects_bad_origin() {
    let config = SiteConfig::from_toml_str(
        "[site]\ntitle = \"t\"\nowner = \"o\"\n\n[source]\norigin = \"ftp://nope\"\n",
    )
    .unwrap();
    assert_err!(portfolio_render::utils::validation::Validate::validate(&config));
}
