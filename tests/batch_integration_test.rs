use staff_qr::domain::model::PayloadMode;
use staff_qr::{AppSettings, BadgePipeline, BatchEngine, CliConfig, LocalStorage};
use tempfile::TempDir;

const CONTACTS: &str = "\
PEN,first_name,last_name,designation,department,org,phone,email,linkedin,office_address,city,region,postal_code,country,website
001,Ada,Lovelace,,Eng,Acme,5551234,ada@acme.test,,,,,,,
002,Alan,Turing,Cryptanalyst,,,,,,Bletchley Park,Milton Keynes,,1234.0,UK,
";

fn config(temp_dir: &TempDir, mode: PayloadMode) -> CliConfig {
    let root = temp_dir.path();
    CliConfig {
        input_path: root.join("contacts.csv").to_string_lossy().to_string(),
        output_path: None,
        logo_path: root.join("logo.png").to_string_lossy().to_string(),
        mode,
        base_url: "http://localhost:5000".to_string(),
        serve: false,
        bind: "127.0.0.1:5000".to_string(),
        config: None,
        json_logs: false,
        verbose: false,
        monitor: false,
        settings: AppSettings::default(),
    }
}

/// 以暫存目錄當作工作目錄，輸出目錄相對於它
fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("contacts.csv"), CONTACTS).unwrap();
    temp_dir
}

#[tokio::test]
async fn test_vcard_batch_writes_one_png_per_row() {
    let temp_dir = setup();
    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::VCard)));

    let output = engine.run().await.unwrap();
    assert_eq!(output, "QR Codes");

    let out_dir = temp_dir.path().join("QR Codes");
    assert!(out_dir.join("001 - Ada Lovelace.png").is_file());
    assert!(out_dir.join("002 - Alan Turing.png").is_file());

    // 沒有 logo 時輸出為正方形 QR
    let img = image::open(out_dir.join("001 - Ada Lovelace.png")).unwrap();
    assert_eq!(img.width(), img.height());
}

#[tokio::test]
async fn test_logo_extends_canvas_below_code() {
    let temp_dir = setup();
    image::RgbaImage::from_pixel(300, 150, image::Rgba([200, 30, 30, 255]))
        .save(temp_dir.path().join("logo.png"))
        .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::VCard)));
    engine.run().await.unwrap();

    let img = image::open(temp_dir.path().join("QR Codes/001 - Ada Lovelace.png")).unwrap();
    let qr_side = img.width();
    let logo_width = (qr_side as f64 * 0.25) as u32;
    let logo_height = (150.0 * logo_width as f64 / 300.0).round() as u32;
    let padding = (logo_height as f64 * 0.05) as u32;

    assert_eq!(img.height(), qr_side + logo_height + 2 * padding);
}

#[tokio::test]
async fn test_repeated_runs_without_logo_keep_dimensions() {
    let temp_dir = setup();
    let path = temp_dir.path().join("QR Codes/002 - Alan Turing.png");

    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::VCard)));

    engine.run().await.unwrap();
    let first = image::open(&path).unwrap();
    engine.run().await.unwrap();
    let second = image::open(&path).unwrap();

    assert_eq!(
        (first.width(), first.height()),
        (second.width(), second.height())
    );
}

#[tokio::test]
async fn test_link_batch_uses_dynamic_directory() {
    let temp_dir = setup();
    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::Link)));

    let output = engine.run().await.unwrap();
    assert_eq!(output, "Dynamic qr");
    assert!(temp_dir
        .path()
        .join("Dynamic qr/001 - Ada Lovelace.png")
        .is_file());
}

#[tokio::test]
async fn test_missing_input_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::VCard)));

    assert!(engine.run().await.is_err());
    assert!(!temp_dir.path().join("QR Codes").exists());
}

#[tokio::test]
async fn test_header_only_input_still_creates_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("contacts.csv"),
        "PEN,first_name,last_name\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(BadgePipeline::new(storage, config(&temp_dir, PayloadMode::VCard)));

    let output = engine.run().await.unwrap();
    assert_eq!(output, "QR Codes");

    let out_dir = temp_dir.path().join("QR Codes");
    assert!(out_dir.is_dir());
    assert_eq!(std::fs::read_dir(out_dir).unwrap().count(), 0);
}
