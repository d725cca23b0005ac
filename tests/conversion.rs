//! End-to-end tests for the DHV to GPX conversion

use std::fs;
use std::path::Path;
use std::process::Command;

use flysites_gpx::{ConvertConfig, ConvertError, PlainText, SiteLocationType, run};
use tempfile::TempDir;

const MINIMAL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DhvXml Version="1.0">
    <FlyingSites>
        <FlyingSite>
            <SiteID>1</SiteID>
            <SiteName><![CDATA[Testgelände]]></SiteName>
            <SiteCountry>DE</SiteCountry>
            <SiteType><![CDATA[Hanggelände]]></SiteType>
            <HeightDifferenceMax>0</HeightDifferenceMax>
            <DECertified>false</DECertified>
            <Location>
                <LocationID>10</LocationID>
                <LocationType>1</LocationType>
                <LocationName>Test</LocationName>
                <Coordinates>6.5,47.2</Coordinates>
                <Altitude>0</Altitude>
                <AccessByCar>false</AccessByCar>
                <AccessByPublicTransport>false</AccessByPublicTransport>
                <AccessByFoot>false</AccessByFoot>
                <Hanggliding>false</Hanggliding>
                <Paragliding>false</Paragliding>
            </Location>
        </FlyingSite>
    </FlyingSites>
</DhvXml>"#;

const MIXED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DhvXml Version="1.0">
    <FlyingSites>
        <FlyingSite>
            <SiteID>1</SiteID>
            <SiteName>Berg</SiteName>
            <SiteType>Hanggelände</SiteType>
            <Location><LocationID>1</LocationID><LocationType>1</LocationType><LocationName>Start</LocationName><Coordinates>11.1,47.1</Coordinates></Location>
            <Location><LocationID>2</LocationID><LocationType>2</LocationType><LocationName>Tal</LocationName><Coordinates>11.0,47.0</Coordinates></Location>
            <Location><LocationID>3</LocationID><LocationType>3</LocationType><LocationName>Winde Berg</LocationName><Coordinates>11.2,47.2</Coordinates><MobileWinch>-1</MobileWinch></Location>
        </FlyingSite>
        <FlyingSite>
            <SiteID>2</SiteID>
            <SiteName>Flugplatz</SiteName>
            <SiteType>Windengelände</SiteType>
            <Location><LocationID>4</LocationID><LocationType>3</LocationType><LocationName>Winde Platz</LocationName><Coordinates>9.5,50.5</Coordinates></Location>
            <Location><LocationID>5</LocationID><LocationType>2</LocationType><LocationName>Wiese</LocationName><Coordinates>9.4,50.4</Coordinates></Location>
        </FlyingSite>
    </FlyingSites>
</DhvXml>"#;

fn config_in(dir: &TempDir) -> ConvertConfig {
    let path = |name: &str| dir.path().join(name).to_string_lossy().to_string();
    ConvertConfig::from_args([
        path("sites.xml"),
        path("start.gpx"),
        path("landing.gpx"),
        path("winch.gpx"),
    ])
    .unwrap()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_minimal_site_conversion() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.source, MINIMAL_XML).unwrap();

    let summary = run(&config, &PlainText).unwrap();
    assert_eq!(summary.sites, 1);
    assert_eq!(summary.waypoints(SiteLocationType::SlopeStart), 1);
    assert_eq!(summary.waypoints(SiteLocationType::LandingSite), 0);
    assert_eq!(summary.waypoints(SiteLocationType::WhinchStart), 0);

    let gpx = read(&config.slope_start);
    assert_eq!(gpx.matches("<wpt ").count(), 1);
    assert!(gpx.contains(r#"<wpt lat="47.2" lon="6.5">"#));
    assert!(gpx.contains("<name>Test</name>"));

    let desc_start = gpx.find("<desc>").unwrap() + "<desc>".len();
    let desc_end = gpx.find("</desc>").unwrap();
    let desc = &gpx[desc_start..desc_end];

    assert!(desc.starts_with("Startplatz - Hanggelände\n\nGelände\n\nZugang"));
    assert!(desc.contains("☐ Auto ☐ Öffentliche Verkhersmittel ☐ Zu Fuß"));
    assert!(desc.contains("☐ Gleitschirm ☐ Hängegleiter"));
    assert!(desc.ends_with("Weiteres\nDE-Zertifiziert: ☐ Nicht Zertifiziert\nUrl:"));
    assert!(!desc.contains("Startrichtung"));
    assert!(!desc.contains("Höhe"));
    assert!(!desc.contains("Abrollwinde"));

    for empty in [&config.landing_site, &config.whinch_start] {
        let gpx = read(empty);
        assert!(gpx.contains("<gpx "));
        assert_eq!(gpx.matches("<wpt").count(), 0);
    }
}

#[test]
fn test_each_category_lands_in_its_own_file() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.source, MIXED_XML).unwrap();

    run(&config, &PlainText).unwrap();

    let winch = read(&config.whinch_start);
    assert_eq!(winch.matches("<wpt ").count(), 2);
    let first = winch.find("<name>Winde Berg</name>").unwrap();
    let second = winch.find("<name>Winde Platz</name>").unwrap();
    assert!(first < second);
    assert!(winch.contains("Mobile Abrollwinde"));
    assert!(winch.contains("Stationäre Abrollwinde"));
    assert!(!winch.contains("<name>Start</name>"));
    assert!(!winch.contains("<name>Tal</name>"));

    let landing = read(&config.landing_site);
    assert_eq!(landing.matches("<wpt ").count(), 2);
    assert!(landing.contains("<name>Tal</name>"));
    assert!(landing.contains("<name>Wiese</name>"));
    assert!(!landing.contains("Abrollwinde"));

    let start = read(&config.slope_start);
    assert_eq!(start.matches("<wpt ").count(), 1);
}

#[test]
fn test_unknown_location_type_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.source,
        MINIMAL_XML.replace("<LocationType>1</LocationType>", "<LocationType>7</LocationType>"),
    )
    .unwrap();

    let err = run(&config, &PlainText).unwrap_err();
    assert!(format!("{err:#}").contains("unknown location type 7"));
    assert!(!config.slope_start.exists());
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let err = run(&config, &PlainText).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
    assert!(matches!(
        err.downcast_ref::<ConvertError>(),
        Some(ConvertError::Io { .. })
    ));
    assert!(!config.slope_start.exists());
}

#[test]
fn test_unwritable_output_keeps_earlier_files() {
    let dir = TempDir::new().unwrap();
    let path = |name: &str| dir.path().join(name).to_string_lossy().to_string();
    let landing = path("missing-dir/landing.gpx");
    let config = ConvertConfig::from_args([
        path("sites.xml"),
        path("start.gpx"),
        landing.clone(),
        path("winch.gpx"),
    ])
    .unwrap();
    fs::write(&config.source, MIXED_XML).unwrap();

    let err = run(&config, &PlainText).unwrap_err();
    assert!(err.to_string().contains(&format!("Failed to write {landing}")));
    assert!(err.downcast_ref::<std::io::Error>().is_some());

    assert_eq!(read(&config.slope_start).matches("<wpt ").count(), 1);
    assert!(!config.landing_site.exists());
    assert!(!config.whinch_start.exists());
}

#[test]
fn test_cli_rejects_missing_arguments() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("sites.xml");
    let start = dir.path().join("start.gpx");
    let landing = dir.path().join("landing.gpx");
    fs::write(&source, MINIMAL_XML).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flysites-gpx"))
        .args([&source, &start, &landing])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected 4 path arguments"));
    assert!(!start.exists());
    assert!(!landing.exists());
}

#[test]
fn test_cli_converts_with_bold_headers() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.source, MINIMAL_XML).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flysites-gpx"))
        .args([
            &config.source,
            &config.slope_start,
            &config.landing_site,
            &config.whinch_start,
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let gpx = read(&config.slope_start);
    assert!(gpx.contains("𝗭𝘂𝗴𝗮𝗻𝗴\n☐ Auto"));
    assert!(gpx.contains("𝗪𝗲𝗶𝘁𝗲𝗿𝗲𝘀\nDE-Zertifiziert"));
}
