//! End-to-end extraction from page markup to a finished document

use devspec::{
    extract_document, write_document, ExtractOptions, OutputFormat, OutputOptions, SchemaContext,
    Value, UNKNOWN,
};

const SCHEMA: &str = r#"
required:
  - name
  - vendor
  - vendor_short
  - release
  - cpu
  - cpu_cores
  - cpu_freq
  - gpu
  - screen
  - network
  - cameras
  - peripherals
  - ram
  - storage
  - tree
  - kernel
  - codename
  - architecture
properties:
  vendor:
    enum:
      - Google
      - Samsung
      - Sony
      - Sony Ericsson
  bluetooth:
    properties:
      spec:
        enum:
          - "2.1 + EDR"
          - "4.0"
          - "4.0 + LE"
          - "5"
"#;

const PAGE: &str = r##"<!DOCTYPE html>
<html><body>
<div class="article-info-name">
<h1 class="specs-phone-name-title" data-spec="modelname">Samsung Galaxy S10</h1>
</div>
<div id="specs-list">
<table cellspacing="0">
<tr class="tr-hover"><th rowspan="15" scope="row">Network</th><td class="ttl">Technology</td><td class="nfo"><a href="#" class="link-network-detail" data-spec="nettech">GSM / CDMA / HSPA / EVDO / LTE</a></td></tr>
<tr class="tr-toggle"><td class="ttl">2G bands</td><td class="nfo" data-spec="net2g">GSM 850 / 900 / 1800 / 1900 - SIM 1 &amp; SIM 2 (dual-SIM model only)</td></tr>
<tr class="tr-toggle" data-spec-optional=""><td class="ttl">&nbsp;</td><td class="nfo">CDMA 800 / 1900 - USA</td></tr>
<tr class="tr-toggle"><td class="ttl">3G bands</td><td class="nfo" data-spec="net3g">HSDPA 850 / 900 / 1700(AWS) / 1900 / 2100</td></tr>
<tr class="tr-toggle"><td class="ttl">4G bands</td><td class="nfo" data-spec="net4g">1, 2, 3, 4, 5, 7, 8, 12, 13, 17, 18, 19, 20, 25, 26, 28, 32, 38, 39, 40, 41, 66</td></tr>
<tr class="tr-toggle"><td class="ttl">Speed</td><td class="nfo" data-spec="speed">HSPA 42.2/5.76 Mbps, LTE-A (7CA) Cat20 2000/150 Mbps</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="2" scope="row">Launch</th><td class="ttl">Announced</td><td class="nfo" data-spec="year">2019, February 20</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="4" scope="row">Body</th><td class="ttl">Dimensions</td><td class="nfo" data-spec="dimensions">149.9 x 70.4 x 7.8 mm (5.90 x 2.77 x 0.31 in)</td></tr>
<tr><td class="ttl">Size</td><td class="nfo"><span data-spec="displaysize-hl">6.1"</span></td></tr>
<tr><td class="ttl">Resolution</td><td class="nfo" data-spec="displayresolution">1440 x 3040 pixels, 19:9 ratio (~550 ppi density)</td></tr>
<tr><td class="ttl">Models</td><td class="nfo" data-spec="models">SM-G973F, SM-G973U, SM-G973W</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="4" scope="row">Platform</th><td class="ttl">CPU</td><td class="nfo" data-spec="cpu">Octa-core (2x2.73 GHz Mongoose M4 &amp; 2x2.31 GHz Cortex-A75 &amp; 4x1.95 GHz Cortex-A55)</td></tr>
<tr><td class="ttl">GPU</td><td class="nfo" data-spec="gpu">Mali-G76 MP12</td></tr>
<tr><td class="ttl">Internal</td><td class="nfo" data-spec="internalmemory">128GB 8GB RAM, 512GB 8GB RAM</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="4" scope="row">Main Camera</th><td class="ttl">Modules</td><td class="nfo" data-spec="cam1modules">12 MP, f/1.5-2.4, 26mm (wide)<br>
12 MP, f/2.4, 52mm (telephoto)<br>
16 MP, f/2.2, 12mm (ultrawide)</td></tr>
<tr><th rowspan="4" scope="row">Selfie camera</th><td class="ttl">Modules</td><td class="nfo" data-spec="cam2modules">10 MP, f/1.9, 26mm (wide)</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="9" scope="row">Comms</th><td class="ttl">Bluetooth</td><td class="nfo" data-spec="bluetooth">5.0, A2DP, LE, aptX</td></tr>
<tr><td class="ttl">Positioning</td><td class="nfo" data-spec="gps">Yes, with A-GPS, GLONASS, BDS, GALILEO</td></tr>
<tr><td class="ttl">NFC</td><td class="nfo" data-spec="nfc">Yes</td></tr>
<tr><td class="ttl">Radio</td><td class="nfo" data-spec="radio">No</td></tr>
<tr><td class="ttl">USB</td><td class="nfo" data-spec="usb">USB Type-C 3.1</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="9" scope="row">Features</th><td class="ttl">Sensors</td><td class="nfo" data-spec="sensors">Fingerprint (under display, ultrasonic), accelerometer, gyro, proximity, compass, barometer</td></tr>
</table>
<table cellspacing="0">
<tr><th rowspan="4" scope="row">Battery</th><td class="ttl">Type</td><td class="nfo" data-spec="batdescription1">Li-Ion 3400 mAh, non-removable</td></tr>
<tr><td class="ttl">Capacity</td><td class="nfo"><span data-spec="batsize-hl">3400</span><span data-spec="battype-hl">Li-Ion</span></td></tr>
</table>
</div>
</body></html>"##;

fn schema() -> SchemaContext {
    SchemaContext::from_yaml_str(SCHEMA).unwrap()
}

fn text(value: &str) -> Option<Value> {
    Some(Value::from(value))
}

#[test]
fn test_full_page_extraction() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    assert_eq!(document.get("name").cloned(), text("Galaxy S10"));
    assert_eq!(document.get("vendor").cloned(), text("Samsung"));
    assert_eq!(document.get("vendor_short").cloned(), text("samsung"));
    assert_eq!(document.get("tree").cloned(), text("android_device_samsung_CODENAME"));
    assert_eq!(document.get("kernel").cloned(), text("android_kernel_samsung_CODENAME"));
    assert_eq!(document.get("release").cloned(), text("2019-02-20"));

    assert_eq!(document.get("cpu_cores").cloned(), text("8"));
    assert_eq!(
        document.get("cpu_freq").cloned(),
        text("2 x 2.73 GHz + 2 x 2.31 GHz + 4 x 1.95 GHz")
    );
    assert_eq!(document.get("cpu").cloned(), text("Cortex-A75 & Cortex-A55"));
    assert_eq!(document.get("gpu").cloned(), text("ARM Mali-G76 MP12"));

    assert_eq!(document.get("height").cloned(), text("149.9 mm (5.90 in)"));
    assert_eq!(document.get("width").cloned(), text("70.4 mm (2.77 in)"));
    assert_eq!(document.get("depth").cloned(), text("7.8 mm (0.31 in)"));
    assert_eq!(document.get("screen").cloned(), text("155 mm (6.1 in)"));
    assert_eq!(document.get("screen_ppi").cloned(), text("~550"));
    assert_eq!(document.get("screen_res").cloned(), text("1440x3040"));

    assert_eq!(
        document.get("models"),
        Some(&Value::strings(["SM-G973F", "SM-G973U", "SM-G973W"]))
    );
    assert_eq!(
        document.get("network"),
        Some(&Value::strings(["2G GSM", "2G CDMA", "3G UMTS", "4G LTE"]))
    );
    assert_eq!(document.get("ram").cloned(), text("8 GB"));
    assert_eq!(document.get("storage").cloned(), text("128/512 GB"));
}

#[test]
fn test_nested_battery_and_bluetooth() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    assert_eq!(
        document.get_nested("battery", "removable"),
        Some(&Value::Bool(false))
    );
    assert_eq!(document.get_nested("battery", "capacity").cloned(), text("3400"));
    assert_eq!(document.get_nested("battery", "tech").cloned(), text("Li-Ion"));

    // LE is only carried alongside 4.0
    assert_eq!(document.get_nested("bluetooth", "spec").cloned(), text("5"));
    assert_eq!(
        document.get_nested("bluetooth", "profiles"),
        Some(&Value::strings(["A2DP + aptX"]))
    );
}

#[test]
fn test_cameras_and_peripherals() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    let cameras = document.get("cameras").and_then(Value::as_list).unwrap();
    let infos: Vec<&str> = cameras
        .iter()
        .filter_map(|camera| camera.as_map()?.get("info")?.as_str())
        .collect();
    assert_eq!(infos, vec!["12 MP", "12 MP", "16 MP", "10 MP"]);
    assert!(cameras
        .iter()
        .all(|camera| camera.as_map().unwrap()["flash"] == Value::from("")));

    assert_eq!(
        document.get("peripherals"),
        Some(&Value::strings([
            "A-GPS",
            "Accelerometer",
            "Barometer",
            "BeiDou",
            "Compass",
            "Fingerprint",
            "Galileo",
            "GLONASS",
            "GPS",
            "Gyroscope",
            "NFC",
            "Proximity sensor",
        ]))
    );
}

#[test]
fn test_unresolved_keys_keep_sentinel() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    assert_eq!(document.unresolved(), vec!["codename", "architecture"]);
    assert_eq!(document.get("codename").cloned(), text(UNKNOWN));
}

#[test]
fn test_empty_page_keeps_every_sentinel() {
    let schema = schema();
    let document = extract_document("<html><body></body></html>", &schema, &ExtractOptions::default());

    for key in &schema.required {
        assert!(document.get(key).unwrap().is_unknown(), "{} resolved", key);
    }
    assert_eq!(document.len(), schema.required.len() + 2);
    assert!(document.get_nested("battery", "removable").unwrap().is_unknown());
    assert!(document.get_nested("battery", "capacity").unwrap().is_unknown());
    assert!(document.get_nested("bluetooth", "spec").unwrap().is_unknown());
}

#[test]
fn test_bluetooth_four_zero_carries_le() {
    let page = PAGE.replace("5.0, A2DP, LE, aptX", "4.0, A2DP, LE");
    let document = extract_document(&page, &schema(), &ExtractOptions::default());

    assert_eq!(document.get_nested("bluetooth", "spec").cloned(), text("4.0 + LE"));
    assert_eq!(
        document.get_nested("bluetooth", "profiles"),
        Some(&Value::strings(["A2DP"]))
    );
}

#[test]
fn test_legacy_memory_collapse() {
    let page = PAGE.replace(
        "128GB 8GB RAM, 512GB 8GB RAM",
        "128GB 8GB RAM, 128GB 6GB RAM",
    );

    let fixed = extract_document(&page, &schema(), &ExtractOptions::default());
    assert_eq!(fixed.get("ram").cloned(), text("8/6 GB"));
    assert_eq!(fixed.get("storage").cloned(), text("128 GB"));

    let legacy = ExtractOptions {
        legacy_memory_collapse: true,
    };
    let collapsed = extract_document(&page, &schema(), &legacy);
    assert_eq!(collapsed.get("ram").cloned(), text("128 GB"));
    assert_eq!(collapsed.get("storage").cloned(), text("128/128 GB"));
}

#[test]
fn test_yaml_output_sorted() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    let mut buf = Vec::new();
    write_document(&mut buf, &document, &OutputOptions::default()).unwrap();
    let yaml = String::from_utf8(buf).unwrap();

    let architecture = yaml.find("architecture:").unwrap();
    let vendor = yaml.find("vendor:").unwrap();
    assert!(architecture < vendor);
    assert!(yaml.contains("name: Galaxy S10"));
    assert!(yaml.contains("- 4G LTE"));

    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed["battery"]["removable"], serde_yaml::Value::Bool(false));
    assert_eq!(parsed["release"].as_str(), Some("2019-02-20"));
}

#[test]
fn test_json_output() {
    let document = extract_document(PAGE, &schema(), &ExtractOptions::default());

    let mut buf = Vec::new();
    let options = OutputOptions {
        format: OutputFormat::Json,
        sort_keys: false,
    };
    write_document(&mut buf, &document, &options).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed["cpu_cores"], "8");
    assert_eq!(parsed["bluetooth"]["spec"], "5");
    assert_eq!(parsed["codename"], UNKNOWN);
}
