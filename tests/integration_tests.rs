//! Integration tests for the showroom CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a showroom command isolated from the user's environment
fn showroom(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showroom").unwrap();
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".xdg"))
        .env("SHOWROOM_AUTHOR", "tester")
        .env_remove("SHOWROOM_CURRENCY")
        .env_remove("SHOWROOM_LOG");
    cmd
}

/// Helper to create a seeded workspace in a temp directory
fn setup_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp).arg("init").assert().success();
    tmp
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn ids(tmp: &TempDir, args: &[&str]) -> Vec<String> {
    let mut full = args.to_vec();
    full.extend(["--format", "id"]);
    stdout_of(showroom(tmp).args(&full))
        .lines()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse the vehicle inventory"))
        .stdout(predicate::str::contains("vehicle"))
        .stdout(predicate::str::contains("inquiry"));
}

#[test]
fn test_version_displays() {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("showroom"));
}

#[test]
fn test_outside_workspace_fails() {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp)
        .args(["vehicle", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".showroom"));
}

// ============================================================================
// Init Tests
// ============================================================================

#[test]
fn test_init_seeds_every_collection() {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized showroom workspace"))
        .stdout(predicate::str::contains("Seeded 5 collection(s)"));

    let store = tmp.path().join(".showroom/store");
    for key in [
        "emphathon_cars",
        "emphathon_inquiries",
        "emphathon_preorders",
        "emphathon_testimonials",
        "emphathon_hero_media",
    ] {
        assert!(store.join(format!("{}.json", key)).exists(), "{} missing", key);
    }
    assert!(tmp.path().join(".showroom/config.yaml").exists());
}

#[test]
fn test_init_twice_reports_existing() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_keeps_existing_data() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["testimonial", "new", "--name", "Chidi", "--content", "Superb", "--rating", "4"])
        .assert()
        .success();

    showroom(&tmp).args(["init", "--force"]).assert().success();

    let out = stdout_of(showroom(&tmp).args(["testimonial", "list"]));
    assert!(out.contains("Chidi"));
}

// ============================================================================
// Vehicle Tests
// ============================================================================

#[test]
fn test_vehicle_list_shows_seed_inventory() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolls Royce Phantom Series II"))
        .stdout(predicate::str::contains("$450,000"))
        .stdout(predicate::str::contains("4 vehicle(s) found."));
}

#[test]
fn test_vehicle_list_filters() {
    let tmp = setup_test_workspace();

    assert_eq!(ids(&tmp, &["vehicle", "list", "--search", "rover"]), vec!["3"]);
    assert_eq!(ids(&tmp, &["vehicle", "list", "--search", "URUS"]), vec!["4"]);
    assert_eq!(
        ids(&tmp, &["vehicle", "list", "--brand", "Mercedes-Benz"]),
        vec!["2"]
    );
    assert_eq!(
        ids(&tmp, &["vehicle", "list", "--category", "corporate"]),
        vec!["2", "3"]
    );
    assert_eq!(
        ids(&tmp, &["vehicle", "list", "--brand", "All", "--category", "All"]),
        vec!["1", "2", "3", "4"]
    );
    assert_eq!(
        ids(&tmp, &["vehicle", "list", "--availability", "pre-order"]),
        vec!["3"]
    );
}

#[test]
fn test_vehicle_list_no_match() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "list", "--brand", "Lamborghini", "--category", "Corporate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Match Found"))
        .stdout(predicate::str::contains(
            "Try adjusting your filters or search keywords.",
        ));
}

#[test]
fn test_vehicle_list_count_and_limit() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "list", "--count"])
        .assert()
        .success()
        .stdout("4\n");
    assert_eq!(ids(&tmp, &["vehicle", "list", "--limit", "2"]), vec!["1", "2"]);
}

#[test]
fn test_vehicle_list_json_uses_stored_shape() {
    let tmp = setup_test_workspace();
    let out = stdout_of(showroom(&tmp).args(["vehicle", "list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let first = &parsed[0];
    assert_eq!(first["id"], "1");
    assert_eq!(first["type"], "Individual");
    assert_eq!(first["availability"], "In-Stock");
    assert!(first.get("fuelType").is_some());
}

#[test]
fn test_vehicle_brands_in_first_seen_order() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "brands"])
        .assert()
        .success()
        .stdout("All\nRolls Royce\nMercedes-Benz\nRange Rover\nLamborghini\n");
}

#[test]
fn test_vehicle_show_detail() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Range Rover Autobiography LWB"))
        .stdout(predicate::str::contains("Transmission"))
        .stdout(predicate::str::contains("Reserve Now"));

    showroom(&tmp)
        .args(["vehicle", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purchase Acquisition"))
        .stdout(predicate::str::contains("Brand New"));
}

#[test]
fn test_vehicle_show_unknown_fails() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["vehicle", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no vehicles record matches '99'"));
}

#[test]
fn test_vehicle_new_is_prepended() {
    let tmp = setup_test_workspace();
    let out = stdout_of(showroom(&tmp).args([
        "vehicle",
        "new",
        "--brand",
        "Bentley",
        "--model",
        "Bentayga EWB",
        "--year",
        "2025",
        "--price",
        "260000",
        "--category",
        "Corporate",
        "--feature",
        "Mulliner Seats,Naim Audio",
        "--format",
        "id",
    ]));
    let new_id = out.trim().to_string();
    assert_eq!(new_id.len(), 26);

    let listed = ids(&tmp, &["vehicle", "list"]);
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0], new_id);
}

#[test]
fn test_vehicle_new_rejects_negative_price() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "vehicle", "new", "--brand", "Audi", "--model", "R8", "--year", "2023", "--price",
            "-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price"));
    assert_eq!(ids(&tmp, &["vehicle", "list"]).len(), 4);
}

#[test]
fn test_vehicle_import_csv() {
    let tmp = setup_test_workspace();
    let csv_path = tmp.path().join("cars.csv");
    fs::write(
        &csv_path,
        "brand,model,year,price,type,availability,features\n\
         Bentley,Continental GT,2024,240000,Individual,In-Stock,W12;Mulliner\n\
         Maybach,S680,2025,230000,Corporate,Pre-Order,\n",
    )
    .unwrap();

    showroom(&tmp)
        .args(["vehicle", "import", "cars.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicles created: 2"));

    assert_eq!(
        ids(&tmp, &["vehicle", "list", "--search", "continental"]).len(),
        1
    );
    let out = stdout_of(showroom(&tmp).args(["vehicle", "list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["brand"], "Bentley");
    assert_eq!(parsed[1]["brand"], "Maybach");
    assert_eq!(parsed.as_array().unwrap().len(), 6);
}

#[test]
fn test_vehicle_import_dry_run_writes_nothing() {
    let tmp = setup_test_workspace();
    let csv_path = tmp.path().join("cars.csv");
    fs::write(&csv_path, "brand,model,year,price\nBentley,Flying Spur,2024,220000\n").unwrap();

    showroom(&tmp)
        .args(["vehicle", "import", "cars.csv", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run complete"));
    assert_eq!(ids(&tmp, &["vehicle", "list"]).len(), 4);
}

// ============================================================================
// Inquiry Tests
// ============================================================================

#[test]
fn test_inquiry_list_empty_state() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["inquiry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active inquiries."));
}

#[test]
fn test_inquiry_new_and_list() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "inquiry",
            "new",
            "--type",
            "walk-in",
            "--name",
            "Ada Obi",
            "--email",
            "ada@example.com",
            "--car",
            "4",
            "--message",
            "Saturday viewing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Received walk-in inquiry"));

    showroom(&tmp)
        .args(["inquiry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Obi"))
        .stdout(predicate::str::contains("Walk-In"))
        .stdout(predicate::str::contains("Pending"));

    let out = stdout_of(showroom(&tmp).args(["inquiry", "list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["carId"], "4");
    assert_eq!(parsed[0]["type"], "Walk-In");
}

#[test]
fn test_inquiry_corporate_folds_form_fields() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "inquiry",
            "new",
            "--type",
            "corporate",
            "--name",
            "Tunde",
            "--email",
            "fleet@acme.ng",
            "--organization",
            "Acme Holdings",
            "--industry",
            "Energy",
            "--fleet-size",
            "15+",
        ])
        .assert()
        .success();

    let out = stdout_of(showroom(&tmp).args(["inquiry", "list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let message = parsed[0]["message"].as_str().unwrap();
    assert!(message.contains("Organization: Acme Holdings"));
    assert!(message.contains("Fleet Size: 15+ Vehicles"));
}

#[test]
fn test_inquiry_rejects_invalid_email() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["inquiry", "new", "--name", "X", "--email", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid email"));
}

#[test]
fn test_inquiry_status_update() {
    let tmp = setup_test_workspace();
    let id = stdout_of(showroom(&tmp).args([
        "inquiry", "new", "--name", "Ada", "--email", "ada@example.com", "--format", "id",
    ]))
    .trim()
    .to_string();

    showroom(&tmp)
        .args(["inquiry", "status", &id, "contacted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contacted"));

    assert_eq!(ids(&tmp, &["inquiry", "list", "--status", "contacted"]), vec![id]);
    assert!(ids(&tmp, &["inquiry", "list", "--status", "pending"]).is_empty());
}

// ============================================================================
// Pre-order Tests
// ============================================================================

#[test]
fn test_preorder_flow() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "preorder",
            "new",
            "--car",
            "3",
            "--name",
            "Ngozi",
            "--email",
            "ngozi@example.com",
            "--deposit",
            "50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50,000"));

    showroom(&tmp)
        .args(["preorder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending Reserves"))
        .stdout(predicate::str::contains("Range Rover Autobiography LWB"))
        .stdout(predicate::str::contains("End of pre-order history."));

    let out = stdout_of(showroom(&tmp).args(["preorder", "list", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["userId"], "tester");
    assert_eq!(parsed[0]["status"], "Pending");
}

#[test]
fn test_preorder_warns_for_in_stock_vehicle() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "preorder", "new", "--car", "1", "--name", "Ngozi", "--email", "n@example.com",
            "--deposit", "1000",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("not Pre-Order"));
}

#[test]
fn test_preorder_status_cancel() {
    let tmp = setup_test_workspace();
    let id = stdout_of(showroom(&tmp).args([
        "preorder", "new", "--car", "3", "--name", "N", "--email", "n@example.com",
        "--deposit", "100", "--format", "id",
    ]))
    .trim()
    .to_string();

    showroom(&tmp)
        .args(["preorder", "status", &id[..8], "cancelled"])
        .assert()
        .success();
    assert_eq!(ids(&tmp, &["preorder", "list", "--status", "cancelled"]), vec![id]);
}

// ============================================================================
// Hero / Home Tests
// ============================================================================

#[test]
fn test_home_shows_hero_showroom_and_testimonials() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Experience Pure Opulence"))
        .stdout(predicate::str::contains("Current Showroom"))
        .stdout(predicate::str::contains("Range Rover Autobiography LWB"))
        .stdout(predicate::str::contains("Lamborghini").not())
        .stdout(predicate::str::contains("Aliko Dangote"));
}

#[test]
fn test_home_respects_currency_config() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["config", "set", "currency", "ngn"])
        .assert()
        .success();
    showroom(&tmp)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("₦450,000"));
}

#[test]
fn test_hero_toggle_hides_slide() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["hero", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inactive"));

    assert_eq!(ids(&tmp, &["hero", "list", "--active"]), vec!["2"]);
    showroom(&tmp)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Executive Fleet Solutions"))
        .stdout(predicate::str::contains("Experience Pure Opulence").not());
}

#[test]
fn test_hero_play_rotates_and_wraps() {
    let tmp = setup_test_workspace();
    let out = stdout_of(showroom(&tmp).args([
        "hero",
        "play",
        "--interval-ms",
        "50",
        "--cycles",
        "2",
    ]));
    let titles: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Experience") || l.starts_with("Executive"))
        .collect();
    assert_eq!(titles.len(), 3);
    assert!(titles[0].starts_with("Experience"));
    assert!(titles[1].starts_with("Executive"));
    assert!(titles[2].starts_with("Experience"));
}

#[test]
fn test_hero_play_single_slide_does_not_rotate() {
    let tmp = setup_test_workspace();
    showroom(&tmp).args(["hero", "toggle", "2"]).assert().success();
    showroom(&tmp)
        .args(["hero", "play", "--interval-ms", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to rotate"));
}

#[test]
fn test_hero_add_prepends_active_slide() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "hero",
            "add",
            "--url",
            "https://example.com/launch.mp4",
            "--title",
            "Launch Night",
            "--type",
            "video",
        ])
        .assert()
        .success();
    showroom(&tmp)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch Night"));
}

#[test]
fn test_hero_add_inactive_slide_stays_hidden() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "hero", "add", "--url", "/media/preview.jpg", "--title", "Private Preview",
            "--inactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inactive"));

    let active = stdout_of(showroom(&tmp).args(["hero", "list", "--active"]));
    assert!(!active.contains("Private Preview"));
    let all = stdout_of(showroom(&tmp).args(["hero", "list"]));
    assert!(all.contains("Private Preview"));
}

// ============================================================================
// Admin / Store / Validate Tests
// ============================================================================

#[test]
fn test_admin_dashboard() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .arg("admin")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory Value"))
        .stdout(predicate::str::contains("Pre-Orders"))
        .stdout(predicate::str::contains("Hero Media"));

    let out = stdout_of(showroom(&tmp).args(["admin", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["vehicles"], 4);
    assert_eq!(parsed["activeSlides"], 2);
}

#[test]
fn test_store_reset_reseeds_on_next_access() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args([
            "vehicle", "new", "--brand", "Audi", "--model", "RS Q8", "--year", "2024",
            "--price", "130000",
        ])
        .assert()
        .success();
    assert_eq!(ids(&tmp, &["vehicle", "list"]).len(), 5);

    showroom(&tmp)
        .args(["store", "reset", "vehicles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset vehicles"));
    assert!(!tmp.path().join(".showroom/store/emphathon_cars.json").exists());

    assert_eq!(ids(&tmp, &["vehicle", "list"]), vec!["1", "2", "3", "4"]);
    assert!(tmp.path().join(".showroom/store/emphathon_cars.json").exists());
}

#[test]
fn test_store_dump_prints_raw_json() {
    let tmp = setup_test_workspace();
    let out = stdout_of(showroom(&tmp).args(["store", "dump", "hero-media"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_validate_clean_workspace() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All collections passed validation!"));
}

#[test]
fn test_validate_reports_schema_violations() {
    let tmp = setup_test_workspace();
    fs::write(
        tmp.path().join(".showroom/store/emphathon_testimonials.json"),
        r#"[{"id":"1","name":"A","role":"","content":"x","rating":9,"avatar":""}]"#,
    )
    .unwrap();

    showroom(&tmp)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("testimonials - 1 error(s)"));
}

#[test]
fn test_corrupt_store_is_reported() {
    let tmp = setup_test_workspace();
    fs::write(
        tmp.path().join(".showroom/store/emphathon_cars.json"),
        "[{\"id\": \"1\",",
    )
    .unwrap();

    showroom(&tmp)
        .args(["vehicle", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("emphathon_cars"));
}

#[test]
fn test_emptied_store_file_is_reseeded() {
    let tmp = setup_test_workspace();
    fs::write(tmp.path().join(".showroom/store/emphathon_cars.json"), "").unwrap();

    assert_eq!(
        ids(&tmp, &["vehicle", "list"]),
        vec!["1", "2", "3", "4"]
    );
    let stored = fs::read_to_string(tmp.path().join(".showroom/store/emphathon_cars.json")).unwrap();
    assert!(stored.contains("Phantom Series II"));
}

// ============================================================================
// Config / Completions Tests
// ============================================================================

#[test]
fn test_config_set_and_show() {
    let tmp = setup_test_workspace();
    showroom(&tmp)
        .args(["config", "set", "hero_interval_ms", "2500"])
        .assert()
        .success();
    showroom(&tmp)
        .args(["config", "show", "hero_interval_ms"])
        .assert()
        .success()
        .stdout("2500\n");
    showroom(&tmp)
        .args(["config", "set", "currency", "GBP"])
        .assert()
        .failure();
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    showroom(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showroom"));
}
