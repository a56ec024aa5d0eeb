//! Integration tests for per-tier output generation.

use std::fs;

use pledge_model::{LayoutParams, Patron, TierGroups};
use pledge_report::{ExportOptions, stem_collisions, tier_output_path, write_tier_outputs};

fn patron(name: &str) -> Patron {
    Patron {
        name: name.to_string(),
        ..Patron::default()
    }
}

fn groups() -> TierGroups {
    let mut groups = TierGroups::new();
    groups.insert(
        "Gold Tier".to_string(),
        vec![patron("Ann"), patron("bob"), patron("Cy")],
    );
    groups.insert("Silver".to_string(), vec![patron("Dee & Co")]);
    groups
}

fn cycling_params() -> LayoutParams {
    LayoutParams {
        columns: 2,
        randomize_colors: false,
        palette: vec!["#111".to_string(), "#222".to_string()],
        ..LayoutParams::default()
    }
}

fn both() -> ExportOptions {
    ExportOptions {
        txt: true,
        svg: true,
        dry_run: false,
    }
}

#[test]
fn writes_both_artifacts_per_tier() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = write_tier_outputs(dir.path(), &groups(), &cycling_params(), both()).unwrap();

    let tiers: Vec<&str> = outputs.iter().map(|output| output.tier.as_str()).collect();
    assert_eq!(tiers, ["Gold Tier", "Silver"]);
    assert_eq!(outputs[0].patrons, 3);

    let txt = dir.path().join("Gold_Tier.txt");
    assert_eq!(outputs[0].outputs.txt.as_deref(), Some(txt.as_path()));
    assert_eq!(fs::read_to_string(&txt).unwrap(), "Ann\nbob\nCy\n");

    let svg = fs::read_to_string(dir.path().join("Gold_Tier.svg")).unwrap();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert_eq!(svg.matches("<text").count(), 6);
    // Two names in column 0, one in column 1.
    assert_eq!(svg.matches(r##"fill="#111""##).count(), 2);
    assert_eq!(svg.matches(r##"fill="#222""##).count(), 1);
}

#[test]
fn escapes_names_in_svg_but_not_in_text() {
    let dir = tempfile::tempdir().unwrap();
    write_tier_outputs(dir.path(), &groups(), &cycling_params(), both()).unwrap();

    let txt = fs::read_to_string(dir.path().join("Silver.txt")).unwrap();
    assert_eq!(txt, "Dee & Co\n");
    let svg = fs::read_to_string(dir.path().join("Silver.svg")).unwrap();
    assert!(svg.contains(">Dee &amp; Co</text>"));
}

#[test]
fn override_color_reaches_the_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let mut params = cycling_params();
    params
        .color_overrides
        .insert("Cy".to_string(), "#ff0000".to_string());
    write_tier_outputs(dir.path(), &groups(), &params, both()).unwrap();

    let svg = fs::read_to_string(dir.path().join("Gold_Tier.svg")).unwrap();
    assert_eq!(svg.matches(r##"fill="#ff0000""##).count(), 1);
    assert!(!svg.contains(r##"fill="#222""##));
}

#[test]
fn respects_disabled_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions {
        txt: true,
        svg: false,
        dry_run: false,
    };
    let outputs = write_tier_outputs(dir.path(), &groups(), &cycling_params(), options).unwrap();

    assert!(outputs.iter().all(|output| output.outputs.svg.is_none()));
    assert!(!tier_output_path(dir.path(), "Silver", "svg").exists());
    assert!(tier_output_path(dir.path(), "Silver", "txt").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("output");
    let outputs =
        write_tier_outputs(&target, &groups(), &cycling_params(), both().with_dry_run(true))
            .unwrap();

    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().all(|output| output.outputs.txt.is_none()));
    assert!(!target.exists());
}

#[test]
fn invalid_layout_fails_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let params = LayoutParams {
        columns: 0,
        ..cycling_params()
    };
    let error = write_tier_outputs(dir.path(), &groups(), &params, both()).unwrap_err();
    assert!(format!("{error:#}").contains("lay out label sheet for tier Gold Tier"));
}

#[test]
fn colliding_tier_stems_are_reported() {
    let mut groups = groups();
    groups.insert("Gold_Tier".to_string(), vec![patron("Eve")]);

    assert_eq!(stem_collisions(&groups), vec![("Gold Tier", "Gold_Tier")]);

    let dir = tempfile::tempdir().unwrap();
    let outputs = write_tier_outputs(dir.path(), &groups, &cycling_params(), both()).unwrap();
    assert_eq!(outputs.len(), 3);
    assert_eq!(
        fs::read_to_string(dir.path().join("Gold_Tier.txt")).unwrap(),
        "Eve\n"
    );
}

#[test]
fn distinct_stems_do_not_collide() {
    assert!(stem_collisions(&groups()).is_empty());
}
