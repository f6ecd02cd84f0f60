//! Integration test: fake game install on disk, full lookup from root to URL.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use wishlinks_core::config::DEFAULT_URL_FILTER;
use wishlinks_core::wish_link::find_wish_link;
use wishlinks_core::Error;

fn write_cache(game: &Path, version: &str, content: &[u8]) -> PathBuf {
    let dir = game
        .join("GenshinImpact_Data")
        .join("webCaches")
        .join(version)
        .join("Cache")
        .join("Cache_Data");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("data_2");
    fs::write(&path, content).unwrap();
    path
}

const API: &str = "https://public-operation-hk4e-sg.hoyoverse.com/gacha_info/api/getGachaLog";

fn cache_blob() -> Vec<u8> {
    let mut blob = Vec::new();
    blob.extend_from_slice(b"\x00\x01garbage1/0/");
    blob.extend_from_slice(
        format!("{API}?win_mode=fullscreen&gacha_type=301&page=1&end_id=0").as_bytes(),
    );
    blob.extend_from_slice(b"\x00more1/0/");
    blob.extend_from_slice(format!("{API}?gacha_type=200&page=1&end_id=0").as_bytes());
    blob.extend_from_slice(
        b"\x00\x00https://webstatic.example/index.html?gacha_type=100&end_id=0\x00",
    );
    blob.extend_from_slice(format!("{API}?gacha_type=200&page=2&end_id=1700000000").as_bytes());
    blob.extend_from_slice(b" \x7f");
    blob.extend_from_slice(format!("{API}?gacha_type=301&page=1&end_id=0&lang=en").as_bytes());
    blob.extend_from_slice(b"\x00tail");
    blob
}

#[test]
fn finds_lowest_numeric_gacha_type_in_newest_cache() {
    let root = tempdir().unwrap();
    let game = root.path().join("Genshin Impact");
    write_cache(&game, "2.43.0.0", format!("\x00{API}?gacha_type=1&end_id=0\x00").as_bytes());
    let data_file = write_cache(&game, "2.44.1.0", &cache_blob());

    let link = find_wish_link(root.path(), DEFAULT_URL_FILTER)
        .unwrap()
        .expect("a wish link");

    // 100 is filtered out by the substring, 1 lives in an older cache.
    assert_eq!(link.gacha_type, "200");
    assert_eq!(link.url, format!("{API}?gacha_type=200&page=1&end_id=0"));
    assert_eq!(link.data_file, data_file);
}

#[test]
fn root_may_point_at_install_directly() {
    let root = tempdir().unwrap();
    write_cache(root.path(), "3.0.0.0", &cache_blob());

    let link = find_wish_link(root.path(), DEFAULT_URL_FILTER)
        .unwrap()
        .expect("a wish link");
    assert_eq!(link.gacha_type, "200");
}

#[test]
fn no_matching_url_is_none() {
    let root = tempdir().unwrap();
    write_cache(
        root.path(),
        "3.0.0.0",
        b"\x00http://insecure.example/gacha_info/api/getGachaLog?gacha_type=1&end_id=0\x00",
    );

    assert_eq!(find_wish_link(root.path(), DEFAULT_URL_FILTER).unwrap(), None);
}

#[test]
fn missing_install_is_read_error() {
    let root = tempdir().unwrap();
    let err = find_wish_link(root.path(), DEFAULT_URL_FILTER).unwrap_err();
    assert!(matches!(err, Error::ReadWebCaches { .. }), "got {err:?}");
}

#[test]
fn empty_root_is_rejected() {
    let err = find_wish_link(Path::new(" "), DEFAULT_URL_FILTER).unwrap_err();
    assert!(matches!(err, Error::EmptyRoot), "got {err:?}");
}
