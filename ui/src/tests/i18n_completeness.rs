use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalogue::PRODUCTS;
use crate::i18n::Language;

const FTL_FILENAME: &str = "iherd-ui.ftl";
const I18N_DIR: &str = "i18n";

/// Message ids of a Fluent file: every `<id> =` line. Comments, terms and
/// blank lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-' )
}

/// Extract the message id of every `t!(lang, "...")` call under `src/`.
/// Only a literal second argument is recognised; dynamic product ids are
/// covered by `product_copy`.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    let p = entry.path();
                    // Build output never holds sources worth scanning.
                    if p.file_name().and_then(|s| s.to_str()) == Some("target") {
                        continue;
                    }
                    stack.push(p);
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let bytes = content.as_bytes();
        let needle = b"t!(";
        let mut i = 0;
        while let Some(pos) = bytes[i..]
            .windows(needle.len())
            .position(|w| w == needle)
        {
            let start = i + pos + needle.len();
            i = start;
            // Skip the language expression up to the first top-level comma.
            let Some(comma) = bytes[start..].iter().position(|b| *b == b',' || *b == b')') else {
                break;
            };
            let mut j = start + comma;
            if bytes[j] != b',' {
                continue;
            }
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j >= bytes.len() || bytes[j] != b'"' {
                continue;
            }
            let key_start = j + 1;
            let Some(len) = bytes[key_start..].iter().position(|b| *b == b'"') else {
                break;
            };
            if let Ok(key) = std::str::from_utf8(&bytes[key_start..key_start + len]) {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
            i = key_start + len + 1;
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

/// Ids read at runtime through `Catalog::text` rather than `t!`.
fn catalogue_keys() -> BTreeSet<String> {
    PRODUCTS.iter().flat_map(|p| p.message_ids()).collect()
}

fn reference_keys() -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(I18N_DIR)
        .join("en")
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&path).expect("reference FTL file readable");
    let keys = parse_ftl_keys(&content);
    assert!(!keys.is_empty(), "no message keys parsed from {path:?}");
    keys
}

fn source_keys() -> HashSet<String> {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    extract_translation_keys_from_source(&src_root)
}

#[test]
fn locale_folders_match_languages() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    let mut expected: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    expected.sort();
    assert_eq!(collect_locale_dirs(&i18n_root), expected);
}

#[test]
fn referenced_keys_exist_in_reference_locale() {
    let defined = reference_keys();
    let mut missing: Vec<String> = source_keys()
        .into_iter()
        .chain(catalogue_keys())
        .filter(|k| !defined.contains(k))
        .collect();
    missing.sort();
    missing.dedup();
    assert!(
        missing.is_empty(),
        "referenced ids missing from en ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_reference_key_is_used() {
    let used: HashSet<String> = source_keys().into_iter().chain(catalogue_keys()).collect();
    let orphans: Vec<String> = reference_keys()
        .into_iter()
        .filter(|k| !used.contains(k))
        .collect();
    assert!(
        orphans.is_empty(),
        "en defines ids nothing renders ({}):\n{}",
        orphans.len(),
        orphans.join("\n")
    );
}

#[test]
fn scanner_reads_language_argument_forms() {
    let dir = std::env::temp_dir().join(format!("iherd-scan-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    fs::write(
        dir.join("sample.rs"),
        // Written with `T!(` so this file's own scan does not pick the ids up.
        r#"let a = T!(lang, "alpha-one");
let b = T!(
    Language::En,
    "beta-two",
    n = "1"
);
let c = format!("{}", x);
let d = T!(lang, dynamic_id);"#
            .replace("T!(", "t!("),
    )
    .expect("sample written");
    let keys = extract_translation_keys_from_source(&dir);
    let _ = fs::remove_dir_all(&dir);

    let mut keys: Vec<_> = keys.into_iter().collect();
    keys.sort();
    assert_eq!(keys, ["alpha-one", "beta-two"]);
}
