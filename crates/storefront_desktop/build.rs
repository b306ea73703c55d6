use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct Catalog {
    schema_version: u32,
    apps: Vec<AppManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    app_id: String,
    label: String,
    icon: String,
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    accepts_context: bool,
    #[serde(default)]
    single_instance: bool,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    show_in_start_menu: bool,
    #[serde(default)]
    menu_group: Option<String>,
}

fn validate(manifest: &AppManifest, seen: &mut BTreeSet<String>) -> Result<(), String> {
    let id = &manifest.app_id;
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
        return Err(format!("app id `{id}` must be lowercase ascii"));
    }
    if !seen.insert(id.clone()) {
        return Err(format!("duplicate app id `{id}`"));
    }
    if manifest.title.trim().is_empty() || manifest.label.trim().is_empty() {
        return Err(format!("app `{id}` needs a title and a label"));
    }
    if let Some(group) = &manifest.menu_group {
        if !manifest.show_in_start_menu {
            return Err(format!("app `{id}` has a menu group but is hidden from the start menu"));
        }
        if group.split('/').any(|segment| segment.trim().is_empty()) {
            return Err(format!("app `{id}` menu group `{group}` has an empty level"));
        }
    }
    match (&manifest.url, &manifest.html) {
        (Some(url), None) if url.starts_with('/') => Ok(()),
        (Some(url), None) => Err(format!("app `{id}` url `{url}` must be origin-relative")),
        (None, Some(html)) if !html.trim().is_empty() => Ok(()),
        _ => Err(format!("app `{id}` must declare exactly one of `url` or `html`")),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for manifest in &catalog.apps {
        if let Err(err) = validate(manifest, &mut seen) {
            panic!("invalid app in {}: {err}", path.display());
        }
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated built-in app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
