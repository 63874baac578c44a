//! Tests for the non-interactive command handlers.
//!
//! Catalogs and outputs live in temporary directories so the handlers run
//! exactly as they do from the command line.

use catalog_browser::cli::{run_list, run_show, EXIT_NOT_FOUND, EXIT_SUCCESS};
use catalog_browser::config::{ListConfig, OutputConfig, ShowConfig};
use catalog_browser::ReportFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_catalog(dir: &Path, count: u32) -> PathBuf {
    let products: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": if i % 5 == 0 { format!("Travel Mug {i}") } else { format!("Notebook {i}") },
                "description": "Everyday carry",
                "price": format!("${i}.50"),
                "features": ["Recycled"],
                "buyLink": format!("https://shop.example/{i}"),
            })
        })
        .collect();
    let path = dir.join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(&products).unwrap()).unwrap();
    path
}

fn output(format: ReportFormat) -> OutputConfig {
    OutputConfig {
        format,
        no_color: true,
    }
}

fn list_config(catalog_path: PathBuf, out: PathBuf) -> ListConfig {
    ListConfig {
        catalog_path,
        search: None,
        page: 1,
        output: output(ReportFormat::Json),
        output_file: Some(out),
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_list_first_page_as_json() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 23);
    let out = dir.path().join("page.json");

    let code = run_list(list_config(catalog, out.clone())).unwrap();
    assert_eq!(code, EXIT_SUCCESS);

    let json = read_json(&out);
    assert_eq!(json["tool"]["name"], "catalog-browser");
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_count"], 3);
    assert_eq!(json["total_matches"], 23);
    assert_eq!(json["products"].as_array().unwrap().len(), 9);
    assert_eq!(json["products"][0]["buyLink"], "https://shop.example/1");

    let labels: Vec<&str> = json["controls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["« Prev", "1", "2", "3", "Next »"]);
    assert_eq!(json["controls"][0]["disabled"], true);
}

#[test]
fn test_list_search_and_page() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 100);
    let out = dir.path().join("page.json");

    let config = ListConfig {
        search: Some("MUG".to_string()),
        page: 2,
        ..list_config(catalog, out.clone())
    };
    assert_eq!(run_list(config).unwrap(), EXIT_SUCCESS);

    let json = read_json(&out);
    // Mugs are 5, 10, ..., 100
    assert_eq!(json["total_matches"], 20);
    assert_eq!(json["page"], 2);
    assert_eq!(json["search_term"], "MUG");
    assert_eq!(json["products"][0]["id"], 50);
}

#[test]
fn test_list_page_is_clamped() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 23);
    let out = dir.path().join("page.json");

    let config = ListConfig {
        page: 99,
        ..list_config(catalog, out.clone())
    };
    assert_eq!(run_list(config).unwrap(), EXIT_SUCCESS);
    assert_eq!(read_json(&out)["page"], 3);
}

#[test]
fn test_list_no_matches_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 23);
    let out = dir.path().join("page.txt");

    let config = ListConfig {
        search: Some("zzz".to_string()),
        output: output(ReportFormat::Text),
        ..list_config(catalog, out.clone())
    };
    assert_eq!(run_list(config).unwrap(), EXIT_NOT_FOUND);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("No products match your search."));
    assert!(text.contains("\"zzz\""));
}

#[test]
fn test_list_text_output_has_no_ansi_in_files() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 12);
    let out = dir.path().join("page.txt");

    let config = ListConfig {
        output: OutputConfig {
            format: ReportFormat::Text,
            no_color: false,
        },
        ..list_config(catalog, out.clone())
    };
    assert_eq!(run_list(config).unwrap(), EXIT_SUCCESS);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Notebook 1"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_list_missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = list_config(dir.path().join("missing.json"), dir.path().join("out.json"));
    assert!(run_list(config).is_err());
}

#[test]
fn test_list_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.yaml");
    fs::write(
        &path,
        "- {id: 1, title: A, description: a, price: $1}\n- {id: 1, title: B, description: b, price: $2}\n",
    )
    .unwrap();
    let err = run_list(list_config(path, dir.path().join("out.json"))).unwrap_err();
    assert!(format!("{err:#}").contains('1'));
}

#[test]
fn test_show_product_as_json() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 23);
    let out = dir.path().join("product.json");

    let config = ShowConfig {
        catalog_path: catalog,
        product_id: 15,
        output: output(ReportFormat::Json),
        output_file: Some(out.clone()),
    };
    assert_eq!(run_show(config).unwrap(), EXIT_SUCCESS);

    let json = read_json(&out);
    assert_eq!(json["product"]["id"], 15);
    assert_eq!(json["product"]["title"], "Travel Mug 15");
    assert_eq!(json["product"]["features"][0], "Recycled");
}

#[test]
fn test_show_product_as_text() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 3);
    let out = dir.path().join("product.txt");

    let config = ShowConfig {
        catalog_path: catalog,
        product_id: 2,
        output: output(ReportFormat::Text),
        output_file: Some(out.clone()),
    };
    assert_eq!(run_show(config).unwrap(), EXIT_SUCCESS);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("#2"));
    assert!(text.contains("Notebook 2"));
    assert!(text.contains("Recycled"));
    assert!(text.contains("Buy: https://shop.example/2"));
}

#[test]
fn test_show_unknown_id_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(dir.path(), 3);
    let out = dir.path().join("product.json");

    let config = ShowConfig {
        catalog_path: catalog,
        product_id: 999,
        output: output(ReportFormat::Json),
        output_file: Some(out.clone()),
    };
    assert_eq!(run_show(config).unwrap(), EXIT_NOT_FOUND);
    assert!(!out.exists());
}
