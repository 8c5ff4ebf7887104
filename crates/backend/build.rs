use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../data/associations.json");

    // Get the output directory where the binary will be placed
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    // We need to go to: target/debug or target/release
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    // Copy config.toml next to the binary if it exists
    let source_config = workspace_root.join("config.toml");
    let dest_config = target_dir.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Copy the precomputed associations dataset next to the binary so the
    // default relative dataset path resolves in the deployed layout
    let source_dataset = workspace_root.join("data").join("associations.json");
    if source_dataset.exists() {
        let dest_data_dir = target_dir.join("data");
        fs::create_dir_all(&dest_data_dir)
            .unwrap_or_else(|e| panic!("Failed to create data dir: {}", e));
        fs::copy(&source_dataset, dest_data_dir.join("associations.json"))
            .unwrap_or_else(|e| panic!("Failed to copy associations.json: {}", e));
    } else {
        println!(
            "cargo:warning=dataset not found at {:?}",
            source_dataset
        );
    }
}
