use std::env;
use std::fs;
use std::path::Path;

// Stages config.toml next to the compiled binary so load_config picks it up
// during local runs. Missing config.toml is fine: the embedded default wins.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // walk up to target/<profile>
    let out_path = Path::new(&out_dir);
    let target_dir = match out_path.ancestors().find(|p| p.ends_with(&profile)) {
        Some(dir) => dir,
        None => return,
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    }
}
