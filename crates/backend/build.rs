use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Файлы из корня workspace, которые backend ищет рядом с исполняемым файлом
const RUNTIME_FILES: &[&str] = &["config.toml", "products.json"];

fn main() {
    for name in RUNTIME_FILES {
        println!("cargo:rerun-if-changed=../../{}", name);
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=Target profile directory not found, runtime files not copied");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");

    for name in RUNTIME_FILES {
        let source = workspace_root.join(name);
        if !source.exists() {
            // без файла backend возьмёт встроенные значения
            continue;
        }
        let dest = target_dir.join(name);
        if let Err(e) = fs::copy(&source, &dest) {
            panic!("Failed to copy {}: {}", name, e);
        }
    }
}

/// OUT_DIR выглядит как target/<profile>/build/backend-xxx/out
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
