//! Enforces the one-to-one mirror between src/ files and unit tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no testable logic of
    // their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn module_files(base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    let relative = path
                        .strip_prefix(base)
                        .unwrap_or(&path)
                        .to_string_lossy()
                        .replace('\\', "/");
                    if !is_exempt(&relative) {
                        found.insert(relative);
                    }
                }
            }
        }

        Ok(found)
    }

    fn mirror_sides() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = module_files(Path::new(SRC_DIR)).unwrap_or_default();
        assert!(!src.is_empty(), "src directory must be readable from the crate root");

        let unit = module_files(Path::new(UNIT_DIR)).unwrap_or_default();
        (src, unit)
    }

    #[test]
    fn test_every_src_file_has_a_unit_test_counterpart() {
        let (src, unit) = mirror_sides();

        let missing: Vec<String> = src
            .difference(&unit)
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_src_counterpart() {
        let (src, unit) = mirror_sides();

        let orphaned: Vec<String> = unit
            .difference(&src)
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files have no corresponding src file:\n{}",
            orphaned.join("\n")
        );
    }

    // Every file in the unit tree must actually define tests; an empty
    // mirror file would satisfy the layout checks while testing nothing
    #[test]
    fn test_unit_files_contain_test_functions() {
        let unit = module_files(Path::new(UNIT_DIR)).unwrap_or_default();
        let mut empty_files: Vec<PathBuf> = Vec::new();

        for relative in &unit {
            let path = Path::new(UNIT_DIR).join(relative);
            let contents = fs::read_to_string(&path).unwrap_or_default();
            if !contents.contains("#[test]") {
                empty_files.push(path);
            }
        }

        assert!(
            empty_files.is_empty(),
            "The following unit test files don't contain any #[test] functions:\n{}",
            empty_files
                .iter()
                .map(|path| format!("  - {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}
