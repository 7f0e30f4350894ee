//! Structural checks: every source file has a unit test mirror, every test
//! file holds tests, and every registered benchmark exists

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    fn mirrored_paths() -> (HashSet<String>, HashSet<String>) {
        let src_dir = Path::new(SRC_DIR);
        let tests_dir = Path::new(UNIT_DIR);

        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
            assert!(src_dir.exists(), "Failed to read src directory: {error}");
            HashSet::new()
        });

        let test_paths = if tests_dir.exists() {
            collect_relative_paths(tests_dir, tests_dir).unwrap_or_default()
        } else {
            HashSet::new()
        };

        (src_paths, test_paths)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, test_paths) = mirrored_paths();

        let mut missing_tests: Vec<&String> = src_paths
            .iter()
            // Module organization files don't require separate test files
            .filter(|src_path| src_path.as_str() != "lib.rs" && !src_path.ends_with("mod.rs"))
            .filter(|src_path| !test_paths.contains(*src_path))
            .collect();
        missing_tests.sort();

        assert!(
            missing_tests.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing_tests
                .iter()
                .map(|src_path| format!("  - {SRC_DIR}/{src_path} -> {UNIT_DIR}/{src_path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, test_paths) = mirrored_paths();

        let mut orphaned_tests: Vec<&String> = test_paths
            .iter()
            .filter(|test_path| !test_path.ends_with("mod.rs"))
            .filter(|test_path| !src_paths.contains(*test_path))
            .collect();
        orphaned_tests.sort();

        assert!(
            orphaned_tests.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned_tests
                .iter()
                .map(|test_path| format!("  - {UNIT_DIR}/{test_path} -> {SRC_DIR}/{test_path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();

                let relative_path = match path.strip_prefix(base) {
                    Ok(stripped) => stripped.to_string_lossy().to_string(),
                    Err(_original_error) => {
                        return Err(io::Error::other("Failed to strip prefix"));
                    }
                };

                if path.is_dir() {
                    paths.insert(relative_path);
                    paths.extend(collect_relative_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative_path);
                }
            }
        }

        Ok(paths)
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        let result = check_test_files(tests_dir, tests_dir, &mut files_without_tests);
        if let Err(error) = result {
            assert!(
                tests_dir.exists(),
                "Failed to scan tests directory: {error}"
            );
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn check_test_files(
        dir: &Path,
        base_dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, base_dir, files_without_tests)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };

                // Harness roots of multi-file test targets only declare modules
                let is_harness_root = file_name == "main.rs"
                    && path.parent().and_then(Path::parent) == Some(base_dir);
                if is_harness_root || file_name == "mod.rs" {
                    continue;
                }

                if !fs::read_to_string(&path)?.contains("#[test]") {
                    files_without_tests.push(format!("  - {}", path.display()));
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_registered_benches_exist() {
        let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();

        let mut in_bench = false;
        let mut missing = Vec::new();
        for line in manifest.lines().map(str::trim) {
            if line.starts_with('[') {
                in_bench = line == "[[bench]]";
            } else if in_bench {
                if let Some(name) = line
                    .strip_prefix("name = \"")
                    .and_then(|rest| rest.strip_suffix('"'))
                {
                    if !Path::new("benches").join(format!("{name}.rs")).exists() {
                        missing.push(format!("  - benches/{name}.rs"));
                    }
                }
            }
        }

        assert!(
            missing.is_empty(),
            "The following registered benchmarks have no source file:\n{}",
            missing.join("\n")
        );
    }
}
