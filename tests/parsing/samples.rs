#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use questionnaire::parsing;

    fn files_in(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);

        files.sort();
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = files_in(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(document) => {
                    if document.is_empty() {
                        println!("File {:?} parsed but had no content", file);
                        failures.push(file.clone());
                    }
                }
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = files_in(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(_) => {}
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/no-such-file.txt"));

        let error = result.unwrap_err();
        assert_eq!(error.problem, "File not found");
    }

    #[test]
    fn windows_line_endings() {
        let windows = parsing::load(Path::new("tests/samples/windows.txt")).unwrap();
        assert!(windows.contains("\r\n"));

        let unix = windows.replace("\r\n", "\n");

        assert_eq!(
            parsing::parse(&windows).unwrap(),
            parsing::parse(&unix).unwrap()
        );
    }

    #[test]
    fn byte_order_mark() {
        let content = parsing::load(Path::new("tests/samples/byte-order-mark.txt")).unwrap();
        assert!(content.starts_with('\u{feff}'));

        let document = parsing::parse(&content).unwrap();
        let travel = document
            .category("Travel")
            .expect("first line should be a category");

        assert_eq!(
            travel
                .subcategories
                .names()
                .collect::<Vec<_>>(),
            vec!["Destinations", "Transport"]
        );
        assert_eq!(document.count_items(), 3);
    }
}
