use std::fs;

use toys::run_program_with_output;
use walkdir::WalkDir;

/// What a script's header comment says should happen when it runs.
enum Expectation {
    /// `// expect: <value>`: `main` returns a value displayed as given.
    Value(String),
    /// `// error: <message>`: the run fails with exactly this message.
    Error(String),
}

fn expectation(content: &str) -> Option<Expectation> {
    content.lines().find_map(|line| {
                       let line = line.trim();
                       if let Some(value) = line.strip_prefix("// expect:") {
                           return Some(Expectation::Value(value.trim().to_string()));
                       }
                       line.strip_prefix("// error:")
                           .map(|message| Expectation::Error(message.trim().to_string()))
                   })
}

/// Expected `println` output, one `// prints: <line>` comment per line.
fn expected_output(content: &str) -> String {
    content.lines()
           .filter_map(|line| line.trim().strip_prefix("// prints:"))
           .map(|line| format!("{}\n", line.trim()))
           .collect()
}

#[test]
fn script_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "toys"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expectation =
            expectation(&content).unwrap_or_else(|| panic!("{path:?} has no expect/error header"));
        count += 1;

        let mut output = Vec::<u8>::new();
        let result = run_program_with_output(&content, &mut output);

        match (expectation, result) {
            (Expectation::Value(expected), Ok(value)) => {
                assert_eq!(value.to_string(), expected, "wrong result in {path:?}");
            },
            (Expectation::Error(expected), Err(e)) => {
                assert_eq!(e.to_string(), expected, "wrong error in {path:?}");
            },
            (Expectation::Value(_), Err(e)) => panic!("{path:?} failed:\n{e}"),
            (Expectation::Error(_), Ok(value)) => {
                panic!("{path:?} returned {value} but was expected to fail")
            },
        }

        assert_eq!(String::from_utf8_lossy(&output),
                   expected_output(&content),
                   "wrong output in {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}
