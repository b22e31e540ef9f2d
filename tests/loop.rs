use test_utils::{check_run, rotated, Expected};

const SRC: &str = "let i = 0; while (i < 3) { print(i); let i = i + 1; }";
const EXPECTED: Expected = Expected {
    output: "012\n...\n000\n",
};

#[test]
fn run_loop() {
    check_run(SRC, EXPECTED);
}

#[test]
fn run_loop_with_break() {
    let source = "let i = 0; while (true) { if (i == 2) { break; } print(i); let i = i + 1; }";

    assert_eq!(rotated(&["0.0", "1.0"]), test_utils::run_program(source));
}

#[test]
fn run_nested_loops() {
    // break only leaves the inner loop
    let source = concat!(
        "let i = 0; ",
        "while (i < 2) { ",
        "  let j = 0; ",
        "  while (true) { ",
        "    if (j == 3) { break; } ",
        "    let j = j + 1; ",
        "  } ",
        "  print(i + j); ",
        "  let i = i + 1; ",
        "}",
    );

    assert_eq!(rotated(&["3.0", "4.0"]), test_utils::run_program(source));
}

#[test]
fn run_loop_with_continue() {
    let source = concat!(
        "let i = 0; ",
        "while (i < 4) { ",
        "  let i = i + 1; ",
        "  if (i == 2) { continue; } ",
        "  print(i); ",
        "}",
    );

    assert_eq!(
        rotated(&["1.0", "3.0", "4.0"]),
        test_utils::run_program(source)
    );
}
