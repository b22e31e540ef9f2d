use test_utils::{check_run, rotated, Expected};

const SRC: &str = "if (true) { print(\"hi\"); }";
const EXPECTED: Expected = Expected {
    output: "h\ni\n",
};

#[test]
fn run_conditional() {
    check_run(SRC, EXPECTED);
}

#[test]
fn run_false_conditional() {
    let source = "if (false) { print(\"hi\"); } print(\"bye\");";

    assert_eq!(rotated(&["bye"]), test_utils::run_program(source));
}

#[test]
fn run_comparison_conditional() {
    let source = "let x = 3; if (x > 2) { print(x); }";

    assert_eq!(rotated(&["3.0"]), test_utils::run_program(source));
}
