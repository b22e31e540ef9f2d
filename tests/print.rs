use test_utils::{check_run, Expected};

const SRC: &str = "let x = 2; print(x);";
const EXPECTED: Expected = Expected {
    output: "2\n.\n0\n",
};

#[test]
fn run_print() {
    check_run(SRC, EXPECTED);
}
