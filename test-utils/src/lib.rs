use turnways::{rotate::flop, runner};

/// Expected display output of a turnways run.
pub struct Expected<'a> {
    pub output: &'a str,
}

/// Run a program through the full pipeline and collect everything it
/// writes to the display sink.
pub fn run_program(source: &str) -> String {
    let mut sink = Vec::new();
    runner::run(source, &mut sink).expect("writing to a Vec cannot fail");

    String::from_utf8(sink).expect("interpreter output should be UTF-8")
}

pub fn check_run(source: &str, expected: Expected) {
    assert_eq!(expected.output, run_program(source));
}

/// The display form of a page holding the given lines: the rotated block,
/// followed by the newline every flush emits.
pub fn rotated(lines: &[&str]) -> String {
    let mut page = String::new();
    for line in lines {
        page.push_str(line);
        page.push('\n');
    }

    format!("{}\n", flop(&page))
}
