use intcalc::repl::{EXIT_MESSAGE, Mode, Repl, Summary};

fn run(input: &str, mode: Mode) -> (String, Summary) {
    let mut output = Vec::new();
    let summary = Repl::new("> ", mode).run(input.as_bytes(), &mut output)
                                       .expect("in-memory session cannot fail");
    (String::from_utf8(output).expect("output is UTF-8"), summary)
}

#[test]
fn prints_results_until_exit() {
    let (output, summary) = run("2 + 3 * 4\n(2 + 3) * 4\nexit\n9\n", Mode::Evaluate);
    assert_eq!(output, format!("> 14\n> 20\n> {EXIT_MESSAGE}\n"));
    assert_eq!(summary, Summary { lines: 2, failures: 0 });
}

#[test]
fn exit_is_case_insensitive() {
    let (output, _) = run("ExIt\n", Mode::Evaluate);
    assert_eq!(output, format!("> {EXIT_MESSAGE}\n"));
}

#[test]
fn errors_are_reported_and_session_continues() {
    let (output, summary) = run("(1 + 2\n1 + @\n4 / 0\n1+1\n", Mode::Evaluate);
    assert_eq!(output,
               "> Error at position 6: Expected ')' but found end of input.\n\
                > Error at position 4: Unrecognized character '@'.\n\
                > Error at position 2: Division by zero.\n\
                > 2\n\
                > \n");
    assert_eq!(summary, Summary { lines: 4, failures: 3 });
}

#[test]
fn end_of_input_ends_session() {
    let (output, summary) = run("", Mode::Evaluate);
    assert_eq!(output, "> \n");
    assert_eq!(summary, Summary::default());
}

#[test]
fn windows_line_endings_are_accepted() {
    let (output, _) = run("7 / 2\r\nexit\r\n", Mode::Evaluate);
    assert_eq!(output, format!("> 3\n> {EXIT_MESSAGE}\n"));
}

#[test]
fn token_mode_prints_tokens() {
    let (output, summary) = run("1*2\nexit\n", Mode::Tokens);
    assert_eq!(output,
               format!("> Token(INTEGER, 1)\nToken(MUL, '*')\nToken(INTEGER, 2)\nToken(EOF, \
                        None)\n> {EXIT_MESSAGE}\n"));
    assert_eq!(summary.failures, 0);
}
