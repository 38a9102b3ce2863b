use std::{error::Error, fs};

use bongscript::{
    error::{LexError, ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "bong"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        let (output, result) = run_source(&source, &input);
        if let Err(e) = result {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "Demo {path:?} printed the wrong output");
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn run_source(source: &str, input: &str) -> (String, Result<(), Box<dyn Error>>) {
    let mut output = Vec::new();
    let result = run(source, input.as_bytes(), &mut output);
    (String::from_utf8(output).expect("output is UTF-8"), result)
}

fn program(body: &str) -> String {
    format!("kaj shuru\n{body}\nkaj shesh\n")
}

fn assert_output(body: &str, expected: &str) {
    assert_output_with_input(body, "", expected);
}

fn assert_output_with_input(body: &str, input: &str, expected: &str) {
    let (output, result) = run_source(&program(body), input);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, expected);
}

fn assert_failure(body: &str, input: &str) -> (String, Box<dyn Error>) {
    match run_source(&program(body), input) {
        (output, Err(e)) => (output, e),
        (output, Ok(())) => panic!("Script succeeded but was expected to fail, printing {output:?}"),
    }
}

fn runtime_error(body: &str) -> RuntimeError {
    runtime_error_with_input(body, "")
}

fn runtime_error_with_input(body: &str, input: &str) -> RuntimeError {
    let (_, e) = assert_failure(body, input);
    *e.downcast::<RuntimeError>()
      .unwrap_or_else(|e| panic!("Expected a runtime error, got: {e}"))
}

#[test]
fn print_with_and_without_newline() {
    assert_output("lekho(1); ullekho(2); lekho(3);", "1\n23\n");
    assert_output("ullekho(\"a\"); ullekho(\"b\");", "ab");
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_output("lekho(2 + 3 * 4);", "14\n");
    assert_output("lekho(10 - 3 - 2);", "5\n");
    assert_output("lekho((2 + 3) * 4);", "20\n");
    assert_output("lekho(20 / 2 / 5);", "2.0\n");
    assert_output("lekho(1 + 2 < 4);", "True\n");
}

#[test]
fn division_is_true_division() {
    assert_output("lekho(10 / 2);", "5.0\n");
    assert_output("lekho(7 / 2);", "3.5\n");
    assert_output("lekho(1.5 * 2);", "3.0\n");
}

#[test]
fn modulo_takes_the_sign_of_the_divisor() {
    assert_output("lekho(7 % 3);", "1\n");
    assert_output("lekho((0 - 7) % 3);", "2\n");
    assert_output("lekho(7 % (0 - 3));", "-2\n");
    assert_output("lekho(7.5 % 2);", "1.5\n");
}

#[test]
fn integers_and_floats_mix() {
    assert_output("lekho(1 + 2.5);", "3.5\n");
    assert_output("lekho(2.0 * 3);", "6.0\n");
    assert_output("lekho(3. - 1);", "2.0\n");
}

#[test]
fn large_integers_promote_by_rounding() {
    assert_output("lekho(9007199254740993 / 1);", "9007199254740992.0\n");
    assert_output("lekho(10000000000000000 + 0.5);", "1e+16\n");
    assert_output("lekho(9223372036854775807 * 1.0);", "9.223372036854776e+18\n");
}

#[test]
fn float_text_switches_to_exponent_form() {
    assert_output("lekho(1000000000000000.0);", "1000000000000000.0\n");
    assert_output("lekho(10000000000000000.0);", "1e+16\n");
    assert_output("lekho(25000000000000000.0);", "2.5e+16\n");
    assert_output("lekho(0.0001);", "0.0001\n");
    assert_output("lekho(0.00001);", "1e-05\n");
    assert_output("lekho(0 - 0.000025);", "-2.5e-05\n");
    assert_output("lekho(0.0);", "0.0\n");
}

#[test]
fn string_operations() {
    assert_output("lekho(\"ab\" + \"cd\");", "abcd\n");
    assert_output("lekho(\"na\" * 3);", "nanana\n");
    assert_output("lekho(2 * \"ho\");", "hoho\n");
    assert_output("lekho(\"x\" * 0);", "\n");
    assert_output("lekho(\"a\\n\");", "a\\n\n");
}

#[test]
fn comparisons_produce_booleans() {
    assert_output("lekho(3 > 2);", "True\n");
    assert_output("lekho(3 <= 2);", "False\n");
    assert_output("lekho(1 == 1.0);", "True\n");
    assert_output("lekho(\"a\" < \"b\");", "True\n");
    assert_output("lekho(1 == \"1\");", "False\n");
    assert_output("lekho(1 != \"1\");", "True\n");
    assert_output("lekho(true == false);", "False\n");
    assert_output("lekho(true);", "True\n");
}

#[test]
fn large_integers_compare_exactly_with_floats() {
    assert_output("lekho(9007199254740993 == 9007199254740992.0);", "False\n");
    assert_output("lekho(9007199254740993 > 9007199254740992.0);", "True\n");
    assert_output("lekho(9007199254740992.0 < 9007199254740993);", "True\n");
    assert_output("lekho(9223372036854775807 < 9223372036854775808.0);", "True\n");
}

#[test]
fn declaration_and_reassignment() {
    assert_output("eta holo x = 1; x = x + 1; lekho(x);", "2\n");
    assert_output("eta holo x = 1; eta holo x = \"two\"; lekho(x);", "two\n");
    assert_output("y = 5; lekho(y);", "5\n");
}

#[test]
fn variables_share_one_flat_scope() {
    assert_output("jodi (true) { eta holo x = 5; } lekho(x);", "5\n");
    assert_output("eta holo i = 0; jotokhon (i < 1) { i = i + 1; eta holo inner = \"seen\"; } \
                   lekho(inner);",
                  "seen\n");
}

#[test]
fn else_if_chain_runs_exactly_one_branch() {
    assert_output("jodi (false) { lekho(\"x\"); } nahole jodi (false) { lekho(\"y\"); } \
                   nahole { lekho(\"z\"); }",
                  "z\n");
    assert_output("eta holo n = 2; jodi (n == 1) { lekho(\"one\"); } nahole jodi (n == 2) { \
                   lekho(\"two\"); } nahole jodi (n > 0) { lekho(\"many\"); } nahole { \
                   lekho(\"none\"); }",
                  "two\n");
    assert_output("jodi (false) { lekho(\"no\"); } lekho(\"after\");", "after\n");
}

#[test]
fn truthiness_of_conditions() {
    assert_output("jodi (0) { lekho(\"a\"); } nahole { lekho(\"b\"); }", "b\n");
    assert_output("jodi (0.0) { lekho(\"a\"); } nahole { lekho(\"b\"); }", "b\n");
    assert_output("jodi (\"\") { lekho(\"a\"); } nahole { lekho(\"b\"); }", "b\n");
    assert_output("jodi (\"0\") { lekho(\"a\"); } nahole { lekho(\"b\"); }", "a\n");
    assert_output("jodi (0 - 2) { lekho(\"a\"); } nahole { lekho(\"b\"); }", "a\n");
}

#[test]
fn while_loop_counts() {
    assert_output("eta holo i = 1; jotokhon (i <= 3) { lekho(i); i = i + 1; }", "1\n2\n3\n");
    assert_output("jotokhon (false) { lekho(\"never\"); } lekho(\"done\");", "done\n");
}

#[test]
fn break_and_continue() {
    assert_output("eta holo i = 0; jotokhon (true) { i = i + 1; jodi (i == 3) { theme jao; } \
                   ullekho(i); } lekho(\"\");",
                  "12\n");
    assert_output("eta holo i = 0; jotokhon (i < 5) { i = i + 1; jodi (i % 2 == 0) { egiye jao; \
                   } ullekho(i); } lekho(\"\");",
                  "135\n");
}

#[test]
fn break_leaves_only_the_innermost_loop() {
    assert_output("eta holo i = 0; jotokhon (i < 2) { eta holo j = 0; jotokhon (true) { j = j + \
                   1; jodi (j > 2) { theme jao; } ullekho(i); ullekho(j); ullekho(\" \"); } i = \
                   i + 1; } lekho(\"\");",
                  "01 02 11 12 \n");
}

#[test]
fn bengali_identifiers() {
    assert_output("eta holo নাম = 1;\u{3000}নাম = নাম + 1;\u{a0}lekho(নাম);", "2\n");
    assert_output("eta holo সংখ্যা২ = \"ek\"; lekho(সংখ্যা২);", "ek\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("montobbo this line does nothing; lekho(1); montobbo nor\ndoes this; lekho(2);",
                  "1\n2\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("jodi (true) { } jotokhon (false) { }", "");
}

#[test]
fn reading_console_input() {
    assert_output_with_input("eta holo a = sonkhya nao(); eta holo b = sonkhya nao(); lekho(a + b);",
                             "4\n 5 \n",
                             "9\n");
    assert_output_with_input("eta holo r = dosomik nao(); lekho(r * 2);", "1.25\n", "2.5\n");
    assert_output_with_input("eta holo r = dosomik sonkhya nao(); lekho(r);", "3\n", "3.0\n");
    assert_output_with_input("eta holo s = bhasha nao(); lekho(s + \"!\");",
                             "  ami  \r\n",
                             "  ami  !\n");
    assert_output_with_input("eta holo s = bhasha nao(); lekho(s);", "no newline", "no newline\n");
}

#[test]
fn invalid_and_missing_input() {
    let e = runtime_error_with_input("eta holo a = sonkhya nao();", "abc\n");
    assert!(matches!(e, RuntimeError::InvalidInput { ref input, .. } if input == "abc"));

    let e = runtime_error_with_input("eta holo a = sonkhya nao();", "2.5\n");
    assert!(matches!(e, RuntimeError::InvalidInput { .. }));

    let e = runtime_error_with_input("eta holo a = bhasha nao();", "");
    assert!(matches!(e, RuntimeError::EndOfInput { line: 2 }));
}

#[test]
fn undefined_variable_is_named() {
    let e = runtime_error("lekho(x);");
    assert!(matches!(e, RuntimeError::UndefinedVariable { ref name, line: 2 } if name == "x"));
    assert!(e.to_string().contains("'x'"));
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let (output, e) = assert_failure("lekho(1);\nlekho(y);\nlekho(3);", "");
    assert_eq!(output, "1\n");
    assert!(e.to_string().starts_with("Error on line 3:"));
}

#[test]
fn logical_operators_have_no_evaluation_rule() {
    let e = runtime_error("lekho(true && true);");
    assert!(matches!(e, RuntimeError::UnknownOperator { ref op, .. } if op == "&&"));

    let e = runtime_error("lekho(1 || 0);");
    assert!(matches!(e, RuntimeError::UnknownOperator { ref op, .. } if op == "||"));
}

#[test]
fn loop_signals_outside_a_loop_fail() {
    assert!(matches!(runtime_error("theme jao;"), RuntimeError::SignalOutsideLoop { .. }));
    assert!(matches!(runtime_error("egiye jao;"), RuntimeError::SignalOutsideLoop { .. }));
    assert!(matches!(runtime_error("jodi (true) { theme jao; }"),
                     RuntimeError::SignalOutsideLoop { .. }));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("lekho(1 / 0);"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("lekho(1 % 0);"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("lekho(1.5 / 0);"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("lekho(9223372036854775807 + 1);"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn oversized_string_repetition_fails() {
    assert!(matches!(runtime_error("lekho(\"ab\" * 4611686018427387904);"),
                     RuntimeError::StringTooLong { line: 2 }));
    assert!(matches!(runtime_error("lekho(\"a\" * 1000000000000);"),
                     RuntimeError::StringTooLong { .. }));
    assert!(matches!(runtime_error("lekho(9223372036854775807 * \"xy\");"),
                     RuntimeError::StringTooLong { .. }));
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_error("lekho(\"a\" - 1);"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("lekho(\"a\" < 1);"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("lekho(true + 1);"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("lekho(\"a\" * \"b\");"), RuntimeError::TypeError { .. }));
}

#[test]
fn static_errors_print_nothing() {
    let (output, e) = assert_failure("lekho(1);\nlekho(", "");
    assert!(output.is_empty());
    assert!(e.downcast_ref::<ParseError>().is_some());

    let (output, e) = assert_failure("lekho(1);\nlekho(1 @ 2);", "");
    assert!(output.is_empty());
    assert!(matches!(e.downcast_ref::<LexError>(),
                     Some(LexError::UnknownCharacter { line: 3, .. })));
}

#[test]
fn unterminated_block_and_string() {
    let (_, result) = run_source("kaj shuru\njodi (true) { lekho(1);", "");
    let e = result.expect_err("the block is never closed");
    assert!(matches!(e.downcast_ref::<ParseError>(),
                     Some(ParseError::UnterminatedBlock { .. })));
    assert!(e.to_string().contains("Unexpected end of file in block"));

    let (_, e) = assert_failure("lekho(\"open);", "");
    assert!(matches!(e.downcast_ref::<LexError>(), Some(LexError::UnterminatedString { .. })));
}
