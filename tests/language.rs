use toys::{
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::{Interpreter, MAX_CALL_DEPTH},
        parser::{parse_lines, parse_program},
        value::core::Value,
    },
    run_program_with_output,
};

fn run(src: &str) -> Result<Value, Error> {
    run_program_with_output(src, Vec::<u8>::new())
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected.into(), "program:\n{src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str, expected: RuntimeError) {
    match run(src) {
        Ok(value) => panic!("Program succeeded with {value} but was expected to fail\n{src}"),
        Err(e) => assert_eq!(e, Error::Runtime(expected), "program:\n{src}"),
    }
}

fn run_lines(interpreter: &mut Interpreter<Vec<u8>>, src: &str) -> Value {
    let lines = parse_lines(src).unwrap_or_else(|e| panic!("{e}"));
    interpreter.run_lines(&lines)
               .unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("define main() { (1 + 2) * 3; }", 9);
    assert_value("define main() { 1 + 2 * 3; }", 7);
    assert_value("define main() { 1 + (2 * 3); }", 7);
    assert_value("define main() { 10 - 4 - 3; }", 3);
    assert_value("define main() { 100 / 10 / 5; }", 2);
    assert_value("define main() { 7 / 2; }", 3);
    assert_value("define main() { 0 - 7 / 2; }", -3);
}

#[test]
fn comparisons_produce_booleans() {
    assert_value("define main() { 1 < 2; }", true);
    assert_value("define main() { 2 <= 2; }", true);
    assert_value("define main() { 1 > 2; }", false);
    assert_value("define main() { 3 >= 4; }", false);
    assert_value("define main() { 5 == 5; }", true);
    assert_value("define main() { 5 != 5; }", false);
    assert_value("define main() { 4 != 5; }", true);
}

#[test]
fn assignment_updates_binding() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    assert_eq!(run_lines(&mut interpreter, "a = 3;"), Value::Int(3));
    assert_eq!(interpreter.global("a"), Some(Value::Int(3)));
    assert_eq!(run_lines(&mut interpreter, "a = a + 1;"), Value::Int(4));
    assert_eq!(interpreter.global("a"), Some(Value::Int(4)));
}

#[test]
fn recursive_factorial() {
    assert_value(r"
        define fact(n) {
          if (n < 2) 1; else n * fact(n - 1);
        }
        define main() {
          fact(5);
        }
    ",
                 120);
}

#[test]
fn labelled_call_binds_by_name() {
    assert_value("define power(n) { n * n; } define main() { power[n = 5]; }", 25);
    assert_value("define sub(a, b) { a - b; } define main() { sub[b = 1, a = 10]; }", 9);
    assert_value("define zero() { 0; } define main() { zero[]; }", 0);
}

#[test]
fn labelled_call_rejects_mismatched_labels() {
    let unknown = "define power(n) { n * n; } define main() { power[m = 5]; }";
    assert!(matches!(run(unknown),
                     Err(Error::Runtime(RuntimeError::LabelMismatch { .. }))));

    let missing = "define sub(a, b) { a - b; } define main() { sub[a = 1]; }";
    assert!(matches!(run(missing),
                     Err(Error::Runtime(RuntimeError::LabelMismatch { .. }))));

    let repeated = "define power(n) { n * n; } define main() { power[n = 1, n = 2]; }";
    assert!(matches!(run(repeated),
                     Err(Error::Runtime(RuntimeError::LabelMismatch { .. }))));
}

#[test]
fn for_loop_leaves_counter_at_bound() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    run_lines(&mut interpreter, "for (i in 1 to 11) {}");
    assert_eq!(interpreter.global("i"), Some(Value::Int(11)));

    run_lines(&mut interpreter, "for (i in 1 to 10) { i = i + 1; }");
    assert_eq!(interpreter.global("i"), Some(Value::Int(11)));

    assert_value(r"
        define main() {
          sum = 0;
          for (i in 1 to 5) sum = sum + i;
          sum;
        }
    ",
                 10);
}

#[test]
fn for_loop_with_empty_range_runs_no_iterations() {
    assert_value(r"
        define main() {
          hits = 0;
          for (i in 5 to 5) hits = hits + 1;
          hits;
        }
    ",
                 0);
}

#[test]
fn while_loop_yields_true() {
    assert_value("define main() { i = 0; while (i < 3) i = i + 1; }", true);
    assert_value("define main() { while (false) 1; }", true);
    assert_value("define main() { i = 0; while (i < 3) i = i + 1; i; }", 3);
}

#[test]
fn empty_block_and_else_less_if_yield_unit() {
    assert_value("define main() { }", Value::Unit);
    assert_value("define main() { {} }", Value::Unit);
    assert_value("define main() { if (false) 1; }", Value::Unit);
    assert_value("define main() { if (true) 1; }", 1);
    assert_value("define main() { if (false) 1; else 2; }", 2);
}

#[test]
fn globals_are_visible_to_functions() {
    assert_value(r"
        global v = 2;
        define add2(n) { n + v; }
        define main() { add2(2); }
    ",
                 4);
}

#[test]
fn globals_initialize_in_source_order() {
    assert_value("global a = 1; global b = a + 1; define main() { b; }", 2);
}

#[test]
fn callee_sees_caller_locals() {
    assert_value(r"
        define show() { x; }
        define main() { x = 7; show(); }
    ",
                 7);
}

#[test]
fn assignment_updates_enclosing_binding() {
    assert_value(r"
        define bump() { counter = counter + 1; }
        define main() {
          counter = 1;
          bump();
          bump();
          counter;
        }
    ",
                 3);
}

#[test]
fn assignment_to_new_name_stays_local() {
    assert_failure(r"
        define leak() { hidden = 1; }
        define main() { leak(); hidden; }
    ",
                   RuntimeError::UndefinedVariable { name: "hidden".to_string() });
}

#[test]
fn parameters_shadow_outer_names() {
    assert_value(r"
        global n = 100;
        define id(n) { n; }
        define main() { id(1) + n; }
    ",
                 101);
}

#[test]
fn arrays_evaluate_elements() {
    assert_value("define main() { [1 + 1, 2 < 3, []]; }",
                 vec![Value::Int(2), Value::Bool(true), Value::from(Vec::<Value>::new())]);
}

#[test]
fn println_writes_and_returns_value() {
    let program = parse_program(r"
        define main() {
          println(1 + 2);
          println([1, true]);
          println(1 < 2);
          println(7);
        }
    ").unwrap();

    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    let result = interpreter.call_main(&program).unwrap();

    assert_eq!(result, Value::Int(7));
    assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(),
               "3\n[1, true]\ntrue\n7\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("define main() { 10 / 0; }", RuntimeError::DivisionByZero);
}

#[test]
fn overflow_is_error() {
    assert_failure("define main() { 9223372036854775807 + 1; }",
                   RuntimeError::Overflow { operator: "+" });
    assert_failure("define main() { 0 - 9223372036854775807 - 2; }",
                   RuntimeError::Overflow { operator: "-" });
    assert_failure("define main() { 4611686018427387904 * 2; }",
                   RuntimeError::Overflow { operator: "*" });
}

#[test]
fn undefined_names_are_errors() {
    assert_failure("define main() { x; }",
                   RuntimeError::UndefinedVariable { name: "x".to_string() });
    assert_failure("define main() { nothing(1); }",
                   RuntimeError::UndefinedFunction { name: "nothing".to_string() });
}

#[test]
fn arity_is_checked() {
    assert_failure("define f(a, b) { a; } define main() { f(1); }",
                   RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                 expected: 2,
                                                 found:    1, });
}

#[test]
fn arity_is_checked_before_arguments_run() {
    assert_failure("define f(a) { a; } define main() { f(1, 1 / 0); }",
                   RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                 expected: 1,
                                                 found:    2, });
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("define main() { if (1) 2; }",
                   RuntimeError::TypeMismatch { expected: "boolean",
                                                found:    "integer",
                                                context:  "if condition".to_string(), });
    assert_failure("define main() { while (0) 1; }",
                   RuntimeError::TypeMismatch { expected: "boolean",
                                                found:    "integer",
                                                context:  "while condition".to_string(), });
}

#[test]
fn operators_require_integers() {
    assert_failure("define main() { 1 + true; }",
                   RuntimeError::TypeMismatch { expected: "integer",
                                                found:    "boolean",
                                                context:  "operator '+'".to_string(), });
    assert_failure("define main() { [1] == [1]; }",
                   RuntimeError::TypeMismatch { expected: "integer",
                                                found:    "array",
                                                context:  "operator '=='".to_string(), });
}

#[test]
fn missing_main_is_error() {
    assert_failure("define helper() { 1; }", RuntimeError::MissingMain);
    assert_failure("", RuntimeError::MissingMain);
}

#[test]
fn duplicate_function_is_error() {
    assert_failure("define f() { 1; } define f() { 2; } define main() { f(); }",
                   RuntimeError::DuplicateFunction { name: "f".to_string() });
}

#[test]
fn unbounded_recursion_hits_call_limit() {
    assert_failure("define down(n) { down(n + 1); } define main() { down(0); }",
                   RuntimeError::RecursionLimit { depth: MAX_CALL_DEPTH });
}

#[test]
fn deep_recursion_below_limit_succeeds() {
    assert_value(r"
        define count(n) { if (n == 0) 0; else 1 + count(n - 1); }
        define main() { count(5000); }
    ",
                 5000);
}

#[test]
fn reset_discards_globals_and_functions() {
    let program = parse_program("global g = 1; define main() { g; }").unwrap();
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());

    assert_eq!(interpreter.call_main(&program).unwrap(), Value::Int(1));
    assert_eq!(interpreter.call_main(&program),
               Err(RuntimeError::DuplicateFunction { name: "main".to_string() }));

    interpreter.reset();
    assert_eq!(interpreter.global("g"), None);
    assert!(interpreter.function("main").is_none());

    let call = parse_lines("main();").unwrap();
    assert_eq!(interpreter.run_lines(&call),
               Err(RuntimeError::UndefinedFunction { name: "main".to_string() }));
    assert_eq!(interpreter.call_main(&program).unwrap(), Value::Int(1));
}

#[test]
fn reset_forgets_script_variables() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    run_lines(&mut interpreter, "x = 1;");
    interpreter.reset();

    let lines = parse_lines("x;").unwrap();
    assert_eq!(interpreter.run_lines(&lines),
               Err(RuntimeError::UndefinedVariable { name: "x".to_string() }));
}

#[test]
fn failed_call_releases_its_frame() {
    let program = parse_program(r"
        define fail() { local = 1; 1 / 0; }
        define main() { fail(); }
    ").unwrap();
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    assert_eq!(interpreter.call_main(&program), Err(RuntimeError::DivisionByZero));

    run_lines(&mut interpreter, "local = 2;");
    assert_eq!(interpreter.global("local"), Some(Value::Int(2)));
}

#[test]
fn deeply_nested_program_runs() {
    let depth = 20_000;
    let source = format!("define main() {{ {}1{}; }}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&source, 1);
}

#[test]
fn deeply_nested_blocks_and_conditionals_run() {
    let depth = 5_000;
    assert_value(&format!("define main() {{ {}7;{} }}", "{".repeat(depth), "}".repeat(depth)),
                 7);
    assert_value(&format!("define main() {{ {}7; }}", "if (1 < 2) ".repeat(depth)), 7);
}

#[test]
fn long_sum_evaluates() {
    let terms = 50_000;
    let terms_literal = i64::try_from(terms).unwrap();
    assert_value(&format!("define main() {{ 0{}; }}", "+1".repeat(terms)), terms_literal);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "define into a released frame")]
fn defining_into_released_frame_is_caught() {
    let mut env = Environment::new();
    let local = env.push_frame(env.global());
    env.pop_frame(local);
    env.define(local, "x", Value::Int(1));
}
