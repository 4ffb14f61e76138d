use timecalc_core::{Config, Duration, EvalError, Evaluator, run};

fn run_default(tokens: &[&str]) -> Result<Option<Duration>, EvalError> {
    run(tokens.iter().copied(), Config::default())
}

#[test]
fn command_line_style_expressions() {
    assert_eq!(
        run_default(&["1m30s", "+", "1m"]),
        Ok(Some(Duration {
            minutes: 2,
            seconds: 30.0,
            ..Duration::default()
        }))
    );
    assert_eq!(
        run_default(&["1m30s", "-", "1m"]),
        Ok(Some(Duration {
            seconds: 30.0,
            ..Duration::default()
        }))
    );
    assert_eq!(
        run_default(&["1m30s", "-", "1m", "+", "30s"]),
        Ok(Some(Duration {
            minutes: 1,
            ..Duration::default()
        }))
    );
}

#[test]
fn results_print_in_compact_form() {
    let result = run_default(&["23h59m", "+", "1m0.5s"]).unwrap().unwrap();
    assert_eq!(result.to_string(), "1d0.5s");

    let result = run_default(&["1d", "-", "1s"]).unwrap().unwrap();
    assert_eq!(result.to_string(), "23h59m59s");
}

#[test]
fn debug_flag_mid_stream_is_not_a_value() {
    let mut evaluator = Evaluator::new(Config::default());
    for token in ["1m", "--debug", "+", "1m"] {
        evaluator.feed(token).unwrap();
    }

    assert!(evaluator.debug_enabled());
    assert_eq!(evaluator.finish(), Some(Duration::new(0, 0, 2, 0.0)));
}

#[test]
fn owned_arguments_are_accepted() {
    let args: Vec<String> = vec!["2h".into(), " + ".into(), "45m".into()];
    assert_eq!(
        run(args, Config::default()),
        Ok(Some(Duration::new(0, 2, 45, 0.0)))
    );
}
