use status_args::args::{ArgError, ArgOpts, Args, DEFAULT_OPTS};

#[test]
fn with_value() {
  let args = default_args();
  match args.parse(vec!["--with_value", "this_is_value"]) {
    Ok(matches) => match matches.value("with_value") {
      Some(value) => assert_eq!(value, "this_is_value"),
      None => panic!("The argument 'with_value' should have provided a value"),
    },
    Err(err) => panic!(
      "Error getting argument from command line 'with_value': {:?}",
      err
    ),
  }
}

#[test]
fn as_flag() {
  let args = default_args();
  match args.parse(vec!["--as_flag", "ignore_this"]) {
    Ok(matches) => {
      assert!(matches.is_present("as_flag"));
      assert_eq!(matches.value("as_flag"), None);
      // the token after a flag is a positional
      assert_eq!(matches.positional("target"), Some("ignore_this"));
    }
    Err(err) => panic!("Error getting argument from command line 'as_flag': {:?}", err),
  }
}

#[test]
fn get_short() {
  let args = default_args();
  // will get from command line as '-s'
  match args.parse(vec!["-s"]) {
    Ok(matches) => assert!(matches.is_present("short_arg")),
    Err(err) => panic!(
      "Error getting argument 'short_arg' *by the short name* from command line '-s': {:?}",
      err
    ),
  }
}

#[test]
fn digit_flags() {
  let mut args = Args::new();
  for digit in 1..=3 {
    args.add(
      digit.to_string(),
      ArgOpts {
        short: Some(digit.to_string()),
        ..DEFAULT_OPTS
      },
    );
  }
  let matches = args.parse(vec!["-1", "--3"]).unwrap();
  assert!(matches.is_present("1"));
  assert!(!matches.is_present("2"));
  assert!(matches.is_present("3"));
}

#[test]
fn is_required() {
  let mut args = default_args();
  args.add(
    "needed".to_owned(),
    ArgOpts {
      is_required: true,
      ..DEFAULT_OPTS
    },
  );
  assert_eq!(
    args.parse(Vec::<String>::new()).unwrap_err(),
    ArgError::RequiredNotFound("needed".to_owned())
  );
  assert!(args.parse(vec!["--needed"]).is_ok());
}

#[test]
fn validation() {
  let args = default_args();
  assert_eq!(
    args.parse(vec!["-v", "tall and thin"]).unwrap_err(),
    ArgError::InvalidValue("with_validation".to_owned())
  );
  let matches = args.parse(vec!["-v", "short and stout"]).unwrap();
  assert_eq!(matches.value("with_validation"), Some("short and stout"));
}

#[test]
fn missing_value() {
  let args = default_args();
  assert_eq!(
    args.parse(vec!["--with_value"]).unwrap_err(),
    ArgError::ValueNotFound("with_value".to_owned())
  );
}

#[test]
fn unexpected_arguments() {
  let args = default_args();
  assert_eq!(
    args.parse(vec!["--nope"]).unwrap_err(),
    ArgError::Unexpected("--nope".to_owned())
  );
  assert_eq!(
    args.parse(vec!["one", "two"]).unwrap_err(),
    ArgError::Unexpected("two".to_owned())
  );
}

#[test]
fn double_dash_ends_options() {
  let args = default_args();
  let matches = args.parse(vec!["--", "-s"]).unwrap();
  assert!(!matches.is_present("short_arg"));
  assert_eq!(matches.positional("target"), Some("-s"));
}

#[test]
fn usage_lists_descriptions() {
  let usage = default_args().usage("prog");
  assert!(usage.starts_with("usage: prog [OPTIONS] [TARGET]\n"));
  assert!(usage.contains("-f, --as_flag"));
  assert!(usage.contains("--with_value <value>"));
  assert!(usage.contains("Test of argument without value (flag)"));
}

fn default_args() -> Args {
  let mut args = Args::new();
  args.add_positional("target".to_owned(), Some("Free standing argument".to_owned()));
  args.add(
    "with_value".to_owned(),
    ArgOpts {
      short: None,
      description: Some("Test of argument with a required value".to_owned()),
      is_required: false,
      is_flag: false,
      validation: None,
    },
  );
  args.add(
    "short_arg".to_owned(),
    ArgOpts {
      short: Some("s".to_owned()),
      description: Some("Test of argument with a short name".to_owned()),
      is_required: false,
      is_flag: true,
      validation: None,
    },
  );
  args.add(
    "as_flag".to_owned(),
    ArgOpts {
      short: Some("f".to_owned()),
      description: Some("Test of argument without value (flag)".to_owned()),
      is_required: false,
      is_flag: true,
      validation: None,
    },
  );
  args.add(
    "with_validation".to_owned(),
    ArgOpts {
      short: Some("v".to_owned()),
      description: Some("Test of argument with a value that requires simple validation".to_owned()),
      is_required: false,
      is_flag: false,
      validation: Some(Box::new(|input: &str| input == "short and stout")),
    },
  );
  return args;
}
