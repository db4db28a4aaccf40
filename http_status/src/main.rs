extern crate http_status;

use std::env;
use std::io::{self, Write};
use std::process;

use http_status::app::{build_logger, write_text};
use http_status::cli::{version, PROGRAM};
use http_status::{build_args, run, AppError, Mode};

fn main() {
  let args = build_args();
  let stdout = io::stdout();
  let mut out = stdout.lock();

  // get the program mode from the arguments or exit early
  let config = match Mode::parse(&args, env::args().skip(1)) {
    Ok(Mode::Normal(config)) => config,
    Ok(Mode::Help) => return exit_on_error(write_text(&mut out, &args.usage(PROGRAM))),
    Ok(Mode::Version) => return exit_on_error(write_text(&mut out, &version())),
    Err(err) => fail(AppError::Args(err), Some(&args.usage(PROGRAM))),
  };

  let mut logger = build_logger(&config);
  logger.debug(&format!("{:?}", config));

  exit_on_error(run(&config, &mut out, &mut logger));
}

fn exit_on_error(result: Result<(), AppError>) {
  if let Err(err) = result {
    fail(err, None);
  }
}

// reports the error on stderr and exits with status 1
fn fail(err: AppError, usage: Option<&str>) -> ! {
  let mut stderr = io::stderr();
  let _ = writeln!(stderr, "{}: {}", PROGRAM, err);
  if let Some(usage) = usage {
    let _ = write!(stderr, "\n{}", usage);
  }
  process::exit(1);
}
