use {
  chaos_game::{
    cli::{execute, once},
    command::Command,
    config::Config,
    error::{self, Result},
    session::Session
  },
  clap::Parser,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::{
    io::BufRead,
    path::PathBuf,
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Instant
  }
};

/// Sierpinski triangle via the chaos game.
#[derive(Debug, Parser)]
#[command(author, version, about = "Sierpinski triangle via the chaos game")]
struct Args {
  /// TOML configuration. Defaults are used if omitted.
  config: Option<PathBuf>,

  /// Read interactive commands from stdin instead of exporting once.
  #[arg(short, long)]
  watch: bool
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
  let (tx, rx) = mpsc::channel();
  thread::spawn(move || {
    for line in std::io::stdin().lock().lines() {
      match line {
        Ok(line) => if tx.send(line).is_err() { break },
        Err(e) => { log::error!("stdin: {}", e); break }
      }
    }
  });
  rx
}

fn watch(config: &Config, rng: Pcg64) -> Result<()> {
  let mut session = Session::with_rng(config.params(), config.debounce(), rng, Instant::now());
  let rx = spawn_stdin_reader();
  log::info!("reading commands from stdin, `quit` to exit");

  loop {
    if session.poll(Instant::now()) {
      log::info!("{} points", session.points().len());
    }
    let line = match session.time_left(Instant::now()) {
      Some(wait) => match rx.recv_timeout(wait) {
        Ok(line) => line,
        Err(RecvTimeoutError::Timeout) => continue,
        Err(RecvTimeoutError::Disconnected) => break
      },
      None => match rx.recv() {
        Ok(line) => line,
        Err(_) => break
      }
    };
    if line.trim().is_empty() {
      continue;
    }
    match line.parse::<Command>() {
      Ok(Command::Quit) => break,
      Ok(command) => execute(command, &mut session, config, Instant::now())
        .unwrap_or_else(|e| log::error!("{:#}", e)),
      Err(e) => log::error!("{:#}", e)
    }
  }
  Ok(())
}

fn run() -> Result<()> {
  let args = Args::parse();
  let config = match &args.config {
    Some(path) => Config::load(path)?,
    None => Config::default()
  };
  let mut rng = match config.rng_seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy()
  };
  if args.watch {
    watch(&config, rng)
  } else {
    once(&config, &mut rng).map(|_| ())
  }
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  if let Err(e) = run() {
    eprint!("{}", error::display(&e));
    std::process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn args() -> Result<()> {
    let args = Args::try_parse_from(["chaos-game", "config.toml", "-w"])?;
    assert_eq!(args.config, Some(PathBuf::from("config.toml")));
    assert!(args.watch);

    let args = Args::try_parse_from(["chaos-game"])?;
    assert!(args.config.is_none() && !args.watch);

    assert!(Args::try_parse_from(["chaos-game", "--fast"]).is_err());
    assert!(Args::try_parse_from(["chaos-game", "a.toml", "b.toml"]).is_err());
    Ok(())
  }
}
