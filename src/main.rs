//! qrprompt entrypoint

use clap::Parser;
use clap::error::ErrorKind;
use qrprompt::{AppConfig, Prompter, Result, SavedCode, app, logging};
use std::ffi::OsString;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "qrprompt",
    version,
    about = "Interactively generate a QR code PNG next to this executable"
)]
struct Cli {}

/// What to do after looking at the command line
#[derive(Debug, PartialEq, Eq)]
enum Startup {
    /// Run the interactive session
    Session,
    /// Help or version text was printed; nothing else to do
    Done,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match startup(std::env::args_os(), &mut io::stdout(), &mut io::stderr()) {
        Ok(Startup::Done) => return,
        Ok(Startup::Session) => {}
        Err(err) => eprintln!("Failed to print usage: {err}"),
    }

    let outcome = session().await;

    // The outcome is reported, never turned into an exit status.
    if let Err(err) = app::report(&outcome, &mut io::stdout(), &mut io::stderr()) {
        tracing::error!("Failed to print outcome: {err}");
    }
}

/// Interpret the command line without ever exiting the process.
///
/// `--help` and `--version` print and stop; anything else is reported and ignored.
fn startup<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> io::Result<Startup>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    match Cli::try_parse_from(args) {
        Ok(_cli) => Ok(Startup::Session),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                write!(stdout, "{}", err.render())?;
                Ok(Startup::Done)
            }
            _ => {
                let reason = err.kind().as_str().unwrap_or("unrecognized input");
                writeln!(stderr, "Ignoring command-line arguments: {reason}")?;
                Ok(Startup::Session)
            }
        },
    }
}

async fn session() -> Result<SavedCode> {
    let config = AppConfig::discover()?;

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("Logging disabled: {err}");
    }

    let mut prompter = Prompter::for_terminal(io::stdin().lock(), io::stdout());
    app::run(&config, &mut prompter).await
}
