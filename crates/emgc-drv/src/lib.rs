//! emgc-drv - Compiler driver.
//!
//! The driver is the orchestrator for the whole pipeline:
//!
//! 1. Parse command-line arguments into a [`Config`]
//! 2. Read the `.emg` source file
//! 3. Run the parser; optionally print the syntax tree (`-t`)
//! 4. Run the code generator
//! 5. Write the C++ artefact next to the source, extension replaced
//!
//! Any failure in any stage aborts with a diagnostic; the binary exits 0 on
//! success and 1 on every error.

mod error;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use emgc_util::Handler;

pub use error::{DriverError, USAGE};

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `-t`: print the AST to stdout after parsing.
    pub print_ast: bool,
    /// `-v`: progress messages on stdout.
    pub verbose: bool,
    /// The final positional argument.
    pub source: PathBuf,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `--help` was given; print usage and exit 0.
    Help,
    /// Compile the configured source.
    Compile(Config),
}

impl Config {
    /// Parses the arguments after the binary name.
    ///
    /// Options may appear anywhere; the final argument is the source path.
    /// An unknown option is only an error when it is not in final position,
    /// where it is taken as the (then badly named) source instead.
    pub fn parse(args: &[String]) -> Result<Command, DriverError> {
        if args.is_empty() {
            return Err(DriverError::MissingOperand);
        }
        let top = args.len() - 1;
        let mut print_ast = false;
        let mut verbose = false;
        for (position, option) in args.iter().enumerate() {
            match option.as_str() {
                "-t" => print_ast = true,
                "-v" => verbose = true,
                "--help" => return Ok(Command::Help),
                _ if position < top => {
                    return Err(DriverError::UnknownOperand(option.clone()));
                },
                _ => {},
            }
        }
        Ok(Command::Compile(Config {
            print_ast,
            verbose,
            source: PathBuf::from(&args[top]),
        }))
    }
}

/// Runs the driver for the given arguments.
pub fn run(args: &[String]) -> anyhow::Result<()> {
    match Config::parse(args)? {
        Command::Help => {
            println!(
                "{USAGE}\n\
                 Compiles any *.emg Emergent source code into C++.\n\n\
                 All possible options:\n   \
                 -t      Prints the parsed syntax tree.\n   \
                 -v      Prints all the stages of the compiler\n   \
                 --help  Displays this message."
            );
            Ok(())
        },
        Command::Compile(config) => Session::new(config).compile(),
    }
}

/// One compilation run: owns the configuration and drives the passes.
pub struct Session {
    config: Config,
}

impl Session {
    /// Creates a session for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs parse, optional tree printing, codegen, and artefact output.
    pub fn compile(&self) -> anyhow::Result<()> {
        if self.config.source.extension().and_then(|e| e.to_str()) != Some("emg") {
            return Err(DriverError::BadExtension.into());
        }

        self.spit("Opening file...");
        let source = fs::read_to_string(&self.config.source)
            .context("Error: Unable to open SOURCE file")?;
        self.spit("File has been opened!");

        let mut handler = Handler::new();

        self.spit("Parsing Source...");
        let program = match emgc_par::parse(&source, &mut handler) {
            Some(program) => program,
            None => {
                handler.report_to_stderr();
                return Err(DriverError::CompilationFailed.into());
            },
        };
        self.spit("Parsing Finished!");

        if self.config.print_ast {
            self.spit("Printing AST...");
            print!("{}", program.tree());
            self.spit("AST Printed!");
        }

        self.spit("Code Generating...");
        let code = match emgc_gen::generate(&program, &mut handler) {
            Some(code) => code,
            None => {
                handler.report_to_stderr();
                return Err(DriverError::CompilationFailed.into());
            },
        };
        self.spit("Code Generation Successful!");

        self.spit("Outputting object...");
        let target = self.config.source.with_extension("cpp");
        fs::write(&target, code).context("Error: Couldn't create object file")?;
        self.spit("Object file Successful!");
        Ok(())
    }

    /// Only outputs a message iff the verbose option is given.
    fn spit(&self, text: &str) {
        if self.config.verbose {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_missing_operand() {
        assert!(matches!(
            Config::parse(&[]),
            Err(DriverError::MissingOperand)
        ));
    }

    #[test]
    fn test_plain_source() {
        let command = Config::parse(&args(&["life.emg"])).expect("parse failed");
        match command {
            Command::Compile(config) => {
                assert!(!config.print_ast);
                assert!(!config.verbose);
                assert_eq!(config.source, PathBuf::from("life.emg"));
            },
            other => panic!("expected compile, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_before_source() {
        let command = Config::parse(&args(&["-t", "-v", "life.emg"])).expect("parse failed");
        match command {
            Command::Compile(config) => {
                assert!(config.print_ast);
                assert!(config.verbose);
            },
            other => panic!("expected compile, got {:?}", other),
        }
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(
            Config::parse(&args(&["--help"])).expect("parse failed"),
            Command::Help
        );
        assert_eq!(
            Config::parse(&args(&["-t", "--help", "life.emg"])).expect("parse failed"),
            Command::Help
        );
    }

    #[test]
    fn test_unknown_option_before_source() {
        match Config::parse(&args(&["-x", "life.emg"])) {
            Err(DriverError::UnknownOperand(option)) => assert_eq!(option, "-x"),
            other => panic!("expected unknown operand, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_final_argument_is_the_source() {
        // An odd final argument is treated as the source path; the
        // extension check rejects it later.
        let command = Config::parse(&args(&["-x"])).expect("parse failed");
        match command {
            Command::Compile(config) => assert_eq!(config.source, PathBuf::from("-x")),
            other => panic!("expected compile, got {:?}", other),
        }
    }
}
