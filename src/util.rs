use std::fs;
use std::io::{self, Read};

use clap::ArgMatches;
use serde_json::Value;

use crate::input::InputError;

/** command line parameters shared by the executables */
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// input file (None: read stdin)
    pub input: Option<String>,
    /// where to export the performance statistics
    pub perf_file: Option<String>,
    /// print instance and search statistics
    pub verbose: bool,
}

/** reads the (optional) input file argument */
pub fn read_input_param(main_args:&ArgMatches) -> Option<String> {
    main_args.value_of("input").map(|e| e.to_string())
}

/** reads command line input and returns the input file, stats filename and verbosity */
pub fn read_params(main_args:&ArgMatches) -> Params {
    let input = read_input_param(main_args);
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            eprintln!("printing perfs in: {}", e);
            Some(e.to_string())
        }
    };
    Params { input, perf_file, verbose: main_args.is_present("verbose") }
}

/** reads the whole input (from a file if given, from stdin otherwise) */
pub fn read_input(filename:Option<&str>) -> Result<String, InputError> {
    let content = match filename {
        Some(f) => fs::read_to_string(f)?,
        None => {
            let mut res = String::new();
            io::stdin().read_to_string(&mut res)?;
            res
        }
    };
    Ok(content)
}

/// exports search statistics to a file (if a filename is given)
pub fn export_results(stats:&Value, perf_file:Option<&str>) -> io::Result<()> {
    if let Some(filename) = perf_file {
        let content = serde_json::to_string_pretty(stats)
            .map_err(io::Error::from)?;
        fs::write(filename, content)?;
    }
    Ok(())
}
