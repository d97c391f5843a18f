use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::{App, load_yaml};

use stable_sets::divisor::divisor_sum;
use stable_sets::input::read_numbers;
use stable_sets::util::{read_input_param, read_input};


/** prints the sum of the proper divisors of each test case */
fn run(input:Option<&str>) -> Result<(), Box<dyn Error>> {
    let content = read_input(input)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for n in read_numbers(&content)? {
        writeln!(out, "{}", divisor_sum(n))?;
    }
    out.flush()?;
    Ok(())
}


pub fn main() {
    let yaml = load_yaml!("divisor_summation.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(read_input_param(&main_args).as_deref()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
