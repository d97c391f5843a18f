use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::{json, Value};

use stable_sets::input::read_graphs;
use stable_sets::search::search;
use stable_sets::util::{read_params, read_input, export_results, Params};


/** solves each test case and prints one maximum weight per line */
fn run(params:&Params) -> Result<(), Box<dyn Error>> {
    let content = read_input(params.input.as_deref())?;
    let graphs = read_graphs(&content)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut case_stats = Vec::with_capacity(graphs.len());
    for (i, graph) in graphs.iter().enumerate() {
        if params.verbose {
            eprintln!("case {}:", i+1);
            graph.display_statistics();
        }
        let t_start = Instant::now();
        let (best, stats) = search(graph);
        let duration = t_start.elapsed().as_secs_f32();
        if params.verbose {
            stats.display_statistics();
            eprintln!("search took {:.3} seconds", duration);
        }
        writeln!(out, "{}", best)?;
        let mut entry = serde_json::to_value(&stats)?;
        entry["case"] = json!(i+1);
        entry["time_searched"] = json!(duration);
        case_stats.push(entry);
    }
    out.flush()?;
    export_results(&Value::Array(case_stats), params.perf_file.as_deref())?;
    Ok(())
}


/** reads the test cases (file or stdin), solves them and exports the statistics */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("internally_stable_sets.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args);
    if let Err(e) = run(&params) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
