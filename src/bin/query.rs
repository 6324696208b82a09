use gfa_chunk::{ChunkedGraph, GraphConfig};
use gfa_chunk::utils;

use std::{env, process};

use getopts::Options;

//-----------------------------------------------------------------------------

fn main() -> Result<(), String> {
    // Parse arguments.
    let config = Config::new()?;

    // Open the graph.
    if !utils::file_exists(&config.filename) {
        return Err(format!("Graph file {} does not exist", config.filename));
    }
    let graph_config = GraphConfig {
        cache_size: config.cache_size,
        shared_edge_overlay: config.overlay,
    };
    let mut graph = ChunkedGraph::open_with_config(&config.filename, graph_config)?;

    // Extract the neighborhood around the start node.
    let neighborhood = graph.bfs(&config.start_node, config.size)?;

    // GFA output.
    graph.write_gfa_to_file(Some(&neighborhood), &config.output, config.append)?;

    Ok(())
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub filename: String,
    pub start_node: String,
    pub size: usize,
    pub output: String,
    pub append: bool,
    pub cache_size: usize,
    pub overlay: bool,
}

impl Config {
    pub fn new() -> Result<Config, String> {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optflag("h", "help", "print this help");
        opts.optopt("n", "node", "start node name (required)", "STR");
        opts.optopt("s", "size", "target neighborhood size (default 100)", "INT");
        opts.optopt("o", "output", "output file, - for stdout (default -)", "FILE");
        opts.optflag("a", "append", "append to the output file");
        opts.optopt("c", "cache-size", "number of resident chunks (default 50)", "INT");
        opts.optflag("", "no-overlay", "rescan the shared chunk instead of using the overlay");
        let matches = opts.parse(&args[1..]).map_err(|x| x.to_string())?;

        let mut size: usize = 100;
        let mut output = String::from("-");
        let mut cache_size: usize = GraphConfig::CACHE_SIZE;
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options] graph.gfa.gz", program);
            eprint!("{}", opts.usage(&header));
            process::exit(0);
        }
        let start_node = matches.opt_str("n");
        if let Some(s) = matches.opt_str("s") {
            size = s.parse::<usize>().map_err(|x| format!("--size: {}", x))?;
        }
        if let Some(s) = matches.opt_str("o") {
            output = s;
        }
        if let Some(s) = matches.opt_str("c") {
            cache_size = s.parse::<usize>().map_err(|x| format!("--cache-size: {}", x))?;
            if cache_size == 0 {
                return Err(String::from("--cache-size: the cache must hold at least one chunk"));
            }
        }

        let filename = if let Some(s) = matches.free.first() {
            s.clone()
        } else {
            let header = format!("Usage: {} [options] graph.gfa.gz", program);
            eprint!("{}", opts.usage(&header));
            process::exit(1);
        };

        Ok(Config {
            filename,
            start_node: start_node.ok_or("Start node must be provided with --node".to_string())?,
            size,
            output,
            append: matches.opt_present("a"),
            cache_size,
            overlay: !matches.opt_present("no-overlay"),
        })
    }
}

//-----------------------------------------------------------------------------
