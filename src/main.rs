use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;
use std::process::ExitCode;

use grid_astar::{a_star_search, maps, Error, Heuristic, SearchConfig, SearchResult};

/// Runs A* on one of the built-in maps and reports the Path, its Cost, the number of created
/// Nodes and the runtime.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Number of the map to search (1 to 5)
	#[arg(allow_negative_numbers = true)]
	map: Option<isize>,

	/// Heuristic: 1 = zero, 2 = manhattan, 3 = manhattan * 1.5, 4 = manhattan with random error
	#[arg(allow_negative_numbers = true)]
	heuristic: Option<isize>,

	/// Seed for the random error of heuristic 4
	#[arg(short, long)]
	seed: Option<u64>,

	/// Run all heuristics on the map, one after another
	#[arg(short, long)]
	compare: bool,
}

fn main() -> ExitCode {
	env_logger::init_from_env(Env::default().default_filter_or("warn"));

	let cli = Cli::parse();
	debug!("{:?}", cli);

	let map = match (cli.map, cli.heuristic, cli.compare) {
		(Some(map), _, true) | (Some(map), Some(_), false) => map,
		_ => {
			println!("{}", Cli::command().render_usage());
			return ExitCode::SUCCESS;
		}
	};

	match run(map, cli.heuristic, cli.compare, cli.seed) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", message(&err));
			ExitCode::FAILURE
		}
	}
}

fn run(map: isize, kind: Option<isize>, compare: bool, seed: Option<u64>) -> Result<(), Error> {
	let map = maps::get(map)?;
	let heuristics: Vec<Heuristic> = match kind {
		Some(kind) if !compare => vec![Heuristic::from_kind(kind)?],
		_ => Heuristic::all().collect(),
	};
	let grid = map.grid()?;

	for heuristic in heuristics {
		let config = SearchConfig {
			heuristic,
			seed,
			size_hint: grid.width() * grid.height(),
		};
		let result = a_star_search(
			&grid,
			map.start,
			map.goal,
			&config,
			&mut config.noise_source(),
		);

		if compare {
			println!("== {}", heuristic);
		}
		report(&result);
	}
	Ok(())
}

fn report(result: &SearchResult) {
	match &result.path {
		Some(path) => {
			println!("Cost of the path: {}", path.cost());
			println!("Path found: {:?}", path.path);
		}
		None => {
			println!("Cost of the path: NULL");
			println!("Path found: -1");
		}
	}
	println!("Number of nodes created: {}", result.nodes_created);
	println!("Runtime (ms): {}", result.runtime_ms());
}

fn message(err: &Error) -> String {
	match err {
		Error::InvalidMap(_) => String::from("Invalid map number."),
		Error::InvalidHeuristic(_) => String::from("Invalid heuristic number."),
		other => other.to_string(),
	}
}
