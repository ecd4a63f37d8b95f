use clap::{Parser, Subcommand};
use reachability::puzzles::{crossing, family, frogs};
use reachability::search::{
    validate, Cost, SearchLimits, SearchOrder, SearchStatistics, State, StateSpace,
    SuccessorGenerator, Trace, Verbosity,
};
use serde::Serialize;
use std::fmt::Display;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
/// Solve puzzles by searching their state spaces.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search order, defaults to the puzzle's preferred order",
        short = 'o',
        long = "order",
        id = "ORDER",
        global = true
    )]
    order: Option<SearchOrder>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
    #[arg(
        help = "Abort the search after this long, e.g. 30s or 2m",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration,
        global = true
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Abort the search once the process uses this many megabytes",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT",
        global = true
    )]
    memory_limit: Option<usize>,
    #[arg(help = "Print the trace as JSON", long = "json", global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap green and brown frogs sitting on a row of stones.
    Frogs {
        #[arg(
            help = "The number of frogs on each side",
            long = "frogs",
            default_value_t = 2
        )]
        frogs: usize,
        #[arg(
            help = "Print the tree of all leap sequences before solving",
            long = "explain"
        )]
        explain: bool,
    },
    /// Ferry a goat, a cabbage and a wolf across a river.
    Crossing,
    /// Ferry a family, a policeman and a prisoner across a river.
    Family {
        #[arg(
            value_enum,
            help = "Which solution the cost-guided search should prefer",
            long = "cost",
            id = "COST",
            default_value_t = family::CostPreference::Depth
        )]
        cost: family::CostPreference,
        #[arg(
            help = "Print every state instead of only the travelling ones",
            long = "all"
        )]
        all: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut limits = SearchLimits::unlimited();
    if let Some(time_limit) = cli.time_limit {
        limits = limits.with_time_limit(time_limit);
    }
    if let Some(memory_limit) = cli.memory_limit {
        limits = limits.with_memory_limit_mb(memory_limit);
    }

    let solved = match cli.command {
        Commands::Frogs { frogs, explain } => {
            let space = frogs::state_space(frogs).with_limits(limits);
            if explain {
                println!("Leaping frogs puzzle start: {}", space.initial_state());
                print!("{}", frogs::successor_tree(space.initial_state()));
            }
            let finish = frogs::Stones::finish(frogs);
            println!(
                "Leaping frogs puzzle start: {}, finish: {}",
                space.initial_state(),
                finish
            );
            let order = cli.order.unwrap_or(SearchOrder::BreadthFirst);
            solve(&space, |s| *s == finish, order, cli.json, None, |_| true)
        }
        Commands::Crossing => {
            let space = crossing::state_space().with_limits(limits);
            let order = cli.order.unwrap_or(SearchOrder::BreadthFirst);
            solve(
                &space,
                crossing::goal,
                order,
                cli.json,
                Some("CGW"),
                |_| true,
            )
        }
        Commands::Family { cost, all } => {
            let space = family::state_space(cost).with_limits(limits);
            let order = cli.order.unwrap_or(SearchOrder::CostGuided);
            solve(
                &space,
                family::goal,
                order,
                cli.json,
                Some(family::Family::header()),
                |s: &family::Family| all || s.is_travelling(),
            )
        }
    };

    if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the search and print the trace, numbering every state and printing
/// only those accepted by `shown`. Returns whether a valid trace was found.
fn solve<S, G, C>(
    space: &StateSpace<S, G, C>,
    goal: impl Fn(&S) -> bool + Copy,
    order: SearchOrder,
    json: bool,
    header: Option<&str>,
    shown: impl Fn(&S) -> bool,
) -> bool
where
    S: State + Display + Serialize,
    G: SuccessorGenerator<S>,
    G::Transition: Serialize,
    C: Cost,
{
    let (result, statistics) = space.check_with_statistics(goal, order);
    let trace = match result {
        Ok(trace) => trace,
        Err(error) => {
            info!("no solution found");
            println!("No solution: {}", error);
            return false;
        }
    };

    info!("validating trace");
    match validate(space, &trace, goal) {
        Ok(()) => info!("trace is valid"),
        Err(e) => {
            info!("trace is invalid: {}", e);
            println!("No solution: {}", e);
            return false;
        }
    }
    info!(trace_length = trace.len());

    if json {
        return print_json(&trace);
    }
    print_trace(&trace, header, shown, &statistics);
    true
}

fn print_json<S: Serialize, T: Serialize>(trace: &Trace<S, T>) -> bool {
    match trace.to_json() {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            println!("No solution: failed to serialise trace: {}", e);
            false
        }
    }
}

fn print_trace<S: Display, T>(
    trace: &Trace<S, T>,
    header: Option<&str>,
    shown: impl Fn(&S) -> bool,
    statistics: &SearchStatistics,
) {
    println!("Solution: a trace of {} states", trace.len());
    if let Some(header) = header {
        println!("#  {}", header);
    }
    for (i, state) in trace.iter().enumerate().filter(|(_, s)| shown(s)) {
        println!("{}: {}", i, state);
    }
    println!(
        "Explored {} states in {}",
        statistics.expanded_nodes(),
        humantime::format_duration(statistics.search_duration())
    );
}
