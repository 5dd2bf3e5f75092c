use std::io::{self, BufRead};

use clap::{value_t, App, Arg, ArgMatches};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marsrovers::{
    Bounds, DriveError, InOrder, LandingHook, NamePool, NameSelector, Plateau, PlateauId,
    RandomNames, Rover, RoverId,
};

use crate::input::{parse_corner, parse_landing, parse_route, spell, InputReader};

mod input;

/// Plateau whose name selector is chosen at runtime.
type DynPlateau = Plateau<Box<dyn NameSelector>>;

fn main() -> io::Result<()> {
    let matches = App::new("Rover Navigation")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Land rovers on a plateau and drive them around without falling off.")
        .arg(
            Arg::with_name("rovers")
                .short("n")
                .long("rovers")
                .value_name("COUNT")
                .help("number of rovers to land")
                .takes_value(true)
                .default_value("2")
                .validator(|v| v.parse::<usize>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("names")
                .long("names")
                .value_name("NAME,...")
                .help("names to give the rovers, defaults to Curiosity, Pursuit, and Vision")
                .takes_value(true)
                .use_delimiter(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for picking rover names, for repeatable runs")
                .takes_value(true)
                .conflicts_with("in_order")
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("in_order")
                .long("in-order")
                .help("name rovers in the order the names were given instead of at random"),
        )
        .get_matches();

    init_logging();

    let config = Config::from_matches(&matches);
    debug!(?config, "starting rover navigation");

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let mut plateau = match read_plateau(&mut input, &config)? {
        Some(plateau) => plateau,
        None => return Ok(()),
    };

    let mut hook = TracingHook;
    while plateau.rovers().count() < config.rovers {
        let id = match land_rover(&mut input, &mut plateau, &mut hook)? {
            Some(id) => id,
            None => return Ok(()),
        };
        if !drive_rover(&mut input, &mut plateau, id)? {
            return Ok(());
        }
    }

    println!("Sequence ended. Here is where your rovers ended up:");
    for report in plateau.report() {
        println!("{}", report);
    }
    Ok(())
}

/// Install a subscriber that writes to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Settings taken from the command line.
#[derive(Debug)]
struct Config {
    /// Number of rovers to land before reporting.
    rovers: usize,
    /// Names for the rovers.
    names: NamePool,
    /// Seed for the name draw, if one was given.
    seed: Option<u64>,
    /// Whether names are given out in order rather than at random.
    in_order: bool,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Self {
        let names = match matches.values_of("names") {
            Some(names) => names.map(str::trim).filter(|n| !n.is_empty()).collect(),
            None => NamePool::default(),
        };
        let requested = value_t!(matches, "rovers", usize).unwrap_or_else(|e| e.exit());
        if requested > names.len() {
            warn!(
                requested,
                available = names.len(),
                "more rovers requested than there are names, landing fewer"
            );
        }
        Self {
            rovers: requested.min(names.len()),
            names,
            seed: value_t!(matches, "seed", u64).ok(),
            in_order: matches.is_present("in_order"),
        }
    }

    /// Build the name selector these settings ask for.
    fn selector(&self) -> Box<dyn NameSelector> {
        if self.in_order {
            Box::new(InOrder)
        } else {
            match self.seed {
                Some(seed) => Box::new(RandomNames::seeded(seed)),
                None => Box::new(RandomNames::from_entropy()),
            }
        }
    }
}

/// Ask for the plateau's north-east corner until a valid one is given.
fn read_plateau<B: BufRead>(
    input: &mut InputReader<B>,
    config: &Config,
) -> io::Result<Option<DynPlateau>> {
    println!("What are the coordinates for the upper-right hand corner of the plateau?");
    let bounds = input.read_input("", |line| {
        match parse_corner(line).map(|(east, north)| Bounds::try_new(east, north)) {
            Ok(Ok(bounds)) => Some(bounds),
            Ok(Err(err)) => {
                println!("{}", err);
                None
            }
            Err(err) => {
                println!("{}", err);
                None
            }
        }
    })?;
    Ok(bounds.map(|bounds| {
        let id = PlateauId::new(rand::random());
        info!(plateau = %id, east = bounds.east(), north = bounds.north(), "plateau surveyed");
        Plateau::with_bounds(id, bounds, config.names.clone(), config.selector())
    }))
}

/// Ask where the next rover should land until it lands.
fn land_rover<B: BufRead>(
    input: &mut InputReader<B>,
    plateau: &mut DynPlateau,
    hook: &mut impl LandingHook,
) -> io::Result<Option<RoverId>> {
    let next = if plateau.rovers().is_empty() { "" } else { "next " };
    println!("Where is the {}rover located?", next);
    let id = input.read_input("", |line| {
        let landed = parse_landing(line)
            .map_err(|err| err.to_string())
            .and_then(|(position, direction)| {
                plateau
                    .land_and_notify(position, direction, &mut *hook)
                    .map_err(|err| err.to_string())
            });
        match landed {
            Ok(id) => Some(id),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        }
    })?;
    if let Some(id) = id {
        if let Ok(rover) = plateau.rover(id) {
            println!("Rover '{}' landed. Where should it go?", rover.name());
        }
    }
    Ok(id)
}

/// Read commands for the rover and run them. When the rover stops at an edge, ask how to
/// finish: an empty line runs the commands that were left over, anything else replaces
/// them. Returns false if input ran out.
fn drive_rover<B: BufRead>(
    input: &mut InputReader<B>,
    plateau: &mut DynPlateau,
    id: RoverId,
) -> io::Result<bool> {
    let mut commands = match input.read_input("", checked(parse_route))? {
        Some(commands) => commands,
        None => return Ok(false),
    };
    loop {
        let err = match plateau.drive(id, &commands) {
            Ok(applied) => {
                debug!(rover = %id, applied, "route complete");
                return Ok(true);
            }
            Err(DriveError::Interrupted(err)) => err,
            Err(err) => {
                // Only interruptions can come out of driving a rover we just landed.
                warn!(rover = %id, error = %err, "rover could not be driven");
                println!("{}", err);
                return Ok(true);
            }
        };
        let rover = match plateau.rover(id) {
            Ok(rover) => rover,
            Err(_) => return Ok(true),
        };
        warn!(
            rover = %id,
            edge = err.violation().edge().name(),
            applied = err.applied(),
            "rover stopped at the edge of the plateau"
        );
        println!(
            "The rover will fall off the {} edge if you do this!",
            err.violation().edge().name()
        );
        println!(
            "{} made it to {} before it could not follow directions any longer.",
            rover.name(),
            rover.position()
        );
        println!(
            "Finish moving {} (but be more careful this time!).",
            rover.name()
        );
        let remaining = err.into_remaining();
        if !remaining.is_empty() {
            println!(
                "Press enter to run the rest of the route ({}) or type a new one.",
                spell(&remaining)
            );
        }
        commands = match input.read_input("", |line| {
            if line.is_empty() {
                Some(remaining.clone())
            } else {
                checked(parse_route)(line)
            }
        })? {
            Some(commands) => commands,
            None => return Ok(false),
        };
    }
}

/// Turn a parser into an input checker that prints the reason for rejected lines.
fn checked<T, E: std::fmt::Display>(
    parse: impl Fn(&str) -> Result<T, E>,
) -> impl Fn(&str) -> Option<T> {
    move |line| match parse(line) {
        Ok(val) => Some(val),
        Err(err) => {
            println!("{}", err);
            None
        }
    }
}

/// Logs every landing.
struct TracingHook;

impl LandingHook for TracingHook {
    fn rover_landed(&mut self, plateau: PlateauId, rover: &Rover) {
        info!(
            plateau = %plateau,
            rover = %rover.id(),
            name = rover.name(),
            x = rover.position().x,
            y = rover.position().y,
            direction = %rover.direction(),
            "rover landed"
        );
    }
}
