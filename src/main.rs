use std::env;
use std::process;
use std::str::FromStr;

use bitga::evolution::{GaOptions, GeneticAlgorithm};
use bitga::rng::RandomNumberGenerator;

const USAGE: &str = "\
Usage: bitga [OPTIONS]

Minimizes f(x1, x2) = -(sin(x1)*cos(x2)*tan(x1+x2) + 0.75*exp(1 - sqrt(x1^2)))
over [-10, 10] x [-10, 10] with a binary-encoded genetic algorithm.

Options:
  --selection <sus|roulette|remainder|tournament>   parent selection (default: roulette)
  --population-size <N>                             individuals per generation (default: 20)
  --chromosome-length <BITS>                        total bits, even (default: 32)
  --generations <N>                                 evolutionary steps (default: 100)
  --crossover-probability <P>                       recombination chance (default: 0.8)
  --mutation-probability <P>                        per-bit flip chance (default: 0.1)
  --tournament-size <K>                             tournament variant only (default: 3)
  --seed <U64>                                      fixed RNG seed for reproducible runs
  -h, --help                                        print this help
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (options, seed) = match parse_args(env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprint!("{}", USAGE);
            process::exit(2);
        }
    };

    let mut rng = match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let result =
        GeneticAlgorithm::from_options(options).and_then(|algorithm| algorithm.run(&mut rng));

    match result {
        Ok(best) => println!("{}", best),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}

fn parse_args(
    args: impl Iterator<Item = String>,
) -> Result<(GaOptions, Option<u64>), String> {
    let mut builder = GaOptions::builder();
    let mut seed = None;

    let mut args = args;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "-h" | "--help" => {
                print!("{}", USAGE);
                process::exit(0);
            }
            "--selection" => {
                builder = builder.selection_method(parse_value(&flag, args.next())?);
            }
            "--population-size" => {
                builder = builder.population_size(parse_value(&flag, args.next())?);
            }
            "--chromosome-length" => {
                builder = builder.chromosome_length(parse_value(&flag, args.next())?);
            }
            "--generations" => {
                builder = builder.num_generations(parse_value(&flag, args.next())?);
            }
            "--crossover-probability" => {
                builder = builder.crossover_probability(parse_value(&flag, args.next())?);
            }
            "--mutation-probability" => {
                builder = builder.mutation_probability(parse_value(&flag, args.next())?);
            }
            "--tournament-size" => {
                builder = builder.tournament_size(parse_value(&flag, args.next())?);
            }
            "--seed" => {
                seed = Some(parse_value(&flag, args.next())?);
            }
            other => return Err(format!("unrecognized flag {:?}", other)),
        }
    }

    Ok((builder.build(), seed))
}

fn parse_value<T>(flag: &str, value: Option<String>) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|error| format!("invalid value for {}: {}", flag, error))
}
