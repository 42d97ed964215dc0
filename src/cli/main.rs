#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use bayes_net::samples;
use clap::Parser;

mod args;

use args::Args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(2);
        }
    };

    let network = match samples::alarm_with_config(config) {
        Ok(network) => network,
        Err(e) => {
            println!("c Error building the network: {e}");
            std::process::exit(1);
        }
    };

    let plan = match network.plan(&args.query, &args.evidence) {
        Ok(plan) => plan,
        Err(e) => {
            println!("c Error planning the query: {e}");
            std::process::exit(1);
        }
    };

    let posterior = match network.execute(&plan) {
        Ok(posterior) => posterior,
        Err(e) => {
            println!("c Error answering the query: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        let output = match args.plan {
            true => serde_json::json!({ "plan": plan, "posterior": posterior }),
            false => serde_json::json!({ "posterior": posterior }),
        };
        println!("{output}");
        return;
    }

    if args.plan {
        for (index, step) in plan.steps().iter().enumerate() {
            println!("c {index} {step}");
        }
    }

    for (label, probability) in posterior.labelled() {
        println!("p {label} {probability}");
    }
}
