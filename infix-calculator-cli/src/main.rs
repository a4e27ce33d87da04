use anyhow::Result;
use clap::Parser;
use infix_calculator::calculator::{evaluate, to_postfix};
use log::debug;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The infix expression to evaluate
    expression: String,

    /// Print the postfix form of the expression instead of evaluating it
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let outcome: Result<String> = if args.postfix {
        to_postfix(args.expression)
    } else {
        evaluate(args.expression)
            .map(|result| result.to_string())
            .map_err(anyhow::Error::from)
    };

    match outcome {
        Ok(text) => println!("{}", text),
        Err(error) => {
            debug!("evaluation failed: {:#}", error);
            println!("Error in expression");
            std::process::exit(1);
        }
    }
}
