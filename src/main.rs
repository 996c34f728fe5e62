use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

use tlisp::printer::print_value;
use tlisp::syntax::GRAMMAR;
use tlisp::token::cli_stream::CliStream;
use tlisp::{eval, read};


const BANNER: &str = "Tlisp Version 0.0.0.0.2";

fn main() {
    // Setup logging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();
    debug!("Grammar:{}", GRAMMAR);

    println!("{}", BANNER);
    println!("Press Ctrl+c to Exit\n");

    for parsed in CliStream::new() {
        match parsed {
            Ok(tree) => {
                let result = eval(read(&tree));
                print_value(&result);
                println!();
            }
            Err(err) => {
                println!("{}", err);
            }
        }
    }
}
