use declargs::{derive::*, prelude::*};
use std::process;

#[derive(Debug, Declargs)]
struct Greeter {
    #[declargs(description = "How many greetings.")]
    count: i32,
    #[declargs(default = "anon", description = "Who to greet.")]
    name: String,
    #[declargs(description = "Talk more.")]
    verbose: bool,
}

fn main() {
    let greeter = match Greeter::parse() {
        Ok(greeter) => greeter,
        Err(_) => {
            Greeter::print_help("greeter");
            process::exit(1);
        }
    };

    for _ in 0..greeter.count {
        println!("Hello, {}!", greeter.name);
    }

    if greeter.verbose {
        println!("{greeter:?}");
    }
}
