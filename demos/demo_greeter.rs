use declargs::{ArgumentParser, Declarations, Descriptor, Kind, Literal};
use std::process;

fn main() {
    let declarations = Declarations::new([
        Descriptor::required(Kind::I32, "count", "count", "How many greetings."),
        Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who to greet."),
        Descriptor::boolean("verbose", "--verbose", "Talk more."),
        Descriptor::boolean("help", "--help", "Show this help message."),
    ]);
    let mut values = declarations.defaults();
    let parser = ArgumentParser::new(&declarations);

    if parser.parse(&mut values).is_err() {
        parser.print_help("greeter");
        process::exit(1);
    }

    if values.flag("help") {
        parser.print_help("greeter");
        return;
    }

    let count = values.get::<i32>("count").unwrap_or_default();
    let name = values.get::<String>("name").unwrap_or_default();

    for _ in 0..count {
        println!("Hello, {name}!");
    }

    if values.flag("verbose") {
        println!("Greeted {name} {count} time(s).");
    }
}
