use declargs::{ArgumentParser, Declarations, Descriptor, Kind, Literal};
use std::process;

const DESCRIPTORS: [Descriptor; 5] = [
    Descriptor::required(Kind::Str, "input", "input", "The file to mix."),
    Descriptor::required(Kind::U8, "channel", "channel", "The channel to mix into."),
    Descriptor::optional("ratio", Literal::F64(0.333333), "--ratio", "ratio", "Mix ratio.")
        .precision(3),
    Descriptor::optional("marker", Literal::Char('#'), "--marker", "marker", "Marker character."),
    Descriptor::boolean("dry_run", "--dry-run", "Only print what would be mixed."),
];

fn main() {
    let declarations = Declarations::new(DESCRIPTORS);
    let mut values = declarations.defaults();
    let parser = ArgumentParser::new(&declarations);

    if parser.parse(&mut values).is_err() {
        parser.print_help("mixer");
        process::exit(1);
    }

    for (name, value) in values.iter() {
        println!("{name}: {value}");
    }
}
