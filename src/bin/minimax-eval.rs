use clap::{Arg, App};
use log::error;
use pretty_env_logger;
use std::process;
use minimax::parser::read_tree_file;

fn main() {
    pretty_env_logger::init();
    let opts = App::new("minimax-eval")
        .about("Evaluates a minimax game tree described in a JSON file")
        .arg(Arg::with_name("file")
            .value_name("FILE")
            .required(true)
            .help("Path to the tree description"))
        .arg(Arg::with_name("quiet")
            .short("q")
            .long("quiet")
            .help("Only print the root score"))
        .arg(Arg::with_name("no tree")
            .long("no-tree")
            .help("Don't print the evaluated tree"))
        .get_matches();

    let path = opts.value_of("file").unwrap();
    let mut tree = match read_tree_file(path) {
        Ok(tree) => tree,
        Err(err) => {
            error!("failed to load {}: {}", path, err);
            eprintln!("{}: {}", path, err);
            process::exit(1);
        },
    };
    tree.evaluate_root();

    let quiet = opts.is_present("quiet");
    if !quiet && !opts.is_present("no tree") {
        tree.print(tree.root(), 0);
    }
    print!("{}", tree.summary(tree.root(), quiet));
}
