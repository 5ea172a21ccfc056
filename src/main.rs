use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use simple_graphs::{graph6::Reader, Graph};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input: Box<dyn BufRead> = match matches.value_of("FILE") {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    for graph in Reader::new(input) {
        let graph = graph?;
        println!("{}", graph);
        println!(
            "  vertices ({}): {:?}",
            graph.number_of_vertices(),
            graph.vertex_set()
        );
        println!(
            "  edges ({}): {:?}",
            graph.number_of_edges(),
            graph.edge_set()
        );
    }
    Ok(())
}

fn handle_star(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let n: usize = matches.value_of("N").unwrap().parse()?;
    println!("{}", Graph::star(n)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("simple-graphs")
        .about("Inspect small simple graphs in graph6")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("Print the vertices and edges of every graph in a graph6 file")
                .arg(Arg::with_name("FILE").help("graph6 file, one graph per line (default: stdin)")),
        )
        .subcommand(
            SubCommand::with_name("star")
                .about("Print the star graph of order N in graph6")
                .arg(Arg::with_name("N").required(true)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("star") {
        handle_star(matches)?;
    }
    Ok(())
}
