use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "columna", version, about = "Spinal risk analysis form")]
pub struct Cli {}
