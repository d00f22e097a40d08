use clap::Parser;
use gbmnem_table::OpcodeTable;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gbmnem",
    about = "Generate the SM83 mnemonic enum from a gb-opcodes JSON table"
)]
struct Cli {
    /// Path to the Opcodes.json instruction table
    table: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    log::debug!("reading opcode table from {}", cli.table.display());
    let table = match OpcodeTable::load(&cli.table) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match gbmnem_gen::generate(&table) {
        Ok(block) => print!("{block}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
