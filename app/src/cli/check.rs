use std::path::PathBuf;

use opal_lang_symbols::{StreamReporter, build_symbol_table};

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let program = super::read_program(&cmd.filepath)?;
    build_symbol_table(&program, &mut StreamReporter::stderr())?;
    println!("{} declarations checked successfully!", cmd.filepath.display());
    Ok(())
}
