use std::path::PathBuf;

use opal_lang_symbols::{StreamReporter, build_symbol_table};

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    /// The class to look up
    #[clap(long)]
    class: String,
    /// A field of the class
    #[clap(long, conflicts_with = "method")]
    field: Option<String>,
    /// A method of the class
    #[clap(long)]
    method: Option<String>,
    /// The result, a parameter or a local of the method
    #[clap(long, requires = "method")]
    var: Option<String>,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let program = super::read_program(&cmd.filepath)?;
    let symbol_table = build_symbol_table(&program, &mut StreamReporter::stderr())?;

    let class = symbol_table.lookup_class(&cmd.class)?;

    if let Some(field) = &cmd.field {
        let decl = class.lookup_field(field)?;
        let folded = field.to_lowercase();
        let name = decl
            .names
            .iter()
            .find(|name| name.id.to_lowercase() == folded)
            .unwrap_or(&decl.names[0]);
        println!("field {name}: {} (line {})", decl.typ, name.line);
        return Ok(());
    }

    let Some(method) = &cmd.method else {
        let name = class.name();
        match class.parent() {
            Some(parent) => println!("class {name} extends {parent} (line {})", name.line),
            None => println!("class {name} (line {})", name.line),
        }
        return Ok(());
    };

    let method = class.lookup_method(method)?;
    match &cmd.var {
        Some(var) => {
            let variable = method.lookup_variable(var)?;
            println!(
                "{} {}: {} (line {})",
                variable.kind, variable.name, variable.typ, variable.line
            );
        }
        None => {
            let name = method.name();
            println!("method {name}: {} (line {})", method.decl().return_type, name.line);
        }
    }
    Ok(())
}
