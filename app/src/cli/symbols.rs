use std::fmt::{self, Write};
use std::path::PathBuf;

use miette::IntoDiagnostic;

use opal_lang_symbols::{ClassSymbolTable, StreamReporter, SymbolTable, build_symbol_table};

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let program = super::read_program(&cmd.filepath)?;
    let symbol_table = build_symbol_table(&program, &mut StreamReporter::stderr())?;
    let mut output = String::new();
    render(&mut output, &symbol_table).into_diagnostic()?;
    print!("{output}");
    Ok(())
}

/// Render the symbol table with every scope sorted by case-folded name.
fn render<W: Write>(out: &mut W, symbol_table: &SymbolTable<'_>) -> fmt::Result {
    let mut classes: Vec<_> = symbol_table.classes().collect();
    classes.sort_by_key(|class| class.name().id.to_lowercase());
    for class in classes {
        render_class(out, class)?;
    }
    Ok(())
}

fn render_class<W: Write>(out: &mut W, class: &ClassSymbolTable<'_>) -> fmt::Result {
    let name = class.name();
    match class.parent() {
        Some(parent) => writeln!(out, "class {name} extends {parent} (line {})", name.line)?,
        None => writeln!(out, "class {name} (line {})", name.line)?,
    }

    let mut fields: Vec<_> = class.fields().collect();
    fields.sort_by_key(|(name, _)| name.to_lowercase());
    for (name, decl) in fields {
        writeln!(out, "  field {name}: {}", decl.typ)?;
    }

    let mut methods: Vec<_> = class.methods().collect();
    methods.sort_by_key(|method| method.name().id.to_lowercase());
    for method in methods {
        let name = method.name();
        writeln!(out, "  method {name}: {} (line {})", method.decl().return_type, name.line)?;

        let mut variables: Vec<_> = method.variables().map(|(_, variable)| variable).collect();
        variables.sort_by_key(|var| (var.kind, var.line, var.name.id.to_lowercase()));
        for variable in variables {
            writeln!(
                out,
                "    {} {}: {} (line {})",
                variable.kind, variable.name, variable.typ, variable.line
            )?;
        }
    }
    Ok(())
}
