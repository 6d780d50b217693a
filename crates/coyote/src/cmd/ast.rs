use crate::cmd::{read_schema, SchemaArgs};
use crate::exit::{coyote_error, CliResult, SUCCESS};
use crate::output::{print_ast, OutputFormat};

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let source = read_schema(&args.schema)?;
    let schema = coyote::compile(&source).map_err(|err| coyote_error("compile failed", err))?;
    print_ast(&schema, format);
    Ok(SUCCESS)
}
