use coyote::syntax::tokenize;

use crate::cmd::{read_schema, SchemaArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_tokens, OutputFormat};

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let source = read_schema(&args.schema)?;
    print_tokens(&tokenize(&source), format);
    Ok(SUCCESS)
}
