use coyote::syntax::to_source;

use crate::cmd::{read_schema, FmtArgs};
use crate::exit::{coyote_error, CliResult, FAILURE, SUCCESS};

pub fn run(args: FmtArgs) -> CliResult<i32> {
    let source = read_schema(&args.schema)?;
    let schema = coyote::compile(&source).map_err(|err| coyote_error("compile failed", err))?;
    let formatted = to_source(&schema);

    if args.check {
        if formatted == source {
            return Ok(SUCCESS);
        }
        tracing::warn!(schema = %args.schema.display(), "schema is not canonically formatted");
        return Ok(FAILURE);
    }

    print!("{formatted}");
    Ok(SUCCESS)
}
