use std::io::Read;

use coyote::CoyoteError;

use crate::cmd::{read_schema, CheckArgs};
use crate::exit::{coyote_error, io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let data = coyote::decode(&payload).map_err(|err| coyote_error("invalid data", err))?;

    let source = read_schema(&args.schema)?;
    let schema = coyote::compile(&source).map_err(|err| coyote_error("compile failed", err))?;
    tracing::debug!(schema = %args.schema.display(), fields = schema.len(), "compiled schema");

    let label = args.schema.display().to_string();
    match coyote::validate_schema(&data, &schema) {
        Ok(()) => {
            print_report(&label, &[], format);
            Ok(SUCCESS)
        }
        Err(CoyoteError::Validation(failed)) => {
            tracing::info!(schema = %label, errors = failed.errors.len(), "validation failed");
            print_report(&label, &failed.errors, format);
            Ok(DATA_INVALID)
        }
        Err(err) => Err(coyote_error("validation failed", err)),
    }
}

fn resolve_payload(args: &CheckArgs) -> CliResult<Vec<u8>> {
    if let Some(json) = &args.json {
        return Ok(json.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    let mut payload = Vec::new();
    std::io::stdin()
        .read_to_end(&mut payload)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(payload)
}
