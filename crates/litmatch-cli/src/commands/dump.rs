use std::path::PathBuf;

use litmatch_bytecode::{BytecodeObject, SizeTable, dump};

use super::CliError;

pub struct DumpArgs {
    pub bytecode_path: PathBuf,
}

pub fn run(args: DumpArgs) -> Result<(), CliError> {
    let object = BytecodeObject::from_path(&args.bytecode_path)?;
    print!("{}", dump(&object, &SizeTable::REFERENCE));
    Ok(())
}
