use clap::Args;
use std::{io::Write, path::PathBuf};
use validator::Validate;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON fixture with recipe drafts
    #[arg(long)]
    pub file: PathBuf,
}

#[tracing::instrument(skip(out), fields(file = %args.file.display()))]
pub fn run(args: ValidateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let inputs = crate::import::load_inputs(&args.file)?;
    let mut invalid = 0;

    for (index, input) in inputs.iter().enumerate() {
        match input.validate() {
            Ok(()) => writeln!(out, "#{} {}: ok", index + 1, input.title)?,
            Err(errors) => {
                invalid += 1;
                let errors = cookbook_shared::Error::from(errors);
                writeln!(out, "#{} {}: {}", index + 1, input.title, errors)?;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} recipe drafts are invalid", inputs.len());
    }

    writeln!(out, "All {} recipe drafts are valid", inputs.len())?;

    Ok(())
}
