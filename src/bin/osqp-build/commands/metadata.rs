//! `osqp-build metadata` command

use anyhow::Result;

use crate::cli::MetadataArgs;
use osqp_build::core::{Backend, ExtensionDescriptor};
use osqp_build::util::GlobalContext;

pub fn execute(args: MetadataArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let config = ctx.config();

    let algebra = args.algebra.or_else(|| config.build.algebra.clone());
    let backend = Backend::select(algebra.as_deref())?;
    let extension = ExtensionDescriptor::for_backend(backend, ctx.source_dir());

    let package = config.package();
    println!(
        "{}",
        serde_json::to_string_pretty(&package.for_extension(&extension))?
    );

    Ok(())
}
