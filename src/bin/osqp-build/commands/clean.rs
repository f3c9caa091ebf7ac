//! `osqp-build clean` command

use anyhow::Result;

use crate::cli::CleanArgs;
use osqp_build::builder::check_workspace;
use osqp_build::util::fs::remove_dir_all_if_exists;
use osqp_build::util::GlobalContext;

pub fn execute(args: CleanArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let mut dirs = vec![ctx.build_temp()];
    if args.all {
        dirs.push(ctx.build_lib());
    }

    let source = ctx.source_dir();
    for dir in &dirs {
        check_workspace(dir, &[("source", source.as_path())])?;
    }

    for dir in dirs {
        if remove_dir_all_if_exists(&dir)? {
            eprintln!("     Removed {}", dir.display());
        }
    }

    Ok(())
}
