//! `osqp-build build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use osqp_build::core::PlatformFacts;
use osqp_build::ops::{build, plan, BuildOptions};
use osqp_build::util::fs::absolutize;
use osqp_build::util::GlobalContext;
use osqp_build::SystemRunner;

pub fn execute(args: BuildArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let config = ctx.config();

    let resolve = |path: Option<std::path::PathBuf>| path.map(|p| absolutize(ctx.cwd(), &p));

    // CLI (and OSQP_ALGEBRA) > config > defaults
    let opts = BuildOptions {
        algebra: args.algebra.or_else(|| config.build.algebra.clone()),
        debug: args.debug,
        source_dir: resolve(args.source_dir).unwrap_or_else(|| ctx.source_dir()),
        build_temp: resolve(args.build_temp).unwrap_or_else(|| ctx.build_temp()),
        build_lib: resolve(args.build_lib).unwrap_or_else(|| ctx.build_lib()),
        // Tool paths with a directory part are made absolute; bare names go to PATH
        cmake: args
            .cmake
            .or_else(|| config.build.cmake.clone())
            .map(|p| ctx.resolve_program(&p)),
        python: args
            .python
            .or_else(|| config.build.python.clone())
            .map(|p| ctx.resolve_program(&p)),
        platform: PlatformFacts::host(),
    };

    if args.plan {
        let plan = plan(&opts)?;
        println!("{}", plan.to_json()?);
        return Ok(());
    }

    let result = build(&opts, &mut SystemRunner)?;

    eprintln!(
        "    Finished `{}` ({} backend, {}) -> {}",
        result.plan.extension.name(),
        result.plan.extension.backend(),
        result.plan.mode,
        result.plan.artifact.display()
    );

    Ok(())
}
