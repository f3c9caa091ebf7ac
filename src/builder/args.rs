//! Derivation of the configure and build argument lists.

use std::path::Path;

use serde::Serialize;

use crate::builder::toolchain::PlatformArgs;
use crate::core::{BuildMode, ExtensionDescriptor};

/// CMake cache variable receiving the importable module name.
pub const MODULE_NAME_DIRECTIVE: &str = "OSQP_EXT_MODULE_NAME";

/// Arguments for the two CMake invocations of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationArgs {
    /// Arguments following the source root in `cmake <source> ...`
    pub configure: Vec<String>,
    /// Arguments following `cmake --build .`
    pub build: Vec<String>,
}

/// Derive both argument lists for an extension.
///
/// `output_dir` is where the host toolchain expects the extension module and
/// `python` is the interpreter the module is built against.
pub fn derive_args(
    ext: &ExtensionDescriptor,
    mode: BuildMode,
    platform: &dyn PlatformArgs,
    output_dir: &Path,
    python: &Path,
) -> InvocationArgs {
    let mut configure = vec![
        format!("-DCMAKE_LIBRARY_OUTPUT_DIRECTORY={}", output_dir.display()),
        format!("-DPYTHON_EXECUTABLE={}", python.display()),
        "-DBUILD_TESTING=OFF".to_string(),
    ];
    configure.extend(platform.configure_args(mode, output_dir));

    // Extension directives go last so they win over project defaults
    configure.push(format!("-D{}={}", MODULE_NAME_DIRECTIVE, ext.module_name()));
    configure.extend(ext.override_args());

    let mut build = vec!["--config".to_string(), mode.config_name().to_string()];
    build.extend(platform.build_args(mode));

    InvocationArgs { configure, build }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::toolchain::platform_args_for;
    use crate::core::{Backend, OsKind, PlatformFacts};

    fn derive(backend: Backend, mode: BuildMode, facts: PlatformFacts) -> InvocationArgs {
        let ext = ExtensionDescriptor::for_backend(backend, "/src/osqp");
        let platform = platform_args_for(&facts);
        derive_args(
            &ext,
            mode,
            platform.as_ref(),
            Path::new("/out/lib"),
            Path::new("/usr/bin/python3"),
        )
    }

    #[test]
    fn test_common_configure_args() {
        let args = derive(Backend::Mkl, BuildMode::Release, PlatformFacts::new(OsKind::Linux, 64));

        assert_eq!(args.configure[0], "-DCMAKE_LIBRARY_OUTPUT_DIRECTORY=/out/lib");
        assert_eq!(args.configure[1], "-DPYTHON_EXECUTABLE=/usr/bin/python3");
        assert_eq!(args.configure[2], "-DBUILD_TESTING=OFF");
    }

    #[test]
    fn test_posix_release_mkl() {
        let args = derive(Backend::Mkl, BuildMode::Release, PlatformFacts::new(OsKind::Linux, 64));

        assert_eq!(
            args.configure,
            vec![
                "-DCMAKE_LIBRARY_OUTPUT_DIRECTORY=/out/lib",
                "-DPYTHON_EXECUTABLE=/usr/bin/python3",
                "-DBUILD_TESTING=OFF",
                "-DCMAKE_BUILD_TYPE=Release",
                "-DOSQP_EXT_MODULE_NAME=osqp_mkl",
                "-DALGEBRA=mkl",
            ]
        );
        assert_eq!(args.build, vec!["--config", "Release", "--", "-j2"]);
    }

    #[test]
    fn test_posix_single_build_type_directive() {
        for os in [OsKind::Linux, OsKind::Macos, OsKind::Other] {
            for mode in [BuildMode::Debug, BuildMode::Release] {
                let args = derive(Backend::Default, mode, PlatformFacts::new(os, 64));
                let directives: Vec<_> = args
                    .configure
                    .iter()
                    .filter(|a| a.starts_with("-DCMAKE_BUILD_TYPE="))
                    .collect();
                assert_eq!(directives, vec![&format!("-DCMAKE_BUILD_TYPE={}", mode.config_name())]);
                assert_eq!(args.build.iter().filter(|a| *a == "-j2").count(), 1);
            }
        }
    }

    #[test]
    fn test_windows_64bit() {
        let args = derive(Backend::Mkl, BuildMode::Release, PlatformFacts::new(OsKind::Windows, 64));

        assert!(args
            .configure
            .contains(&"-DCMAKE_LIBRARY_OUTPUT_DIRECTORY_RELEASE=/out/lib".to_string()));
        assert!(args.configure.windows(2).any(|w| w == ["-A", "x64"]));
        assert!(!args.configure.iter().any(|a| a.starts_with("-DCMAKE_BUILD_TYPE")));
        assert_eq!(args.build, vec!["--config", "Release", "--", "/m"]);
    }

    #[test]
    fn test_windows_32bit_has_no_arch_selector() {
        let args = derive(Backend::Mkl, BuildMode::Debug, PlatformFacts::new(OsKind::Windows, 32));

        assert!(!args.configure.iter().any(|a| a == "-A" || a == "x64"));
        assert!(args
            .configure
            .contains(&"-DCMAKE_LIBRARY_OUTPUT_DIRECTORY_DEBUG=/out/lib".to_string()));
        assert_eq!(args.build, vec!["--config", "Debug", "--", "/m"]);
    }

    #[test]
    fn test_backend_directive_comes_last() {
        for facts in [
            PlatformFacts::new(OsKind::Windows, 64),
            PlatformFacts::new(OsKind::Linux, 64),
        ] {
            let args = derive(Backend::Cuda, BuildMode::Release, facts);
            let n = args.configure.len();
            assert_eq!(args.configure[n - 2], "-DOSQP_EXT_MODULE_NAME=osqp_cuda");
            assert_eq!(args.configure[n - 1], "-DALGEBRA=cuda");
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let facts = PlatformFacts::new(OsKind::Windows, 64);
        assert_eq!(
            derive(Backend::Default, BuildMode::Debug, facts),
            derive(Backend::Default, BuildMode::Debug, facts)
        );
    }
}
