//! Built-in package list
//!
//! The default build sequence: build tools and the compiler first, then the
//! libraries built with them. Each entry declares what it needs so the
//! order can be checked by [`crate::core::resolver::validate_order`].

use super::package::{PackageSpec, Protocol};

pub const CMAKE_VERSION: &str = "3.25.2";
pub const LLVM_VERSION: &str = "15.0.7";
pub const AUTOCONF_VERSION: &str = "2.69";
pub const AUTOMAKE_VERSION: &str = "1.16.5";
pub const LIBTOOL_VERSION: &str = "2.4.7";
pub const PKGCONF_VERSION: &str = "1.8.0";
pub const ZLIB_VERSION: &str = "1.2.13";
pub const LIBPNG_VERSION: &str = "1.6.39";
pub const NASM_VERSION: &str = "2.16.01";
pub const LIBJPEG_TURBO_VERSION: &str = "2.1.5.1";
pub const LIBOPENMPT_VERSION: &str = "0.6.9+release.autotools";
pub const LIBOPENMPT_MODPLUG_VERSION: &str = "0.8.9.0-openmpt1";
pub const SDL2_VERSION: &str = "2.26.4";
pub const SDL2_MIXER_VERSION: &str = "2.6.3";
pub const FREETYPE_VERSION: &str = "2.13.0";

const MACOS_SDK: &str = "/System/Volumes/Data/Library/Developer/CommandLineTools/SDKs/MacOSX.sdk";

/// Options for the LLVM/clang toolchain build
fn llvm_options() -> Vec<String> {
    vec![
        "-DLLVM_INCLUDE_EXAMPLES=OFF".to_string(),
        "-DLLVM_INCLUDE_TESTS=OFF".to_string(),
        "-DLLVM_BUILD_LLVM_DYLIB=ON".to_string(),
        "-DLLVM_LINK_LLVM_DYLIB=ON".to_string(),
        "-DLLVM_INSTALL_UTILS=ON".to_string(),
        "-DLLVM_ENABLE_BINDINGS=OFF".to_string(),
        "-DLLVM_ENABLE_RTTI=ON".to_string(),
        "-DLLVM_INCLUDE_BENCHMARKS=OFF".to_string(),
        "-DLLVM_ENABLE_PROJECTS=clang".to_string(),
        format!("-DFFI_INCLUDE_DIR={MACOS_SDK}/usr/include/ffi"),
        format!("-DFFI_LIBRARY_DIR={MACOS_SDK}/usr/lib"),
        "-DLLVM_ENABLE_LIBCXX=ON".to_string(),
        format!("-DDEFAULT_SYSROOT={MACOS_SDK}"),
        "-DLLVM_ENABLE_RUNTIMES=libcxx;libcxxabi;compiler-rt".to_string(),
        "-DBUILTINS_CMAKE_ARGS=-DCOMPILER_RT_ENABLE_IOS=OFF".to_string(),
    ]
}

/// The default build sequence, in dependency order
pub fn default_packages() -> Vec<PackageSpec> {
    let mut llvm = PackageSpec::new("llvm-project", LLVM_VERSION, Protocol::CompilerToolchain)
        .with_depends(&["cmake"]);
    llvm.options = llvm_options();

    vec![
        PackageSpec::new("cmake", CMAKE_VERSION, Protocol::Autoconf)
            .with_options(&["--no-system-libs", "--parallel={jobs}"]),
        llvm,
        PackageSpec::new("autoconf", AUTOCONF_VERSION, Protocol::Autoconf),
        PackageSpec::new("automake", AUTOMAKE_VERSION, Protocol::Autoconf)
            .with_depends(&["autoconf"]),
        PackageSpec::new("libtool", LIBTOOL_VERSION, Protocol::Autoconf)
            .with_depends(&["llvm-project"]),
        PackageSpec::new("pkgconf-pkgconf", PKGCONF_VERSION, Protocol::PackageConfigTool)
            .with_depends(&["llvm-project", "autoconf", "automake", "libtool"]),
        PackageSpec::new("zlib", ZLIB_VERSION, Protocol::Autoconf).with_depends(&["llvm-project"]),
        PackageSpec::new("libpng", LIBPNG_VERSION, Protocol::CMake)
            .with_depends(&["cmake", "llvm-project", "zlib"]),
        PackageSpec::new("nasm", NASM_VERSION, Protocol::Autoconf).with_depends(&["llvm-project"]),
        PackageSpec::new("libjpeg-turbo", LIBJPEG_TURBO_VERSION, Protocol::CMake)
            .with_depends(&["cmake", "llvm-project", "nasm"]),
        PackageSpec::new("libopenmpt", LIBOPENMPT_VERSION, Protocol::Autoconf)
            .with_options(&[
                "--without-mpg123",
                "--without-ogg",
                "--without-vorbis",
                "--without-vorbisfile",
                "--without-portaudio",
                "--without-portaudiocpp",
                "--without-sndfile",
                "--without-flac",
                "--disable-examples",
                "--disable-tests",
            ])
            .with_depends(&["llvm-project", "pkgconf-pkgconf", "zlib"]),
        PackageSpec::new("libopenmpt-modplug", LIBOPENMPT_MODPLUG_VERSION, Protocol::Autoconf)
            .with_options(&["--enable-libmodplug"])
            .with_depends(&["pkgconf-pkgconf", "libopenmpt"]),
        PackageSpec::new("SDL2", SDL2_VERSION, Protocol::CMake)
            .with_depends(&["cmake", "llvm-project"]),
        PackageSpec::new("SDL2_mixer", SDL2_MIXER_VERSION, Protocol::CMake)
            .with_options(&[
                "-DCMAKE_BUILD_TYPE=Release",
                "-DSDL2MIXER_OPUS=OFF",
                "-DSDL2MIXER_FLAC=OFF",
                "-DSDL2MIXER_MIDI_FLUIDSYNTH=OFF",
                "-DSDL2MIXER_MOD_MODPLUG_SHARED=OFF",
            ])
            .with_depends(&["cmake", "SDL2", "libopenmpt-modplug"]),
        PackageSpec::new("freetype", FREETYPE_VERSION, Protocol::Autoconf)
            .with_options(&["--enable-freetype-config"])
            .with_depends(&["llvm-project", "pkgconf-pkgconf", "zlib", "libpng"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::validate_order;

    #[test]
    fn test_default_order_is_valid() {
        validate_order(&default_packages()).expect("built-in order must satisfy dependencies");
    }

    #[test]
    fn test_toolchain_comes_first_after_cmake() {
        let packages = default_packages();
        assert_eq!(packages[0].name, "cmake");
        assert_eq!(packages[1].name, "llvm-project");
        assert_eq!(packages[1].protocol, Protocol::CompilerToolchain);
    }

    #[test]
    fn test_exactly_one_package_config_tool() {
        let tools: Vec<_> = default_packages()
            .into_iter()
            .filter(|p| p.protocol == Protocol::PackageConfigTool)
            .collect();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "pkgconf-pkgconf");
    }

    #[test]
    fn test_cmake_bootstrap_parallelism_is_templated() {
        let packages = default_packages();
        assert!(packages[0].options.contains(&"--parallel={jobs}".to_string()));
    }
}
