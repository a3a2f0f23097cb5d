use std::path::PathBuf;

/// Where to copy the compiled ABI and bytecode. An unset path disables the
/// corresponding copy.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub abi_path: Option<PathBuf>,
    pub bytecode_path: Option<PathBuf>,
}
