/// Shift used when neither the command line nor the configuration names one
pub const DEFAULT_SHIFT: i64 = 3;
/// A processor reads its input from at most this many upstream processors
pub const MAX_DEPENDENCIES: usize = 1;
/// Config files with this extension are parsed as TOML, everything else as YAML
pub const TOML_EXTENSION: &str = "toml";
