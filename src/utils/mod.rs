//! Utility helpers: input discovery and pattern serializers (JSON/YAML).
pub mod files;
pub mod serialization;

pub use files::discover_inputs;
pub use serialization::FileSerializer;
pub use serialization::FileUtils;
pub use serialization::JsonSerializer;
pub use serialization::OutputFormat;
pub use serialization::Serializer;
pub use serialization::YamlSerializer;
