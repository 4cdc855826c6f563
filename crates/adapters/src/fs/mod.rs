mod dates;
mod exporter;
mod loader;

pub use dates::{SeededDateSource, ThreadRngDateSource};
pub use exporter::FsImageExporter;
pub use loader::FsImageLoader;
