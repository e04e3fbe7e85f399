pub use self::args_loader::ArgsLoader;
pub use self::csv_loader::CsvLoader;
pub use self::loader::Loader;
pub use self::toml_loader::TomlLoader;

mod args_loader;
mod csv_loader;
mod loader;
mod toml_loader;
