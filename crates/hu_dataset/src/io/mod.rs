pub mod csv;
pub mod loader;
pub mod walker;

pub use self::csv::{read_dataset, DatasetWriter};
pub use self::loader::{load_grayscale, to_gray_bt601};
pub use self::walker::DatasetWalker;
