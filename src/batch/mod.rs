mod item;
mod step;
mod traits;

pub use item::ProcessIndicatorItem;
pub use step::{ExitStatus, StepExecution};
pub use traits::{ItemReader, StepListener};
