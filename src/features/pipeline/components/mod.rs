pub mod board;
pub mod column;
pub mod droplet_overlay;
pub mod task_card;
pub mod task_input;

pub use board::PipelineBoard;
pub use column::PipelineColumn;
pub use droplet_overlay::DropletOverlay;
pub use task_card::TaskCard;
pub use task_input::TaskInput;
