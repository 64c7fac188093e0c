pub mod render;
pub mod resolve;

pub use render::RenderToolDefinitionsTool;
pub use resolve::ResolveSelectionTool;
