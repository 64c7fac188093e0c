//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{
    BenchmarkSelectionTool, ListEndpointsTool, ListProfilesTool, RenderToolDefinitionsTool,
    ResolveSelectionTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListEndpointsTool::create_route())
        .with_route(ListProfilesTool::create_route(ctx.clone()))
        .with_route(ResolveSelectionTool::create_route())
        .with_route(RenderToolDefinitionsTool::create_route())
        .with_route(BenchmarkSelectionTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;

    struct TestServer {}

    fn test_context() -> ToolContext {
        ToolContext::from_config(Arc::new(Config::default())).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_endpoints"));
        assert!(names.contains(&"benchmark_selection"));
    }

    #[test]
    fn test_registry_matches_router() {
        let ctx = test_context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<&str> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
