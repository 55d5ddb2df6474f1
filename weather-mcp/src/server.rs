//! MCP tool surface backed by the core [`Dispatcher`].
//!
//! rmcp owns the JSON-RPC framing, the initialize handshake and version
//! negotiation; this module only maps the catalog and call results.

use std::sync::Arc;

use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
        Tool,
    },
    service::RequestContext,
};
use serde_json::Value;
use weather_core::{Dispatcher, ToolOutput, ToolSpec};

pub const SERVER_NAME: &str = "mcp-tw-weather";

#[derive(Debug, Clone)]
pub struct WeatherMcp {
    dispatcher: Dispatcher,
}

impl WeatherMcp {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.catalog().into_iter().map(to_tool).collect()
    }

    /// Runs one call on its own task so a panic becomes error text.
    pub async fn run_tool(&self, request: CallToolRequestParam) -> CallToolResult {
        let name = request.name.to_string();
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);

        let dispatcher = self.dispatcher.clone();
        let task_name = name.clone();
        let output =
            match tokio::spawn(async move { dispatcher.call(&task_name, &arguments).await }).await {
                Ok(output) => output,
                Err(e) => {
                    tracing::error!(tool = %name, error = %e, "tool call aborted");
                    ToolOutput { text: format!("Error: tool {name} aborted unexpectedly"), is_error: true }
                }
            };

        to_result(output)
    }
}

fn to_tool(entry: ToolSpec) -> Tool {
    let schema = match entry.input_schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool::new(entry.name, entry.description, Arc::new(schema))
}

fn to_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error { CallToolResult::error(content) } else { CallToolResult::success(content) }
}

impl ServerHandler for WeatherMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Taiwan weather forecasts, station observations and earthquake reports from the CWA open-data API."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self.run_tool(request).await)
    }
}
